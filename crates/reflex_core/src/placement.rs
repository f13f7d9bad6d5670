//! Target placement by rejection sampling
//!
//! Positions are drawn uniformly inside the margin-inset bounds and rejected
//! while they sit closer than `separation_factor * radius` to another target.
//! Every target gets at most `max_attempts` draws; after that the last draw
//! is kept regardless of overlap and the placement is counted as relaxed.

use rand::Rng;
use reflex_math::{Rect, Vec2};

use crate::error::CoreError;
use crate::mode::PlacementLimits;
use crate::target::Target;

/// Result of a placement call
#[derive(Clone, Debug, PartialEq)]
pub struct Placement<T> {
    /// The placed target(s)
    pub placed: T,
    /// How many targets had to ignore the separation constraint
    pub relaxed: usize,
}

/// Place `count` targets that keep the separation constraint among themselves
pub fn spawn_all<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    radius: f32,
    bounds: Rect,
    margin: f32,
    limits: &PlacementLimits,
) -> Placement<Vec<Target>> {
    let area = bounds.inset(margin);
    let min_distance = limits.separation_factor * radius;
    let mut targets: Vec<Target> = Vec::with_capacity(count);
    let mut relaxed = 0;

    for _ in 0..count {
        let (position, ok) = sample_separated(rng, area, limits.max_attempts, |candidate| {
            targets
                .iter()
                .all(|t| t.position().distance(candidate) >= min_distance)
        });
        if !ok {
            relaxed += 1;
        }
        targets.push(Target::at(position, radius));
    }

    Placement {
        placed: targets,
        relaxed,
    }
}

/// Pick a new position for `existing[index]`, checking separation against
/// every other target but not against the one being replaced
pub fn respawn_one<R: Rng + ?Sized>(
    rng: &mut R,
    index: usize,
    radius: f32,
    bounds: Rect,
    margin: f32,
    existing: &[Target],
    limits: &PlacementLimits,
) -> Placement<Target> {
    let area = bounds.inset(margin);
    let min_distance = limits.separation_factor * radius;

    let (position, ok) = sample_separated(rng, area, limits.max_attempts, |candidate| {
        existing
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .all(|(_, t)| t.position().distance(candidate) >= min_distance)
    });

    Placement {
        placed: Target::at(position, radius),
        relaxed: usize::from(!ok),
    }
}

/// Place a single target at a fixed `height`, with x uniform inside the margins
pub fn spawn_fixed_height<R: Rng + ?Sized>(
    rng: &mut R,
    height: f32,
    width: f32,
    margin: f32,
    radius: f32,
) -> Target {
    let row = Rect::new(Vec2::new(0.0, height), Vec2::new(width, height)).inset(margin);
    let x = rng.gen_range(row.min.x..=row.max.x);
    Target::new(x, height, radius)
}

/// Index of the first target (in insertion order) whose center lies within
/// `radius` of `point`
pub fn hit_test(point: Vec2, targets: &[Target], radius: f32) -> Option<usize> {
    let radius_squared = radius * radius;
    targets
        .iter()
        .position(|t| (point - t.position()).length_squared() <= radius_squared)
}

/// Draw positions until `accept` passes or the attempt cap is hit.
/// Returns the position and whether it satisfied `accept`.
fn sample_separated<R, F>(rng: &mut R, area: Rect, max_attempts: u32, accept: F) -> (Vec2, bool)
where
    R: Rng + ?Sized,
    F: Fn(Vec2) -> bool,
{
    let attempts = max_attempts.max(1);
    let mut candidate = area.center();

    for _ in 0..attempts {
        candidate = Vec2::new(
            rng.gen_range(area.min.x..=area.max.x),
            rng.gen_range(area.min.y..=area.max.y),
        );
        if accept(candidate) {
            return (candidate, true);
        }
    }

    log::warn!("{}", CoreError::PlacementExhausted { attempts });
    (candidate, false)
}
