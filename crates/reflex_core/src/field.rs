//! The set of live targets for one session

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reflex_math::{Rect, Vec2};

use crate::mode::{ModeRules, PlacementLimits, PlacementStrategy};
use crate::placement::{self, Placement};
use crate::target::Target;

/// Owns the targets of a session and places them according to the mode's
/// [`PlacementStrategy`]
#[derive(Clone, Debug)]
pub struct TargetField {
    targets: Vec<Target>,
    strategy: PlacementStrategy,
    radius: f32,
    margin: f32,
    bounds: Rect,
    limits: PlacementLimits,
    rng: ChaCha8Rng,
    relaxed_placements: usize,
}

impl TargetField {
    /// Create a field for `rules` inside `bounds` and lay out the initial targets
    pub fn new(rules: &ModeRules, bounds: Rect, seed: u64) -> Self {
        let mut field = Self {
            targets: Vec::new(),
            strategy: rules.strategy,
            radius: rules.target_radius,
            margin: rules.margin,
            bounds,
            limits: rules.limits,
            rng: ChaCha8Rng::seed_from_u64(seed),
            relaxed_placements: 0,
        };
        field.relayout();
        field
    }

    /// Discard every target and place a fresh set
    pub fn relayout(&mut self) {
        self.targets = match self.strategy {
            PlacementStrategy::FixedHeight { .. } => vec![self.fixed_height_target()],
            strategy => {
                let Placement { placed, relaxed } = placement::spawn_all(
                    &mut self.rng,
                    strategy.target_count(),
                    self.radius,
                    self.bounds,
                    self.margin,
                    &self.limits,
                );
                self.relaxed_placements += relaxed;
                placed
            }
        };
        log::debug!("Laid out {} target(s)", self.targets.len());
    }

    /// Move the target at `index` to a new position, leaving the others alone
    ///
    /// Out-of-range indices are ignored.
    pub fn respawn(&mut self, index: usize) {
        if index >= self.targets.len() {
            log::debug!("Respawn of missing target {} ignored", index);
            return;
        }

        let target = match self.strategy {
            PlacementStrategy::FixedHeight { .. } => self.fixed_height_target(),
            _ => {
                let Placement { placed, relaxed } = placement::respawn_one(
                    &mut self.rng,
                    index,
                    self.radius,
                    self.bounds,
                    self.margin,
                    &self.targets,
                    &self.limits,
                );
                self.relaxed_placements += relaxed;
                placed
            }
        };
        self.targets[index] = target;
    }

    /// Index of the first target containing `point`
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        placement::hit_test(point, &self.targets, self.radius)
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Change the play area and lay the targets out again
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.relayout();
    }

    /// Number of placements that gave up on the separation constraint
    pub fn relaxed_placements(&self) -> usize {
        self.relaxed_placements
    }

    /// The y coordinate of the fixed-height line, if the strategy has one
    pub fn guide_line_y(&self) -> Option<f32> {
        match self.strategy {
            PlacementStrategy::FixedHeight { height_fraction } => {
                Some(self.bounds.min.y + self.bounds.height() * height_fraction)
            }
            _ => None,
        }
    }

    fn fixed_height_target(&mut self) -> Target {
        let height = self.guide_line_y().unwrap_or_else(|| self.bounds.center().y);
        let target = placement::spawn_fixed_height(
            &mut self.rng,
            height,
            self.bounds.width(),
            self.margin,
            self.radius,
        );
        Target::new(target.x + self.bounds.min.x, target.y, target.radius)
    }
}
