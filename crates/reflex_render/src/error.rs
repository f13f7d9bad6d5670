//! Render error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Surface was lost or went out of date (window resized, minimized, etc.)
    #[error("Surface lost")]
    SurfaceLost,

    /// GPU out of memory
    #[error("Out of memory")]
    OutOfMemory,

    #[error("Failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("No compatible GPU adapter found")]
    NoAdapter,

    #[error("Surface reports no supported formats")]
    NoSurfaceFormat,

    #[error("Failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    /// Other surface error
    #[error("Render error: {0}")]
    Other(String),
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(err: wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}
