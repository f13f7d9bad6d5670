//! GPU rendering system
//!
//! Owns the render context and the shape pipeline, and draws one
//! [`ShapeBatch`] per frame.

use std::sync::Arc;

use reflex_render::{
    context::RenderContext, pipeline::ShapePipeline, RenderError, ShapeBatch,
};
use winit::window::Window;

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: ShapePipeline,
}

impl RenderSystem {
    /// Create render system for a window
    pub fn new(window: Arc<Window>, vsync: bool) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = ShapePipeline::new(&context.device, context.config.format);
        pipeline.update_screen(&context.queue, context.config.width, context.config.height);

        Ok(Self { context, pipeline })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.update_screen(
            &self.context.queue,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Render a single frame
    ///
    /// A lost surface is reconfigured and the frame skipped.
    pub fn render_frame(&mut self, batch: &ShapeBatch) -> Result<(), RenderError> {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(e) => match RenderError::from(e) {
                RenderError::SurfaceLost => {
                    log::debug!("Surface lost, reconfiguring");
                    self.context.reconfigure();
                    return Ok(());
                }
                other => return Err(other),
            },
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.pipeline
            .upload(&self.context.device, &self.context.queue, &batch.instances);

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline
            .render(&mut encoder, &view, batch.clear_color());

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
