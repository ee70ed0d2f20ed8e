use pixels::Pixels;
use winit::dpi::PhysicalPosition;

use crate::geometry::Point;
use crate::graphics::{CpuRenderer, Renderer2d};
use crate::surface::SurfaceSize;

/// Headful renderer built on `pixels`.
///
/// The pixel buffer keeps the logical surface size (the board), and `pixels` scales it to
/// whatever the window's physical size is. Painters never see window pixels.
pub struct PixelsRenderer2d {
    pixels: Pixels,
    size: SurfaceSize,
}

impl PixelsRenderer2d {
    pub fn new(mut pixels: Pixels, size: SurfaceSize) -> Result<Self, pixels::Error> {
        pixels.resize_buffer(size.width, size.height)?;
        Ok(Self { pixels, size })
    }

    /// Follows a window resize. The buffer stays at the logical size.
    pub fn resize_window(&mut self, width: u32, height: u32) -> Result<(), pixels::Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)?;
        Ok(())
    }

    /// Maps a physical window position into buffer pixels.
    ///
    /// Positions outside the buffer are returned unclamped so callers can tell a release off
    /// the board from a release on its edge.
    pub fn window_to_surface(&self, position: PhysicalPosition<f64>) -> Point {
        let pos = (position.x as f32, position.y as f32);
        match self.pixels.window_pos_to_pixel(pos) {
            Ok((x, y)) => Point::new(x as f32, y as f32),
            Err((x, y)) => Point::new(x as f32, y as f32),
        }
    }

    pub fn draw_frame<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut dyn Renderer2d) -> R,
    {
        let mut cpu = CpuRenderer::new(self.pixels.frame_mut(), self.size);
        cpu.begin_frame(self.size);
        f(&mut cpu)
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}
