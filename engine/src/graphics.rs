use crate::geometry::{Point, Rect};
use crate::surface::{Color, SurfaceSize};

pub const TRANSPARENT: Color = [0, 0, 0, 0];

/// Drawing-surface capability used by every painter.
///
/// Painters only talk to this trait, so the same board code draws into a window, an
/// offscreen RGBA buffer, or a command log in tests. Shapes are opaque fills; overlapping
/// draws resolve by call order.
pub trait Renderer2d {
    fn begin_frame(&mut self, size: SurfaceSize);
    fn size(&self) -> SurfaceSize;

    /// Physical pixels per logical pixel. Hairlines are `1.0 / pixel_ratio()` wide.
    fn pixel_ratio(&self) -> f32 {
        1.0
    }

    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color);

    fn clear(&mut self, color: Color) {
        let s = self.size();
        self.fill_rect(s.rect(), color);
    }
}

/// Maps the half-open interval `[start, end)` to the pixel indices whose centers fall inside
/// it, clipped to `0..limit`.
fn pixel_span(start: f32, end: f32, limit: u32) -> Option<(u32, u32)> {
    if !start.is_finite() || !end.is_finite() {
        return None;
    }
    let lo = (start - 0.5).ceil().max(0.0);
    let hi = (end - 0.5).ceil().min(limit as f32);
    if lo >= hi {
        return None;
    }
    Some((lo as u32, hi as u32))
}

/// CPU renderer that rasterizes into a tightly packed RGBA frame buffer.
///
/// A pixel is covered when its center lies inside the shape.
pub struct CpuRenderer<'a> {
    frame: &'a mut [u8],
    size: SurfaceSize,
    pixel_ratio: f32,
}

impl<'a> CpuRenderer<'a> {
    pub fn new(frame: &'a mut [u8], size: SurfaceSize) -> Self {
        Self {
            frame,
            size,
            pixel_ratio: 1.0,
        }
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f32) -> Self {
        if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            self.pixel_ratio = pixel_ratio;
        }
        self
    }

    fn fill_span(&mut self, x0: u32, x1: u32, y0: u32, y1: u32, color: Color) {
        let expected_len = self.size.rgba_len();
        if expected_len == 0 || self.frame.len() < expected_len {
            return;
        }

        let stride = (self.size.width as usize) * 4;
        let row_bytes = ((x1 - x0) as usize) * 4;
        let mut row_start = (y0 as usize) * stride + (x0 as usize) * 4;

        let [r, g, b, a] = color;
        for _ in y0..y1 {
            let row = &mut self.frame[row_start..row_start + row_bytes];
            for px in row.chunks_exact_mut(4) {
                px[0] = r;
                px[1] = g;
                px[2] = b;
                px[3] = a;
            }
            row_start += stride;
        }
    }
}

impl Renderer2d for CpuRenderer<'_> {
    fn begin_frame(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, x1)) = pixel_span(rect.x, rect.x + rect.w, self.size.width) else {
            return;
        };
        let Some((y0, y1)) = pixel_span(rect.y, rect.y + rect.h, self.size.height) else {
            return;
        };
        self.fill_span(x0, x1, y0, y1, color);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        if !(radius > 0.0) {
            return;
        }
        let Some((y0, y1)) = pixel_span(center.y - radius, center.y + radius, self.size.height)
        else {
            return;
        };

        let r2 = radius * radius;
        for py in y0..y1 {
            let dy = py as f32 + 0.5 - center.y;
            let rem = r2 - dy * dy;
            if rem < 0.0 {
                continue;
            }
            let half = rem.sqrt();
            self.fill_rect(
                Rect::new(center.x - half, py as f32, half * 2.0, 1.0),
                color,
            );
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        if !(width > 0.0) {
            return;
        }
        let half = width / 2.0;

        // Axis-aligned lines (the only kind the board draws) become exact rects.
        if from.x == to.x {
            let (y0, y1) = (from.y.min(to.y), from.y.max(to.y));
            self.fill_rect(Rect::new(from.x - half, y0, width, y1 - y0), color);
            return;
        }
        if from.y == to.y {
            let (x0, x1) = (from.x.min(to.x), from.x.max(to.x));
            self.fill_rect(Rect::new(x0, from.y - half, x1 - x0, width), color);
            return;
        }

        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = Point::new(from.x + delta.x * t, from.y + delta.y * t);
            self.fill_rect(
                Rect::new(p.x - half, p.y - half, width.max(1.0), width.max(1.0)),
                color,
            );
        }
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    Circle {
        center: Point,
        radius: f32,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Color,
    },
}

/// Renderer that records draw calls instead of rasterizing them.
///
/// Used to assert draw order and geometry without comparing pixels.
#[derive(Debug, Clone)]
pub struct CommandRecorder {
    size: SurfaceSize,
    pixel_ratio: f32,
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            pixel_ratio: 1.0,
            commands: Vec::new(),
        }
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f32) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Renderer2d for CommandRecorder {
    fn begin_frame(&mut self, size: SurfaceSize) {
        self.size = size;
        self.commands.clear();
    }

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear { color });
    }
}
