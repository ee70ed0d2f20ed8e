use pixels::{PixelsBuilder, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::geometry::Point;
use crate::graphics::Renderer2d;
use crate::pixels_renderer::PixelsRenderer2d;
use crate::surface::SurfaceSize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixels backend error: {0}")]
    Pixels(#[from] pixels::Error),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    /// Logical size of the drawing surface; the window opens at this logical size.
    pub surface_size: SurfaceSize,
    pub vsync: Option<bool>,
}

/// Pointer input, already mapped into surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    /// The gesture was interrupted (e.g. the window lost focus) and has no release.
    Cancel,
}

/// An application driven once per frame by the windowed host.
pub trait FrameApp {
    fn on_pointer(&mut self, event: PointerEvent);
    fn render(&mut self, gfx: &mut dyn Renderer2d);
}

pub fn run_app<A: FrameApp + 'static>(config: AppConfig, mut app: A) -> Result<(), AppError> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(LogicalSize::new(
            config.surface_size.width,
            config.surface_size.height,
        ))
        .with_min_inner_size(LogicalSize::new(
            config.surface_size.width,
            config.surface_size.height,
        ))
        .build(&event_loop)?;

    let window_size = window.inner_size();
    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut builder = PixelsBuilder::new(
        config.surface_size.width,
        config.surface_size.height,
        surface_texture,
    );
    if let Some(vsync) = config.vsync {
        builder = builder.enable_vsync(vsync);
    }
    let pixels = builder.build()?;
    let mut renderer = PixelsRenderer2d::new(pixels, config.surface_size)?;
    log::info!(
        "surface {}x{} in window {}x{}",
        config.surface_size.width,
        config.surface_size.height,
        window_size.width,
        window_size.height
    );

    let mut cursor: Option<Point> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match &event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = renderer.resize_window(size.width, size.height) {
                        log::error!("resize failed: {err}");
                    }
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let p = renderer.window_to_surface(*position);
                    cursor = Some(p);
                    app.on_pointer(PointerEvent::Move(p));
                }
                WindowEvent::MouseInput {
                    state: button_state,
                    button: MouseButton::Left,
                    ..
                } => {
                    // Presses before the first CursorMoved have no position to report.
                    if let Some(p) = cursor {
                        match button_state {
                            ElementState::Pressed => app.on_pointer(PointerEvent::Down(p)),
                            ElementState::Released => app.on_pointer(PointerEvent::Up(p)),
                        }
                    }
                }
                WindowEvent::Focused(false) => {
                    app.on_pointer(PointerEvent::Cancel);
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                renderer.draw_frame(|gfx| app.render(gfx));
                if let Err(err) = renderer.present() {
                    log::error!("present failed: {err}");
                }
            }
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            _ => {}
        }
    });

    #[allow(unreachable_code)]
    Ok(())
}
