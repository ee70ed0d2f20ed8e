//! Presentation plumbing for grid-board front-ends.
//!
//! Nothing here knows about a particular game: surfaces and geometry, the `Renderer2d`
//! drawing trait with a CPU rasterizer and a command recorder, the `pixels`/`winit` host loop,
//! and golden render-hash helpers for regression tests.

pub mod app;
pub mod geometry;
pub mod graphics;
pub mod pixels_renderer;
pub mod regression;
pub mod surface;
