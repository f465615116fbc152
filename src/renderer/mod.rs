//! Drawable output for the host
//!
//! The engine never rasterizes. It hands the host shape outlines and HUD
//! state; canvas, colors and text belong to the host.

pub mod shapes;

pub use shapes::{DrawShape, FrameView, body_shape, circle_outline, frame_view};
