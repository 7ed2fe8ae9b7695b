//! Terminal "game renderer" module.
//!
//! The projector paints into a plain RGB [`Canvas`] at the reference
//! resolution (960x480). [`ScreenView`] then downsamples that canvas into a
//! framebuffer of half-block cells, and [`TerminalRenderer`] flushes the
//! framebuffer with crossterm, emitting only what changed since the last
//! frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep every drawing primitive behind the small [`Surface`] trait
//! - Make pixel output checkable in tests without a terminal

pub mod canvas;
pub mod fb;
pub mod projector;
pub mod renderer;
pub mod screen_view;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use canvas::{Canvas, Surface};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use projector::Projector;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen_view::{Placement, ScreenView, Viewport, UPPER_HALF_BLOCK};
