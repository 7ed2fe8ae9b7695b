//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::PlayerAction`]s and
//! buffers them in a bounded queue that the frame driver drains once per
//! frame, so pose mutation never interleaves with a render.

pub mod map;
pub mod queue;

pub use tui_raycaster_types as types;

pub use map::{handle_key_event, should_quit};
pub use queue::{InputQueue, INPUT_QUEUE_CAPACITY};
