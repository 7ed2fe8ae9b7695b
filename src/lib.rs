//! TUI Raycaster (workspace facade crate).
//!
//! Re-exports the member crates as `tui_raycaster::{core,engine,input,term,types}`
//! so binaries, tests and benches share one import path.

pub use tui_raycaster_core as core;
pub use tui_raycaster_engine as engine;
pub use tui_raycaster_input as input;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;
