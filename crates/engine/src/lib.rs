//! Frame driver: glue between input, world and renderer.
//!
//! - [`clock`]: fixed-period tick scheduling (the "next refresh" token)
//! - [`session`]: one running view (world + projector + buffers)
//! - [`maps`]: map loading from disk
//! - [`headless`]: render without a terminal and emit JSON frame snapshots

pub mod clock;
pub mod headless;
pub mod maps;
pub mod session;

pub use tui_raycaster_core as core;
pub use tui_raycaster_input as input;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;

pub use clock::FrameClock;
pub use headless::{parse_action_list, run_headless};
pub use maps::{load_grid, MapSource};
pub use session::Session;
