//! Embassy async tasks
//!
//! The display task owns the panel; the heartbeat runs alongside it to
//! show the drawing code leaves the executor responsive.

pub mod display;
pub mod heartbeat;

pub use display::display_task;
pub use heartbeat::heartbeat_task;
