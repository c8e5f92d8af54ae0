mod actions;
mod handler;

pub use actions::update;
pub use handler::{checkout, redirect, schedule_status_reset, watch_theme};
