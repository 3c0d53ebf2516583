//! Application systems
//!
//! Frame clock, window management and GPU rendering, kept out of main.rs.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{clamp_delta, SimulationSystem};
pub use window::{format_title, WindowError, WindowSystem};
