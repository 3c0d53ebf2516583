//! Keyboard input for hyperview
//!
//! Maps winit key events to semantic actions that select the 4D rotation
//! plane, adjust its speed, and control the viewer.

mod input_mapper;

pub use input_mapper::{InputAction, InputMapper, SPEED_STEP};
