//! Input mapping from raw key events to semantic actions
//!
//! Controls:
//! - 1..6: select the XY, YZ, ZX, XW, YW, ZW rotation plane
//! - +/-: speed the 4D rotation up or down
//! - R: reset the 4D rotation angle
//! - Tab: switch between cube and hypercube
//! - Space: pause
//! - F: fullscreen
//! - Escape: exit

use hyperview_math::RotationPlane;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Factor applied per speed-up / slow-down press
pub const SPEED_STEP: f32 = 1.25;

/// Actions a key press can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Make this plane the active 4D rotation generator
    SelectPlane(RotationPlane),
    /// Multiply rotation speed by [`SPEED_STEP`]
    SpeedUp,
    /// Divide rotation speed by [`SPEED_STEP`]
    SlowDown,
    /// Reset the accumulated 4D angle to zero
    ResetAngle,
    /// Switch between the cube and the hypercube
    ToggleSolid,
    /// Freeze or resume animation
    TogglePause,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Exit application
    Exit,
}

impl InputAction {
    /// Whether holding the key may fire this action again
    ///
    /// Toggles and exit act once per physical press.
    pub fn repeats(self) -> bool {
        !matches!(
            self,
            InputAction::ToggleSolid
                | InputAction::TogglePause
                | InputAction::ToggleFullscreen
                | InputAction::Exit
        )
    }

    /// Rotation speed after this action; other actions leave it unchanged
    pub fn apply_to_speed(self, speed: f32) -> f32 {
        match self {
            InputAction::SpeedUp => speed * SPEED_STEP,
            InputAction::SlowDown => speed / SPEED_STEP,
            _ => speed,
        }
    }
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Only presses produce actions; releases and unbound keys give `None`.
    /// Auto-repeated presses (`repeat`) are dropped for toggles and exit.
    pub fn map_keyboard(key: KeyCode, state: ElementState, repeat: bool) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        let plane = |index| RotationPlane::from_index(index).map(InputAction::SelectPlane);

        let action = match key {
            KeyCode::Digit1 | KeyCode::Numpad1 => plane(0),
            KeyCode::Digit2 | KeyCode::Numpad2 => plane(1),
            KeyCode::Digit3 | KeyCode::Numpad3 => plane(2),
            KeyCode::Digit4 | KeyCode::Numpad4 => plane(3),
            KeyCode::Digit5 | KeyCode::Numpad5 => plane(4),
            KeyCode::Digit6 | KeyCode::Numpad6 => plane(5),
            KeyCode::Equal | KeyCode::NumpadAdd => Some(InputAction::SpeedUp),
            KeyCode::Minus | KeyCode::NumpadSubtract => Some(InputAction::SlowDown),
            KeyCode::KeyR => Some(InputAction::ResetAngle),
            KeyCode::Tab => Some(InputAction::ToggleSolid),
            KeyCode::Space => Some(InputAction::TogglePause),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Escape => Some(InputAction::Exit),
            _ => None,
        }?;

        if repeat && !action.repeats() {
            return None;
        }
        Some(action)
    }
}
