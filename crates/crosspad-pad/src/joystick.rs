use smallvec::SmallVec;

use crate::button::ButtonState;

/// 8-way hat position as reported by native drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HatPosition {
    #[default]
    Centered,
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

/// Hat decomposed into four direction states. Diagonals set two at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JoystickHat {
    pub up: ButtonState,
    pub down: ButtonState,
    pub left: ButtonState,
    pub right: ButtonState,
}

impl JoystickHat {
    pub fn from_position(position: HatPosition) -> Self {
        use HatPosition::{
            Down, DownLeft, DownRight, Left, Right, Up, UpLeft, UpRight,
        };
        Self {
            up: ButtonState::from_bool(matches!(
                position,
                Up | UpRight | UpLeft
            )),
            down: ButtonState::from_bool(matches!(
                position,
                Down | DownRight | DownLeft
            )),
            left: ButtonState::from_bool(matches!(
                position,
                Left | UpLeft | DownLeft
            )),
            right: ButtonState::from_bool(matches!(
                position,
                Right | UpRight | DownRight
            )),
        }
    }
}

/// Backend-declared shape of a generic joystick.
///
/// Disconnected or absent devices report all-zero counts, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JoystickCapabilities {
    pub is_connected: bool,
    /// Stable descriptor of the device, surviving reconnects.
    pub id: String,
    pub axis_count: usize,
    pub button_count: usize,
    pub hat_count: usize,
}

/// Per-poll snapshot of a generic joystick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JoystickState {
    pub is_connected: bool,
    pub axes: SmallVec<[f32; 8]>,
    pub buttons: SmallVec<[ButtonState; 16]>,
    pub hats: SmallVec<[JoystickHat; 4]>,
}
