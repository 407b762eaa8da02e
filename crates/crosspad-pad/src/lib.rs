//! Platform-independent gamepad and joystick model.
//!
//! Backends translate native device APIs into the snapshot types defined
//! here; applications poll them through [`InputPoller`]. The dead-zone math,
//! the button bitmask model and the slot registry state machine live in this
//! crate so every backend shares one contract.

mod button;
mod capabilities;
mod deadzone;
mod dpad;
mod error;
mod joystick;
mod poller;
mod registry;
mod state;
mod thumbsticks;
mod triggers;

pub use crate::button::{Button, ButtonSet, ButtonState, PadButtons};
pub use crate::capabilities::{PadCapabilities, PadKind};
pub use crate::deadzone::{DeadZone, DeadZoneProfile};
pub use crate::dpad::DPad;
pub use crate::error::{Error, Result};
pub use crate::joystick::{
    HatPosition, JoystickCapabilities, JoystickHat, JoystickState,
};
pub use crate::poller::{InputPoller, PadBackend};
pub use crate::registry::{Attach, PadSlot, SlotRegistry};
pub use crate::state::PadState;
pub use crate::thumbsticks::{StickPosition, ThumbSticks};
pub use crate::triggers::Triggers;
