use crosspad_pad::{HatPosition, PadCapabilities, PadKind};
use crosspad_mappings::MappingRecord;
use sdl2::joystick::HatState;

/// Pre-scale a raw int16 axis to [-1, 1].
///
/// The negative half of the int16 range is one count wider than the positive
/// half, so each side is divided by its own extreme to hit exactly ±1.0.
pub(crate) fn axis_to_f32(value: i16) -> f32 {
    if value < 0 {
        f32::from(value) / 32768.0
    } else {
        f32::from(value) / 32767.0
    }
}

/// Triggers report 0..32767; scale to [0, 1].
pub(crate) fn trigger_to_f32(value: i16) -> f32 {
    f32::from(value.max(0)) / 32767.0
}

/// Normalized motor magnitude to the u16 range SDL rumble expects.
pub(crate) fn motor_to_u16(value: f32) -> u16 {
    (value.clamp(0.0, 1.0) * 65535.0).round() as u16
}

pub(crate) fn hat_to_position(state: HatState) -> HatPosition {
    match state {
        HatState::Centered => HatPosition::Centered,
        HatState::Up => HatPosition::Up,
        HatState::RightUp => HatPosition::UpRight,
        HatState::Right => HatPosition::Right,
        HatState::RightDown => HatPosition::DownRight,
        HatState::Down => HatPosition::Down,
        HatState::LeftDown => HatPosition::DownLeft,
        HatState::Left => HatPosition::Left,
        HatState::LeftUp => HatPosition::UpLeft,
    }
}

/// Build the static feature set from a parsed SDL mapping record.
///
/// A field bound in the mapping means the physical control exists on the
/// device; unbound fields stay absent.
pub(crate) fn capabilities_from_mapping(
    record: &MappingRecord,
    display_name: &str,
    identifier: &str,
    has_rumble: bool,
) -> PadCapabilities {
    PadCapabilities {
        is_connected: true,
        display_name: display_name.to_string(),
        identifier: identifier.to_string(),
        kind: PadKind::GamePad,
        has_a_button: record.has_field("a"),
        has_b_button: record.has_field("b"),
        has_x_button: record.has_field("x"),
        has_y_button: record.has_field("y"),
        has_back_button: record.has_field("back"),
        has_start_button: record.has_field("start"),
        has_big_button: record.has_field("guide"),
        has_dpad_up_button: record.has_field("dpup"),
        has_dpad_down_button: record.has_field("dpdown"),
        has_dpad_left_button: record.has_field("dpleft"),
        has_dpad_right_button: record.has_field("dpright"),
        has_left_shoulder_button: record.has_field("leftshoulder"),
        has_right_shoulder_button: record.has_field("rightshoulder"),
        has_left_stick_button: record.has_field("leftstick"),
        has_right_stick_button: record.has_field("rightstick"),
        has_left_trigger: record.has_field("lefttrigger"),
        has_right_trigger: record.has_field("righttrigger"),
        has_left_x_thumbstick: record.has_field("leftx"),
        has_left_y_thumbstick: record.has_field("lefty"),
        has_right_x_thumbstick: record.has_field("rightx"),
        has_right_y_thumbstick: record.has_field("righty"),
        has_left_vibration_motor: has_rumble,
        has_right_vibration_motor: has_rumble,
        has_voice_support: false,
    }
}
