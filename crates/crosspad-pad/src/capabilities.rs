/// Broad class of a physical controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadKind {
    #[default]
    Unknown,
    GamePad,
    Wheel,
    ArcadeStick,
    FlightStick,
    DancePad,
    Guitar,
    AlternateGuitar,
    DrumKit,
    BigButtonPad,
}

/// Static feature set a controller class reports.
///
/// Describes which buttons, axes and motors exist, as opposed to [`PadState`]
/// which carries their per-poll values. Backends cache capabilities per slot
/// and keep serving the cached value while the device is disconnected.
///
/// [`PadState`]: crate::PadState
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PadCapabilities {
    pub is_connected: bool,
    pub display_name: String,
    /// Stable descriptor of the device, surviving reconnects.
    pub identifier: String,
    pub kind: PadKind,
    pub has_a_button: bool,
    pub has_b_button: bool,
    pub has_x_button: bool,
    pub has_y_button: bool,
    pub has_back_button: bool,
    pub has_start_button: bool,
    pub has_big_button: bool,
    pub has_dpad_up_button: bool,
    pub has_dpad_down_button: bool,
    pub has_dpad_left_button: bool,
    pub has_dpad_right_button: bool,
    pub has_left_shoulder_button: bool,
    pub has_right_shoulder_button: bool,
    pub has_left_stick_button: bool,
    pub has_right_stick_button: bool,
    pub has_left_trigger: bool,
    pub has_right_trigger: bool,
    pub has_left_x_thumbstick: bool,
    pub has_left_y_thumbstick: bool,
    pub has_right_x_thumbstick: bool,
    pub has_right_y_thumbstick: bool,
    pub has_left_vibration_motor: bool,
    pub has_right_vibration_motor: bool,
    pub has_voice_support: bool,
}

impl PadCapabilities {
    /// Capabilities reported for a slot no device was ever seen in.
    ///
    /// Disconnected, but with the standard-layout feature flags set so UI
    /// code can pre-render button prompts before a controller shows up.
    pub fn unknown() -> Self {
        Self {
            is_connected: false,
            display_name: String::new(),
            identifier: String::new(),
            kind: PadKind::Unknown,
            has_a_button: true,
            has_b_button: true,
            has_x_button: true,
            has_y_button: true,
            has_back_button: true,
            has_start_button: true,
            has_big_button: false,
            has_dpad_up_button: true,
            has_dpad_down_button: true,
            has_dpad_left_button: true,
            has_dpad_right_button: true,
            has_left_shoulder_button: true,
            has_right_shoulder_button: true,
            has_left_stick_button: true,
            has_right_stick_button: true,
            has_left_trigger: true,
            has_right_trigger: true,
            has_left_x_thumbstick: true,
            has_left_y_thumbstick: true,
            has_right_x_thumbstick: true,
            has_right_y_thumbstick: true,
            has_left_vibration_motor: false,
            has_right_vibration_motor: false,
            has_voice_support: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_is_disconnected_with_standard_layout() {
        let caps = PadCapabilities::unknown();
        assert!(!caps.is_connected);
        assert!(caps.has_a_button);
        assert!(caps.has_dpad_up_button);
        assert!(caps.has_left_x_thumbstick);
        assert!(!caps.has_left_vibration_motor);
        assert!(!caps.has_big_button);
    }

    #[test]
    fn equality_compares_every_field() {
        let a = PadCapabilities::unknown();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.has_voice_support = true;
        assert_ne!(a, b);
    }
}
