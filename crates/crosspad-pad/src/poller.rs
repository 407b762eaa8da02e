use crate::capabilities::PadCapabilities;
use crate::deadzone::DeadZone;
use crate::joystick::{JoystickCapabilities, JoystickState};
use crate::state::PadState;

/// Contract every platform backend satisfies.
///
/// One implementation per target platform, selected at build or startup
/// time. The backend owns its slot registry; slot indices passed here are
/// already range-checked by [`InputPoller`].
pub trait PadBackend {
    /// Number of slots the backend exposes.
    fn max_pads(&self) -> usize;

    fn capabilities(&mut self, slot: usize) -> PadCapabilities;

    fn state(
        &mut self,
        slot: usize,
        left_mode: DeadZone,
        right_mode: DeadZone,
    ) -> PadState;

    /// Returns false when the slot is absent or has no vibration support.
    fn set_vibration(
        &mut self,
        slot: usize,
        left: f32,
        right: f32,
        left_trigger: f32,
        right_trigger: f32,
    ) -> bool;

    fn joystick_capabilities(&mut self, slot: usize) -> JoystickCapabilities;

    fn joystick_state(&mut self, slot: usize) -> JoystickState;
}

/// Poll-driven entry point over one backend.
///
/// Out-of-range slots are a "no device" signal, never an error: state reads
/// return the disconnected default, capability reads return the conservative
/// unknown set, vibration returns false.
pub struct InputPoller<B: PadBackend> {
    backend: B,
}

impl<B: PadBackend> InputPoller<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn max_pads(&self) -> usize {
        self.backend.max_pads()
    }

    fn in_range(&self, slot: usize) -> bool {
        slot < self.backend.max_pads()
    }

    pub fn capabilities(&mut self, slot: usize) -> PadCapabilities {
        if !self.in_range(slot) {
            return PadCapabilities::unknown();
        }
        self.backend.capabilities(slot)
    }

    /// Snapshot with the default dead-zone mode (independent axes).
    pub fn state(&mut self, slot: usize) -> PadState {
        self.state_with_mode(slot, DeadZone::IndependentAxes)
    }

    pub fn state_with_mode(&mut self, slot: usize, mode: DeadZone) -> PadState {
        self.state_with_modes(slot, mode, mode)
    }

    pub fn state_with_modes(
        &mut self,
        slot: usize,
        left_mode: DeadZone,
        right_mode: DeadZone,
    ) -> PadState {
        if !self.in_range(slot) {
            return PadState::default();
        }
        self.backend.state(slot, left_mode, right_mode)
    }

    /// Two-motor vibration; trigger motors stay off.
    pub fn set_vibration(&mut self, slot: usize, left: f32, right: f32) -> bool {
        self.set_vibration_with_triggers(slot, left, right, 0.0, 0.0)
    }

    pub fn set_vibration_with_triggers(
        &mut self,
        slot: usize,
        left: f32,
        right: f32,
        left_trigger: f32,
        right_trigger: f32,
    ) -> bool {
        if !self.in_range(slot) {
            return false;
        }
        self.backend.set_vibration(
            slot,
            left.clamp(0.0, 1.0),
            right.clamp(0.0, 1.0),
            left_trigger.clamp(0.0, 1.0),
            right_trigger.clamp(0.0, 1.0),
        )
    }

    pub fn joystick_capabilities(
        &mut self,
        slot: usize,
    ) -> JoystickCapabilities {
        if !self.in_range(slot) {
            return JoystickCapabilities::default();
        }
        self.backend.joystick_capabilities(slot)
    }

    pub fn joystick_state(&mut self, slot: usize) -> JoystickState {
        if !self.in_range(slot) {
            return JoystickState::default();
        }
        self.backend.joystick_state(slot)
    }

    /// Direct access to the backend for platform-specific calls such as
    /// event pumping.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{Button, PadButtons};
    use crate::dpad::DPad;
    use crate::thumbsticks::ThumbSticks;
    use crate::triggers::Triggers;

    /// Scripted backend with one connected pad in slot 0.
    struct StubBackend {
        vibration: Vec<(usize, f32, f32, f32, f32)>,
        rumbling: bool,
    }

    impl StubBackend {
        fn new() -> Self {
            Self { vibration: Vec::new(), rumbling: false }
        }
    }

    impl PadBackend for StubBackend {
        fn max_pads(&self) -> usize {
            4
        }

        fn capabilities(&mut self, slot: usize) -> PadCapabilities {
            if slot == 0 {
                PadCapabilities {
                    is_connected: true,
                    display_name: "Stub Pad".to_string(),
                    has_left_vibration_motor: true,
                    has_right_vibration_motor: true,
                    ..PadCapabilities::default()
                }
            } else {
                PadCapabilities::unknown()
            }
        }

        fn state(
            &mut self,
            slot: usize,
            _left_mode: DeadZone,
            _right_mode: DeadZone,
        ) -> PadState {
            if slot == 0 {
                PadState::new(
                    ThumbSticks::default(),
                    Triggers::default(),
                    PadButtons::from_buttons(&[Button::A]),
                    DPad::default(),
                )
            } else {
                PadState::default()
            }
        }

        fn set_vibration(
            &mut self,
            slot: usize,
            left: f32,
            right: f32,
            left_trigger: f32,
            right_trigger: f32,
        ) -> bool {
            if slot != 0 {
                return false;
            }
            self.vibration.push((slot, left, right, left_trigger, right_trigger));
            // Zero on both motors stops any running effect; stopping an
            // already-stopped effect stays a successful no-op.
            self.rumbling = left > 0.0 || right > 0.0;
            true
        }

        fn joystick_capabilities(
            &mut self,
            slot: usize,
        ) -> JoystickCapabilities {
            if slot == 0 {
                JoystickCapabilities {
                    is_connected: true,
                    id: "stub".to_string(),
                    axis_count: 6,
                    button_count: 11,
                    hat_count: 1,
                }
            } else {
                JoystickCapabilities::default()
            }
        }

        fn joystick_state(&mut self, slot: usize) -> JoystickState {
            JoystickState { is_connected: slot == 0, ..JoystickState::default() }
        }
    }

    fn poller() -> InputPoller<StubBackend> {
        InputPoller::new(StubBackend::new())
    }

    #[test]
    fn out_of_range_slot_returns_defaults_without_panicking() {
        let mut p = poller();
        let beyond = p.max_pads();

        let caps = p.capabilities(beyond);
        assert!(!caps.is_connected);
        assert_eq!(caps, PadCapabilities::unknown());

        let state = p.state(beyond);
        assert!(!state.is_connected);
        assert_eq!(state, PadState::default());

        assert!(!p.set_vibration(beyond, 1.0, 1.0));
        assert!(!p.joystick_capabilities(beyond).is_connected);
        assert!(!p.joystick_state(beyond).is_connected);
    }

    #[test]
    fn in_range_slot_reaches_the_backend() {
        let mut p = poller();
        assert!(p.state(0).is_connected);
        assert!(p.state(0).is_button_down(Button::A));
        assert!(p.capabilities(0).is_connected);
        assert_eq!(p.joystick_capabilities(0).axis_count, 6);
    }

    #[test]
    fn vibration_magnitudes_are_clamped() {
        let mut p = poller();
        assert!(p.set_vibration(0, 2.0, -1.0));
        let (_, left, right, lt, rt) = p.backend_mut().vibration[0];
        assert_eq!(left, 1.0);
        assert_eq!(right, 0.0);
        assert_eq!(lt, 0.0);
        assert_eq!(rt, 0.0);
    }

    #[test]
    fn stopping_vibration_is_idempotent() {
        let mut p = poller();
        assert!(p.set_vibration(0, 0.8, 0.8));
        assert!(p.backend_mut().rumbling);

        assert!(p.set_vibration(0, 0.0, 0.0));
        assert!(!p.backend_mut().rumbling);

        // Device still present; repeated stops keep returning true
        assert!(p.set_vibration(0, 0.0, 0.0));
        assert!(!p.backend_mut().rumbling);
    }

    #[test]
    fn trigger_motor_overload_forwards_all_four() {
        let mut p = poller();
        assert!(p.set_vibration_with_triggers(0, 0.1, 0.2, 0.3, 0.4));
        let (_, left, right, lt, rt) = p.backend_mut().vibration[0];
        assert_eq!((left, right, lt, rt), (0.1, 0.2, 0.3, 0.4));
    }
}
