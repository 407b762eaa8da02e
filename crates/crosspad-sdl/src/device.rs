use crosspad_pad::{
    Button, ButtonSet, DPad, DeadZone, DeadZoneProfile, JoystickCapabilities,
    JoystickHat, JoystickState, PadButtons, PadState, StickPosition,
    ThumbSticks, Triggers,
};
use sdl2::controller::{Axis as SdlAxis, Button as SdlButton, GameController};
use sdl2::haptic::Haptic;
use sdl2::joystick::{HatState, Joystick};
use sdl2::HapticSubsystem;

use crate::convert::{
    axis_to_f32, hat_to_position, motor_to_u16, trigger_to_f32,
};

// SDL interprets this duration as "until stopped or replaced".
const RUMBLE_UNTIL_REPLACED_MS: u32 = u32::MAX;

/// Vibration capability probed once at device open.
pub(crate) enum RumbleDriver {
    /// Controller-level dual-motor rumble.
    DualMotor,
    /// Single-motor haptic fallback; plays at `max(left, right)`.
    Haptic(Haptic),
    /// No vibration support on this device.
    None,
}

/// Probe vibration support, most capable path first. Every failure is
/// treated as "no vibration", never surfaced.
pub(crate) fn probe_rumble(
    haptic: &HapticSubsystem,
    joystick: &Joystick,
    controller: Option<&GameController>,
) -> RumbleDriver {
    if controller.is_some_and(|c| c.has_rumble()) {
        return RumbleDriver::DualMotor;
    }
    if joystick.has_rumble() {
        match haptic.open_from_joystick_id(joystick.instance_id()) {
            Ok(h) => return RumbleDriver::Haptic(h),
            Err(e) => {
                log::debug!("haptic open failed, disabling vibration: {e}");
            }
        }
    }
    RumbleDriver::None
}

const BUTTON_MAP: [(SdlButton, Button); 15] = [
    (SdlButton::A, Button::A),
    (SdlButton::B, Button::B),
    (SdlButton::X, Button::X),
    (SdlButton::Y, Button::Y),
    (SdlButton::Back, Button::Back),
    (SdlButton::Guide, Button::BigButton),
    (SdlButton::Start, Button::Start),
    (SdlButton::LeftStick, Button::LeftStick),
    (SdlButton::RightStick, Button::RightStick),
    (SdlButton::LeftShoulder, Button::LeftShoulder),
    (SdlButton::RightShoulder, Button::RightShoulder),
    (SdlButton::DPadUp, Button::DPadUp),
    (SdlButton::DPadDown, Button::DPadDown),
    (SdlButton::DPadLeft, Button::DPadLeft),
    (SdlButton::DPadRight, Button::DPadRight),
];

/// Raw controller readout used for change detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct RawSnapshot {
    axes: [i16; 6],
    buttons: u64,
}

impl RawSnapshot {
    fn read(controller: &GameController) -> Self {
        let axes = [
            controller.axis(SdlAxis::LeftX),
            controller.axis(SdlAxis::LeftY),
            controller.axis(SdlAxis::RightX),
            controller.axis(SdlAxis::RightY),
            controller.axis(SdlAxis::TriggerLeft),
            controller.axis(SdlAxis::TriggerRight),
        ];
        let mut mask = ButtonSet::empty();
        for (sdl, button) in BUTTON_MAP {
            if controller.button(sdl) {
                mask.insert(button);
            }
        }
        Self { axes, buttons: mask.bits() }
    }
}

/// One open SDL device bound to a registry slot.
pub(crate) struct SdlDevice {
    // Field order matters: the haptic handle must be released before the
    // controller/joystick handles it was opened from.
    rumble: RumbleDriver,
    controller: Option<GameController>,
    joystick: Joystick,
    last_snapshot: RawSnapshot,
    packet: u32,
}

impl SdlDevice {
    pub fn new(
        rumble: RumbleDriver,
        controller: Option<GameController>,
        joystick: Joystick,
    ) -> Self {
        Self {
            rumble,
            controller,
            joystick,
            last_snapshot: RawSnapshot::default(),
            packet: 0,
        }
    }

    /// Whether the native device still answers.
    pub fn is_attached(&self) -> bool {
        self.controller
            .as_ref()
            .map_or_else(|| self.joystick.attached(), GameController::attached)
    }

    /// Assemble the unified snapshot from the current native state.
    ///
    /// Plain joysticks without a controller mapping are not pads; they
    /// report the disconnected default here and are served through the
    /// joystick facade instead.
    pub fn read_state(
        &mut self,
        profile: DeadZoneProfile,
        left_mode: DeadZone,
        right_mode: DeadZone,
    ) -> PadState {
        let Some(controller) = &self.controller else {
            return PadState::default();
        };
        let raw = RawSnapshot::read(controller);
        if raw != self.last_snapshot {
            self.packet = self.packet.wrapping_add(1);
            self.last_snapshot = raw;
        }

        // SDL reports Y positive-down; the unified model is positive-up
        let left = StickPosition::new(
            axis_to_f32(raw.axes[0]),
            -axis_to_f32(raw.axes[1]),
        );
        let right = StickPosition::new(
            axis_to_f32(raw.axes[2]),
            -axis_to_f32(raw.axes[3]),
        );
        let sticks =
            ThumbSticks::with_modes(left, right, profile, left_mode, right_mode);
        let triggers = Triggers::new(
            trigger_to_f32(raw.axes[4]),
            trigger_to_f32(raw.axes[5]),
        );
        let mask = ButtonSet::from_bits(raw.buttons);

        PadState::new(sticks, triggers, PadButtons::new(mask), DPad::from_mask(mask))
            .with_packet_number(self.packet)
    }

    pub fn joystick_capabilities(&self) -> JoystickCapabilities {
        JoystickCapabilities {
            is_connected: true,
            id: self.joystick.guid().string(),
            axis_count: self.joystick.num_axes() as usize,
            button_count: self.joystick.num_buttons() as usize,
            hat_count: self.joystick.num_hats() as usize,
        }
    }

    pub fn read_joystick_state(&self) -> JoystickState {
        let j = &self.joystick;
        let mut state =
            JoystickState { is_connected: true, ..JoystickState::default() };
        for i in 0..j.num_axes() {
            state.axes.push(j.axis(i).map_or(0.0, axis_to_f32));
        }
        for i in 0..j.num_buttons() {
            state.buttons.push(j.button(i).unwrap_or(false).into());
        }
        for i in 0..j.num_hats() {
            let position =
                hat_to_position(j.hat(i).unwrap_or(HatState::Centered));
            state.hats.push(JoystickHat::from_position(position));
        }
        state
    }

    /// Update motor magnitudes, or stop the effect when both are zero.
    ///
    /// SDL exposes no separately addressable trigger motors, so the trigger
    /// magnitudes are ignored on this backend.
    pub fn set_vibration(
        &mut self,
        left: f32,
        right: f32,
        _left_trigger: f32,
        _right_trigger: f32,
    ) -> bool {
        match &mut self.rumble {
            RumbleDriver::DualMotor => {
                let Some(controller) = &mut self.controller else {
                    return false;
                };
                let result = if left <= 0.0 && right <= 0.0 {
                    controller.set_rumble(0, 0, 0)
                } else {
                    controller.set_rumble(
                        motor_to_u16(left),
                        motor_to_u16(right),
                        RUMBLE_UNTIL_REPLACED_MS,
                    )
                };
                match result {
                    Ok(()) => true,
                    Err(e) => {
                        log::debug!("rumble update failed: {e}");
                        false
                    }
                }
            }
            RumbleDriver::Haptic(h) => {
                if left <= 0.0 && right <= 0.0 {
                    h.rumble_stop();
                } else {
                    h.rumble_play(left.max(right), RUMBLE_UNTIL_REPLACED_MS);
                }
                true
            }
            RumbleDriver::None => false,
        }
    }
}
