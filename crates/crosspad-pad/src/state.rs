use crate::button::{Button, ButtonSet, PadButtons};
use crate::dpad::DPad;
use crate::thumbsticks::ThumbSticks;
use crate::triggers::Triggers;

/// Per-poll snapshot of one pad.
///
/// `Default` is the canonical disconnected state: all-zero sticks, triggers
/// and buttons, `is_connected` false.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PadState {
    pub is_connected: bool,
    /// Backend-defined change counter. Consumers compare consecutive values
    /// to detect "state changed since last read"; the numbering scheme is
    /// not comparable across backends.
    pub packet_number: u32,
    pub buttons: PadButtons,
    pub dpad: DPad,
    pub thumb_sticks: ThumbSticks,
    pub triggers: Triggers,
}

impl PadState {
    /// Assemble a connected snapshot from its components.
    pub fn new(
        thumb_sticks: ThumbSticks,
        triggers: Triggers,
        buttons: PadButtons,
        dpad: DPad,
    ) -> Self {
        Self {
            is_connected: true,
            packet_number: 0,
            buttons,
            dpad,
            thumb_sticks,
            triggers,
        }
    }

    pub fn with_packet_number(mut self, packet_number: u32) -> Self {
        self.packet_number = packet_number;
        self
    }

    /// Every bit considered down for this snapshot: physical buttons, dpad,
    /// virtual stick directions and trigger presence flags.
    fn all_buttons(&self) -> ButtonSet {
        let mut mask = self
            .buttons
            .mask()
            .union(self.dpad.mask())
            .union(self.thumb_sticks.virtual_buttons());
        if self.triggers.left() > 0.0 {
            mask.insert(Button::LeftTrigger);
        }
        if self.triggers.right() > 0.0 {
            mask.insert(Button::RightTrigger);
        }
        mask
    }

    pub fn is_button_down(&self, button: Button) -> bool {
        self.all_buttons().contains(button)
    }

    pub fn is_button_up(&self, button: Button) -> bool {
        !self.is_button_down(button)
    }
}
