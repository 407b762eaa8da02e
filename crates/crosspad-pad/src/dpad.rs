use crate::button::{Button, ButtonSet, ButtonState};

/// Four-way directional pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DPad {
    pub up: ButtonState,
    pub down: ButtonState,
    pub left: ButtonState,
    pub right: ButtonState,
}

impl DPad {
    pub const fn new(
        up: ButtonState,
        down: ButtonState,
        left: ButtonState,
        right: ButtonState,
    ) -> Self {
        Self { up, down, left, right }
    }

    /// Derive the pad from the four DPad bits of a button mask.
    pub fn from_mask(mask: ButtonSet) -> Self {
        Self {
            up: ButtonState::from_bool(mask.contains(Button::DPadUp)),
            down: ButtonState::from_bool(mask.contains(Button::DPadDown)),
            left: ButtonState::from_bool(mask.contains(Button::DPadLeft)),
            right: ButtonState::from_bool(mask.contains(Button::DPadRight)),
        }
    }

    /// The DPad bits this pad contributes to a state-wide mask.
    pub(crate) fn mask(&self) -> ButtonSet {
        let mut mask = ButtonSet::empty();
        if self.up.is_pressed() {
            mask.insert(Button::DPadUp);
        }
        if self.down.is_pressed() {
            mask.insert(Button::DPadDown);
        }
        if self.left.is_pressed() {
            mask.insert(Button::DPadLeft);
        }
        if self.right.is_pressed() {
            mask.insert(Button::DPadRight);
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIRECTIONS: [Button; 4] = [
        Button::DPadUp,
        Button::DPadDown,
        Button::DPadLeft,
        Button::DPadRight,
    ];

    #[test]
    fn from_mask_round_trips_every_combination() {
        for bits in 0u8..16 {
            let mut mask = ButtonSet::empty();
            for (i, d) in DIRECTIONS.iter().enumerate() {
                if bits & (1 << i) != 0 {
                    mask.insert(*d);
                }
            }
            let dpad = DPad::from_mask(mask);
            assert_eq!(dpad.up.is_pressed(), bits & 1 != 0);
            assert_eq!(dpad.down.is_pressed(), bits & 2 != 0);
            assert_eq!(dpad.left.is_pressed(), bits & 4 != 0);
            assert_eq!(dpad.right.is_pressed(), bits & 8 != 0);
            assert_eq!(dpad.mask(), mask);
        }
    }

    #[test]
    fn non_dpad_bits_are_ignored() {
        let mask = ButtonSet::new(&[Button::A, Button::Start]);
        assert_eq!(DPad::from_mask(mask), DPad::default());
    }
}
