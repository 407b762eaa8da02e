use crosspad_bit_derive::Bit;
use crosspad_bit_mask::Bitmask;

/// Digital state of a single button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

impl ButtonState {
    #[inline]
    pub fn is_pressed(self) -> bool {
        self == ButtonState::Pressed
    }

    #[inline]
    pub(crate) fn from_bool(pressed: bool) -> Self {
        if pressed {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }
}

impl From<bool> for ButtonState {
    fn from(pressed: bool) -> Self {
        ButtonState::from_bool(pressed)
    }
}

/// Logical pad buttons, one bit each.
///
/// The thumbstick-direction variants are virtual buttons synthesized from
/// raw stick positions; the trigger variants are presence flags set when the
/// analog trigger is deflected at all.
#[derive(Bit, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
    Start,
    Back,
    BigButton,
    A,
    B,
    X,
    Y,
    LeftShoulder,
    RightShoulder,
    LeftStick,
    RightStick,
    LeftTrigger,
    RightTrigger,
    LeftThumbstickUp,
    LeftThumbstickDown,
    LeftThumbstickLeft,
    LeftThumbstickRight,
    RightThumbstickUp,
    RightThumbstickDown,
    RightThumbstickLeft,
    RightThumbstickRight,
}

/// Set of pad buttons packed into one mask.
pub type ButtonSet = Bitmask<Button>;

/// Named view over a [`ButtonSet`]. Equality is mask equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PadButtons {
    mask: ButtonSet,
}

impl PadButtons {
    pub const fn new(mask: ButtonSet) -> Self {
        Self { mask }
    }

    pub fn from_buttons(buttons: &[Button]) -> Self {
        Self { mask: ButtonSet::new(buttons) }
    }

    /// The underlying mask.
    pub const fn mask(&self) -> ButtonSet {
        self.mask
    }

    #[inline]
    fn get(&self, button: Button) -> ButtonState {
        ButtonState::from_bool(self.mask.contains(button))
    }

    pub fn a(&self) -> ButtonState {
        self.get(Button::A)
    }

    pub fn b(&self) -> ButtonState {
        self.get(Button::B)
    }

    pub fn x(&self) -> ButtonState {
        self.get(Button::X)
    }

    pub fn y(&self) -> ButtonState {
        self.get(Button::Y)
    }

    pub fn start(&self) -> ButtonState {
        self.get(Button::Start)
    }

    pub fn back(&self) -> ButtonState {
        self.get(Button::Back)
    }

    pub fn big_button(&self) -> ButtonState {
        self.get(Button::BigButton)
    }

    pub fn left_shoulder(&self) -> ButtonState {
        self.get(Button::LeftShoulder)
    }

    pub fn right_shoulder(&self) -> ButtonState {
        self.get(Button::RightShoulder)
    }

    pub fn left_stick(&self) -> ButtonState {
        self.get(Button::LeftStick)
    }

    pub fn right_stick(&self) -> ButtonState {
        self.get(Button::RightStick)
    }
}
