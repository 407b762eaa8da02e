use crate::button::{Button, ButtonSet};
use crate::deadzone::{
    clamp_circular, clamp_square, excise_axis, excise_radial, DeadZone,
    DeadZoneProfile,
};

/// 2D stick reading, Y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StickPosition {
    pub x: f32,
    pub y: f32,
}

impl StickPosition {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Both thumbsticks of one pad, dead-zone processed and clamped.
///
/// The virtual direction buttons are always derived from the raw positions
/// against the profile radii, so `LeftThumbstickRight` etc. read the same no
/// matter which [`DeadZone`] mode shaped the exposed vectors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbSticks {
    left: StickPosition,
    right: StickPosition,
    virtual_buttons: ButtonSet,
}

impl ThumbSticks {
    /// Process raw readings with one dead-zone mode for both sticks.
    pub fn new(
        left: StickPosition,
        right: StickPosition,
        profile: DeadZoneProfile,
        mode: DeadZone,
    ) -> Self {
        Self::with_modes(left, right, profile, mode, mode)
    }

    /// Process raw readings with a separate mode per stick.
    pub fn with_modes(
        left: StickPosition,
        right: StickPosition,
        profile: DeadZoneProfile,
        left_mode: DeadZone,
        right_mode: DeadZone,
    ) -> Self {
        Self {
            left: apply(left, profile.left_radius, left_mode),
            right: apply(right, profile.right_radius, right_mode),
            virtual_buttons: derive_virtual_buttons(left, right, profile),
        }
    }

    /// No dead zone at all, square clamp only.
    ///
    /// This is the state-simulation path; virtual buttons still come from the
    /// raw positions against the default profile.
    pub fn from_raw(left: StickPosition, right: StickPosition) -> Self {
        let profile = DeadZoneProfile::default();
        Self {
            left: apply(left, profile.left_radius, DeadZone::None),
            right: apply(right, profile.right_radius, DeadZone::None),
            virtual_buttons: derive_virtual_buttons(left, right, profile),
        }
    }

    pub const fn left(&self) -> StickPosition {
        self.left
    }

    pub const fn right(&self) -> StickPosition {
        self.right
    }

    pub const fn virtual_buttons(&self) -> ButtonSet {
        self.virtual_buttons
    }
}

fn apply(stick: StickPosition, radius: f32, mode: DeadZone) -> StickPosition {
    let (x, y) = match mode {
        DeadZone::None => clamp_square(stick.x, stick.y),
        DeadZone::IndependentAxes => {
            let x = excise_axis(stick.x, radius);
            let y = excise_axis(stick.y, radius);
            clamp_square(x, y)
        }
        DeadZone::Circular => {
            let (x, y) = excise_radial(stick.x, stick.y, radius);
            clamp_circular(x, y)
        }
    };
    StickPosition::new(x, y)
}

fn derive_virtual_buttons(
    left: StickPosition,
    right: StickPosition,
    profile: DeadZoneProfile,
) -> ButtonSet {
    let mut mask = ButtonSet::empty();
    if left.x > profile.left_radius {
        mask.insert(Button::LeftThumbstickRight);
    }
    if left.x < -profile.left_radius {
        mask.insert(Button::LeftThumbstickLeft);
    }
    if left.y > profile.left_radius {
        mask.insert(Button::LeftThumbstickUp);
    }
    if left.y < -profile.left_radius {
        mask.insert(Button::LeftThumbstickDown);
    }
    if right.x > profile.right_radius {
        mask.insert(Button::RightThumbstickRight);
    }
    if right.x < -profile.right_radius {
        mask.insert(Button::RightThumbstickLeft);
    }
    if right.y > profile.right_radius {
        mask.insert(Button::RightThumbstickUp);
    }
    if right.y < -profile.right_radius {
        mask.insert(Button::RightThumbstickDown);
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: DeadZoneProfile = DeadZoneProfile::DEFAULT;

    #[test]
    fn independent_axes_excises_each_axis() {
        let sticks = ThumbSticks::new(
            StickPosition::new(1.0, 0.1),
            StickPosition::new(0.1, 1.0),
            PROFILE,
            DeadZone::IndependentAxes,
        );
        // X is fully deflected and rescales to 1.0; Y is inside the radius
        assert!((sticks.left().x - 1.0).abs() < 1e-6);
        assert_eq!(sticks.left().y, 0.0);
        assert_eq!(sticks.right().x, 0.0);
        assert!((sticks.right().y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn concrete_scenario_sets_virtual_buttons() {
        let sticks = ThumbSticks::new(
            StickPosition::new(1.0, 0.1),
            StickPosition::new(0.1, 1.0),
            PROFILE,
            DeadZone::IndependentAxes,
        );
        let v = sticks.virtual_buttons();
        assert!(v.contains(Button::LeftThumbstickRight));
        assert!(v.contains(Button::RightThumbstickUp));
        assert!(!v.contains(Button::LeftThumbstickUp));
        assert!(!v.contains(Button::RightThumbstickRight));
        assert_eq!(v.count(), 2);
    }

    #[test]
    fn virtual_buttons_ignore_dead_zone_mode() {
        let left = StickPosition::new(0.25, -0.9);
        let right = StickPosition::new(-0.5, 0.2);
        let a = ThumbSticks::new(left, right, PROFILE, DeadZone::None);
        let b =
            ThumbSticks::new(left, right, PROFILE, DeadZone::IndependentAxes);
        let c = ThumbSticks::new(left, right, PROFILE, DeadZone::Circular);
        assert_eq!(a.virtual_buttons(), b.virtual_buttons());
        assert_eq!(b.virtual_buttons(), c.virtual_buttons());
    }

    #[test]
    fn none_mode_square_clamps_only() {
        let sticks = ThumbSticks::new(
            StickPosition::new(1.5, -2.0),
            StickPosition::new(0.1, 0.1),
            PROFILE,
            DeadZone::None,
        );
        assert_eq!(sticks.left().x, 1.0);
        assert_eq!(sticks.left().y, -1.0);
        // Inside-radius values pass through untouched
        assert_eq!(sticks.right().x, 0.1);
        assert_eq!(sticks.right().y, 0.1);
    }

    #[test]
    fn circular_mode_zeroes_inside_radius_and_normalizes() {
        let sticks = ThumbSticks::new(
            StickPosition::new(0.15, 0.15),
            StickPosition::new(1.0, 1.0),
            PROFILE,
            DeadZone::Circular,
        );
        assert_eq!(sticks.left(), StickPosition::ZERO);
        assert!(sticks.right().magnitude() <= 1.0 + 1e-6);
        // Diagonal input keeps its direction
        assert!((sticks.right().x - sticks.right().y).abs() < 1e-6);
    }

    #[test]
    fn independent_axes_is_monotonic_in_deflection() {
        let mut prev = -1.0;
        let mut v = PROFILE.left_radius + 0.01;
        while v <= 1.0 {
            let sticks = ThumbSticks::new(
                StickPosition::new(v, 0.0),
                StickPosition::ZERO,
                PROFILE,
                DeadZone::IndependentAxes,
            );
            assert!(sticks.left().x > prev);
            prev = sticks.left().x;
            v += 0.01;
        }
    }

    #[test]
    fn raw_constructor_applies_no_dead_zone() {
        let sticks = ThumbSticks::from_raw(
            StickPosition::new(0.05, 1.4),
            StickPosition::new(-0.02, 0.0),
        );
        // Values inside any radius survive untouched, out-of-range clamps
        assert_eq!(sticks.left().x, 0.05);
        assert_eq!(sticks.left().y, 1.0);
        assert_eq!(sticks.right().x, -0.02);
    }

    #[test]
    fn per_stick_modes_are_independent() {
        let left = StickPosition::new(0.1, 0.0);
        let right = StickPosition::new(0.1, 0.0);
        let sticks = ThumbSticks::with_modes(
            left,
            right,
            PROFILE,
            DeadZone::None,
            DeadZone::IndependentAxes,
        );
        assert_eq!(sticks.left().x, 0.1);
        assert_eq!(sticks.right().x, 0.0);
    }
}
