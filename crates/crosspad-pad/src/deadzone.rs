/// How raw stick readings are filtered before they reach the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeadZone {
    /// Pass raw values through, square-clamped to [-1, 1] per axis.
    None,
    /// Each axis excised independently, then square-clamped.
    #[default]
    IndependentAxes,
    /// Magnitude excised as a whole, direction preserved, circular-clamped.
    Circular,
}

/// Per-stick dead-zone radii.
///
/// The reference implementations disagree on the exact constants (0.24/0.265
/// on desktop, 0.30 on console-class pads), so the radii are carried as
/// profile data rather than baked into the math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadZoneProfile {
    pub left_radius: f32,
    pub right_radius: f32,
}

impl DeadZoneProfile {
    /// Desktop-class tuning.
    pub const DEFAULT: Self = Self { left_radius: 0.24, right_radius: 0.265 };

    /// Console-class tuning with wider exclusion.
    pub const CONSOLE: Self = Self { left_radius: 0.30, right_radius: 0.30 };
}

impl Default for DeadZoneProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Linear dead-zone exclusion on one axis: values inside the radius collapse
/// to zero, values outside rescale continuously to the original [-1, 1] ends.
pub(crate) fn excise_axis(value: f32, radius: f32) -> f32 {
    if value.abs() <= radius {
        0.0
    } else {
        value.signum() * (value.abs() - radius) / (1.0 - radius)
    }
}

/// Radial dead-zone exclusion on a stick vector.
pub(crate) fn excise_radial(x: f32, y: f32, radius: f32) -> (f32, f32) {
    let magnitude = (x * x + y * y).sqrt();
    if magnitude <= radius {
        return (0.0, 0.0);
    }
    let scaled = (magnitude - radius) / (1.0 - radius);
    (x / magnitude * scaled, y / magnitude * scaled)
}

/// Clamp each axis independently to [-1, 1].
pub(crate) fn clamp_square(x: f32, y: f32) -> (f32, f32) {
    (x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

/// Normalize the vector if its magnitude exceeds 1.
pub(crate) fn clamp_circular(x: f32, y: f32) -> (f32, f32) {
    let magnitude_squared = x * x + y * y;
    if magnitude_squared > 1.0 {
        let magnitude = magnitude_squared.sqrt();
        (x / magnitude, y / magnitude)
    } else {
        (x, y)
    }
}
