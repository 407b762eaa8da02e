/// Analog trigger pair, each value clamped to [0, 1] at construction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triggers {
    left: f32,
    right: f32,
}

impl Triggers {
    pub fn new(left: f32, right: f32) -> Self {
        Self {
            left: left.clamp(0.0, 1.0),
            right: right.clamp(0.0, 1.0),
        }
    }

    pub const fn left(&self) -> f32 {
        self.left
    }

    pub const fn right(&self) -> f32 {
        self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_clamp_to_unit_interval() {
        let t = Triggers::new(-0.5, 1.5);
        assert_eq!(t.left(), 0.0);
        assert_eq!(t.right(), 1.0);
    }

    #[test]
    fn in_range_values_pass_through() {
        let t = Triggers::new(0.25, 0.75);
        assert_eq!(t.left(), 0.25);
        assert_eq!(t.right(), 0.75);
    }
}
