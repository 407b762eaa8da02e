mod bitmask;

pub use bitmask::Bitmask;

/// A fieldless enum that occupies a single bit in a [`Bitmask`].
pub trait BitFlag {
    fn bit(&self) -> u64;
    fn index(&self) -> u32;
}
