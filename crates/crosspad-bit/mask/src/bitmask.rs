use std::marker::PhantomData;

use crate::BitFlag;

/// A typed set of flags packed into a single `u64`.
///
/// Combining flags is bitwise OR, membership is bitwise AND. The flag type
/// only determines which bit each variant occupies; two masks over the same
/// flag type compare by raw bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitmask<T: BitFlag>(u64, PhantomData<T>);

impl<T: BitFlag> Bitmask<T> {
    /// Create a mask with every flag in `values` set.
    pub fn new(values: &[T]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < values.len() {
            bits |= values[i].bit();
            i += 1;
        }
        Self(bits, PhantomData)
    }

    /// Create an empty mask.
    pub const fn empty() -> Self {
        Self(0, PhantomData)
    }

    /// Create a mask from raw bits.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits, PhantomData)
    }

    /// Raw bits of the mask.
    #[inline]
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Check whether a flag is set.
    #[inline]
    pub fn contains(&self, flag: T) -> bool {
        (self.0 & flag.bit()) != 0
    }

    /// Set a flag.
    #[inline]
    pub fn insert(&mut self, flag: T) {
        self.0 |= flag.bit();
    }

    /// Clear a flag.
    #[inline]
    pub fn remove(&mut self, flag: T) {
        self.0 &= !flag.bit();
    }

    /// Whether no flag is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Bits set in both masks.
    #[inline]
    pub fn intersection(&self, other: Self) -> Self {
        Self(self.0 & other.0, PhantomData)
    }

    /// Bits set in either mask.
    #[inline]
    pub fn union(&self, other: Self) -> Self {
        Self(self.0 | other.0, PhantomData)
    }

    /// Whether every bit of `self` is also set in `other`.
    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0 & other.0 == self.0
    }

    /// Whether every bit of `other` is also set in `self`.
    #[inline]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Number of set flags.
    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

impl<T: BitFlag> Default for Bitmask<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Bitmask;
    use crate::BitFlag;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestFlag {
        A = 0,
        B = 1,
        C = 2,
        D = 3,
    }

    impl BitFlag for TestFlag {
        fn bit(&self) -> u64 {
            1u64 << (*self as u64)
        }

        fn index(&self) -> u32 {
            *self as u32
        }
    }

    #[test]
    fn empty_creates_no_bits_set() {
        let mask = Bitmask::<TestFlag>::empty();
        assert!(!mask.contains(TestFlag::A));
        assert!(!mask.contains(TestFlag::B));
        assert!(!mask.contains(TestFlag::C));
        assert!(!mask.contains(TestFlag::D));
    }

    #[test]
    fn new_sets_bits_from_slice() {
        let mask = Bitmask::new(&[TestFlag::A, TestFlag::C]);
        assert!(mask.contains(TestFlag::A));
        assert!(!mask.contains(TestFlag::B));
        assert!(mask.contains(TestFlag::C));
        assert!(!mask.contains(TestFlag::D));
    }

    #[test]
    fn insert_and_remove_toggle_bits() {
        let mut mask = Bitmask::empty();

        mask.insert(TestFlag::A);
        assert!(mask.contains(TestFlag::A));
        assert!(!mask.contains(TestFlag::B));

        mask.insert(TestFlag::B);
        assert!(mask.contains(TestFlag::A));
        assert!(mask.contains(TestFlag::B));

        mask.remove(TestFlag::A);
        assert!(!mask.contains(TestFlag::A));
        assert!(mask.contains(TestFlag::B));
    }

    #[test]
    fn union_and_intersection() {
        let a = Bitmask::new(&[TestFlag::A, TestFlag::B]);
        let b = Bitmask::new(&[TestFlag::B, TestFlag::C]);

        let both = a.union(b);
        assert!(both.contains(TestFlag::A));
        assert!(both.contains(TestFlag::B));
        assert!(both.contains(TestFlag::C));
        assert_eq!(both.count(), 3);

        let common = a.intersection(b);
        assert!(common.contains(TestFlag::B));
        assert_eq!(common.count(), 1);
    }

    #[test]
    fn is_subset_works() {
        let empty = Bitmask::<TestFlag>::empty();
        let a = Bitmask::new(&[TestFlag::A]);
        let b = Bitmask::new(&[TestFlag::B]);
        let ab = Bitmask::new(&[TestFlag::A, TestFlag::B]);

        assert!(empty.is_subset(&empty));
        assert!(empty.is_subset(&a));
        assert!(empty.is_subset(&ab));

        assert!(a.is_subset(&a));
        assert!(ab.is_subset(&ab));

        assert!(a.is_subset(&ab));

        assert!(!ab.is_subset(&a));
        assert!(!a.is_subset(&b));
        assert!(ab.is_superset(&a));
    }
}
