//! Sets of cell values represented as bitsets.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::GridSize;

/// A set of cell values in the range 1..=9, stored as a 16-bit mask.
///
/// Bit `v - 1` represents the value `v`. Candidate bookkeeping for both
/// supported grid sizes fits in this one representation; a 6×6 grid simply
/// never sets bits above 5.
///
/// # Examples
///
/// ```
/// use cluegrid_core::value_set::ValueSet;
///
/// let mut set = ValueSet::EMPTY;
/// set.insert(2);
/// set.insert(7);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(7));
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![2, 7]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValueSet(u16);

impl ValueSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Returns the set of all legal values for a grid size (1..=n).
    #[must_use]
    pub const fn full(size: GridSize) -> Self {
        Self((1 << size.n()) - 1)
    }

    /// Inserts a value into the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    pub fn insert(&mut self, value: u8) {
        assert!((1..=9).contains(&value), "value out of range: {value}");
        self.0 |= 1 << (value - 1);
    }

    /// Removes a value from the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    pub fn remove(&mut self, value: u8) {
        assert!((1..=9).contains(&value), "value out of range: {value}");
        self.0 &= !(1 << (value - 1));
    }

    /// Returns `true` if the set contains `value`.
    #[must_use]
    pub const fn contains(self, value: u8) -> bool {
        value >= 1 && value <= 9 && self.0 & (1 << (value - 1)) != 0
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member if the set holds exactly one value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluegrid_core::value_set::ValueSet;
    ///
    /// assert_eq!(ValueSet::from_iter([4]).as_single(), Some(4));
    /// assert_eq!(ValueSet::from_iter([4, 5]).as_single(), None);
    /// assert_eq!(ValueSet::EMPTY.as_single(), None);
    /// ```
    #[must_use]
    pub const fn as_single(self) -> Option<u8> {
        if self.0.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            Some(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Returns the values missing from this set relative to `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the values in ascending order.
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl FromIterator<u8> for ValueSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl IntoIterator for ValueSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BitAnd for ValueSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for ValueSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for ValueSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ValueSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Debug for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the values of a [`ValueSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
