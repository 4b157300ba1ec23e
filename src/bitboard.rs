//! A fixed-capacity set of board cells packed into an unsigned integer.
//!
//! Cells are addressed by their linear index (`row * cols + col`); the board
//! geometry owns that mapping. The type is `no_std` friendly and avoids heap
//! allocations. Boards up to 128 cells fit the `u128` [`CellMask`] alias.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested cell count exceeds the bit capacity of `T`.
    SizeTooLarge { cells: usize, capacity: usize },
    /// Cell index is past the bit capacity of `T`.
    IndexOutOfBounds { index: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { cells, capacity } => {
                write!(f, "SizeTooLarge: {} cells exceed capacity {}", cells, capacity)
            }
            BitBoardError::IndexOutOfBounds { index } => {
                write!(f, "IndexOutOfBounds: index={}", index)
            }
        }
    }
}

/// A set of cell indices stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

/// Mask type used by the board.
pub type CellMask = BitBoard<u128>;

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of cells the mask can address.
    #[inline]
    pub fn capacity() -> usize {
        mem::size_of::<T>() * 8
    }

    /// Fails with `SizeTooLarge` when `cells` indices would not fit.
    pub fn check_fits(cells: usize) -> Result<(), BitBoardError> {
        let capacity = Self::capacity();
        if cells > capacity {
            Err(BitBoardError::SizeTooLarge { cells, capacity })
        } else {
            Ok(())
        }
    }

    /// Create an empty mask.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Mask with the first `cells` indices set.
    pub fn full(cells: usize) -> Result<Self, BitBoardError> {
        Self::check_fits(cells)?;
        let bits = if cells == Self::capacity() {
            !T::zero()
        } else {
            (T::one() << cells) - T::one()
        };
        Ok(BitBoard { bits })
    }

    /// Build a mask from cell indices, rejecting any past capacity.
    pub fn from_indices<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut mask = Self::new();
        for index in iter {
            if index >= Self::capacity() {
                return Err(BitBoardError::IndexOutOfBounds { index });
            }
            mask.insert(index);
        }
        Ok(mask)
    }

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cell is set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `index` is in the set. Indices past capacity are never set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < Self::capacity() && ((self.bits >> index) & T::one()) != T::zero()
    }

    /// Add `index` to the set. Indices past capacity are ignored.
    #[inline]
    pub fn insert(&mut self, index: usize) {
        if index < Self::capacity() {
            self.bits = self.bits | (T::one() << index);
        }
    }

    /// Remove `index` from the set. Indices past capacity are ignored.
    #[inline]
    pub fn remove(&mut self, index: usize) {
        if index < Self::capacity() {
            self.bits = self.bits & !(T::one() << index);
        }
    }

    /// Iterator over the set indices in ascending order.
    #[inline]
    pub fn iter(&self) -> SetBits<T> {
        SetBits { bits: self.bits }
    }
}

impl<T> Default for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero + fmt::Binary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitBoard({:#b})", self.bits)
    }
}

/// Iterator over the set indices of a mask.
#[derive(Clone, Copy)]
pub struct SetBits<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T> Iterator for SetBits<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits.is_zero() {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits = self.bits & (self.bits - T::one());
        Some(index)
    }
}

impl<T> FromIterator<usize> for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Collects indices, dropping any past capacity.
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut mask = Self::new();
        for index in iter {
            mask.insert(index);
        }
        mask
    }
}

impl<T> BitAnd for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard { bits: self.bits & rhs.bits }
    }
}

impl<T> BitOr for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard { bits: self.bits | rhs.bits }
    }
}

/// Set difference.
impl<T> Sub for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        BitBoard { bits: self.bits & !rhs.bits }
    }
}

/// Complement over the full capacity; intersect with a board mask to bound it.
impl<T> Not for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard { bits: !self.bits }
    }
}

impl<T> BitAndAssign for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits = self.bits & rhs.bits;
    }
}

impl<T> BitOrAssign for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
