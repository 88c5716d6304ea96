//! Provides a set of squares stored in a single 64-bit integer
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
//! # Board Indices
//! Every piece placement, occupancy and move-destination set is a [`Bitboard`](struct.Bitboard.html).
//! Bit `i` represents the square with board index `i`, where `i = rank * 8 + file`, so `a1` is
//! bit 0 and `h8` is bit 63.
//!
//! Methods taking a raw index tolerate indices of 64 and above: they have no effect, or produce
//! an empty result, rather than panicking.
//!
//! ```rust
//! use bitmove::chess::Square;
//! use bitmove::chess::bitboard::Bitboard;
//!
//! let bb = Bitboard::new().set(Square::E4.index()).set(99);
//! assert_eq!(bb.count(), 1);
//! assert!(bb.is_set(28));
//! assert_eq!(bb.square_names(), vec!["e4"]);
//! ```
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryInto;
use std::iter::FusedIterator;
use std::iter::{FromIterator, Extend};
use std::ops;
use std::fmt;
use super::*;

pub mod attacks;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A set of squares with each bit representing one square
///
/// The diagram below shows the layout of the bits.
///
/// ```text
///     a    b    c    d    e    f    g    h
///    ---------------------------------------
/// 8 | 56 | 57 | 58 | 59 | 60 | 61 | 62 | 63 | 8
///    ---------------------------------------
/// 7 | 48 | 49 | 50 | 51 | 52 | 53 | 54 | 55 | 7
///    ---------------------------------------
/// 6 | 40 | 41 | 42 | 43 | 44 | 45 | 46 | 47 | 6
///    ---------------------------------------
/// 5 | 32 | 33 | 34 | 35 | 36 | 37 | 38 | 39 | 5
///    ---------------------------------------
/// 4 | 24 | 25 | 26 | 27 | 28 | 29 | 30 | 31 | 4
///    ---------------------------------------
/// 3 | 16 | 17 | 18 | 19 | 20 | 21 | 22 | 23 | 3
///    ---------------------------------------
/// 2 | 08 | 09 | 10 | 11 | 12 | 13 | 14 | 15 | 2
///    ---------------------------------------
/// 1 | 00 | 01 | 02 | 03 | 04 | 05 | 06 | 07 | 1
///    ---------------------------------------
///     a    b    c    d    e    f    g    h
/// ```
///
/// `Bitboard` is an immutable value: `set`, `clear`, `toggle` and the shifts return a new
/// bitboard. It implements all the bit-wise logic operators: `|`, `&`, `^`, `!`, `|=`, `&=`, and
/// `^=`, and `IntoIterator` over its squares in ascending index order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Creates a new, empty bitboard
    pub fn new() -> Bitboard {
        Default::default()
    }

    /// Returns a bitboard containing only `index`, or an empty bitboard if `index` is off the board
    pub fn from_index(index: usize) -> Bitboard {
        Bitboard::new().set(index)
    }

    /// Returns a bitboard containing only the square at `file` and `rank`, or an empty bitboard
    /// if either is out of range
    pub fn from_file_rank(file: usize, rank: usize) -> Bitboard {
        match file_rank_to_index(file, rank) {
            Some(index) => Bitboard::from_index(index),
            None => Bitboard::new(),
        }
    }

    /// Returns a bitboard containing only the named square, or an empty bitboard if `name`
    /// isn't a square name
    pub fn from_square_name(name: &str) -> Bitboard {
        match name_to_index(name) {
            Some(index) => Bitboard::from_index(index),
            None => Bitboard::new(),
        }
    }

    /// Returns the raw 64-bit value
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Returns `true` if the bitboard is empty
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the bit for `index` is set. Always `false` for indices off the board.
    pub fn is_set(self, index: usize) -> bool {
        index < Square::COUNT && self.0 & (1 << index) != 0
    }

    /// Returns a copy with the bit for `index` set
    pub fn set(self, index: usize) -> Bitboard {
        if index < Square::COUNT {
            Bitboard(self.0 | 1 << index)
        } else {
            self
        }
    }

    /// Returns a copy with the bit for `index` cleared
    pub fn clear(self, index: usize) -> Bitboard {
        if index < Square::COUNT {
            Bitboard(self.0 & !(1 << index))
        } else {
            self
        }
    }

    /// Returns a copy with the bit for `index` flipped
    pub fn toggle(self, index: usize) -> Bitboard {
        if index < Square::COUNT {
            Bitboard(self.0 ^ 1 << index)
        } else {
            self
        }
    }

    /// Returns the number of squares in the bitboard
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns the lowest set index, or `None` if the bitboard is empty
    pub fn first_set(self) -> Option<usize> {
        if self.0 != 0 {
            Some(self.0.trailing_zeros() as usize)
        } else {
            None
        }
    }

    /// Returns the highest set index, or `None` if the bitboard is empty
    pub fn last_set(self) -> Option<usize> {
        if self.0 != 0 {
            Some(63 - self.0.leading_zeros() as usize)
        } else {
            None
        }
    }

    /// Shifts every bit toward higher indices. Bits shifted past index 63 are lost.
    pub fn shift_left(self, amount: u32) -> Bitboard {
        Bitboard(self.0.checked_shl(amount).unwrap_or(0))
    }

    /// Shifts every bit toward lower indices. Bits shifted below index 0 are lost.
    pub fn shift_right(self, amount: u32) -> Bitboard {
        Bitboard(self.0.checked_shr(amount).unwrap_or(0))
    }

    /// Returns the set indices in ascending order
    pub fn indices(self) -> Vec<usize> {
        self.into_iter().map(usize::from).collect()
    }

    /// Returns the `(file, rank)` pair of each set index, in ascending index order
    pub fn file_ranks(self) -> Vec<(usize, usize)> {
        self.into_iter().map(|sq| (sq.file() as usize, sq.rank() as usize)).collect()
    }

    /// Returns the algebraic name of each set index, in ascending index order
    pub fn square_names(self) -> Vec<String> {
        self.into_iter().map(|sq| sq.to_string()).collect()
    }

    /// Returns `true` if the bitboard contains `sq`
    pub fn contains(self, sq: Square) -> bool {
        !(self & sq.into()).is_empty()
    }

    /// Returns `true` if `self` intersects `other`
    pub fn intersects(self, other: Bitboard) -> bool {
        !(self & other).is_empty()
    }

    /// Adds a square to the bitboard if it is not already present
    pub fn insert(&mut self, sq: Square) {
        *self |= sq.into();
    }

    /// Removes a square from the bitboard if it is present
    pub fn remove(&mut self, sq: Square) {
        *self &= !Bitboard::from(sq);
    }

    /// Removes the lowest square from the bitboard and returns it
    pub fn pop(&mut self) -> Option<Square> {
        if self.0 > 0 {
            // get the least significant bit
            let sq: Square = (self.0.trailing_zeros() as usize).try_into().expect("INFALLIBLE");
            // clear the least significant bit
            self.0 &= self.0 - 1;

            Some(sq)
        } else {
            None
        }
    }

    /// Returns the square that would be removed by a pop command
    pub fn peek(self) -> Option<Square> {
        self.first_set().map(|i| i.try_into().expect("INFALLIBLE"))
    }
}

impl ops::Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl ops::BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl ops::BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0
    }
}

impl ops::BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}

impl ops::BitXor for Bitboard {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl ops::BitXorAssign for Bitboard {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0
    }
}

/// Draws the bitboard as an 8x8 grid, rank 8 at the top, with `1` for members and `.` otherwise
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..Rank::COUNT).rev() {
            let row: Vec<&str> = (0..File::COUNT)
                .map(|file| if self.is_set(rank * 8 + file) { "1" } else { "." })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::LowerHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Octal for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Binary for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for Bitboard {
    fn from(val: u64) -> Bitboard {
        Bitboard(val)
    }
}

impl From<Square> for Bitboard {
    fn from(sq: Square) -> Bitboard {
        Bitboard(1 << sq as u64)
    }
}

impl From<File> for Bitboard {
    fn from(f: File) -> Bitboard {
        Bitboard(0x0101_0101_0101_0101 << f as u64)
    }
}

impl From<Rank> for Bitboard {
    fn from(r: Rank) -> Bitboard {
        Bitboard(0x0000_0000_0000_00ff << (8 * r as u64))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item=Square>>(iter: I) -> Self {
        let mut bd = Bitboard::new();

        for sq in iter {
            bd.insert(sq);
        }

        bd
    }
}

impl Extend<Square> for Bitboard {
    fn extend<I: IntoIterator<Item=Square>>(&mut self, iter: I) {
        for sq in iter {
            self.insert(sq);
        }
    }
}

/// Iterator over the squares of a `Bitboard`, lowest index first
#[derive(Debug, Copy, Clone)]
pub struct IntoIter(Bitboard);

impl Iterator for IntoIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count();
        (len, Some(len))
    }
}

impl ExactSizeIterator for IntoIter { }

impl FusedIterator for IntoIter { }
