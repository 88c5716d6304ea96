//! Provides the precomputed tables used to compute attacks
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
//! # Direct attacks (Knights and Kings)
//! Knights and kings move directly to their destinations without passing through any other squares,
//! so their attacks are a single table lookup:
//!
//! ```rust
//! use bitmove::chess::Square;
//! use bitmove::chess::bitboard::attacks::AttackTables;
//!
//! let mut attacks = AttackTables::get().knight(Square::H1.index());
//! assert_eq!(attacks.pop(), Some(Square::F2));
//! assert_eq!(attacks.pop(), Some(Square::G3));
//! assert_eq!(attacks.pop(), None);
//! ```
//!
//! # Sliding Attacks (Bishops, Rooks and Queens)
//! Sliding pieces use one unobstructed ray per direction, truncated at the first occupied square
//! with [`AttackTables::truncated_ray`](struct.AttackTables.html#method.truncated_ray).
////////////////////////////////////////////////////////////////////////////////////////////////////
use lazy_static::lazy_static;
use super::*;

lazy_static! {
    static ref TABLES: AttackTables = AttackTables::new();
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// One of the eight directions a sliding piece can move in
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
    NorthEast = 4,
    NorthWest = 5,
    SouthEast = 6,
    SouthWest = 7,
}

impl Direction {
    /// The number of directions
    pub const COUNT: usize = 8;

    /// All directions
    pub const ALL: [Direction; Direction::COUNT] = [
        Direction::North, Direction::East, Direction::South, Direction::West,
        Direction::NorthEast, Direction::NorthWest, Direction::SouthEast, Direction::SouthWest,
    ];

    /// The directions a rook moves in
    pub const ORTHOGONAL: [Direction; 4] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    /// The directions a bishop moves in
    pub const DIAGONAL: [Direction; 4] =
        [Direction::NorthEast, Direction::NorthWest, Direction::SouthEast, Direction::SouthWest];

    /// Returns `true` if squares along this direction have increasing indices
    pub fn is_increasing(self) -> bool {
        match self {
            Direction::North | Direction::East | Direction::NorthEast | Direction::NorthWest => true,
            Direction::South | Direction::West | Direction::SouthEast | Direction::SouthWest => false,
        }
    }

    /// (file, rank) step
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (-1, 1),
            Direction::SouthEast => (1, -1),
            Direction::SouthWest => (-1, -1),
        }
    }
}

const KNIGHT_OFFSETS: [(isize, isize); 8] =
    [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];

const KING_OFFSETS: [(isize, isize); 8] =
    [(0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1)];

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Immutable per-square lookup tables for knight and king attacks and the eight unobstructed rays.
///
/// The tables are built once per process and shared through [`get`](#method.get). Every lookup
/// taking a square index returns an empty bitboard for indices off the board.
#[derive(Debug, Clone)]
pub struct AttackTables {
    knight: [Bitboard; Square::COUNT],
    king: [Bitboard; Square::COUNT],
    rays: [[Bitboard; Square::COUNT]; Direction::COUNT],
    diagonal: [Bitboard; Square::COUNT],
    orthogonal: [Bitboard; Square::COUNT],
}

impl AttackTables {
    /// Computes a fresh set of tables
    pub fn new() -> AttackTables {
        let mut tables = AttackTables {
            knight: [Bitboard::new(); Square::COUNT],
            king: [Bitboard::new(); Square::COUNT],
            rays: [[Bitboard::new(); Square::COUNT]; Direction::COUNT],
            diagonal: [Bitboard::new(); Square::COUNT],
            orthogonal: [Bitboard::new(); Square::COUNT],
        };

        for sq in 0..Square::COUNT {
            tables.knight[sq] = offsets(sq, &KNIGHT_OFFSETS);
            tables.king[sq] = offsets(sq, &KING_OFFSETS);

            for &dir in Direction::ALL.iter() {
                tables.rays[dir as usize][sq] = walk(sq, dir);
            }
            for &dir in Direction::DIAGONAL.iter() {
                tables.diagonal[sq] |= tables.rays[dir as usize][sq];
            }
            for &dir in Direction::ORTHOGONAL.iter() {
                tables.orthogonal[sq] |= tables.rays[dir as usize][sq];
            }
        }

        tables
    }

    /// Returns the process-wide tables, building them on first use
    pub fn get() -> &'static AttackTables {
        &TABLES
    }

    /// Squares a knight on `sq` attacks
    pub fn knight(&self, sq: usize) -> Bitboard {
        self.knight.get(sq).copied().unwrap_or_default()
    }

    /// Squares a king on `sq` attacks
    pub fn king(&self, sq: usize) -> Bitboard {
        self.king.get(sq).copied().unwrap_or_default()
    }

    /// All squares strictly in direction `dir` from `sq` up to the edge of the board
    pub fn ray(&self, dir: Direction, sq: usize) -> Bitboard {
        self.rays[dir as usize].get(sq).copied().unwrap_or_default()
    }

    /// Union of the four diagonal rays from `sq`
    pub fn diagonal(&self, sq: usize) -> Bitboard {
        self.diagonal.get(sq).copied().unwrap_or_default()
    }

    /// Union of the four orthogonal rays from `sq`
    pub fn orthogonal(&self, sq: usize) -> Bitboard {
        self.orthogonal.get(sq).copied().unwrap_or_default()
    }

    /// Returns the squares reachable from `origin` sliding in direction `dir`.
    ///
    /// The slide stops at the nearest occupied square along the ray. That square is included
    /// only if it belongs to `enemy`.
    ///
    /// ```rust
    /// use bitmove::chess::Square;
    /// use bitmove::chess::bitboard::Bitboard;
    /// use bitmove::chess::bitboard::attacks::{AttackTables, Direction};
    ///
    /// let tables = AttackTables::get();
    /// let own = Bitboard::from(Square::A6);
    /// let enemy = Bitboard::from(Square::E1);
    /// let north = tables.truncated_ray(Direction::North, Square::A1.index(), own, enemy);
    /// assert_eq!(north.square_names(), vec!["a2", "a3", "a4", "a5"]);
    /// let east = tables.truncated_ray(Direction::East, Square::A1.index(), own, enemy);
    /// assert_eq!(east.square_names(), vec!["b1", "c1", "d1", "e1"]);
    /// ```
    pub fn truncated_ray(&self, dir: Direction, origin: usize, own: Bitboard, enemy: Bitboard)
        -> Bitboard
    {
        let ray = self.ray(dir, origin);
        let blockers = ray & (own | enemy);

        let nearest = if dir.is_increasing() {
            blockers.first_set()
        } else {
            blockers.last_set()
        };

        match nearest {
            None => ray,
            Some(hit) => {
                // everything up to and including the blocker
                let between = ray ^ self.ray(dir, hit);
                if enemy.is_set(hit) {
                    between
                } else {
                    between.clear(hit)
                }
            },
        }
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        AttackTables::new()
    }
}

fn step(sq: usize, (df, dr): (isize, isize)) -> Option<usize> {
    let (file, rank) = index_to_file_rank(sq)?;
    let file = file as isize + df;
    let rank = rank as isize + dr;

    if file < 0 || rank < 0 {
        None
    } else {
        file_rank_to_index(file as usize, rank as usize)
    }
}

fn offsets(sq: usize, deltas: &[(isize, isize)]) -> Bitboard {
    deltas.iter()
        .filter_map(|&delta| step(sq, delta))
        .fold(Bitboard::new(), |bb, i| bb.set(i))
}

fn walk(sq: usize, dir: Direction) -> Bitboard {
    let mut ray = Bitboard::new();
    let mut cur = sq;

    while let Some(next) = step(cur, dir.delta()) {
        ray = ray.set(next);
        cur = next;
    }

    ray
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(bb: Bitboard) -> Vec<String> {
        bb.square_names()
    }

    mod knight {
        use super::*;

        #[test]
        fn corners_have_two_destinations() {
            let tables = AttackTables::get();
            assert_eq!(names(tables.knight(Square::A1.index())), vec!["c2", "b3"]);
            assert_eq!(tables.knight(Square::H1.index()).count(), 2);
            assert_eq!(tables.knight(Square::A8.index()).count(), 2);
            assert_eq!(tables.knight(Square::H8.index()).count(), 2);
        }

        #[test]
        fn center_has_eight_destinations() {
            let tables = AttackTables::get();
            assert_eq!(tables.knight(Square::D4.index()).count(), 8);
            assert_eq!(tables.knight(Square::E5.index()).count(), 8);
        }

        #[test]
        fn off_board_is_empty() {
            assert!(AttackTables::get().knight(64).is_empty());
        }
    }

    mod king {
        use super::*;

        #[test]
        fn destinations_by_region() {
            let tables = AttackTables::get();
            // 1. corner
            assert_eq!(tables.king(Square::A1.index()).count(), 3);
            assert_eq!(tables.king(Square::H8.index()).count(), 3);
            // 2. edge
            assert_eq!(tables.king(Square::E1.index()).count(), 5);
            assert_eq!(tables.king(Square::A4.index()).count(), 5);
            // 3. center
            assert_eq!(tables.king(Square::D5.index()).count(), 8);
            assert_eq!(names(tables.king(Square::A1.index())), vec!["b1", "a2", "b2"]);
        }
    }

    mod rays {
        use super::*;

        #[test]
        fn rays_run_to_the_edge() {
            let tables = AttackTables::get();
            let a1 = Square::A1.index();
            assert_eq!(names(tables.ray(Direction::North, a1)),
                vec!["a2", "a3", "a4", "a5", "a6", "a7", "a8"]);
            assert_eq!(names(tables.ray(Direction::NorthEast, a1)),
                vec!["b2", "c3", "d4", "e5", "f6", "g7", "h8"]);
            assert!(tables.ray(Direction::South, a1).is_empty());
            assert!(tables.ray(Direction::West, a1).is_empty());
            assert_eq!(names(tables.ray(Direction::SouthWest, Square::D4.index())),
                vec!["a1", "b2", "c3"]);
            assert_eq!(names(tables.ray(Direction::NorthWest, Square::D4.index())),
                vec!["c5", "b6", "a7"]);
        }

        #[test]
        fn increasing_directions_have_higher_indices() {
            let tables = AttackTables::get();
            for sq in 0..Square::COUNT {
                for &dir in Direction::ALL.iter() {
                    for i in tables.ray(dir, sq).indices() {
                        assert_eq!(i > sq, dir.is_increasing());
                    }
                }
            }
        }

        #[test]
        fn unions_match_shared_lines() {
            let tables = AttackTables::get();
            for sq in 0..Square::COUNT {
                let (f, r) = index_to_file_rank(sq).unwrap();
                let mut diag = Bitboard::new();
                let mut orth = Bitboard::new();
                for i in 0..Square::COUNT {
                    let (f2, r2) = index_to_file_rank(i).unwrap();
                    if i == sq {
                        continue;
                    }
                    if (f as isize - f2 as isize).abs() == (r as isize - r2 as isize).abs() {
                        diag = diag.set(i);
                    }
                    if f == f2 || r == r2 {
                        orth = orth.set(i);
                    }
                }
                assert_eq!(tables.diagonal(sq), diag);
                assert_eq!(tables.orthogonal(sq), orth);
            }
        }
    }

    mod truncation {
        use super::*;

        #[test]
        fn empty_ray_is_unblocked() {
            let tables = AttackTables::get();
            let ray = tables.truncated_ray(
                Direction::East, Square::A1.index(), Bitboard::new(), Bitboard::new());
            assert_eq!(ray, tables.ray(Direction::East, Square::A1.index()));
        }

        #[test]
        fn own_blocker_is_excluded() {
            let tables = AttackTables::get();
            let own = Bitboard::from(Square::D5);
            let ray = tables.truncated_ray(
                Direction::South, Square::D8.index(), own, Bitboard::new());
            assert_eq!(names(ray), vec!["d6", "d7"]);
        }

        #[test]
        fn nearest_blocker_wins() {
            let tables = AttackTables::get();
            // enemy nearer than own piece, decreasing direction
            let own = Bitboard::from(Square::B2);
            let enemy = Bitboard::from(Square::D4);
            let ray = tables.truncated_ray(Direction::SouthWest, Square::G7.index(), own, enemy);
            assert_eq!(names(ray), vec!["d4", "e5", "f6"]);

            // own piece nearer than enemy, increasing direction
            let own = Bitboard::from(Square::C1);
            let enemy = Bitboard::from(Square::F1);
            let ray = tables.truncated_ray(Direction::East, Square::A1.index(), own, enemy);
            assert_eq!(names(ray), vec!["b1"]);
        }

        #[test]
        fn adjacent_own_piece_blocks_everything() {
            let tables = AttackTables::get();
            let own = Bitboard::from(Square::A2);
            let ray = tables.truncated_ray(Direction::North, Square::A1.index(), own, Bitboard::new());
            assert!(ray.is_empty());
        }
    }
}
