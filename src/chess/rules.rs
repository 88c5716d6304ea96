//! Per-piece movement rules
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
//! Each function maps a piece in a position to the bitboard of its pseudo-legal destination
//! squares. Squares occupied by the mover's own pieces are never included. Whether a destination
//! leaves the mover's king in check is not considered here; see
//! [`moves::legal_moves`](../moves/fn.legal_moves.html).
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;
use super::bitboard::Bitboard;
use super::bitboard::attacks::{AttackTables, Direction};

/// Returns the pseudo-legal destinations of `piece`, dispatching on its kind
pub fn destinations(tables: &AttackTables, pos: &Position, piece: &Piece) -> Bitboard {
    match piece.kind {
        PieceKind::Knight => knight_moves(tables, pos, piece),
        PieceKind::King => king_moves(tables, pos, piece),
        PieceKind::Rook => rook_moves(tables, pos, piece),
        PieceKind::Bishop => bishop_moves(tables, pos, piece),
        PieceKind::Queen => queen_moves(tables, pos, piece),
        PieceKind::Pawn => pawn_moves(pos, piece),
    }
}

/// Knight destinations: the knight table at the origin, minus own pieces
pub fn knight_moves(tables: &AttackTables, pos: &Position, piece: &Piece) -> Bitboard {
    match piece.square() {
        Some(origin) => tables.knight(origin) & !pos.occupancy(piece.color),
        None => Bitboard::new(),
    }
}

/// King destinations: the king table at the origin, minus own pieces. Castling is generated
/// separately.
pub fn king_moves(tables: &AttackTables, pos: &Position, piece: &Piece) -> Bitboard {
    match piece.square() {
        Some(origin) => tables.king(origin) & !pos.occupancy(piece.color),
        None => Bitboard::new(),
    }
}

/// Rook destinations
pub fn rook_moves(tables: &AttackTables, pos: &Position, piece: &Piece) -> Bitboard {
    ray_moves_in(tables, pos, piece, &Direction::ORTHOGONAL).orthogonal()
}

/// Bishop destinations
pub fn bishop_moves(tables: &AttackTables, pos: &Position, piece: &Piece) -> Bitboard {
    ray_moves_in(tables, pos, piece, &Direction::DIAGONAL).diagonal()
}

/// Queen destinations
pub fn queen_moves(tables: &AttackTables, pos: &Position, piece: &Piece) -> Bitboard {
    ray_moves(tables, pos, piece).all()
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The truncated ray in each of the eight directions from a piece
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct RayMoves([Bitboard; Direction::COUNT]);

impl RayMoves {
    /// Destinations in one direction
    pub fn get(&self, dir: Direction) -> Bitboard {
        self.0[dir as usize]
    }

    /// Union of the north, east, south and west rays
    pub fn orthogonal(&self) -> Bitboard {
        Direction::ORTHOGONAL.iter().fold(Bitboard::new(), |bb, &dir| bb | self.get(dir))
    }

    /// Union of the four diagonal rays
    pub fn diagonal(&self) -> Bitboard {
        Direction::DIAGONAL.iter().fold(Bitboard::new(), |bb, &dir| bb | self.get(dir))
    }

    /// Union of all eight rays
    pub fn all(&self) -> Bitboard {
        self.orthogonal() | self.diagonal()
    }
}

/// Computes the truncated ray in every direction from `piece`, whatever its kind
pub fn ray_moves(tables: &AttackTables, pos: &Position, piece: &Piece) -> RayMoves {
    ray_moves_in(tables, pos, piece, &Direction::ALL)
}

/// Computes the truncated rays from `piece` in `dirs` only. Rays in other directions are empty.
pub fn ray_moves_in(tables: &AttackTables, pos: &Position, piece: &Piece, dirs: &[Direction])
    -> RayMoves
{
    let mut moves = RayMoves::default();

    if let Some(origin) = piece.square() {
        let own = pos.occupancy(piece.color);
        let enemy = pos.occupancy(!piece.color);

        for &dir in dirs {
            moves.0[dir as usize] = tables.truncated_ray(dir, origin, own, enemy);
        }
    }

    moves
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Pawn destinations: pushes onto empty squares, double pushes from the home rank, diagonal
/// captures onto enemy pieces, and diagonal moves onto the en-passant target.
///
/// Promotion is not expanded here; a push onto the last rank is a single destination.
pub fn pawn_moves(pos: &Position, piece: &Piece) -> Bitboard {
    let (file, rank) = match piece.square().and_then(index_to_file_rank) {
        Some(coord) => coord,
        None => return Bitboard::new(),
    };

    let own = pos.occupancy(piece.color);
    let enemy = pos.occupancy(!piece.color);
    let occupied = own | enemy;
    let forward = piece.color.forward();
    let home_rank = match piece.color {
        Color::White => 1,
        Color::Black => 6,
    };

    let mut moves = Bitboard::new();
    let next_rank = rank as isize + forward;
    if next_rank < 0 || next_rank >= Rank::COUNT as isize {
        return moves;
    }
    let next_rank = next_rank as usize;

    // pushes
    if let Some(single) = file_rank_to_index(file, next_rank) {
        if !occupied.is_set(single) {
            moves = moves.set(single);

            if rank == home_rank {
                let double_rank = (next_rank as isize + forward) as usize;
                if let Some(double) = file_rank_to_index(file, double_rank) {
                    if !occupied.is_set(double) {
                        moves = moves.set(double);
                    }
                }
            }
        }
    }

    // captures
    let ep = pos.en_passant().first_set().and_then(index_to_file_rank);
    for &df in [-1isize, 1].iter() {
        let target_file = file as isize + df;
        if target_file < 0 {
            continue;
        }
        if let Some(target) = file_rank_to_index(target_file as usize, next_rank) {
            if enemy.is_set(target) || ep == Some((target_file as usize, next_rank)) {
                moves = moves.set(target);
            }
        }
    }

    moves & !own
}
