//! Contains structures related to the `Position`
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::convert::TryFrom;
use super::*;
use super::bitboard::Bitboard;
use super::bitboard::attacks::AttackTables;
use super::moves::{CastleSide, GeneratedMove};

use Color::*;
use PieceKind::*;

pub mod fen;

pub(crate) const CASTLE_KING_SIDE: u8 = 0x1;
pub(crate) const CASTLE_QUEEN_SIDE: u8 = 0x2;
const CASTLE_BOTH_SIDES: u8 = CASTLE_KING_SIDE | CASTLE_QUEEN_SIDE;

const BACK_RANK: [PieceKind; File::COUNT] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A piece on the board
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Piece {
    /// The type of piece
    pub kind: PieceKind,
    /// The side the piece belongs to
    pub color: Color,
    /// The square the piece stands on, as a bitboard with exactly one bit set
    pub location: Bitboard,
}

impl Piece {
    /// Returns the board index of the piece, or `None` if its location is empty
    pub fn square(&self) -> Option<usize> {
        self.location.first_set()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A stable handle to a piece stored in a `Position`.
///
/// Keys stay valid while the piece is on the board. Removing other pieces never renumbers them, and
/// once the piece itself is removed its key resolves to nothing, even after the slot is reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PieceKey {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    piece: Option<Piece>,
}

// Slots plus a free list. A removed piece leaves a hole that the next insertion reuses; the slot's
// generation is bumped on removal so keys to the old occupant no longer match.
#[derive(Debug, Clone, Default)]
struct PieceArena {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl PieceArena {
    fn insert(&mut self, piece: Piece) -> PieceKey {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.piece = Some(piece);
                PieceKey { index, generation: slot.generation }
            },
            None => {
                self.slots.push(Slot { generation: 0, piece: Some(piece) });
                PieceKey { index: self.slots.len() - 1, generation: 0 }
            },
        }
    }

    fn remove(&mut self, key: PieceKey) -> Option<Piece> {
        let slot = self.slots.get_mut(key.index)?;
        if slot.generation != key.generation {
            return None;
        }

        let piece = slot.piece.take();
        if piece.is_some() {
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(key.index);
        }
        piece
    }

    fn get(&self, key: PieceKey) -> Option<&Piece> {
        let slot = self.slots.get(key.index)?;
        if slot.generation != key.generation {
            return None;
        }
        slot.piece.as_ref()
    }

    fn iter(&self) -> impl Iterator<Item = (PieceKey, &Piece)> {
        self.slots.iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                let key = PieceKey { index, generation: slot.generation };
                slot.piece.as_ref().map(|piece| (key, piece))
            })
    }

    fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A representation of the arrangement of pieces on the board at a given point in the game, as well
/// as the side to move, castling availability, en passant legality and the move clocks.
///
/// Each `Position` owns its pieces outright. [`apply_move`](#method.apply_move) never modifies
/// the position it's called on; it returns the successor as a new value.
#[derive(Debug, Clone)]
pub struct Position {
    pieces: PieceArena,
    square_owner: [Option<PieceKey>; Square::COUNT],
    occ_by_color: [Bitboard; Color::COUNT],
    turn: Color,

    castling_rights: [u8; Color::COUNT],
    ep_square: Bitboard,

    draw_plies: usize,
    move_num: usize,
}

impl Position {
    /// Returns the standard starting position
    pub fn new() -> Position {
        let mut pos = Position::empty();

        for &color in [White, Black].iter() {
            let back = color.back_rank();
            let pawns = (back as isize + color.forward()) as usize;

            for (file, &kind) in BACK_RANK.iter().enumerate() {
                pos.set_piece(back * 8 + file, Some(kind), color);
            }
            for file in 0..File::COUNT {
                pos.set_piece(pawns * 8 + file, Some(Pawn), color);
            }
        }

        pos.castling_rights = [CASTLE_BOTH_SIDES, CASTLE_BOTH_SIDES];
        pos
    }

    /// Returns a position with an empty board, `White` to move, no castling rights, no en passant
    /// square, a halfmove clock of 0 and a move number of 1
    pub fn empty() -> Position {
        Position {
            pieces: PieceArena::default(),
            square_owner: [None; Square::COUNT],
            occ_by_color: [Bitboard::new(); Color::COUNT],
            turn: White,
            castling_rights: [0, 0],
            ep_square: Bitboard::new(),
            draw_plies: 0,
            move_num: 1,
        }
    }

    ////////////////////////////////////////////////////////////////////////////////////////////////
    // Board editing

    /// Places a piece on the square at `index`, replacing whatever was there. Passing `None` for
    /// `kind` empties the square, in which case `color` is ignored.
    ///
    /// Indices off the board are ignored.
    pub fn set_piece(&mut self, index: usize, kind: Option<PieceKind>, color: Color) {
        if index >= Square::COUNT {
            return;
        }

        if let Some(key) = self.square_owner[index].take() {
            if let Some(old) = self.pieces.remove(key) {
                let occ = &mut self.occ_by_color[old.color as usize];
                *occ = occ.clear(index);
            }
        }

        if let Some(kind) = kind {
            let key = self.pieces.insert(Piece { kind, color, location: Bitboard::from_index(index) });
            self.square_owner[index] = Some(key);
            let occ = &mut self.occ_by_color[color as usize];
            *occ = occ.set(index);
        }
    }

    /// Empties the square at `index`
    pub fn remove_piece(&mut self, index: usize) {
        self.set_piece(index, None, White);
    }

    /// Sets the side to move
    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Grants or revokes one castling right
    pub fn set_castling(&mut self, side: CastleSide, available: bool) {
        let rights = &mut self.castling_rights[side.color() as usize];
        if available {
            *rights |= side.flag();
        } else {
            *rights &= !side.flag();
        }
    }

    /// Sets or clears the en-passant target. Indices off the board clear it.
    pub fn set_en_passant(&mut self, index: Option<usize>) {
        self.ep_square = match index {
            Some(i) => Bitboard::from_index(i),
            None => Bitboard::new(),
        };
    }

    /// Sets the number of plies since the last pawn move or capture
    pub fn set_halfmove_clock(&mut self, plies: usize) {
        self.draw_plies = plies;
    }

    /// Sets the move number
    pub fn set_move_number(&mut self, move_num: usize) {
        self.move_num = move_num;
    }

    ////////////////////////////////////////////////////////////////////////////////////////////////
    // Queries

    /// Returns the piece on the square at `index`, if any
    pub fn piece_at(&self, index: usize) -> Option<&Piece> {
        let key = (*self.square_owner.get(index)?)?;
        self.pieces.get(key)
    }

    /// Returns the key of the piece on the square at `index`, if any
    pub fn key_at(&self, index: usize) -> Option<PieceKey> {
        *self.square_owner.get(index)?
    }

    /// Returns the piece for `key`, if it's still on the board
    pub fn piece(&self, key: PieceKey) -> Option<&Piece> {
        self.pieces.get(key)
    }

    /// Iterates over all pieces on the board in storage order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().map(|(_, piece)| piece)
    }

    /// Returns the number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Returns the side to move
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns `true` if the castling right for `side` is still held
    pub fn can_castle(&self, side: CastleSide) -> bool {
        self.castling_rights[side.color() as usize] & side.flag() != 0
    }

    /// Returns the en-passant target as a bitboard with zero or one bit set
    pub fn en_passant(&self) -> Bitboard {
        self.ep_square
    }

    /// Returns the number of plies since the last pawn move or capture
    pub fn halfmove_clock(&self) -> usize {
        self.draw_plies
    }

    /// Returns the move number, which starts at 1 and increments after each move by `Black`
    pub fn move_number(&self) -> usize {
        self.move_num
    }

    /// Returns the squares occupied by `color`
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.occ_by_color[color as usize]
    }

    /// Returns all occupied squares
    pub fn occupied(&self) -> Bitboard {
        self.occ_by_color[White as usize] | self.occ_by_color[Black as usize]
    }

    /// Returns the square of `color`'s king. If there's more than one, the first in storage order.
    pub fn king_square(&self, color: Color) -> Option<usize> {
        self.pieces()
            .find(|p| p.kind == King && p.color == color)
            .and_then(|p| p.square())
    }

    ////////////////////////////////////////////////////////////////////////////////////////////////
    // Transitions

    /// Returns the position that results from playing `mv`.
    ///
    /// `mv` is expected to come from the move generator. If there's no piece on its origin, the
    /// result is an unchanged copy.
    pub fn apply_move(&self, mv: &GeneratedMove) -> Position {
        let mut next = self.clone();
        let from = mv.from.index();
        let to = mv.to.index();

        if self.piece_at(from).is_none() {
            return next;
        }

        next.ep_square = Bitboard::new();

        let en_passant = mv.kind == Pawn
            && self.ep_square.first_set() == Some(to)
            && self.piece_at(to).is_none();

        let mut captured = false;
        if en_passant {
            captured = true;
            // the captured pawn sits behind the target square
            let behind = (to as isize - 8 * mv.color.forward()) as usize;
            next.remove_piece(behind);
        } else if self.piece_at(to).is_some() {
            captured = true;
        }

        if mv.kind == King {
            next.castling_rights[mv.color as usize] = 0;
        }
        if mv.kind == Rook {
            next.revoke_rook_right(mv.color, mv.from);
        }
        if captured && !en_passant {
            if let Some(victim) = self.piece_at(to) {
                if victim.kind == Rook {
                    next.revoke_rook_right(victim.color, mv.to);
                }
            }
        }

        if let Some(side) = mv.castle {
            next.remove_piece(from);
            next.set_piece(to, Some(King), mv.color);
            next.remove_piece(side.rook_origin().index());
            next.set_piece(side.rook_destination().index(), Some(Rook), mv.color);
            next.castling_rights[mv.color as usize] = 0;
            next.draw_plies = self.draw_plies + 1;
            next.end_turn(self);
            return next;
        }

        next.remove_piece(from);
        next.set_piece(to, Some(mv.promotion.unwrap_or(mv.kind)), mv.color);

        if mv.kind == Pawn && (to as isize - from as isize).abs() == 16 {
            next.ep_square = Bitboard::from_index((from + to) / 2);
        }

        if mv.kind == Pawn || captured {
            next.draw_plies = 0;
        } else {
            next.draw_plies = self.draw_plies + 1;
        }

        next.end_turn(self);
        next
    }

    fn end_turn(&mut self, prev: &Position) {
        if prev.turn == Black {
            self.move_num = prev.move_num + 1;
        }
        self.turn = !prev.turn;
    }

    // a rook leaving or captured on its original corner takes that side's right with it
    fn revoke_rook_right(&mut self, color: Color, sq: Square) {
        let back = Rank::try_from(color.back_rank()).expect("INFALLIBLE");

        if sq == Square::from_coord(File::A, back) {
            self.castling_rights[color as usize] &= !CASTLE_QUEEN_SIDE;
        } else if sq == Square::from_coord(File::H, back) {
            self.castling_rights[color as usize] &= !CASTLE_KING_SIDE;
        }
    }

    ////////////////////////////////////////////////////////////////////////////////////////////////
    // Check detection

    /// Returns `true` if `color`'s king is attacked by any enemy piece. A side without a king is
    /// always considered to be in check.
    pub fn is_king_in_check(&self, tables: &AttackTables, color: Color) -> bool {
        let king = match self.king_square(color) {
            Some(sq) => sq,
            None => return true,
        };

        self.pieces()
            .filter(|p| p.color != color)
            .any(|p| rules::destinations(tables, self, p).is_set(king))
    }

    /// Same as [`is_king_in_check`](#method.is_king_in_check) using the shared attack tables
    pub fn in_check(&self, color: Color) -> bool {
        self.is_king_in_check(AttackTables::get(), color)
    }

    /// Returns `true` if the king would stand in check on any square it occupies or crosses while
    /// castling toward `side`, including its origin and destination.
    pub fn is_castling_through_check(&self, tables: &AttackTables, side: CastleSide) -> bool {
        let color = side.color();

        side.king_path().iter().any(|sq| {
            let mut tmp = self.clone();
            if let Some(king) = tmp.king_square(color) {
                tmp.remove_piece(king);
            }
            tmp.set_piece(sq.index(), Some(King), color);
            tmp.is_king_in_check(tables, color)
        })
    }

    /// Returns a printable board diagram followed by the game state
    pub fn diagram(&self) -> Diagram<'_> {
        Diagram(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Positions are equal when they have the same pieces on the same squares and the same game
/// state, regardless of the order their pieces are stored in.
impl PartialEq for Position {
    fn eq(&self, other: &Position) -> bool {
        let same_board = (0..Square::COUNT).all(|i| {
            match (self.piece_at(i), other.piece_at(i)) {
                (Some(a), Some(b)) => a.kind == b.kind && a.color == b.color,
                (None, None) => true,
                _ => false,
            }
        });

        same_board
            && self.turn == other.turn
            && self.castling_rights == other.castling_rights
            && self.ep_square == other.ep_square
            && self.draw_plies == other.draw_plies
            && self.move_num == other.move_num
    }
}

impl Eq for Position { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Human readable rendering of a `Position`, returned by `Position::diagram`
#[derive(Debug, Copy, Clone)]
pub struct Diagram<'a>(&'a Position);

impl<'a> fmt::Display for Diagram<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.0;

        for rank in (0..Rank::COUNT).rev() {
            let row: Vec<String> = (0..File::COUNT)
                .map(|file| match pos.piece_at(rank * 8 + file) {
                    Some(p) => p.kind.to_char(p.color).to_string(),
                    None => ".".to_owned(),
                })
                .collect();
            writeln!(f, "{}  {}", rank + 1, row.join(" "))?;
        }
        writeln!(f, "   a b c d e f g h")?;
        writeln!(f)?;

        let ep = match pos.ep_square.first_set().and_then(index_to_name) {
            Some(name) => name,
            None => "-".to_owned(),
        };

        writeln!(f, "To move:    {}", pos.turn.name())?;
        writeln!(f, "Move:       {}", pos.move_num)?;
        writeln!(f, "Pieces:     {}", pos.piece_count())?;
        writeln!(f, "Castling:   {}", pos.castling_str())?;
        writeln!(f, "En passant: {}", ep)?;
        writeln!(f, "Halfmoves:  {}", pos.draw_plies)
    }
}
