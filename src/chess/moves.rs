//! Contains structures to represent and generate moves
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
use log::trace;
use super::*;
use super::bitboard::Bitboard;
use super::bitboard::attacks::AttackTables;
use super::position::{CASTLE_KING_SIDE, CASTLE_QUEEN_SIDE};

use Color::*;
use PieceKind::*;
use Square::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// One of the four castling moves
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// White castles toward the h-file
    WhiteKingside,
    /// White castles toward the a-file
    WhiteQueenside,
    /// Black castles toward the h-file
    BlackKingside,
    /// Black castles toward the a-file
    BlackQueenside,
}

use CastleSide::*;

impl CastleSide {
    /// All four sides, in the order their rights appear in FEN
    pub const ALL: [CastleSide; 4] = [WhiteKingside, WhiteQueenside, BlackKingside, BlackQueenside];

    /// The side that castles
    pub fn color(self) -> Color {
        match self {
            WhiteKingside | WhiteQueenside => White,
            BlackKingside | BlackQueenside => Black,
        }
    }

    /// Returns `true` for the two king-side moves
    pub fn is_king_side(self) -> bool {
        self == WhiteKingside || self == BlackKingside
    }

    pub(crate) fn flag(self) -> u8 {
        if self.is_king_side() {
            CASTLE_KING_SIDE
        } else {
            CASTLE_QUEEN_SIDE
        }
    }

    /// The letter used for this right in FEN
    pub fn fen_char(self) -> char {
        match self {
            WhiteKingside => 'K',
            WhiteQueenside => 'Q',
            BlackKingside => 'k',
            BlackQueenside => 'q',
        }
    }

    /// Where the king starts
    pub fn king_origin(self) -> Square {
        match self.color() {
            White => E1,
            Black => E8,
        }
    }

    /// Where the king ends up
    pub fn king_destination(self) -> Square {
        match self {
            WhiteKingside => G1,
            WhiteQueenside => C1,
            BlackKingside => G8,
            BlackQueenside => C8,
        }
    }

    /// Where the rook starts
    pub fn rook_origin(self) -> Square {
        match self {
            WhiteKingside => H1,
            WhiteQueenside => A1,
            BlackKingside => H8,
            BlackQueenside => A8,
        }
    }

    /// Where the rook ends up
    pub fn rook_destination(self) -> Square {
        match self {
            WhiteKingside => F1,
            WhiteQueenside => D1,
            BlackKingside => F8,
            BlackQueenside => D8,
        }
    }

    /// The squares between king and rook, all of which must be empty
    pub fn empty_path(self) -> &'static [Square] {
        match self {
            WhiteKingside => &[F1, G1],
            WhiteQueenside => &[B1, C1, D1],
            BlackKingside => &[F8, G8],
            BlackQueenside => &[B8, C8, D8],
        }
    }

    /// The squares the king stands on or crosses, none of which may be attacked
    pub fn king_path(self) -> &'static [Square] {
        match self {
            WhiteKingside => &[E1, F1, G1],
            WhiteQueenside => &[E1, D1, C1],
            BlackKingside => &[E8, F8, G8],
            BlackQueenside => &[E8, D8, C8],
        }
    }

    /// `"O-O"` or `"O-O-O"`
    pub fn notation(self) -> &'static str {
        if self.is_king_side() {
            "O-O"
        } else {
            "O-O-O"
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A pseudo-legal move produced by the move generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMove {
    /// The origin square
    pub from: Square,
    /// The destination square
    pub to: Square,
    /// Short algebraic notation, without check marks or disambiguation
    pub notation: String,
    /// `true` if the move captures, including en passant
    pub capture: bool,
    /// The piece a pawn promotes to
    pub promotion: Option<PieceKind>,
    /// The kind of the moving piece
    pub kind: PieceKind,
    /// The side making the move
    pub color: Color,
    /// Set for castling moves
    pub castle: Option<CastleSide>,
}

impl GeneratedMove {
    /// Returns `true` if this is a castling move
    pub fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    /// The move in long algebraic (UCI) form, such as `e2e4`, `e1g1` or `e7e8q`
    pub fn uci(&self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.to_char(Black)),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Display for GeneratedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.notation.fmt(f)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A legal move together with the position it leads to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    /// The move
    pub mv: GeneratedMove,
    /// The position after the move
    pub position: Position,
}

impl fmt::Display for AppliedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.mv.fmt(f)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Generates every pseudo-legal move for the side to move in `pos`.
///
/// Pieces are visited in storage order and destinations in ascending index order. Castling moves
/// come last. Moves which leave the mover in check are included.
pub fn pseudo_legal_moves(tables: &AttackTables, pos: &Position) -> Vec<GeneratedMove> {
    let color = pos.turn();
    let enemy = pos.occupancy(!color);
    let mut moves = Vec::new();

    for piece in pos.pieces().filter(|p| p.color == color) {
        let from = match piece.location.peek() {
            Some(sq) => sq,
            None => continue,
        };

        let targets = if piece.kind == Pawn { enemy | pos.en_passant() } else { enemy };
        let last_rank = Rank::try_from((!color).back_rank()).expect("INFALLIBLE");

        for to in rules::destinations(tables, pos, piece) {
            let capture = targets.contains(to);

            if piece.kind == Pawn && to.rank() == last_rank {
                for &promotion in PieceKind::PROMOTIONS.iter() {
                    let notation = format!("{}={}", pawn_notation(from, to, capture),
                                           promotion.notation_letter());
                    moves.push(GeneratedMove {
                        from, to, notation, capture, promotion: Some(promotion),
                        kind: Pawn, color, castle: None,
                    });
                }
                continue;
            }

            let notation = if piece.kind == Pawn {
                pawn_notation(from, to, capture)
            } else if capture {
                format!("{}x{}", piece.kind.notation_letter(), to)
            } else {
                format!("{}{}", piece.kind.notation_letter(), to)
            };

            moves.push(GeneratedMove {
                from, to, notation, capture, promotion: None, kind: piece.kind, color, castle: None,
            });
        }
    }

    for &side in CastleSide::ALL.iter().filter(|side| side.color() == color) {
        if can_castle_pseudo_legally(pos, side) {
            moves.push(GeneratedMove {
                from: side.king_origin(),
                to: side.king_destination(),
                notation: side.notation().to_owned(),
                capture: false,
                promotion: None,
                kind: King,
                color,
                castle: Some(side),
            });
        }
    }

    moves
}

fn pawn_notation(from: Square, to: Square, capture: bool) -> String {
    if capture {
        format!("{}x{}", from.file(), to)
    } else {
        to.to_string()
    }
}

// right held, king and rook at home, and nothing in between
fn can_castle_pseudo_legally(pos: &Position, side: CastleSide) -> bool {
    let color = side.color();
    let at_home = |sq: Square, kind: PieceKind| {
        pos.piece_at(sq.index()).map_or(false, |p| p.kind == kind && p.color == color)
    };

    pos.can_castle(side)
        && at_home(side.king_origin(), King)
        && at_home(side.rook_origin(), Rook)
        && !side.empty_path().iter().any(|sq| pos.occupied().contains(*sq))
}

/// Generates every legal move for the side to move in `pos`, paired with the resulting position.
///
/// A pseudo-legal move is dropped if it leaves the mover's king in check, or if it castles out of,
/// through or into check.
pub fn legal_moves(tables: &AttackTables, pos: &Position) -> Vec<AppliedMove> {
    let mut legal = Vec::new();

    for mv in pseudo_legal_moves(tables, pos) {
        let position = pos.apply_move(&mv);

        if position.is_king_in_check(tables, mv.color) {
            trace!("{} rejected: leaves {} in check", mv, mv.color.name());
            continue;
        }
        if let Some(side) = mv.castle {
            if pos.is_castling_through_check(tables, side) {
                trace!("{} rejected: castles through check", mv);
                continue;
            }
        }

        legal.push(AppliedMove { mv, position });
    }

    legal
}

impl Position {
    /// Pseudo-legal moves for the side to move, using the shared attack tables
    pub fn pseudo_legal_moves(&self) -> Vec<GeneratedMove> {
        pseudo_legal_moves(AttackTables::get(), self)
    }

    /// Legal moves for the side to move, using the shared attack tables
    pub fn legal_moves(&self) -> Vec<AppliedMove> {
        legal_moves(AttackTables::get(), self)
    }

    /// Returns `true` if the side to move is checkmated
    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.turn()) && self.legal_moves().is_empty()
    }

    /// Returns `true` if the side to move has no legal moves but isn't in check
    pub fn is_stalemate(&self) -> bool {
        !self.in_check(self.turn()) && self.legal_moves().is_empty()
    }
}
