//! Defines the error types needed by the chess module
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error type used by methods in the `chess` module
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cannot parse string
    ParseError,
    /// Failed to convert an integer to an another type
    TryFromIntError,
    /// Board description has fewer than the four required fields
    InsufficientFields,
    /// Piece placement field of a board description is malformed
    InvalidBoard,
    /// Side-to-move field of a board description is malformed
    InvalidTurn,
    /// Castling field of a board description is malformed
    InvalidCastling,
    /// En-passant field of a board description is malformed
    InvalidEnPassant,
    /// Halfmove clock of a board description is not a number
    InvalidHalfmoveClock,
    /// Move number of a board description is not a number
    InvalidMoveNumber,
    /// Input does not match any legal move
    UnrecognizedMove,
    /// Input matches more than one legal move
    AmbiguousMove,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            ParseError => "cannot parse string",
            TryFromIntError => "integer out of range",
            InsufficientFields => "insufficient fields",
            InvalidBoard => "invalid piece placement",
            InvalidTurn => "invalid side to move",
            InvalidCastling => "invalid castling rights",
            InvalidEnPassant => "invalid en-passant square",
            InvalidHalfmoveClock => "invalid halfmove clock",
            InvalidMoveNumber => "invalid move number",
            UnrecognizedMove => "illegal or unrecognized move",
            AmbiguousMove => "ambiguous move",
        }.fmt(f)
    }
}

impl std::error::Error for Error { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Result type used by methods in the `chess` module
pub type Result<T> = std::result::Result<T, Error>;
