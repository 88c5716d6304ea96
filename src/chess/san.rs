//! Matching user-typed moves against the legal moves of a position
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use lazy_static::lazy_static;
use regex::Regex;
use super::*;

lazy_static! {
    static ref SHORT_ALGEBRAIC: Regex =
        Regex::new(r"^([NBRQK])?([a-h])?x?([a-h][1-8])(?:=?([NBRQ]))?[+#]?$").expect("INFALLIBLE");
}

/// Finds the move in `moves` described by `input`.
///
/// `input` may be in long algebraic form (`e2e4`, `e7e8q`), `O-O`/`O-O-O`, or short algebraic
/// form such as `e4`, `exd5`, `Nf3`, `Nxf3`, `e8=Q` or `e8Q`. A trailing `+` or `#` is ignored. A
/// pawn which reaches the last rank without naming a piece promotes to a queen.
pub fn find_move<'a>(moves: &'a [AppliedMove], input: &str) -> Result<&'a AppliedMove> {
    let input = input.trim();

    if let Some(m) = moves.iter().find(|m| m.mv.uci() == input) {
        return Ok(m);
    }

    let castle = input.trim_end_matches(|c| c == '+' || c == '#').replace('0', "O");
    if castle == "O-O" || castle == "O-O-O" {
        return moves.iter()
            .find(|m| m.mv.is_castle() && m.mv.notation == castle)
            .ok_or(Error::UnrecognizedMove);
    }

    let caps = SHORT_ALGEBRAIC.captures(input).ok_or(Error::UnrecognizedMove)?;

    let kind = match caps.get(1) {
        Some(letter) => letter.as_str().parse()?,
        None => PieceKind::Pawn,
    };
    let file: Option<File> = match caps.get(2) {
        Some(file) => Some(file.as_str().parse()?),
        None => None,
    };
    let to: Square = caps[3].parse()?;
    let promotion: Option<PieceKind> = match caps.get(4) {
        Some(letter) => Some(letter.as_str().parse()?),
        None => None,
    };

    let candidates: Vec<&AppliedMove> = moves.iter()
        .filter(|m| !m.mv.is_castle() && m.mv.kind == kind && m.mv.to == to)
        .filter(|m| file.map_or(true, |f| m.mv.from.file() == f))
        .filter(|m| match m.mv.promotion {
            Some(p) => p == promotion.unwrap_or(PieceKind::Queen),
            None => promotion.is_none(),
        })
        .collect();

    match candidates.first() {
        None => Err(Error::UnrecognizedMove),
        Some(&first) if candidates.iter().all(|m| m.mv.from == first.mv.from) => Ok(first),
        Some(_) => Err(Error::AmbiguousMove),
    }
}
