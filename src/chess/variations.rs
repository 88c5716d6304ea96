//! Module for counting and printing the number of variations from a given position
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use crate::chess::*;
use crate::chess::bitboard::attacks::AttackTables;

/// Print the number of variations of the given `depth` for each legal move from `pos`
pub fn print(pos: &Position, depth: usize) -> usize {
    if depth < 1 {
        return 1;
    }

    let tables = AttackTables::get();
    let mut total = 0;

    for m in moves::legal_moves(tables, pos) {
        let count = count_with(tables, &m.position, depth - 1);
        total += count;
        println!("\t{:7}\t{:12}\t{}", m.mv.uci(), count, m.position);
    }

    total
}

/// Count the number of variations of the given `depth` from `pos`
pub fn count(pos: &Position, depth: usize) -> usize {
    count_with(AttackTables::get(), pos, depth)
}

fn count_with(tables: &AttackTables, pos: &Position, depth: usize) -> usize {
    if depth < 1 {
        return 1;
    }

    let moves = moves::legal_moves(tables, pos);
    if depth == 1 {
        return moves.len();
    }

    moves.iter().map(|m| count_with(tables, &m.position, depth - 1)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_counts() {
        let pos = Position::new();
        assert_eq!(count(&pos, 0), 1);
        assert_eq!(count(&pos, 1), 20);
        assert_eq!(count(&pos, 2), 400);
        assert_eq!(count(&pos, 3), 8902);
    }

    #[test]
    fn print_matches_count() {
        let pos: Position = "4k3/8/8/8/8/8/8/4K2R w K - 0 1".parse().unwrap();
        assert_eq!(print(&pos, 2), count(&pos, 2));
    }
}
