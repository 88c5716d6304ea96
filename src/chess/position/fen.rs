//! Forsyth-Edwards Notation (FEN) for `Position`
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::str::FromStr;
use super::*;

/// The standard starting position in FEN
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from a FEN string.
    ///
    /// The board, side to move, castling and en-passant fields are required. The halfmove clock
    /// and move number default to 0 and 1 when absent. No attempt is made to check that the
    /// position could arise in a real game.
    pub fn from_fen_str(s: &str) -> Result<Position> {
        use Error::*;

        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(InsufficientFields);
        }

        let mut pos = Position::empty();

        // parse the board
        let mut r = Rank::COUNT - 1;
        let mut f = 0;
        for c in fields[0].chars() {
            match c {
                '1' ..= '8' => {
                    f += c.to_digit(10).expect("INFALLIBLE") as usize;
                    if f > File::COUNT {
                        return Err(InvalidBoard);
                    }
                }
                '/' => {
                    if f == File::COUNT && r > 0 {
                        r -= 1;
                        f = 0;
                    } else {
                        return Err(InvalidBoard);
                    }
                }
                _ => {
                    let (kind, color) = PieceKind::from_char(c).ok_or(InvalidBoard)?;
                    let index = file_rank_to_index(f, r).ok_or(InvalidBoard)?;
                    pos.set_piece(index, Some(kind), color);
                    f += 1;
                }
            }
        }
        if r > 0 || f != File::COUNT {
            return Err(InvalidBoard);
        }

        // parse the turn
        pos.turn = fields[1].parse().map_err(|_| InvalidTurn)?;

        // parse the castling flags
        if fields[2] != "-" {
            for c in fields[2].chars() {
                let side = match c {
                    'K' => CastleSide::WhiteKingside,
                    'Q' => CastleSide::WhiteQueenside,
                    'k' => CastleSide::BlackKingside,
                    'q' => CastleSide::BlackQueenside,
                    _ => return Err(InvalidCastling),
                };
                pos.set_castling(side, true);
            }
        }

        // parse en passant square
        if fields[3] != "-" {
            let sq: Square = fields[3].parse().map_err(|_| InvalidEnPassant)?;
            pos.ep_square = Bitboard::from(sq);
        }

        // parse half move clock, if present
        if let Some(plies) = fields.get(4) {
            pos.draw_plies = plies.parse().map_err(|_| InvalidHalfmoveClock)?;
        }

        // parse move number, if present
        if let Some(move_num) = fields.get(5) {
            pos.move_num = move_num.parse().map_err(|_| InvalidMoveNumber)?;
        }

        Ok(pos)
    }

    /// Converts the position to a FEN string
    pub fn to_fen_str(&self) -> String {
        // the board
        let mut board = String::new();

        for r in (0..Rank::COUNT).rev() {
            let mut count = 0;
            for f in 0..File::COUNT {
                if let Some(piece) = self.piece_at(r * 8 + f) {
                    if count > 0 {
                        board += &count.to_string();
                        count = 0;
                    }
                    board.push(piece.kind.to_char(piece.color));
                } else {
                    count += 1;
                }
            }
            if count > 0 {
                board += &count.to_string();
            }
            if r > 0 {
                board += "/";
            }
        }

        // en passant square
        let ep_square = match self.ep_square.first_set().and_then(index_to_name) {
            Some(sq) => sq,
            None => "-".to_string(),
        };

        // return the full fen string
        format!("{} {} {} {} {} {}", board, self.turn, self.castling_str(), ep_square,
                                     self.draw_plies, self.move_num)
    }

    /// Returns the castling rights in FEN form, such as `"KQkq"` or `"-"`
    pub fn castling_str(&self) -> String {
        let castling: String = CastleSide::ALL.iter()
            .filter(|&&side| self.can_castle(side))
            .map(|side| side.fen_char())
            .collect();

        if castling.is_empty() {
            "-".to_owned()
        } else {
            castling
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_fen_str().fmt(f)
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Position::from_fen_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_round_trips() {
        let pos: Position = START_FEN.parse().unwrap();
        assert_eq!(pos, Position::new());
        assert_eq!(pos.to_fen_str(), START_FEN);
        assert_eq!(Position::new().to_string(), START_FEN);
    }

    #[test]
    fn round_trips_preserve_state() {
        let fens = [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r3k3/1K6/8/8/8/8/8/8 b q - 12 40",
        ];

        for fen in fens.iter() {
            let pos: Position = fen.parse().unwrap();
            assert_eq!(pos.to_fen_str(), *fen);

            let again: Position = pos.to_fen_str().parse().unwrap();
            assert_eq!(again, pos);
            assert_eq!(again.occupancy(Color::White), pos.occupancy(Color::White));
            assert_eq!(again.occupancy(Color::Black), pos.occupancy(Color::Black));
        }
    }

    #[test]
    fn fields_are_read() {
        let pos: Position = "4k3/8/8/3pP3/8/8/8/4K3 w Kq d6 5 17".parse().unwrap();
        assert_eq!(pos.turn(), Color::White);
        assert!(pos.can_castle(CastleSide::WhiteKingside));
        assert!(!pos.can_castle(CastleSide::WhiteQueenside));
        assert!(!pos.can_castle(CastleSide::BlackKingside));
        assert!(pos.can_castle(CastleSide::BlackQueenside));
        assert_eq!(pos.en_passant(), Bitboard::from(Square::D6));
        assert_eq!(pos.halfmove_clock(), 5);
        assert_eq!(pos.move_number(), 17);
        assert_eq!(pos.piece_count(), 4);
        assert_eq!(pos.castling_str(), "Kq");
    }

    #[test]
    fn clocks_are_optional() {
        let pos: Position = "4k3/8/8/8/8/8/8/4K3 b - -".parse().unwrap();
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.move_number(), 1);
        assert_eq!(pos.turn(), Color::Black);
    }

    #[test]
    fn kingless_positions_are_accepted() {
        let pos: Position = "8/8/8/8/8/8/8/8 w - - 0 1".parse().unwrap();
        assert_eq!(pos.piece_count(), 0);
    }

    #[test]
    fn errors() {
        use Error::*;

        assert_eq!(Position::from_fen_str(""), Err(InsufficientFields));
        assert_eq!(Position::from_fen_str("8/8/8/8/8/8/8/8 w -"), Err(InsufficientFields));
        assert_eq!(Position::from_fen_str("8/8/8/8/8/8/8 w - -"), Err(InvalidBoard));
        assert_eq!(Position::from_fen_str("9/8/8/8/8/8/8/8 w - -"), Err(InvalidBoard));
        assert_eq!(Position::from_fen_str("7/8/8/8/8/8/8/8 w - -"), Err(InvalidBoard));
        assert_eq!(Position::from_fen_str("8/8/8/8/8/8/8/7x w - -"), Err(InvalidBoard));
        assert_eq!(Position::from_fen_str("8/8/8/8/8/8/8/8 x - -"), Err(InvalidTurn));
        assert_eq!(Position::from_fen_str("8/8/8/8/8/8/8/8 w KX -"), Err(InvalidCastling));
        assert_eq!(Position::from_fen_str("8/8/8/8/8/8/8/8 w - e9"), Err(InvalidEnPassant));
        assert_eq!(Position::from_fen_str("8/8/8/8/8/8/8/8 w - - x"), Err(InvalidHalfmoveClock));
        assert_eq!(Position::from_fen_str("8/8/8/8/8/8/8/8 w - - 0 x"), Err(InvalidMoveNumber));
    }
}
