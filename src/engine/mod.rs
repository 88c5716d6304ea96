//! The engine
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::str::FromStr;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use crate::chess::{self, AppliedMove, Position};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Something that picks a move to play.
///
/// Neither engine here searches or evaluates; they only choose among the legal moves.
pub trait Engine {
    /// A name to show the user
    fn name(&self) -> &str;

    /// Chooses a legal move from `pos`, or `None` if there aren't any
    fn select_move(&mut self, pos: &Position) -> Option<AppliedMove>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Always plays the first legal move the generator produces
#[derive(Debug, Copy, Clone, Default)]
pub struct FirstMove;

impl Engine for FirstMove {
    fn name(&self) -> &str {
        "First Move"
    }

    fn select_move(&mut self, pos: &Position) -> Option<AppliedMove> {
        let selected = pos.legal_moves().into_iter().next();
        if let Some(ref m) = selected {
            debug!("{} selected {}", self.name(), m.mv.uci());
        }
        selected
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Plays a uniformly random legal move
#[derive(Debug, Clone)]
pub struct RandomMove {
    rng: StdRng,
}

impl RandomMove {
    /// Creates an engine seeded from the operating system
    pub fn new() -> RandomMove {
        RandomMove { rng: StdRng::from_entropy() }
    }

    /// Creates an engine whose choices are reproducible
    pub fn with_seed(seed: u64) -> RandomMove {
        RandomMove { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomMove {
    fn default() -> Self {
        RandomMove::new()
    }
}

impl Engine for RandomMove {
    fn name(&self) -> &str {
        "Random Move"
    }

    fn select_move(&mut self, pos: &Position) -> Option<AppliedMove> {
        let moves = pos.legal_moves();
        let selected = moves.choose(&mut self.rng).cloned();
        if let Some(ref m) = selected {
            debug!("{} selected {} of {} moves", self.name(), m.mv.uci(), moves.len());
        }
        selected
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The engines that can be chosen from the command line
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineKind {
    /// `FirstMove`
    First,
    /// `RandomMove`
    Random,
}

impl EngineKind {
    /// The names accepted by `from_str`
    pub const NAMES: [&'static str; 2] = ["first", "random"];

    /// Creates an engine of this kind
    pub fn create(self) -> Box<dyn Engine> {
        match self {
            EngineKind::First => Box::new(FirstMove),
            EngineKind::Random => Box::new(RandomMove::new()),
        }
    }
}

impl FromStr for EngineKind {
    type Err = chess::Error;

    fn from_str(s: &str) -> chess::Result<Self> {
        match s {
            "first" => Ok(EngineKind::First),
            "random" => Ok(EngineKind::Random),
            _ => Err(chess::Error::ParseError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_move_is_deterministic() {
        let pos = Position::new();
        let mut engine = FirstMove;
        let first = engine.select_move(&pos).unwrap();
        assert_eq!(first, pos.legal_moves()[0]);
        assert_eq!(engine.select_move(&pos).unwrap(), first);
    }

    #[test]
    fn random_move_is_legal_and_seedable() {
        let pos: Position = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
            .parse().unwrap();
        let legal = pos.legal_moves();

        let mut a = RandomMove::with_seed(7);
        let mut b = RandomMove::with_seed(7);
        for _ in 0..10 {
            let m = a.select_move(&pos).unwrap();
            assert!(legal.contains(&m));
            assert_eq!(b.select_move(&pos).unwrap(), m);
        }
    }

    #[test]
    fn no_moves_means_none() {
        let mate: Position = "R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1".parse().unwrap();
        assert!(FirstMove.select_move(&mate).is_none());
        assert!(RandomMove::new().select_move(&mate).is_none());
    }

    #[test]
    fn kinds() {
        assert_eq!("first".parse(), Ok(EngineKind::First));
        assert_eq!("random".parse(), Ok(EngineKind::Random));
        assert_eq!("best".parse::<EngineKind>(), Err(chess::Error::ParseError));
        assert_eq!(EngineKind::First.create().name(), "First Move");
        assert_eq!(EngineKind::Random.create().name(), "Random Move");
    }
}
