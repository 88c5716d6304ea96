//! Interactive driver and variation counter for the bitmove move generator.
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]
#![warn(clippy::option_unwrap_used, clippy::result_unwrap_used)]

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use clap::{App, Arg, SubCommand, crate_version};
use log::{info, warn};
use simplelog::{WriteLogger, LevelFilter, Config};
use bitmove::chess::{san, variations, Position, START_FEN};
use bitmove::engine::{Engine, EngineKind};

fn main() -> Result<(), Error> {
    let matches =
        App::new("bitmove")
            .version(crate_version!())
            .author("Mike Leany")
            .about("Plays against a trivial engine, or counts variations from a position")
            .arg(Arg::with_name("log")
                .long("log")
                .short("l")
                .global(true)
                .help("Turns on logging"))
            .arg(Arg::with_name("log-file")
                .long("log-file")
                .global(true)
                .value_name("LOG_FILE")
                .takes_value(true)
                .default_value("bitmove.log")
                .help("Sets the log file if logging is turned on"))
            .arg(Arg::with_name("log-level")
                .long("log-level")
                .global(true)
                .value_name("LEVEL")
                .takes_value(true)
                .default_value("info")
                .help("Sets the log level if logging is turned on"))
            .arg(Arg::with_name("fen")
                .long("fen")
                .value_name("FEN_STRING")
                .takes_value(true)
                .default_value(START_FEN)
                .hide_default_value(true)
                .help("Starting position in Forsyth-Edwards Notation (FEN)"))
            .arg(Arg::with_name("engine")
                .long("engine")
                .short("e")
                .value_name("ENGINE")
                .takes_value(true)
                .possible_values(&EngineKind::NAMES)
                .default_value("first")
                .help("Chooses the opponent"))
            .subcommand(SubCommand::with_name("counts")
                .about("Counts the number of variations from a given starting position \
                        to a specified\ndepth. Defaults to the standard starting position.")
                .arg(Arg::with_name("depth")
                    .long("depth")
                    .short("d")
                    .value_name("DEPTH")
                    .takes_value(true)
                    .required(true)
                    .help("Depth to search the position"))
                .arg(Arg::with_name("fen")
                    .value_name("FEN_STRING")
                    .default_value(START_FEN)
                    .hide_default_value(true)
                    .multiple(true)
                    .help("Position to search in Forsyth-Edwards Notation (FEN)")))
            .get_matches();

    let log_file = PathBuf::from(matches.value_of_os("log-file").expect("INFALLIBLE"));
    let log_level = match matches.value_of("log-level") {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        Some(level) => return Err(Error(format!("{}: invalid log level", level))),
        None => unreachable!(),
    };

    let _logger = if matches.is_present("log") {
        WriteLogger::init(
            log_level,
            Config::default(),
            File::create(&log_file).map_err(|err| {
                Error(format!("{}: {}", log_file.display(), err))
            })?)
    } else {
        WriteLogger::init(LevelFilter::Off, Config::default(), io::sink())
    };

    match matches.subcommand() {
        (_, None) => {
            let fen = matches.value_of("fen").expect("INFALLIBLE");
            let pos = fen.parse().map_err(|err| Error(format!("{}: {}", fen, err)))?;
            let engine = matches.value_of("engine")
                .expect("INFALLIBLE")
                .parse::<EngineKind>()
                .map_err(|err| Error(err.to_string()))?
                .create();
            play(pos, engine)?;
        },
        ("counts", Some(matches)) => {
            let depth = matches
                .value_of("depth")
                .expect("INFALLIBLE")
                .parse()
                .map_err(|_| {Error("depth must be numeric".to_owned())})?;

            println!();
            for fen in matches.values_of("fen").expect("INFALLIBLE") {
                let pos = fen.parse().map_err(|err| {Error(format!("{}: {}", fen, err))})?;
                println!("{}", fen);
                let count = variations::print(&pos, depth);
                println!("Depth {} total:\t{:12}\n", depth, count);
            }
        },
        _ => unreachable!(),
    }

    Ok(())
}

// The user moves first, then the engine replies, until the game ends or the user quits.
fn play(mut pos: Position, mut engine: Box<dyn Engine>) -> Result<(), Error> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    info!("playing against {} from {}", engine.name(), pos);
    loop {
        println!("{}", pos.diagram());
        if game_over(&pos) {
            return Ok(());
        }

        print!("Enter move (e2e4, Nf3, exd5, e8=Q, O-O), or 'q' to quit: ");
        io::stdout().flush().map_err(|err| Error(err.to_string()))?;

        let line = match lines.next() {
            Some(line) => line.map_err(|err| Error(err.to_string()))?,
            None => return Ok(()),
        };
        let input = line.trim();
        if input == "q" || input == "quit" || input == "exit" {
            return Ok(());
        }

        let moves = pos.legal_moves();
        let applied = match san::find_move(&moves, input) {
            Ok(m) => m,
            Err(err) => {
                warn!("{}: {}", input, err);
                println!("{}: {}, try again", input, err);
                continue;
            }
        };
        info!("user played {}", applied.mv.uci());
        pos = applied.position.clone();

        println!("{}", pos.diagram());
        if game_over(&pos) {
            return Ok(());
        }

        match engine.select_move(&pos) {
            Some(reply) => {
                info!("{} played {}", engine.name(), reply.mv.uci());
                println!("{} plays {}", engine.name(), reply.mv);
                pos = reply.position;
            },
            None => return Ok(()),
        }
    }
}

fn game_over(pos: &Position) -> bool {
    if pos.is_checkmate() {
        println!("Checkmate. {} wins.", (!pos.turn()).name());
        true
    } else if pos.is_stalemate() {
        println!("Stalemate.");
        true
    } else {
        false
    }
}

struct Error(String);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.0.fmt(f)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Error { }
