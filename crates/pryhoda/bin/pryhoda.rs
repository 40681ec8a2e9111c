//! Pryhoda text adventure
//!
//! Main entry point for the game.

use std::io;

use clap::Parser;

use pry_core::GameRng;
use pry_core::world::GameOptions;
use pryhoda::{Args, Session, init_tracing};

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = match args.load_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("pryhoda: {}; using default options", e);
            args.apply(GameOptions::default())
        }
    };

    let rng = match options.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    tracing::debug!(seed = rng.seed(), "starting game");

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), options, rng);
    tracing::debug!(path = %session.save_path().display(), "save file");

    let end = session.run()?;
    tracing::info!(?end, "session over");
    Ok(())
}
