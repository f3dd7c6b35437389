//! Console Twenty-One.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Console, Game, GameOptions, PromptError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    log::debug!("seeding deck with {seed}");

    if let Err(err) = play(seed) {
        log::error!("{err}");
        if !matches!(err, PromptError::Io(_)) {
            let _ = writeln!(io::stdout(), "Thank you for playing Twenty-One! Goodbye!");
        }
    }
}

fn play(seed: u64) -> Result<(), PromptError> {
    let mut game = Game::new(GameOptions::default(), seed, Console::stdio())?;
    game.run()
}
