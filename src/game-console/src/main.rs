use std::{env, io};

use game_console::entrypoint::{load_rules, new_session, serve};
use rand::{rngs::SmallRng, SeedableRng};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, the game owns stdout
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let path = env::args().nth(1);
    let rules = load_rules(path.as_deref())?;
    let session = new_session(rules, SmallRng::from_rng(&mut rand::rng()));
    serve(session, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
