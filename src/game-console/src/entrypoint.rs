use std::{
    io::{self, BufRead, Write},
    sync::Arc,
};

use agent::{client::Client, predictor::Predictor};
use anyhow::Context;
use common::{config::RuleConfig, model::rules::RuleTable};
use rand::rngs::SmallRng;
use tracing::info;

use crate::{
    model::{
        external::ClientResponse,
        internal::{SessionPhase, Tally},
    },
    service::session::Session,
};

pub fn load_rules(path: Option<&str>) -> anyhow::Result<Arc<RuleTable>> {
    let config = match path {
        Some(path) => RuleConfig::load(path)
            .with_context(|| format!("Unable to load rules from {}", path))?,
        None => RuleConfig::classic(),
    };
    let rules = config
        .build()
        .with_context(|| format!("Invalid rule configuration {:?}", config.title))?;
    Ok(Arc::new(rules))
}

pub fn new_session(rules: Arc<RuleTable>, rng: SmallRng) -> Session {
    let predictor = Predictor::new(rules.clone());
    Session::new(Client::new(rules, Box::new(predictor), rng))
}

// Blocking read loop, stops on a quit keyword or when input runs dry
pub fn serve<R, W>(mut session: Session, input: R, mut output: W) -> io::Result<Tally>
where
    R: BufRead,
    W: Write,
{
    send(&mut output, &session.start())?;
    // Raw lines, so undecodable bytes are rejected as input instead of ending play
    let mut lines = input.split(b'\n');
    while session.phase() == SessionPhase::AwaitingMove {
        let Some(line) = lines.next() else {
            info!("Input closed, leaving");
            break;
        };
        let line = line?;
        let responses = session.handle_line(&String::from_utf8_lossy(&line));
        send(&mut output, &responses)?;
    }
    Ok(session.tally())
}

fn send<W: Write>(output: &mut W, responses: &[ClientResponse]) -> io::Result<()> {
    for response in responses {
        write!(output, "{}", response)?;
    }
    output.flush()
}
