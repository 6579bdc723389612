use agent::client::Client;
use tracing::{debug, info, warn};

use crate::model::{
    external::{ClientRequest, ClientResponse},
    internal::{SessionPhase, Tally},
};

pub struct Session {
    client: Client,
    tally: Tally,
    phase: SessionPhase,
}

impl Session {
    pub fn new(client: Client) -> Self {
        Session {
            client,
            tally: Tally::default(),
            phase: SessionPhase::AwaitingMove,
        }
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn start(&self) -> Vec<ClientResponse> {
        info!("Starting {}", self.client.rules().title());
        vec![
            ClientResponse::rules(self.client.rules()),
            ClientResponse::prompt(self.client.rules()),
        ]
    }

    pub fn handle_line(&mut self, line: &str) -> Vec<ClientResponse> {
        if self.phase == SessionPhase::Done {
            warn!("Got input after the session ended");
            return vec![];
        }
        match ClientRequest::parse(line, self.client.rules()) {
            Err(e) => {
                warn!("Rejected input: {}", e);
                vec![
                    ClientResponse::InvalidOption,
                    ClientResponse::prompt(self.client.rules()),
                ]
            }
            Ok(ClientRequest::Quit) => {
                info!(
                    "Quit after {} game(s), win rate {:.2}%",
                    self.tally.games_played,
                    self.tally.win_rate()
                );
                self.phase = SessionPhase::Done;
                vec![]
            }
            Ok(ClientRequest::Move(human_move)) => {
                let round = self.client.play(human_move);
                self.tally.record(round.outcome);
                debug!("Round {}: {:?}", self.tally.games_played, round.outcome);
                vec![
                    ClientResponse::RoundResult(round),
                    ClientResponse::Tally(self.tally),
                    ClientResponse::PlayAgain,
                    ClientResponse::prompt(self.client.rules()),
                ]
            }
        }
    }
}
