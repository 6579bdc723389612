use std::{collections::HashMap, io};

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use super::game::{Move, Outcome};
use crate::config::RuleConfig;

pub const QUIT_KEYWORDS: [&str; 2] = ["Q", "QUIT"];

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Unable to read rule configuration: {0}")]
    Read(#[from] io::Error),
    #[error("Unable to parse rule configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("The move alphabet is empty")]
    EmptyAlphabet,
    #[error("Move #{position} has an empty symbol")]
    EmptySymbol { position: usize },
    #[error("Symbol {symbol:?} is declared more than once")]
    DuplicateSymbol { symbol: String },
    #[error("Symbol {symbol:?} collides with a quit keyword")]
    ReservedSymbol { symbol: String },
    #[error("Move {defender:?} is beaten by unknown move {symbol:?}")]
    UnknownMove { symbol: String, defender: String },
    #[error("Move {symbol:?} is declared to beat itself")]
    SelfBeating { symbol: String },
    #[error("Move {defender:?} lists {attacker:?} as a counter more than once")]
    DuplicateCounter { attacker: String, defender: String },
    #[error("Moves {first:?} and {second:?} are declared to beat each other")]
    Contradiction { first: String, second: String },
    #[error("Neither {first:?} nor {second:?} beats the other")]
    Undecided { first: String, second: String },
    #[error("Move {symbol:?} cannot be beaten")]
    Unbeatable { symbol: String },
    #[error("Move {symbol:?} is beaten by {found} moves, expected {expected}")]
    Unbalanced {
        symbol: String,
        expected: usize,
        found: usize,
    },
}

/// The validated win relation over a move alphabet. Immutable once built.
#[derive(Debug, Clone)]
pub struct RuleTable {
    title: String,
    moves: Vec<Move>,
    names: Vec<String>,
    lookup: HashMap<String, usize>,
    // defeats[a][b]: a beats b
    defeats: Vec<Vec<bool>>,
    beaten_by: Vec<Vec<Move>>,
}

impl RuleTable {
    pub fn new(config: &RuleConfig) -> Result<Self, ConfigurationError> {
        if config.moves.is_empty() {
            return Err(ConfigurationError::EmptyAlphabet);
        }

        let mut moves = Vec::with_capacity(config.moves.len());
        let mut names = Vec::with_capacity(config.moves.len());
        let mut lookup = HashMap::new();
        for (position, entry) in config.moves.iter().enumerate() {
            let symbol = entry.symbol.trim();
            if symbol.is_empty() {
                return Err(ConfigurationError::EmptySymbol { position });
            }
            if QUIT_KEYWORDS
                .iter()
                .any(|keyword| keyword.eq_ignore_ascii_case(symbol))
            {
                return Err(ConfigurationError::ReservedSymbol {
                    symbol: symbol.to_owned(),
                });
            }
            if lookup.insert(symbol.to_uppercase(), position).is_some() {
                return Err(ConfigurationError::DuplicateSymbol {
                    symbol: symbol.to_owned(),
                });
            }
            moves.push(Move::new(position, symbol));
            names.push(entry.name.clone());
        }

        let size = moves.len();
        let mut defeats = vec![vec![false; size]; size];
        for (defender, entry) in config.moves.iter().enumerate() {
            for counter in entry.beaten_by.iter() {
                let attacker = *lookup.get(&counter.trim().to_uppercase()).ok_or_else(|| {
                    ConfigurationError::UnknownMove {
                        symbol: counter.clone(),
                        defender: moves[defender].symbol().to_owned(),
                    }
                })?;
                if attacker == defender {
                    return Err(ConfigurationError::SelfBeating {
                        symbol: moves[defender].symbol().to_owned(),
                    });
                }
                if defeats[attacker][defender] {
                    return Err(ConfigurationError::DuplicateCounter {
                        attacker: moves[attacker].symbol().to_owned(),
                        defender: moves[defender].symbol().to_owned(),
                    });
                }
                defeats[attacker][defender] = true;
            }
        }

        // Distinct moves must never tie
        for first in 0..size {
            for second in first + 1..size {
                let pair = || {
                    (
                        moves[first].symbol().to_owned(),
                        moves[second].symbol().to_owned(),
                    )
                };
                match (defeats[first][second], defeats[second][first]) {
                    (true, true) => {
                        let (first, second) = pair();
                        return Err(ConfigurationError::Contradiction { first, second });
                    }
                    (false, false) => {
                        let (first, second) = pair();
                        return Err(ConfigurationError::Undecided { first, second });
                    }
                    _ => {}
                }
            }
        }

        let beaten_by: Vec<Vec<Move>> = (0..size)
            .map(|defender| {
                (0..size)
                    .filter(|&attacker| defeats[attacker][defender])
                    .map(|attacker| moves[attacker].clone())
                    .collect()
            })
            .collect();
        let expected = beaten_by[0].len();
        for (defender, counters) in beaten_by.iter().enumerate() {
            if counters.is_empty() {
                return Err(ConfigurationError::Unbeatable {
                    symbol: moves[defender].symbol().to_owned(),
                });
            }
            if counters.len() != expected {
                return Err(ConfigurationError::Unbalanced {
                    symbol: moves[defender].symbol().to_owned(),
                    expected,
                    found: counters.len(),
                });
            }
        }

        debug!(
            "Built rule table {:?} with {} moves, {} counter(s) each",
            config.title, size, expected
        );
        Ok(RuleTable {
            title: config.title.clone(),
            moves,
            names,
            lookup,
            defeats,
            beaten_by,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn all_moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(Move::symbol)
    }

    pub fn name(&self, m: &Move) -> &str {
        &self.names[m.index()]
    }

    pub fn parse(&self, token: &str) -> Option<Move> {
        self.lookup
            .get(&token.to_uppercase())
            .map(|&index| self.moves[index].clone())
    }

    pub fn moves_that_beat(&self, m: &Move) -> &[Move] {
        &self.beaten_by[m.index()]
    }

    pub fn moves_beaten_by(&self, m: &Move) -> impl Iterator<Item = &Move> {
        let row = &self.defeats[m.index()];
        self.moves.iter().filter(move |other| row[other.index()])
    }

    // None on identical moves
    pub fn beats(&self, attacker: &Move, defender: &Move) -> Option<bool> {
        if attacker == defender {
            None
        } else {
            Some(self.defeats[attacker.index()][defender.index()])
        }
    }

    pub fn judge(&self, human: &Move, computer: &Move) -> Outcome {
        match self.beats(human, computer) {
            None => Outcome::Draw,
            Some(true) => Outcome::Win,
            Some(false) => Outcome::Loss,
        }
    }

    pub fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        self.moves[rng.random_range(0..self.moves.len())].clone()
    }
}
