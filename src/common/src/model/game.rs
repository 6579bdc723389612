use std::{fmt, sync::Arc};

use rand::Rng;

use super::rules::RuleTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

/// One throwable symbol. Moves are only handed out by a [`RuleTable`], which
/// keeps the index valid for its own lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    index: usize,
    symbol: Arc<str>,
}
impl Move {
    pub(crate) fn new(index: usize, symbol: &str) -> Self {
        Move {
            index,
            symbol: Arc::from(symbol),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub human: Move,
    pub computer: Move,
}
impl State {
    pub fn new(human: Move, computer: Move) -> Self {
        State { human, computer }
    }

    pub fn random<R: Rng + ?Sized>(rules: &RuleTable, rng: &mut R) -> Self {
        State {
            human: rules.random_move(rng),
            computer: rules.random_move(rng),
        }
    }
}
