use std::fmt;

use agent::strategy::Round;
use common::model::{
    game::{Move, Outcome},
    rules::{RuleTable, QUIT_KEYWORDS},
};
use thiserror::Error;

use super::internal::Tally;

#[derive(Error, Debug, PartialEq)]
#[error("{token:?} is not a move or quit keyword")]
pub struct InvalidInput {
    pub token: String,
}

// Client types
#[derive(Debug, Clone, PartialEq)]
pub enum ClientRequest {
    Move(Move),
    Quit,
}

impl ClientRequest {
    pub fn parse(line: &str, rules: &RuleTable) -> Result<Self, InvalidInput> {
        let token = line.trim();
        if QUIT_KEYWORDS
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(token))
        {
            return Ok(ClientRequest::Quit);
        }
        rules
            .parse(token)
            .map(ClientRequest::Move)
            .ok_or_else(|| InvalidInput {
                token: token.to_owned(),
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientResponse {
    Rules {
        title: String,
        options: String,
        clauses: String,
    },
    Prompt {
        symbols: String,
    },
    InvalidOption,
    RoundResult(Round),
    Tally(Tally),
    PlayAgain,
}

impl ClientResponse {
    pub fn rules(rules: &RuleTable) -> Self {
        let options: Vec<String> = rules
            .all_moves()
            .iter()
            .map(|m| format!("{} ({})", rules.name(m), m))
            .collect();
        let clauses: Vec<String> = rules
            .all_moves()
            .iter()
            .map(|m| {
                let beaten: Vec<String> = rules
                    .moves_beaten_by(m)
                    .map(|other| rules.name(other).to_owned())
                    .collect();
                format!("{} beats {}", rules.name(m), join_list(&beaten, "and"))
            })
            .collect();
        ClientResponse::Rules {
            title: rules.title().to_owned(),
            options: join_list(&options, "or"),
            clauses: capitalize(&join_list(&clauses, "and")),
        }
    }

    pub fn prompt(rules: &RuleTable) -> Self {
        ClientResponse::Prompt {
            symbols: rules.symbols().collect::<Vec<_>>().join(", "),
        }
    }
}

impl fmt::Display for ClientResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientResponse::Rules {
                title,
                options,
                clauses,
            } => {
                writeln!(f, "Let's play {}.", title)?;
                writeln!(f)?;
                writeln!(f, "The rules are as follows:")?;
                writeln!(
                    f,
                    "Each turn, you and the computer can play either {}.",
                    options
                )?;
                writeln!(f, "{}.", clauses)?;
                writeln!(
                    f,
                    "If you and the computer choose the same option, it's a tie."
                )?;
                writeln!(f, "Alternatively, you can type {} to quit.", QUIT_KEYWORDS[0])?;
                writeln!(f)
            }
            ClientResponse::Prompt { symbols } => {
                write!(f, "Enter {}, or {} to quit: ", symbols, QUIT_KEYWORDS[0])
            }
            ClientResponse::InvalidOption => {
                writeln!(f, "That is not one of the valid options. Please try again.")
            }
            ClientResponse::RoundResult(round) => {
                writeln!(
                    f,
                    "You played {} while the computer played {}.",
                    round.human_move, round.computer_move
                )?;
                match round.outcome {
                    Outcome::Win => writeln!(f, "You won."),
                    Outcome::Loss => writeln!(f, "You lost."),
                    Outcome::Draw => writeln!(f, "You tied."),
                }
            }
            ClientResponse::Tally(tally) => writeln!(
                f,
                "Of {} games played, you have won {}, lost {}, and tied {}. That's a win rate of {:.2}%.",
                tally.games_played,
                tally.wins,
                tally.losses,
                tally.ties,
                tally.win_rate()
            ),
            ClientResponse::PlayAgain => {
                writeln!(f)?;
                writeln!(f, "Would you like to play another game?")
            }
        }
    }
}

fn join_list(items: &[String], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} {} {}", first, conjunction, second),
        [init @ .., last] => format!("{}, {} {}", init.join(", "), conjunction, last),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use common::config::RuleConfig;

    use super::*;

    fn classic() -> RuleTable {
        RuleConfig::classic().build().expect("classic rules are valid")
    }

    #[test]
    fn parses_moves_and_quit() {
        let rules = classic();
        assert_eq!(
            ClientRequest::parse("r", &rules),
            Ok(ClientRequest::Move(rules.parse("R").expect("rock")))
        );
        assert_eq!(
            ClientRequest::parse(" S\n", &rules),
            Ok(ClientRequest::Move(rules.parse("S").expect("scissors")))
        );
        for quit in ["Q", "q", "QUIT", "Quit", "quit"] {
            assert_eq!(ClientRequest::parse(quit, &rules), Ok(ClientRequest::Quit));
        }
    }

    #[test]
    fn rejects_unknown_tokens() {
        let rules = classic();
        for token in ["X", "rock", "", "RP", "QQ"] {
            assert_eq!(
                ClientRequest::parse(token, &rules),
                Err(InvalidInput {
                    token: token.to_owned()
                })
            );
        }
    }

    #[test]
    fn renders_classic_rules() {
        let text = ClientResponse::rules(&classic()).to_string();
        assert_eq!(
            text,
            "Let's play Rock Paper Scissors.\n\
             \n\
             The rules are as follows:\n\
             Each turn, you and the computer can play either rock (R), paper (P), or scissors (S).\n\
             Rock beats scissors, paper beats rock, and scissors beats paper.\n\
             If you and the computer choose the same option, it's a tie.\n\
             Alternatively, you can type Q to quit.\n\
             \n"
        );
    }

    #[test]
    fn renders_prompt() {
        assert_eq!(
            ClientResponse::prompt(&classic()).to_string(),
            "Enter R, P, S, or Q to quit: "
        );
    }

    #[test]
    fn renders_round_and_tally() {
        let rules = classic();
        let round = Round {
            human_move: rules.parse("R").expect("rock"),
            computer_move: rules.parse("P").expect("paper"),
            outcome: Outcome::Loss,
        };
        assert_eq!(
            ClientResponse::RoundResult(round).to_string(),
            "You played R while the computer played P.\nYou lost.\n"
        );
        let tally = Tally {
            wins: 2,
            losses: 1,
            ties: 0,
            games_played: 3,
        };
        assert_eq!(
            ClientResponse::Tally(tally).to_string(),
            "Of 3 games played, you have won 2, lost 1, and tied 0. That's a win rate of 66.67%.\n"
        );
    }

    #[test]
    fn joins_lists_in_prose() {
        let items = |xs: &[&str]| xs.iter().map(|x| x.to_string()).collect::<Vec<_>>();
        assert_eq!(join_list(&items(&["a"]), "or"), "a");
        assert_eq!(join_list(&items(&["a", "b"]), "or"), "a or b");
        assert_eq!(join_list(&items(&["a", "b", "c"]), "and"), "a, b, and c");
    }
}
