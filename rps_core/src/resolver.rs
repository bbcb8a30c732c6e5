use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::Display;

use crate::{choice::Choice, player::PlayerId};

#[derive(Debug, PartialEq, Eq, Copy, Clone, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

/// Outcome of a single pick, in the order the picks were submitted.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct Resolution {
    pub player_id: PlayerId,
    pub outcome: Outcome,
    pub choice: Choice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub player_id: PlayerId,
    pub name: String,
    pub choice: Choice,
    pub outcome: Outcome,
}

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct ChoiceCounts {
    pub rock: usize,
    pub paper: usize,
    pub scissors: usize,
}

impl ChoiceCounts {
    pub fn tally<I>(choices: I) -> Self
    where
        I: IntoIterator<Item = Choice>,
    {
        choices
            .into_iter()
            .fold(ChoiceCounts::default(), |mut counts, choice| {
                match choice {
                    Choice::Rock => counts.rock += 1,
                    Choice::Paper => counts.paper += 1,
                    Choice::Scissors => counts.scissors += 1,
                }
                counts
            })
    }

    pub fn count(&self, choice: Choice) -> usize {
        match choice {
            Choice::Rock => self.rock,
            Choice::Paper => self.paper,
            Choice::Scissors => self.scissors,
        }
    }

    /// A choice wins only when exactly two distinct choices are present and
    /// it is the one beating the other.
    pub fn winning_choice(&self) -> Option<Choice> {
        Choice::iter().find(|c| {
            let beaten = c.beats();
            let beater = beaten.beats();
            self.count(*c) > 0 && self.count(beaten) > 0 && self.count(beater) == 0
        })
    }
}

pub fn resolve(picks: &[(PlayerId, Choice)]) -> Vec<Resolution> {
    let winning_choice = ChoiceCounts::tally(picks.iter().map(|&(_, c)| c)).winning_choice();
    log::debug!("resolving {} picks, winning choice {:?}", picks.len(), winning_choice);

    picks
        .iter()
        .map(|&(player_id, choice)| Resolution {
            player_id,
            choice,
            outcome: match winning_choice {
                None => Outcome::Tie,
                Some(winner) if winner == choice => Outcome::Win,
                Some(_) => Outcome::Lose,
            },
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Tie,
    Winner(PlayerId),
    SharedWin(Vec<PlayerId>),
}

impl Verdict {
    pub fn from_results(results: &[RoundResult]) -> Self {
        let winners: Vec<PlayerId> = results
            .iter()
            .filter(|r| r.outcome == Outcome::Win)
            .map(|r| r.player_id)
            .collect();
        let single = winners.iter().exactly_one().ok().copied();
        match single {
            Some(winner) => Verdict::Winner(winner),
            None if winners.is_empty() => Verdict::Tie,
            None => Verdict::SharedWin(winners),
        }
    }

    pub fn winners(&self) -> Vec<PlayerId> {
        match self {
            Verdict::Tie => vec![],
            Verdict::Winner(id) => vec![*id],
            Verdict::SharedWin(ids) => ids.clone(),
        }
    }
}
