use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{EnumMessage, EnumProperty, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumMessage, EnumProperty, EnumString};

#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    Display,
    EnumIter,
    EnumString,
    EnumMessage,
    EnumProperty,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    #[strum(
        to_string = "Rock",
        serialize = "r",
        props(icon = "✊"),
        message = "Rock crushes scissors. It loses against paper."
    )]
    Rock,
    #[strum(
        to_string = "Paper",
        serialize = "p",
        props(icon = "✋"),
        message = "Paper covers rock. It loses against scissors."
    )]
    Paper,
    #[strum(
        to_string = "Scissors",
        serialize = "s",
        props(icon = "✌️"),
        message = "Scissors cut paper. They lose against rock."
    )]
    Scissors,
}

impl Choice {
    pub fn rules() -> String {
        Choice::iter().map(|c| c.rule()).join("\n")
    }

    /// The choice this one defeats.
    pub fn beats(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    pub fn icon(&self) -> &'static str {
        self.get_str("icon").unwrap_or("?")
    }

    pub fn rule(&self) -> String {
        format!(
            "{} {}: {}",
            self.icon(),
            self,
            self.get_message().unwrap_or("No rule")
        )
    }
}
