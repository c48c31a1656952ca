//! Special actions announced in `sb` messages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Whether a special hurts its target or helps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialCategory {
    Offense,
    Defense,
}

impl SpecialCategory {
    /// Stylesheet class for the label span.
    pub fn css_class(&self) -> &'static str {
        match self {
            SpecialCategory::Offense => "offense",
            SpecialCategory::Defense => "defense",
        }
    }
}

/// The closed set of special action codes.
///
/// `cs1`/`cs2`/`cs4` are lines sent to everybody by a multi-line clear;
/// the rest are specials used on a single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialAction {
    OneLineAdded,
    TwoLinesAdded,
    FourLinesAdded,
    AddLine,
    ClearLine,
    NukeField,
    RandomClear,
    SwitchField,
    ClearSpecials,
    Gravity,
    QuakeField,
    BlockBomb,
}

impl SpecialAction {
    /// All actions, in wire table order.
    pub fn all() -> &'static [SpecialAction] {
        &[
            SpecialAction::OneLineAdded,
            SpecialAction::TwoLinesAdded,
            SpecialAction::FourLinesAdded,
            SpecialAction::AddLine,
            SpecialAction::ClearLine,
            SpecialAction::NukeField,
            SpecialAction::RandomClear,
            SpecialAction::SwitchField,
            SpecialAction::ClearSpecials,
            SpecialAction::Gravity,
            SpecialAction::QuakeField,
            SpecialAction::BlockBomb,
        ]
    }

    /// Look up a wire code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        let action = match code {
            "cs1" => SpecialAction::OneLineAdded,
            "cs2" => SpecialAction::TwoLinesAdded,
            "cs4" => SpecialAction::FourLinesAdded,
            "a" => SpecialAction::AddLine,
            "c" => SpecialAction::ClearLine,
            "n" => SpecialAction::NukeField,
            "r" => SpecialAction::RandomClear,
            "s" => SpecialAction::SwitchField,
            "b" => SpecialAction::ClearSpecials,
            "g" => SpecialAction::Gravity,
            "q" => SpecialAction::QuakeField,
            "o" => SpecialAction::BlockBomb,
            _ => return None,
        };
        Some(action)
    }

    pub fn code(&self) -> &'static str {
        match self {
            SpecialAction::OneLineAdded => "cs1",
            SpecialAction::TwoLinesAdded => "cs2",
            SpecialAction::FourLinesAdded => "cs4",
            SpecialAction::AddLine => "a",
            SpecialAction::ClearLine => "c",
            SpecialAction::NukeField => "n",
            SpecialAction::RandomClear => "r",
            SpecialAction::SwitchField => "s",
            SpecialAction::ClearSpecials => "b",
            SpecialAction::Gravity => "g",
            SpecialAction::QuakeField => "q",
            SpecialAction::BlockBomb => "o",
        }
    }

    /// Human readable label used in the event log.
    pub fn label(&self) -> &'static str {
        match self {
            SpecialAction::OneLineAdded => "1 line added",
            SpecialAction::TwoLinesAdded => "2 lines added",
            SpecialAction::FourLinesAdded => "4 lines added",
            SpecialAction::AddLine => "Add Line",
            SpecialAction::ClearLine => "Clear Line",
            SpecialAction::NukeField => "Nuke Field",
            SpecialAction::RandomClear => "Random Clear",
            SpecialAction::SwitchField => "Switch Field",
            SpecialAction::ClearSpecials => "Clear Specials",
            SpecialAction::Gravity => "Gravity",
            SpecialAction::QuakeField => "Quake Field",
            SpecialAction::BlockBomb => "Block Bomb",
        }
    }

    pub fn category(&self) -> SpecialCategory {
        match self {
            SpecialAction::ClearLine
            | SpecialAction::NukeField
            | SpecialAction::SwitchField
            | SpecialAction::Gravity => SpecialCategory::Defense,
            _ => SpecialCategory::Offense,
        }
    }

    /// Lines added by a combo go to every opponent, so no target is named.
    pub fn targets_all(&self) -> bool {
        matches!(
            self,
            SpecialAction::OneLineAdded
                | SpecialAction::TwoLinesAdded
                | SpecialAction::FourLinesAdded
        )
    }
}

impl fmt::Display for SpecialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SpecialAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| DomainError::parse(format!("Unknown special code: {}", s)))
    }
}
