//! Replay tempo

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Tempo of the recorded game being replayed.
///
/// Sent verbatim as the `tempo` query parameter when opening a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tempo {
    #[default]
    Normal,
    Fast,
}

impl Tempo {
    /// Wire form used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tempo::Normal => "normal",
            Tempo::Fast => "fast",
        }
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tempo {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Tempo::Normal),
            "fast" => Ok(Tempo::Fast),
            other => Err(DomainError::parse(format!("Unknown tempo: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("FAST".parse::<Tempo>(), Ok(Tempo::Fast));
        assert_eq!(" normal ".parse::<Tempo>(), Ok(Tempo::Normal));
        assert!("slow".parse::<Tempo>().is_err());
    }

    #[test]
    fn test_wire_form() {
        assert_eq!(Tempo::default().to_string(), "normal");
        assert_eq!(
            serde_json::to_string(&Tempo::Fast).expect("serialize"),
            "\"fast\""
        );
    }
}
