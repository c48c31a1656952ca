//! Event log entries
//!
//! A log entry is display-only: surfaces render it as plain text or as the
//! HTML fragment the spectator page styles (`offense`/`defense` spans).

use std::fmt;

use tenorite_domain::{PlayerName, SlotId, SpecialAction};

/// Who used a special.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialSender {
    Player(PlayerName),
    /// Sender slot missing or never joined; the server issued it
    Server,
}

/// Who a special was used on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialTarget {
    Player(PlayerName),
    /// Lines added to every opponent; no single target
    Everyone,
    /// Target slot has no registered player
    Unknown(SlotId),
}

/// One line of the special-event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Special {
        action: SpecialAction,
        target: SpecialTarget,
        sender: SpecialSender,
    },
    GameEnded,
}

const SERVER_LABEL: &str = "server";
const UNKNOWN_TARGET_LABEL: &str = "unknown";
const GAME_ENDED_LABEL: &str = "Game ended!";

impl LogEntry {
    /// Plain text, e.g. `Add Line on Alice by server`.
    pub fn to_plain_text(&self) -> String {
        match self {
            LogEntry::Special {
                action,
                target,
                sender,
            } => {
                let sender = match sender {
                    SpecialSender::Player(name) => name.as_str(),
                    SpecialSender::Server => SERVER_LABEL,
                };
                match target {
                    SpecialTarget::Everyone => {
                        format!("{} to all by {}", action.label(), sender)
                    }
                    SpecialTarget::Player(name) => {
                        format!("{} on {} by {}", action.label(), name, sender)
                    }
                    SpecialTarget::Unknown(_) => {
                        format!("{} on {} by {}", action.label(), UNKNOWN_TARGET_LABEL, sender)
                    }
                }
            }
            LogEntry::GameEnded => GAME_ENDED_LABEL.to_string(),
        }
    }

    /// HTML fragment for DOM surfaces. Player names are escaped.
    pub fn to_html(&self) -> String {
        match self {
            LogEntry::Special {
                action,
                target,
                sender,
            } => {
                let label = format!(
                    "<span class=\"{}\">{}</span>",
                    action.category().css_class(),
                    action.label()
                );
                let sender = match sender {
                    SpecialSender::Player(name) => format!("<b>{}</b>", escape_html(name.as_str())),
                    SpecialSender::Server => format!("<i>{}</i>", SERVER_LABEL),
                };
                match target {
                    SpecialTarget::Everyone => format!("{} to all by {}", label, sender),
                    SpecialTarget::Player(name) => format!(
                        "{} on <b>{}</b> by {}",
                        label,
                        escape_html(name.as_str()),
                        sender
                    ),
                    SpecialTarget::Unknown(_) => format!(
                        "{} on <b>{}</b> by {}",
                        label, UNKNOWN_TARGET_LABEL, sender
                    ),
                }
            }
            LogEntry::GameEnded => format!("<b>{}</b>", GAME_ENDED_LABEL),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_text())
    }
}

/// Minimal escaping for text placed inside element content.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
