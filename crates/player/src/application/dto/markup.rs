//! Spectator page markup
//!
//! Pure string builders for the DOM surface, kept free of web-sys.

use tenorite_domain::{Field, Tile};

use crate::application::state::EVENT_LOG_CAPACITY;

use super::log_entry::escape_html;
use super::LogEntry;

/// Inner HTML for a `#field{slot}` target: one `div.tile` per tile, special
/// tiles carrying their (escaped) letter.
pub fn field_html(field: &Field) -> String {
    let mut html = String::from("<div>");
    for tile in field.tiles() {
        match tile {
            Tile::Numbered(_) => {
                html.push_str(&format!("<div class=\"tile {}\"></div>", tile.css_class()));
            }
            Tile::Special(label) => {
                html.push_str(&format!(
                    "<div class=\"tile {}\">{}</div>",
                    tile.css_class(),
                    escape_html(&label.to_string())
                ));
            }
        }
    }
    html.push_str("</div>");
    html
}

/// Element wrapping one `#specials` line.
pub fn log_line_tag(entry: &LogEntry) -> &'static str {
    match entry {
        LogEntry::GameEnded => "span",
        LogEntry::Special { .. } => "div",
    }
}

/// How many leading children to remove from a log holding `child_count`.
pub fn log_overflow(child_count: usize) -> usize {
    child_count.saturating_sub(EVENT_LOG_CAPACITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{SpecialSender, SpecialTarget};
    use tenorite_domain::{PlayerName, SpecialAction};

    #[test]
    fn test_field_html_classes_in_order() {
        assert_eq!(
            field_html(&Field::decode("01S9")),
            "<div>\
             <div class=\"tile tile0\"></div>\
             <div class=\"tile tile1\"></div>\
             <div class=\"tile tileS\">S</div>\
             <div class=\"tile tile9\"></div>\
             </div>"
        );
    }

    #[test]
    fn test_field_html_escapes_special_label() {
        assert_eq!(
            field_html(&Field::decode("<&")),
            "<div><div class=\"tile tileS\">&lt;</div><div class=\"tile tileS\">&amp;</div></div>"
        );
        assert_eq!(field_html(&Field::default()), "<div></div>");
    }

    #[test]
    fn test_game_ended_is_a_span() {
        assert_eq!(log_line_tag(&LogEntry::GameEnded), "span");
        let special = LogEntry::Special {
            action: SpecialAction::BlockBomb,
            target: SpecialTarget::Player(PlayerName::from("jane")),
            sender: SpecialSender::Server,
        };
        assert_eq!(log_line_tag(&special), "div");
    }

    #[test]
    fn test_log_overflow_keeps_last_ten() {
        assert_eq!(log_overflow(0), 0);
        assert_eq!(log_overflow(10), 0);
        assert_eq!(log_overflow(11), 1);
        assert_eq!(log_overflow(14), 4);
    }
}
