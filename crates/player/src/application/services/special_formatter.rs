//! Turns an `sb` message into a log entry

use tenorite_domain::{SlotId, SpecialAction};

use crate::application::dto::{LogEntry, SpecialSender, SpecialTarget};
use crate::application::state::PlayerRegistry;

/// Format a special-used event.
///
/// Returns `None` for codes outside the special table; such events leave
/// no trace in the log. A sender that is missing or never joined is the
/// server. A target that never joined renders as `unknown`.
pub fn format_special(
    registry: &PlayerRegistry,
    target: &SlotId,
    code: &str,
    sender: Option<&SlotId>,
) -> Option<LogEntry> {
    let action = SpecialAction::from_code(code)?;

    let sender = sender
        .and_then(|slot| registry.name_of(slot))
        .map(|name| SpecialSender::Player(name.clone()))
        .unwrap_or(SpecialSender::Server);

    let target = if action.targets_all() {
        SpecialTarget::Everyone
    } else {
        match registry.name_of(target) {
            Some(name) => SpecialTarget::Player(name.clone()),
            None => SpecialTarget::Unknown(target.clone()),
        }
    };

    Some(LogEntry::Special {
        action,
        target,
        sender,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenorite_domain::PlayerName;

    fn registry() -> PlayerRegistry {
        let mut registry = PlayerRegistry::new();
        registry.register("1".into(), "nick".into());
        registry.register("3".into(), "Alice".into());
        registry
    }

    #[test]
    fn test_registered_sender_and_target() {
        let entry = format_special(&registry(), &"3".into(), "c", Some(&"1".into()))
            .expect("known code");
        assert_eq!(entry.to_plain_text(), "Clear Line on Alice by nick");
    }

    #[test]
    fn test_unregistered_sender_is_server() {
        let entry = format_special(&registry(), &"3".into(), "a", Some(&"0".into()))
            .expect("known code");
        assert!(matches!(
            entry,
            LogEntry::Special {
                sender: SpecialSender::Server,
                ..
            }
        ));
        assert_eq!(entry.to_plain_text(), "Add Line on Alice by server");
    }

    #[test]
    fn test_missing_sender_is_server() {
        let entry = format_special(&registry(), &"3".into(), "o", None).expect("known code");
        assert_eq!(entry.to_plain_text(), "Block Bomb on Alice by server");
    }

    #[test]
    fn test_unregistered_target_is_unknown() {
        let entry = format_special(&registry(), &"5".into(), "q", Some(&"1".into()))
            .expect("known code");
        assert_eq!(
            entry,
            LogEntry::Special {
                action: SpecialAction::QuakeField,
                target: SpecialTarget::Unknown("5".into()),
                sender: SpecialSender::Player(PlayerName::from("nick")),
            }
        );
    }

    #[test]
    fn test_lines_added_go_to_all() {
        let entry = format_special(&registry(), &"0".into(), "cs4", Some(&"3".into()))
            .expect("known code");
        assert_eq!(entry.to_plain_text(), "4 lines added to all by Alice");
    }

    #[test]
    fn test_unknown_code_yields_nothing() {
        assert_eq!(format_special(&registry(), &"3".into(), "z", Some(&"1".into())), None);
        assert_eq!(format_special(&registry(), &"3".into(), "cs3", None), None);
    }
}
