//! Visibility rules for the user menu popover.

use serde::Deserialize;

/// Where a click landed relative to the trigger and the popover.
///
/// `None` means the handle had no rendered node when the event fired; it is
/// treated as "not matched".
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
pub struct TargetHits {
    #[serde(default)]
    pub trigger: Option<bool>,
    #[serde(default)]
    pub menu: Option<bool>,
}

impl TargetHits {
    pub fn outside() -> Self {
        Self {
            trigger: Some(false),
            menu: Some(false),
        }
    }

    pub fn on_trigger() -> Self {
        Self {
            trigger: Some(true),
            menu: Some(false),
        }
    }

    pub fn on_menu() -> Self {
        Self {
            trigger: Some(false),
            menu: Some(true),
        }
    }
}

/// A document-level event relevant to the menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DocumentEvent {
    Click(TargetHits),
    ContextMenu,
}

/// Returns the visibility after `event`.
///
/// A click on the trigger while the menu is open only goes through the
/// outside-click check, so it never toggles the menu closed by itself.
pub fn next_visibility(visible: bool, event: DocumentEvent) -> bool {
    match event {
        DocumentEvent::Click(hits) => {
            if visible {
                // hide only when the menu node exists and the target is outside it
                !matches!(hits.menu, Some(false))
            } else if hits.trigger == Some(true) {
                !visible
            } else {
                visible
            }
        }
        DocumentEvent::ContextMenu => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_on_trigger_while_hidden_shows() {
        assert!(next_visibility(false, DocumentEvent::Click(TargetHits::on_trigger())));
    }

    #[test]
    fn click_outside_while_visible_hides() {
        assert!(!next_visibility(true, DocumentEvent::Click(TargetHits::outside())));
    }

    #[test]
    fn click_inside_menu_while_visible_keeps_it_open() {
        assert!(next_visibility(true, DocumentEvent::Click(TargetHits::on_menu())));
    }

    #[test]
    fn click_outside_while_hidden_stays_hidden() {
        assert!(!next_visibility(false, DocumentEvent::Click(TargetHits::outside())));
        assert!(!next_visibility(false, DocumentEvent::Click(TargetHits::on_menu())));
    }

    #[test]
    fn click_on_trigger_while_visible_goes_through_outside_check() {
        // the trigger is not inside the popover, so this counts as an outside click
        assert!(!next_visibility(true, DocumentEvent::Click(TargetHits::on_trigger())));
    }

    #[test]
    fn unset_handles_never_match() {
        let unset = TargetHits::default();
        assert!(next_visibility(true, DocumentEvent::Click(unset)));
        assert!(!next_visibility(false, DocumentEvent::Click(unset)));
    }

    #[test]
    fn context_menu_hides_and_never_shows() {
        assert!(!next_visibility(true, DocumentEvent::ContextMenu));
        assert!(!next_visibility(false, DocumentEvent::ContextMenu));
    }

    #[test]
    fn decodes_bridge_messages() {
        let click: DocumentEvent =
            serde_json::from_str(r#"{"kind":"click","trigger":true,"menu":null}"#).unwrap();
        assert_eq!(
            click,
            DocumentEvent::Click(TargetHits {
                trigger: Some(true),
                menu: None,
            })
        );

        let context: DocumentEvent = serde_json::from_str(r#"{"kind":"contextmenu"}"#).unwrap();
        assert_eq!(context, DocumentEvent::ContextMenu);
    }
}
