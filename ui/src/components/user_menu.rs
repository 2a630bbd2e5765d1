//! The account menu shown at the end of the editor toolbar.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use session::LoggedUser;
use session::SiteUrls;

use crate::compat;
use crate::components::avatar::Avatar;
use crate::components::context_menu::ContextMenu;
use crate::hooks::use_document_events;
use crate::hooks::MenuTargets;
use crate::menu_actions::avatar_source;
use crate::menu_actions::menu_actions;
use crate::menu_actions::MenuCommand;
use crate::menu_visibility::next_visibility;

const DEFAULT_AVATAR: Asset = asset!("/assets/avatar.svg");

const CONTAINER_STYLE: &str = "
    position: relative;
    display: flex;
    flex-direction: row;
    align-items: center;
    margin: 0 16px 0 12px;
";

const BUTTON_STYLE: &str = "
    appearance: none;
    background: transparent;
    padding: 0;
    margin: 0;
    border: 0;
    outline: 0;
    cursor: pointer;
";

const MENU_STYLE: &str = "position: absolute; margin: 10px 0; right: 0; top: 100%;";

/// Carries out the chosen menu command.
fn dispatch(command: MenuCommand, logout: EventHandler<()>, on_log_in_click: EventHandler<()>) {
    tracing::debug!("user menu action: {command:?}");
    command.run(
        |url| {
            if let Err(e) = compat::open_in_new_tab(&url) {
                tracing::warn!("could not open {url}: {e}");
            }
        },
        || logout.call(()),
        || on_log_in_click.call(()),
    );
}

/// An avatar button that opens a popover with account actions.
///
/// The popover opens when the avatar is clicked and closes on a click
/// anywhere outside it, on a right click, or when the popover dismisses
/// itself. Without a session the only action is "Log in".
#[component]
pub fn UserMenu(
    logged_user: Option<LoggedUser>,
    logout: EventHandler<()>,
    on_log_in_click: EventHandler<()>,
) -> Element {
    let mut visible = use_signal(|| false);
    let targets = use_hook(MenuTargets::unique);
    let urls = use_hook(SiteUrls::default);

    use_document_events(targets.clone(), move |event| {
        let current = *visible.peek();
        let next = next_visibility(current, event);
        if next != current {
            tracing::debug!("user menu visible: {next} ({event:?})");
            visible.set(next);
        }
    });

    let on_select = move |command: MenuCommand| dispatch(command, logout, on_log_in_click);

    let source = avatar_source(logged_user.as_ref(), &DEFAULT_AVATAR.to_string());
    let actions = menu_actions(logged_user.as_ref(), &urls);
    let trigger_id = targets.trigger.id().to_string();
    let menu_id = targets.menu.id().to_string();
    let is_visible = visible();
    let aria_expanded = if is_visible { "true" } else { "false" };

    rsx! {
        div {
            style: CONTAINER_STYLE,
            button {
                id: "{trigger_id}",
                r#type: "button",
                style: BUTTON_STYLE,
                "aria-haspopup": "menu",
                "aria-expanded": aria_expanded,
                Avatar {
                    source,
                    size: 40,
                }
            }
            ContextMenu {
                id: menu_id,
                visible: is_visible,
                actions,
                on_select,
                on_hide: move |_| visible.set(false),
                style: MENU_STYLE.to_string(),
            }
        }
    }
}
