// The client-side Dioxus application logic.

use dioxus::prelude::*;
use session::LoggedUser;

pub mod compat;
mod components;
pub mod hooks;
pub mod menu_actions;
pub mod menu_visibility;

pub use components::avatar::Avatar;
pub use components::context_menu::ContextMenu;
pub use components::user_menu::UserMenu;

/// Name used for the demo session installed by "Log in".
const DEMO_USERNAME: &str = "snackdev";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let toolbar_css = r#"
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
        font-family: system-ui, sans-serif;
    }

    /* --- TOOLBAR --- */
    .editor-toolbar {
        display: flex;
        flex-direction: row;
        align-items: center;
        justify-content: space-between;
        height: 60px;
        padding: 0 0 0 16px;
        border-bottom: 1px solid #d8dde3;
    }

    .editor-toolbar h1 {
        margin: 0;
        font-size: 1.1rem;
        font-weight: 500;
    }

    [role="menuitem"]:hover {
        background-color: rgba(0, 0, 0, 0.05);
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{toolbar_css}"
        }
        Toolbar {}
    }
}

/// The session baked in with `SNACK_DEMO_SESSION` (JSON), if any.
fn initial_session() -> Option<LoggedUser> {
    let json = option_env!("SNACK_DEMO_SESSION")?;
    match LoggedUser::from_json(json) {
        Ok(user) => Some(user),
        Err(e) => {
            dioxus_logger::tracing::warn!("ignoring SNACK_DEMO_SESSION: {e}");
            None
        }
    }
}

/// The editor toolbar. Holds the session the user menu renders.
#[component]
fn Toolbar() -> Element {
    let mut logged_user = use_signal(initial_session);

    rsx! {
        header {
            class: "editor-toolbar",
            h1 {
                "Untitled snack"
            }
            UserMenu {
                logged_user: logged_user(),
                logout: move |_| {
                    dioxus_logger::tracing::info!("logged out");
                    logged_user.set(None);
                },
                on_log_in_click: move |_| {
                    dioxus_logger::tracing::info!("logged in as {DEMO_USERNAME}");
                    logged_user.set(Some(LoggedUser::new(DEMO_USERNAME, None)));
                },
            }
        }
    }
}
