//! The actions offered by the user menu, modelled as data.
//!
//! The popover only renders labels and hands the chosen command back, so
//! the set of actions stays a pure function of the session.

use session::LoggedUser;
use session::SiteUrls;

/// What happens when a menu entry is chosen.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MenuCommand {
    /// Open the url in a new browsing context.
    OpenUrl(String),
    LogOut,
    LogIn,
}

impl MenuCommand {
    /// Routes the command to the matching effect. Exactly one of the
    /// callbacks is invoked, once.
    pub fn run(
        self,
        open_url: impl FnOnce(String),
        log_out: impl FnOnce(),
        log_in: impl FnOnce(),
    ) {
        match self {
            MenuCommand::OpenUrl(url) => open_url(url),
            MenuCommand::LogOut => log_out(),
            MenuCommand::LogIn => log_in(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MenuAction {
    pub label: &'static str,
    pub command: MenuCommand,
}

impl MenuAction {
    fn new(label: &'static str, command: MenuCommand) -> Self {
        Self { label, command }
    }
}

/// Logged in: profile, snacks, edit account, log out. Logged out: log in.
pub fn menu_actions(user: Option<&LoggedUser>, urls: &SiteUrls) -> Vec<MenuAction> {
    match user {
        Some(user) => vec![
            MenuAction::new(
                "View profile",
                MenuCommand::OpenUrl(urls.profile(&user.username)),
            ),
            MenuAction::new(
                "View snacks",
                MenuCommand::OpenUrl(urls.snacks(&user.username)),
            ),
            MenuAction::new(
                "Edit account",
                MenuCommand::OpenUrl(urls.account_settings()),
            ),
            MenuAction::new("Log out", MenuCommand::LogOut),
        ],
        None => vec![MenuAction::new("Log in", MenuCommand::LogIn)],
    }
}

/// The image shown in the trigger button.
pub fn avatar_source(user: Option<&LoggedUser>, default: &str) -> String {
    user.and_then(LoggedUser::picture)
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn labels(actions: &[MenuAction]) -> Vec<&'static str> {
        actions.iter().map(|a| a.label).collect()
    }

    #[test]
    fn logged_in_user_gets_four_actions_in_order() {
        let user = LoggedUser::new("jane", None);
        let actions = menu_actions(Some(&user), &SiteUrls::new("https://expo.io"));

        assert_eq!(
            labels(&actions),
            ["View profile", "View snacks", "Edit account", "Log out"]
        );
        assert_eq!(
            actions[0].command,
            MenuCommand::OpenUrl("https://expo.io/@jane/".into())
        );
        assert_eq!(
            actions[1].command,
            MenuCommand::OpenUrl("https://expo.io/snacks/@jane/".into())
        );
        assert_eq!(
            actions[2].command,
            MenuCommand::OpenUrl("https://expo.io/settings/profile/".into())
        );
        assert_eq!(actions[3].command, MenuCommand::LogOut);
    }

    #[test]
    fn logged_out_gets_only_log_in() {
        let actions = menu_actions(None, &SiteUrls::new("https://expo.io"));
        assert_eq!(
            actions,
            vec![MenuAction::new("Log in", MenuCommand::LogIn)]
        );
    }

    #[test]
    fn avatar_prefers_session_picture() {
        let with_picture = LoggedUser::new("jane", Some("https://cdn/jane.png".into()));
        let without_picture = LoggedUser::new("jane", None);

        assert_eq!(
            avatar_source(Some(&with_picture), "/avatar.svg"),
            "https://cdn/jane.png"
        );
        assert_eq!(avatar_source(Some(&without_picture), "/avatar.svg"), "/avatar.svg");
        assert_eq!(avatar_source(None, "/avatar.svg"), "/avatar.svg");
    }

    #[test]
    fn log_out_runs_logout_callback_once() {
        let opened = Cell::new(0);
        let logged_out = Cell::new(0);
        let logged_in = Cell::new(0);

        MenuCommand::LogOut.run(
            |_| opened.set(opened.get() + 1),
            || logged_out.set(logged_out.get() + 1),
            || logged_in.set(logged_in.get() + 1),
        );

        assert_eq!((opened.get(), logged_out.get(), logged_in.get()), (0, 1, 0));
    }

    #[test]
    fn log_in_runs_login_callback_once() {
        let logged_out = Cell::new(0);
        let logged_in = Cell::new(0);

        let actions = menu_actions(None, &SiteUrls::default());
        actions[0].command.clone().run(
            |url| panic!("unexpected navigation to {url}"),
            || logged_out.set(logged_out.get() + 1),
            || logged_in.set(logged_in.get() + 1),
        );

        assert_eq!((logged_out.get(), logged_in.get()), (0, 1));
    }

    #[test]
    fn open_url_hands_over_the_url() {
        let mut opened = None;
        MenuCommand::OpenUrl("https://expo.io/@jane/".into()).run(
            |url| opened = Some(url),
            || {},
            || {},
        );
        assert_eq!(opened.as_deref(), Some("https://expo.io/@jane/"));
    }
}
