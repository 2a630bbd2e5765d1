//! This crate contains the session types shared by the ui and its hosts.

pub mod logged_user;
pub mod site_urls;

pub use logged_user::LoggedUser;
pub use logged_user::SessionError;
pub use site_urls::SiteUrls;
