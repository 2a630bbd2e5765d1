/// Base of the website the account actions link to.
///
/// Set `EXPO_WEBSITE_URL` at build time to point the menu at another
/// deployment, e.g. a staging site.
pub const DEFAULT_BASE_URL: &str = "https://expo.io";

/// Builds the account pages a logged-in user can open from the menu.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SiteUrls {
    base: String,
}

impl SiteUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn profile(&self, username: &str) -> String {
        format!("{}/@{}/", self.base, username)
    }

    pub fn snacks(&self, username: &str) -> String {
        format!("{}/snacks/@{}/", self.base, username)
    }

    pub fn account_settings(&self) -> String {
        format!("{}/settings/profile/", self.base)
    }
}

impl Default for SiteUrls {
    fn default() -> Self {
        Self::new(option_env!("EXPO_WEBSITE_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}
