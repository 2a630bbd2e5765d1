use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session json is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("session username is empty")]
    EmptyUsername,
}

/// The profile data of the signed-in user.
///
/// A logged-out state is represented by the absence of a `LoggedUser`
/// (`Option<LoggedUser>::None`), never by an empty record.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LoggedUser {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl LoggedUser {
    pub fn new(username: impl Into<String>, picture: Option<String>) -> Self {
        Self {
            username: username.into(),
            picture,
        }
    }

    /// Parses a session handed over by the host page.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        let user: Self = serde_json::from_str(json)?;
        if user.username.trim().is_empty() {
            return Err(SessionError::EmptyUsername);
        }
        Ok(user)
    }

    /// The picture url, if one is set and non-empty.
    pub fn picture(&self) -> Option<&str> {
        self.picture.as_deref().filter(|p| !p.is_empty())
    }
}
