// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("no browser window is available")]
    NoWindow,

    #[error("the browser refused to open {0}")]
    Blocked(String),

    #[error("window.open failed: {0}")]
    Js(String),

    #[error("url could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use super::NavigationError;

    /// Opens `url` in a new browsing context.
    pub fn open_in_new_tab(url: &str) -> Result<(), NavigationError> {
        let window = web_sys::window().ok_or(NavigationError::NoWindow)?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            // popup blockers make `window.open` return null
            Ok(None) => Err(NavigationError::Blocked(url.to_string())),
            Err(e) => Err(NavigationError::Js(
                e.as_string().unwrap_or_else(|| format!("{e:?}")),
            )),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use super::NavigationError;
    use dioxus::prelude::*;

    /// Opens `url` in a new browsing context of the webview.
    pub fn open_in_new_tab(url: &str) -> Result<(), NavigationError> {
        let url = serde_json::to_string(url)?;
        document::eval(&format!("window.open({url}, '_blank');"));
        Ok(())
    }
}
