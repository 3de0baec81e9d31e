//! Process-wide site theme.
//!
//! Initialised once when the router is built and never torn down or toggled
//! for the life of the process. Individual view trees still mount their own
//! [`ThemeInitializer`](prompts_core::ThemeInitializer) against their document
//! root; this records which theme those mounts apply.

use prompts_core::ThemeState;
use std::sync::OnceLock;

static SITE_THEME: OnceLock<ThemeState> = OnceLock::new();

pub struct SiteTheme;

impl SiteTheme {
    /// Initialise the site theme. Calls after the first return the stored value.
    pub fn init() -> ThemeState {
        *SITE_THEME.get_or_init(|| {
            tracing::info!("Site theme initialised: dark");
            ThemeState::Dark
        })
    }

    /// `Unthemed` until [`SiteTheme::init`] has run.
    pub fn current() -> ThemeState {
        SITE_THEME.get().copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_dark_and_stable() {
        assert_eq!(SiteTheme::init(), ThemeState::Dark);
        assert_eq!(SiteTheme::init(), ThemeState::Dark);
        assert_eq!(SiteTheme::current(), ThemeState::Dark);
    }
}
