//! Render-time configuration.

use std::env;

/// Environment variable controlling whether empty menus render at all.
pub const HIDE_EMPTY_ENV: &str = "SENTIERO_HIDE_EMPTY_MENU";

/// Options applied during rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// When set, a menu whose children all filtered away renders as the
    /// empty string instead of an empty wrapper.
    pub hide_empty: bool,
}

impl RenderOptions {
    /// Read options from the environment.
    ///
    /// A missing or unparseable value silently falls back to the default
    /// (`hide_empty = false`).
    pub fn from_env() -> Self {
        Self {
            hide_empty: parse_flag(env::var(HIDE_EMPTY_ENV).ok().as_deref()),
        }
    }

    /// Enable or disable hide-empty mode.
    pub fn hide_empty(mut self, hide_empty: bool) -> Self {
        self.hide_empty = hide_empty;
        self
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    match value {
        Some(v) => matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => false,
    }
}
