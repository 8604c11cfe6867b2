//! Widget configuration: endpoint URL and display text.
//!
//! The endpoint is read once, at compile time, from `ASSISTANT_API_URL`.
//! WASM bundles have no process environment, so the value is baked in when
//! the crate is built, the same way a bundler inlines its env variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Placeholder endpoint used when `ASSISTANT_API_URL` is unset or blank.
pub const DEFAULT_ENDPOINT: &str = "https://YOUR-ASSISTANT-HOST.example/api/ask";

pub const DEFAULT_GREETING: &str = "Hi! Ask me anything about my skills, projects, experience, or the CV.";

/// Everything the widget needs that is not conversation state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub endpoint: String,
    /// Seed assistant message shown when the widget mounts.
    pub greeting: String,
    pub title: String,
    pub subtitle: String,
    /// Floating button text while the panel is closed.
    pub launcher_label: String,
    pub placeholder: String,
    /// Render assistant replies as markdown instead of plain text.
    pub render_markdown: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            greeting: DEFAULT_GREETING.to_owned(),
            title: "Ask me anything".to_owned(),
            subtitle: "Projects • Skills • Resume".to_owned(),
            launcher_label: "AI Assistant".to_owned(),
            placeholder: "Ask a question…".to_owned(),
            render_markdown: false,
        }
    }
}

impl WidgetConfig {
    /// Default configuration with the endpoint taken from the build
    /// environment.
    pub fn from_build_env() -> Self {
        Self { endpoint: resolve_endpoint(option_env!("ASSISTANT_API_URL")), ..Self::default() }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = resolve_endpoint(Some(&endpoint.into()));
        self
    }
}

/// Resolve a raw endpoint setting, falling back to [`DEFAULT_ENDPOINT`] when
/// it is missing or blank.
pub fn resolve_endpoint(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_ENDPOINT)
        .to_owned()
}
