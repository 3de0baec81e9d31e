//! Mount points for the browser-side page components.
//!
//! The server does not fetch or render prompt data. It emits an element the
//! client bundle hydrates, carrying the component name and its props as JSON.

use maud::{html, Markup, PreEscaped};
use prompts_core::{CategoryClientProps, CategoryRenderer, PromptClientProps, PromptRenderer};
use serde::Serialize;

/// Served from `web/public/client/app.js`, a placeholder that only echoes the
/// props. Real deployments ship their bundle under the same path in
/// `web.static_dir`.
pub const DEFAULT_CLIENT_BUNDLE: &str = "/client/app.js";

/// Renderer that defers to the client bundle.
#[derive(Debug, Clone)]
pub struct ClientMount {
    bundle: String,
}

impl Default for ClientMount {
    fn default() -> Self {
        Self::new(DEFAULT_CLIENT_BUNDLE)
    }
}

impl ClientMount {
    pub fn new(bundle: impl Into<String>) -> Self {
        Self {
            bundle: bundle.into(),
        }
    }

    fn script(&self) -> Markup {
        html! { script type="module" src=(self.bundle) {} }
    }
}

/// JSON props for `component`, embedded as a non-executing script the client
/// bundle reads before hydrating.
fn props_island<P: Serialize>(component: &str, props: &P) -> Markup {
    let json = match serde_json::to_string(props) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(component, "failed to encode client props: {e}");
            "{}".to_string()
        }
    };

    // `<` never appears raw inside the script body, so `</script>` in a value
    // cannot close it early.
    let json = json.replace('<', "\\u003c");

    html! {
        script type="application/json" data-props-for=(component) { (PreEscaped(json)) }
    }
}

fn fallback() -> Markup {
    html! { noscript { "JavaScript is required to view this page." } }
}

impl PromptRenderer for ClientMount {
    fn render(&self, props: PromptClientProps) -> Markup {
        html! {
            div data-component="PromptClient" data-prompt-id=(props.id) { (fallback()) }
            (props_island("PromptClient", &props))
            (self.script())
        }
    }
}

impl CategoryRenderer for ClientMount {
    fn render(&self, props: CategoryClientProps) -> Markup {
        html! {
            div data-component="CategoryClient" data-category=(props.category) { (fallback()) }
            (props_island("CategoryClient", &props))
            (self.script())
        }
    }
}
