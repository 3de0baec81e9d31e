use maud::{html, Markup, DOCTYPE};
use prompts_core::{DocumentRoot, PageMetadata, ThemeInitializer};

use super::{background_decoration, LayoutShell, LayoutVariant};

pub const STYLESHEET: &str = "/styles/site.css";

/// Assemble a full HTML document around a page body.
///
/// Each call builds a fresh view tree, so a fresh [`ThemeInitializer`] is
/// mounted against its root before anything is rendered.
pub fn render_document(metadata: &PageMetadata, variant: LayoutVariant, body: Markup) -> Markup {
    let mut root = DocumentRoot::new();
    ThemeInitializer::new().mount(&mut root);

    html! {
        (DOCTYPE)
        html lang="en" class=(root.class_attr()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="dark";
                title { (metadata.title) }
                meta name="description" content=(metadata.description);
                link rel="stylesheet" href=(STYLESHEET);
            }
            body class="antialiased" {
                (background_decoration())
                (LayoutShell::new(variant).render(body))
            }
        }
    }
}
