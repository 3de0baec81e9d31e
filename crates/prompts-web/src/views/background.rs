use maud::{html, Markup};

pub const BACKGROUND_IMAGE: &str = "/images/background.svg";

/// Fixed, full-viewport backdrop behind page content: the background image at
/// low opacity with a top-to-bottom fade into the base colour.
pub fn background_decoration() -> Markup {
    html! {
        div class="fixed inset-0 -z-10 pointer-events-none" aria-hidden="true" data-decoration="background" {
            div class="absolute inset-0 bg-cover bg-center opacity-20"
                style={ "background-image: url('" (BACKGROUND_IMAGE) "')" } {}
            div class="absolute inset-0 bg-gradient-to-b from-transparent to-gray-950" {}
        }
    }
}
