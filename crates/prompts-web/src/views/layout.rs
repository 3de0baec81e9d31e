use maud::{html, Markup};

/// Styling variant of the layout shell, one per route branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutVariant {
    #[default]
    Category,
    Prompt,
}

impl LayoutVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutVariant::Category => "category",
            LayoutVariant::Prompt => "prompt",
        }
    }

    fn background_class(self) -> &'static str {
        match self {
            LayoutVariant::Category => "bg-gray-950",
            LayoutVariant::Prompt => "bg-black",
        }
    }
}

/// Full-viewport container with a fixed dark background.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutShell {
    variant: LayoutVariant,
}

impl LayoutShell {
    pub const fn new(variant: LayoutVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> LayoutVariant {
        self.variant
    }

    pub fn render(&self, children: Markup) -> Markup {
        html! {
            div class={ "min-h-screen text-gray-100 " (self.variant.background_class()) }
                data-layout=(self.variant.as_str())
            {
                main class="relative z-0" { (children) }
            }
        }
    }
}
