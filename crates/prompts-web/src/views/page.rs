//! Route page shells.
//!
//! A page pulls its identifier out of the route parameters and forwards it,
//! unvalidated, to the injected renderer. Whatever the renderer returns is the
//! page body.

use maud::Markup;
use prompts_core::{CategoryParams, CategoryRenderer, PageMetadata, PromptRenderer, RouteParams};

use super::LayoutVariant;

/// `/prompts/{id}`
pub struct PromptPage<'a> {
    renderer: &'a dyn PromptRenderer,
}

impl<'a> PromptPage<'a> {
    pub const METADATA: PageMetadata = PageMetadata {
        title: "Prompt Details",
        description: "View and edit prompt details",
    };

    pub const LAYOUT: LayoutVariant = LayoutVariant::Prompt;

    pub fn new(renderer: &'a dyn PromptRenderer) -> Self {
        Self { renderer }
    }

    pub fn render(&self, params: RouteParams) -> Markup {
        self.renderer.render(params.into())
    }
}

/// `/categories/{category}`
pub struct CategoryPage<'a> {
    renderer: &'a dyn CategoryRenderer,
}

impl<'a> CategoryPage<'a> {
    pub const METADATA: PageMetadata = PageMetadata {
        title: "Prompt Categories",
        description: "Browse prompts by category",
    };

    pub const LAYOUT: LayoutVariant = LayoutVariant::Category;

    pub fn new(renderer: &'a dyn CategoryRenderer) -> Self {
        Self { renderer }
    }

    pub fn render(&self, params: CategoryParams) -> Markup {
        self.renderer.render(params.into())
    }
}
