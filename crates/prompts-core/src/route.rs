//! Route parameters, page metadata and the client rendering seams.
//!
//! Pages never interpret their identifiers. They hand them, untouched, to an
//! injected renderer that owns fetching, editing and error states.

use maud::Markup;
use serde::{Deserialize, Serialize};

/// Parameters bound from `/prompts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    pub id: String,
}

/// Parameters bound from `/categories/{category}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryParams {
    pub category: String,
}

/// Static head metadata declared by a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

/// Input handed to the prompt client collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptClientProps {
    pub id: String,
}

impl From<RouteParams> for PromptClientProps {
    fn from(params: RouteParams) -> Self {
        Self { id: params.id }
    }
}

/// Input handed to the category client collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryClientProps {
    pub category: String,
}

impl From<CategoryParams> for CategoryClientProps {
    fn from(params: CategoryParams) -> Self {
        Self {
            category: params.category,
        }
    }
}

/// Renders the prompt detail view for an identifier.
pub trait PromptRenderer: Send + Sync {
    fn render(&self, props: PromptClientProps) -> Markup;
}

/// Renders the listing for a category slug.
pub trait CategoryRenderer: Send + Sync {
    fn render(&self, props: CategoryClientProps) -> Markup;
}
