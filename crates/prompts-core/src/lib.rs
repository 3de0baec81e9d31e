//! # Prompts Core
//!
//! Framework-independent pieces of the Prompts for Everyone site:
//!
//! - [`crawl`]: the robots crawl policy and its path matching rules
//! - [`theme`]: the one-shot dark theme initializer and the document root it marks
//! - [`route`]: route parameters, page metadata and the client renderer seams
//!
//! Nothing in here performs I/O, so every operation is total.

pub mod crawl;
pub mod route;
pub mod theme;

pub use crawl::{get_crawl_policy, CrawlPolicy, CrawlVerdict, SITEMAP_URL};
pub use route::{
    CategoryClientProps, CategoryParams, CategoryRenderer, PageMetadata, PromptClientProps,
    PromptRenderer, RouteParams,
};
pub use theme::{DocumentRoot, ThemeInitializer, ThemeState, DARK_CLASS};
