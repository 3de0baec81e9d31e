//! Server-rendered view components.
//!
//! - [`layout`]: the full-height layout shell shared by every route branch
//! - [`background`]: the fixed decorative backdrop
//! - [`page`]: route page shells that delegate to injected renderers
//! - [`client`]: mount points for the browser-side collaborators
//! - [`document`]: assembles head, theme marker and body into a full page

pub mod background;
pub mod client;
pub mod document;
pub mod layout;
pub mod page;

pub use background::background_decoration;
pub use client::ClientMount;
pub use document::render_document;
pub use layout::{LayoutShell, LayoutVariant};
pub use page::{CategoryPage, PromptPage};
