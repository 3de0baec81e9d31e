//! # Prompts Configuration
//!
//! Typed configuration for the Prompts site server.
//!
//! ## Features
//!
//! - TOML, YAML and JSON files, chosen by extension
//! - Serde defaults for every field, so an empty file is valid
//! - Environment overrides (`PROMPTS_HOST`, `PROMPTS_PORT`, `PROMPTS_STATIC_DIR`, `PROMPTS_LOG`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prompts_config::ConfigLoader;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::load(Some("prompts.toml".as_ref())).await?;
//!     println!("listening on {}", config.web.socket_addr()?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod loader;

pub use config::*;
pub use loader::*;
