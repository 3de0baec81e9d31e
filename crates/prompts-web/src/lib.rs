pub mod routes;
pub mod server;
pub mod state;
pub mod theme;
pub mod views;

mod assets;
mod error;

pub use error::{Result, WebError};
pub use prompts_config::WebConfig;
pub use server::{build_router, start_server};
pub use state::AppState;
pub use theme::SiteTheme;
