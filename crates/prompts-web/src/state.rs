use crate::views::ClientMount;
use prompts_core::{CategoryRenderer, PromptRenderer};
use std::sync::Arc;

/// Shared handler state: the collaborators pages delegate to.
#[derive(Clone)]
pub struct AppState {
    pub prompts: Arc<dyn PromptRenderer>,
    pub categories: Arc<dyn CategoryRenderer>,
}

impl AppState {
    pub fn new(prompts: Arc<dyn PromptRenderer>, categories: Arc<dyn CategoryRenderer>) -> Self {
        Self {
            prompts,
            categories,
        }
    }

    /// Production state: both collaborators are browser-side components
    /// hydrated from a mount point.
    pub fn with_client_mount() -> Self {
        let mount = Arc::new(ClientMount::default());
        Self::new(mount.clone(), mount)
    }
}
