// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::config::MediaProviderConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub allowed_origins: Arc<[String]>,
    pub media_provider: Arc<MediaProviderConfig>,
}
