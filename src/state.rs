use tutordesk_cache::{CacheConfig, CountCache};
use tutordesk_config::{ApiConfig, UploadConfig};
use tutordesk_core::AppError;

use crate::api::ApiClient;

/// Everything a screen needs to talk to the backend.
///
/// Cheap to clone: the client and the count cache are shared handles.
#[derive(Clone, Debug)]
pub struct AppState {
    pub client: ApiClient,
    pub counts: CountCache,
    pub upload_config: UploadConfig,
}

impl AppState {
    pub fn new(
        api_config: ApiConfig,
        cache_config: &CacheConfig,
        upload_config: UploadConfig,
    ) -> Result<Self, AppError> {
        Ok(Self {
            client: ApiClient::new(api_config)?,
            counts: CountCache::new(cache_config),
            upload_config,
        })
    }
}

/// Builds the state from environment configuration, pointing the client at
/// `api_url` when given.
pub fn init_app_state(api_url: Option<&str>) -> Result<AppState, AppError> {
    let mut api_config = ApiConfig::from_env();
    if let Some(url) = api_url {
        api_config = api_config.with_base_url(url);
    }

    AppState::new(
        api_config,
        &CacheConfig::from_env(),
        UploadConfig::from_env(),
    )
}
