use std::sync::Arc;

use studio_core_gallery_contracts::{GalleryError, GalleryService};
use studio_extern_contracts::gallery::{GalleryApiResponse, GalleryApiService};
use studio_models::gallery::{GalleryBrand, GalleryBrandId, GalleryEvent};
use tracing::warn;
use url::Url;

#[derive(Debug, Clone)]
pub struct GalleryServiceImpl<Api> {
    api: Api,
    config: Arc<GalleryServiceConfig>,
}

#[derive(Debug, Clone)]
pub struct GalleryServiceConfig {
    pub access_token: Option<String>,
    /// Where the studio owner can connect the gallery account.
    pub connect_url: Option<Url>,
}

impl<Api> GalleryServiceImpl<Api> {
    pub fn new(api: Api, config: GalleryServiceConfig) -> Self {
        Self {
            api,
            config: config.into(),
        }
    }

    fn not_connected(&self) -> GalleryError {
        GalleryError::NotConnected {
            connect_url: self.config.connect_url.clone(),
        }
    }

    fn access_token(&self) -> Result<&str, GalleryError> {
        self.config
            .access_token
            .as_deref()
            .ok_or_else(|| self.not_connected())
    }

    fn unwrap_response<T>(&self, response: GalleryApiResponse<T>) -> Result<T, GalleryError> {
        match response {
            GalleryApiResponse::Ok(value) => Ok(value),
            GalleryApiResponse::Unauthorized => {
                warn!("gallery platform rejected the access token");
                Err(self.not_connected())
            }
        }
    }
}

impl<Api> GalleryService for GalleryServiceImpl<Api>
where
    Api: GalleryApiService,
{
    async fn list_brands(&self) -> Result<Vec<GalleryBrand>, GalleryError> {
        let access_token = self.access_token()?;
        let response = self.api.list_brands(access_token).await?;
        self.unwrap_response(response)
    }

    async fn list_events(
        &self,
        brand_id: GalleryBrandId,
    ) -> Result<Vec<GalleryEvent>, GalleryError> {
        let access_token = self.access_token()?;
        let response = self.api.list_events(access_token, brand_id).await?;
        self.unwrap_response(response)
    }
}
