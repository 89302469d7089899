use std::sync::Arc;

use anyhow::Context;
use reqwest::{header::ACCEPT, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use studio_extern_contracts::gallery::{GalleryApiResponse, GalleryApiService};
use studio_models::gallery::{GalleryBrand, GalleryBrandId, GalleryEvent, GalleryEventId};
use url::Url;

use crate::http::HttpClient;

const API_ENDPOINT: &str = "https://api.shootproof.com/studio/";
const MEDIA_TYPE: &str = "application/vnd.shootproof+json";

#[derive(Debug, Clone)]
pub struct GalleryApiServiceImpl {
    config: GalleryApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct GalleryApiServiceConfig {
    endpoint: Arc<Url>,
}

impl GalleryApiServiceConfig {
    pub fn new(endpoint_override: Option<Url>) -> anyhow::Result<Self> {
        let endpoint = match endpoint_override {
            Some(endpoint) => endpoint,
            None => API_ENDPOINT.parse()?,
        };
        Ok(Self {
            endpoint: endpoint.into(),
        })
    }
}

impl GalleryApiServiceImpl {
    pub fn new(config: GalleryApiServiceConfig, http: HttpClient) -> Self {
        Self { config, http }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        access_token: &str,
        path: &str,
    ) -> anyhow::Result<GalleryApiResponse<T>> {
        let url = self
            .config
            .endpoint
            .join(path)
            .context("Failed to build gallery URL")?;

        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .header(ACCEPT, MEDIA_TYPE)
            .send()
            .await
            .context("Failed to send gallery request")?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(GalleryApiResponse::Unauthorized);
        }

        response
            .error_for_status()
            .context("Gallery request returned an error")?
            .json::<T>()
            .await
            .map(GalleryApiResponse::Ok)
            .context("Failed to deserialize gallery response")
    }
}

impl GalleryApiService for GalleryApiServiceImpl {
    async fn list_brands(
        &self,
        access_token: &str,
    ) -> anyhow::Result<GalleryApiResponse<Vec<GalleryBrand>>> {
        let response = self.get::<Items<Brand>>(access_token, "brand").await?;
        Ok(map_items(response))
    }

    async fn list_events(
        &self,
        access_token: &str,
        brand_id: GalleryBrandId,
    ) -> anyhow::Result<GalleryApiResponse<Vec<GalleryEvent>>> {
        let response = self
            .get::<Items<Event>>(access_token, &format!("brand/{brand_id}/event"))
            .await?;
        Ok(map_items(response))
    }
}

fn map_items<T, U: From<T>>(
    response: GalleryApiResponse<Items<T>>,
) -> GalleryApiResponse<Vec<U>> {
    match response {
        GalleryApiResponse::Ok(Items { items }) => {
            GalleryApiResponse::Ok(items.into_iter().map(Into::into).collect())
        }
        GalleryApiResponse::Unauthorized => GalleryApiResponse::Unauthorized,
    }
}

#[derive(Deserialize)]
struct Items<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Deserialize)]
struct Brand {
    id: u64,
    name: String,
    #[serde(rename = "websiteUrl")]
    website_url: Option<Url>,
}

impl From<Brand> for GalleryBrand {
    fn from(value: Brand) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            url: value.website_url,
        }
    }
}

#[derive(Deserialize)]
struct Event {
    id: u64,
    name: String,
    #[serde(rename = "eventDate")]
    event_date: Option<String>,
    #[serde(rename = "galleryUrl")]
    gallery_url: Option<Url>,
}

impl From<Event> for GalleryEvent {
    fn from(value: Event) -> Self {
        Self {
            id: GalleryEventId::from(value.id),
            name: value.name,
            date: value.event_date,
            url: value.gallery_url,
        }
    }
}
