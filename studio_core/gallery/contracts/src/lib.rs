use std::future::Future;

use studio_models::gallery::{GalleryBrand, GalleryBrandId, GalleryEvent};
use thiserror::Error;
use url::Url;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait GalleryService: Send + Sync + 'static {
    /// Return the brands of the connected gallery account.
    fn list_brands(
        &self,
    ) -> impl Future<Output = Result<Vec<GalleryBrand>, GalleryError>> + Send;

    /// Return the events of the given brand.
    fn list_events(
        &self,
        brand_id: GalleryBrandId,
    ) -> impl Future<Output = Result<Vec<GalleryEvent>, GalleryError>> + Send;
}

#[derive(Debug, Error)]
pub enum GalleryError {
    /// No access token is configured or the platform rejected it. The
    /// account has to be (re)connected via `connect_url`.
    #[error("The gallery account is not connected.")]
    NotConnected { connect_url: Option<Url> },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockGalleryService {
    pub fn with_list_brands(mut self, result: Result<Vec<GalleryBrand>, GalleryError>) -> Self {
        self.expect_list_brands()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_events(
        mut self,
        brand_id: GalleryBrandId,
        result: Result<Vec<GalleryEvent>, GalleryError>,
    ) -> Self {
        self.expect_list_events()
            .once()
            .with(mockall::predicate::eq(brand_id))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
