use std::future::Future;

use studio_models::gallery::{GalleryBrand, GalleryBrandId, GalleryEvent};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait GalleryApiService: Send + Sync + 'static {
    /// Return all brands visible to the account of `access_token`.
    fn list_brands(
        &self,
        access_token: &str,
    ) -> impl Future<Output = anyhow::Result<GalleryApiResponse<Vec<GalleryBrand>>>> + Send;

    /// Return the events (client galleries) of the given brand.
    fn list_events(
        &self,
        access_token: &str,
        brand_id: GalleryBrandId,
    ) -> impl Future<Output = anyhow::Result<GalleryApiResponse<Vec<GalleryEvent>>>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryApiResponse<T> {
    Ok(T),
    /// The platform rejected the access token.
    Unauthorized,
}

#[cfg(feature = "mock")]
impl MockGalleryApiService {
    pub fn with_list_brands(
        mut self,
        access_token: String,
        result: GalleryApiResponse<Vec<GalleryBrand>>,
    ) -> Self {
        self.expect_list_brands()
            .once()
            .with(mockall::predicate::eq(access_token))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_events(
        mut self,
        access_token: String,
        brand_id: GalleryBrandId,
        result: GalleryApiResponse<Vec<GalleryEvent>>,
    ) -> Self {
        self.expect_list_events()
            .once()
            .with(
                mockall::predicate::eq(access_token),
                mockall::predicate::eq(brand_id),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
