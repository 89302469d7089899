use std::time::Duration;

use pretty_assertions::assert_eq;
use studio_extern_contracts::gallery::{GalleryApiResponse, GalleryApiService};
use studio_extern_impl::{
    gallery::{GalleryApiServiceConfig, GalleryApiServiceImpl},
    http::HttpClient,
};
use studio_models::gallery::{GalleryBrand, GalleryBrandId};
use studio_testing::gallery;

const ACCESS_TOKEN: &str = "test-token";

#[tokio::test]
async fn list_brands() {
    let sut = make_sut().await;

    let result = sut.list_brands(ACCESS_TOKEN).await.unwrap();

    assert_eq!(
        result,
        GalleryApiResponse::Ok(vec![GalleryBrand {
            id: gallery::BRAND_ID.into(),
            name: "Test Studio".into(),
            url: Some("https://studio.example.com/".parse().unwrap()),
        }])
    );
}

#[tokio::test]
async fn list_brands_unauthorized() {
    let sut = make_sut().await;

    let result = sut.list_brands("expired").await.unwrap();

    assert_eq!(result, GalleryApiResponse::Unauthorized);
}

#[tokio::test]
async fn list_events() {
    let sut = make_sut().await;

    let GalleryApiResponse::Ok(events) = sut
        .list_events(ACCESS_TOKEN, gallery::BRAND_ID.into())
        .await
        .unwrap()
    else {
        panic!("expected events");
    };

    assert_eq!(
        events.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
        ["Fall Minis", "Cake Smash"]
    );
    assert_eq!(events[0].date.as_deref(), Some("2025-10-04"));
    assert_eq!(events[1].url, None);
}

#[tokio::test]
async fn list_events_unknown_brand() {
    let sut = make_sut().await;

    let result = sut
        .list_events(ACCESS_TOKEN, GalleryBrandId::from(7))
        .await;

    assert!(result.is_err());
}

async fn make_sut() -> GalleryApiServiceImpl {
    let addr = studio_testing::spawn(gallery::router(ACCESS_TOKEN.into()))
        .await
        .unwrap();
    let config =
        GalleryApiServiceConfig::new(Some(format!("http://{addr}/").parse().unwrap())).unwrap();
    GalleryApiServiceImpl::new(config, HttpClient::new(Duration::from_secs(5)).unwrap())
}
