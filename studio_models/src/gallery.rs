use nutype::nutype;
use serde::{Deserialize, Serialize};
use url::Url;

#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deref,
    From,
    Display,
    Serialize,
    Deserialize,
))]
pub struct GalleryBrandId(u64);

#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deref,
    From,
    Display,
    Serialize,
    Deserialize,
))]
pub struct GalleryEventId(u64);

/// A brand (studio identity) on the gallery platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryBrand {
    pub id: GalleryBrandId,
    pub name: String,
    pub url: Option<Url>,
}

/// A client gallery event belonging to a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEvent {
    pub id: GalleryEventId,
    pub name: String,
    pub date: Option<String>,
    pub url: Option<Url>,
}
