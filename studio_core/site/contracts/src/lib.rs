use studio_models::site::Site;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SiteService: Send + Sync + 'static {
    /// Return navigation, socials and embeds, with the links matching `path`
    /// flagged as active.
    fn get_site(&self, path: Option<String>) -> Site;
}

#[cfg(feature = "mock")]
impl MockSiteService {
    pub fn with_get_site(mut self, path: Option<String>, result: Site) -> Self {
        self.expect_get_site()
            .once()
            .with(mockall::predicate::eq(path))
            .return_once(move |_| result);
        self
    }
}
