use studio_models::catalog::{InterestOption, Service};

/// Read access to the static service catalog.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CatalogService: Send + Sync + 'static {
    /// Return all services in catalog order.
    fn list_services(&self) -> Vec<Service>;

    /// Return the service with the given slug.
    fn get_service(&self, slug: &str) -> Option<Service>;

    /// Return the options of the contact form's interest dropdown.
    ///
    /// The first option is always the general inquiry with an empty value.
    /// If `preselect` is given and does not match any option, it is appended
    /// verbatim so deep links to a specific package keep their label.
    fn interest_options(&self, preselect: Option<String>) -> Vec<InterestOption>;

    /// Return the interest label of a package, e.g. `Maternity — The Total Bump`.
    fn package_interest(&self, slug: &str, package: &str) -> Option<String>;
}

#[cfg(feature = "mock")]
impl MockCatalogService {
    pub fn with_list_services(mut self, result: Vec<Service>) -> Self {
        self.expect_list_services()
            .once()
            .return_once(move || result);
        self
    }

    pub fn with_get_service(mut self, slug: String, result: Option<Service>) -> Self {
        self.expect_get_service()
            .once()
            .withf(move |s| s == slug)
            .return_once(move |_| result);
        self
    }

    pub fn with_interest_options(
        mut self,
        preselect: Option<String>,
        result: Vec<InterestOption>,
    ) -> Self {
        self.expect_interest_options()
            .once()
            .with(mockall::predicate::eq(preselect))
            .return_once(move |_| result);
        self
    }
}
