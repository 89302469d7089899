use std::{collections::HashSet, path::Path, sync::Arc};

use anyhow::{ensure, Context};
use studio_core_catalog_contracts::CatalogService;
use studio_models::catalog::{package_interest_label, InterestOption, Service};
use tracing::debug;

const EMBEDDED_CATALOG: &str = include_str!("../assets/services.json");

const GENERAL_INQUIRY: &str = "General inquiry";

#[derive(Debug, Clone)]
pub struct CatalogServiceImpl {
    services: Arc<[Service]>,
}

impl CatalogServiceImpl {
    /// Load the catalog shipped with the binary.
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(EMBEDDED_CATALOG).context("Failed to load embedded service catalog")
    }

    /// Load the catalog from a JSON file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read service catalog {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Failed to load service catalog {}", path.display()))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let services = serde_json::from_str::<Vec<Service>>(json)?;
        Self::new(services)
    }

    pub fn new(services: Vec<Service>) -> anyhow::Result<Self> {
        let mut slugs = HashSet::new();
        for service in &services {
            ensure!(
                slugs.insert(service.slug.as_str()),
                "Duplicate service slug {:?}",
                service.slug
            );
        }

        debug!(services = services.len(), "service catalog loaded");

        Ok(Self {
            services: services.into(),
        })
    }
}

impl CatalogService for CatalogServiceImpl {
    fn list_services(&self) -> Vec<Service> {
        self.services.to_vec()
    }

    fn get_service(&self, slug: &str) -> Option<Service> {
        self.services.iter().find(|s| s.slug == slug).cloned()
    }

    fn interest_options(&self, preselect: Option<String>) -> Vec<InterestOption> {
        let mut options = std::iter::once(InterestOption::new("", GENERAL_INQUIRY))
            .chain(
                self.services
                    .iter()
                    .map(|s| InterestOption::new(&s.title, &s.title)),
            )
            .collect::<Vec<_>>();

        let preselect = preselect
            .map(|p| p.trim().to_owned())
            .filter(|p| !p.is_empty());
        if let Some(preselect) = preselect {
            if !options.iter().any(|o| o.value == preselect) {
                options.push(InterestOption::new(&preselect, &preselect));
            }
        }

        options
    }

    fn package_interest(&self, slug: &str, package: &str) -> Option<String> {
        let service = self.services.iter().find(|s| s.slug == slug)?;
        let package = service.packages.iter().find(|p| p.name == package)?;
        Some(package_interest_label(service, package))
    }
}
