use std::net::SocketAddr;

use axum::Router;
use studio_core_catalog_contracts::CatalogService;
use studio_core_contact_contracts::ContactService;
use studio_core_gallery_contracts::GalleryService;
use studio_core_site_contracts::SiteService;
use studio_email_contracts::EmailService;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod extractors;
mod middlewares;
mod routes;

#[derive(Debug, Clone, Default)]
pub struct RestServer<Contact, Catalog, Gallery, Site, Email> {
    pub contact: Contact,
    pub catalog: Catalog,
    pub gallery: Gallery,
    pub site: Site,
    pub email: Email,
    pub config: RestServerConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct RestServerConfig {
    /// Maximum size of a request body in bytes.
    pub body_limit: usize,
    /// Whether contact submissions can be delivered at all.
    pub email_configured: bool,
}

impl Default for RestServerConfig {
    fn default() -> Self {
        Self {
            body_limit: 64 * 1024,
            email_configured: false,
        }
    }
}

impl<Contact, Catalog, Gallery, Site, Email> RestServer<Contact, Catalog, Gallery, Site, Email>
where
    Contact: ContactService,
    Catalog: CatalogService,
    Gallery: GalleryService,
    Site: SiteService,
    Email: EmailService,
{
    pub async fn serve(self, address: SocketAddr) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind(address).await?;
        info!("listening on {}", listener.local_addr()?);
        axum::serve(listener, router).await.map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(
                self.email,
                self.config.email_configured,
            ))
            .merge(routes::contact::router(
                self.contact.into(),
                self.config.body_limit,
            ))
            .merge(routes::catalog::router(self.catalog.into()))
            .merge(routes::gallery::router(self.gallery.into()))
            .merge(routes::site::router(self.site.into()));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
