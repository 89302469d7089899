use studio_core_catalog_impl::CatalogServiceImpl;
use studio_core_contact_impl::ContactServiceImpl;
use studio_core_gallery_impl::GalleryServiceImpl;
use studio_core_site_impl::SiteServiceImpl;
use studio_email_impl::EmailServiceImpl;
use studio_extern_impl::{gallery::GalleryApiServiceImpl, resend::ResendApiServiceImpl};
use studio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = studio_api_rest::RestServer<Contact, Catalog, Gallery, Site, Email>;

// Extern
pub type ResendApi = ResendApiServiceImpl;
pub type GalleryApi = GalleryApiServiceImpl;

// Email
pub type Email = EmailServiceImpl<ResendApi>;
pub type Template = TemplateServiceImpl;

// Core
pub type Contact = ContactServiceImpl<Email, Template>;
pub type Catalog = CatalogServiceImpl;
pub type Gallery = GalleryServiceImpl<GalleryApi>;
pub type Site = SiteServiceImpl;
