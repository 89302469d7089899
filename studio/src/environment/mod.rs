//! Wiring of the concrete service implementations.

use anyhow::Context;
use studio_api_rest::RestServerConfig;
use studio_config::{Config, EmailConfig, EmailProvider};
use studio_core_catalog_impl::CatalogServiceImpl;
use studio_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use studio_core_gallery_impl::{GalleryServiceConfig, GalleryServiceImpl};
use studio_core_site_impl::{SiteServiceConfig, SiteServiceImpl};
use studio_email_impl::{EmailServiceImpl, ResendEmailService, SmtpEmailService};
use studio_extern_impl::{
    gallery::{GalleryApiServiceConfig, GalleryApiServiceImpl},
    http::HttpClient,
    resend::{ResendApiServiceConfig, ResendApiServiceImpl},
};
use studio_models::site::SiteEmbeds;
use studio_templates_contracts::TemplateBrand;
use studio_templates_impl::TemplateServiceImpl;
use tracing::{error, warn};
use types::{Catalog, Contact, Email, Gallery, RestServer, Site};

pub mod types;

#[derive(Debug, Clone)]
pub struct Environment {
    pub email: Email,
    pub contact: Contact,
    pub catalog: Catalog,
    pub gallery: Gallery,
    pub site: Site,
    pub rest_server_config: RestServerConfig,
}

impl Environment {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let email = email(&config.email)?;

        let recipient = match (&config.contact.recipient, email.is_enabled()) {
            (Some(recipient), true) => Some(recipient.clone()),
            (None, _) => {
                error!("contact.recipient is not set, contact submissions cannot be delivered");
                None
            }
            (Some(_), false) => None,
        };
        let email_configured = recipient.is_some();

        let brand = &config.contact.brand;
        let contact = ContactServiceImpl::new(
            email.clone(),
            TemplateServiceImpl::new()?,
            ContactServiceConfig {
                recipient,
                subject_prefix: config.contact.subject_prefix.clone(),
                brand: TemplateBrand {
                    name: brand.name.clone(),
                    url: brand.url.as_ref().map(ToString::to_string),
                    logo: brand.logo.as_ref().map(ToString::to_string),
                },
            },
        );

        let catalog = match &config.catalog.path {
            Some(path) => CatalogServiceImpl::from_file(path)?,
            None => CatalogServiceImpl::embedded()?,
        };

        let gallery_api = GalleryApiServiceImpl::new(
            GalleryApiServiceConfig::new(config.gallery.endpoint_override.clone())?,
            HttpClient::new(*config.gallery.timeout)?,
        );
        let gallery = GalleryServiceImpl::new(
            gallery_api,
            GalleryServiceConfig {
                access_token: config.gallery.access_token.clone(),
                connect_url: config.gallery.connect_url.clone(),
            },
        );

        let site = SiteServiceImpl::new(SiteServiceConfig {
            navigation: config.site.navigation.clone(),
            socials: config.site.socials.clone(),
            embeds: SiteEmbeds {
                booking_url: config.site.booking_url.clone(),
                availability_url: config.site.availability_url.clone(),
            },
        });

        Ok(Self {
            email,
            contact,
            catalog,
            gallery,
            site,
            rest_server_config: RestServerConfig {
                body_limit: config.http.body_limit,
                email_configured,
            },
        })
    }

    pub fn rest_server(self) -> RestServer {
        RestServer {
            contact: self.contact,
            catalog: self.catalog,
            gallery: self.gallery,
            site: self.site,
            email: self.email,
            config: self.rest_server_config,
        }
    }
}

/// Select the email backend. Missing credentials or sender address disable
/// delivery instead of failing startup.
pub fn email(config: &EmailConfig) -> anyhow::Result<Email> {
    let Some(from) = config.from.clone() else {
        warn!("email.from is not set, email delivery is disabled");
        return Ok(EmailServiceImpl::Disabled);
    };

    match config.provider {
        EmailProvider::Resend => {
            let Some(api_key) = config.resend.api_key.as_deref() else {
                warn!("email.resend.api_key is not set, email delivery is disabled");
                return Ok(EmailServiceImpl::Disabled);
            };
            let api = ResendApiServiceImpl::new(
                ResendApiServiceConfig::new(config.resend.endpoint_override.clone())?,
                HttpClient::new(*config.timeout)?,
            );
            Ok(EmailServiceImpl::Resend(ResendEmailService::new(
                api, api_key, from,
            )))
        }
        EmailProvider::Smtp => {
            let Some(url) = config.smtp.url.as_deref() else {
                warn!("email.smtp.url is not set, email delivery is disabled");
                return Ok(EmailServiceImpl::Disabled);
            };
            SmtpEmailService::new(url, from, *config.timeout)
                .map(EmailServiceImpl::Smtp)
                .context("Failed to configure SMTP transport")
        }
    }
}
