use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Environment, File, FileFormat};
pub use duration::Duration;
use serde::Deserialize;
use studio_models::{
    email_address::EmailAddressWithName,
    site::{Navigation, SocialLink},
};
use url::Url;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of additional config files, applied after the
/// default config in the given order.
pub const CONFIG_PATHS_ENV: &str = "STUDIO_CONFIG";

/// Prefix of environment variables overriding config values, e.g.
/// `STUDIO__CONTACT__RECIPIENT` overrides `contact.recipient`.
pub const ENV_PREFIX: &str = "STUDIO";
const ENV_SEPARATOR: &str = "__";

/// Load the default config, the files listed in `STUDIO_CONFIG` and the
/// environment overrides.
pub fn load_default() -> anyhow::Result<Config> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Some(extra) = std::env::var_os(CONFIG_PATHS_ENV) {
        paths.extend(std::env::split_paths(&extra).filter(|p| !p.as_os_str().is_empty()));
    }
    load(&paths)
}

/// Load the config from the given TOML files (later files take precedence)
/// and apply environment overrides on top.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_override(paths, &[])
}

/// Like [`load`], but additionally applies the given TOML snippets after all
/// other sources.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

    overrides
        .iter()
        .fold(builder, |builder, &snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub gallery: GalleryConfig,
    pub site: SiteConfig,
    pub client: ClientConfig,
    pub sentry: Option<SentryConfig>,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub address: SocketAddr,
    /// Maximum accepted request body size in bytes.
    pub body_limit: usize,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub provider: EmailProvider,
    /// The verified sender address.
    #[serde(default, deserialize_with = "non_empty")]
    pub from: Option<EmailAddressWithName>,
    pub timeout: Duration,
    #[serde(default)]
    pub resend: ResendConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    Resend,
    Smtp,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResendConfig {
    #[serde(default, deserialize_with = "non_empty")]
    pub api_key: Option<String>,
    pub endpoint_override: Option<Url>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SmtpConfig {
    #[serde(default, deserialize_with = "non_empty")]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// The mailbox contact messages are delivered to.
    #[serde(default, deserialize_with = "non_empty")]
    pub recipient: Option<EmailAddressWithName>,
    /// Prepended verbatim to every subject, followed by a single space.
    #[serde(default, deserialize_with = "non_blank")]
    pub subject_prefix: Option<String>,
    pub brand: BrandConfig,
}

#[derive(Debug, Deserialize)]
pub struct BrandConfig {
    pub name: String,
    pub url: Option<Url>,
    pub logo: Option<Url>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogConfig {
    /// Replaces the built-in service catalog with the JSON file at this path.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct GalleryConfig {
    pub endpoint_override: Option<Url>,
    #[serde(default, deserialize_with = "non_empty")]
    pub access_token: Option<String>,
    /// Where visitors are sent to connect the gallery platform account.
    pub connect_url: Option<Url>,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    pub navigation: Navigation,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    pub booking_url: Option<Url>,
    pub availability_url: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the server the `contact send` command talks to.
    pub url: Url,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct SentryConfig {
    pub dsn: Url,
}

/// Treats empty strings (e.g. `STUDIO__CONTACT__RECIPIENT=`) like missing
/// values.
fn non_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => s
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Like [`non_empty`], but keeps the value untrimmed.
fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
    }

    #[test]
    fn overrides_take_precedence() {
        let config = load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &[
                "contact.recipient = \"inbox@example.com\"",
                "contact.subject_prefix = \"[Web]\"",
                "email.resend.api_key = \"\"",
            ],
        )
        .unwrap();

        assert_eq!(
            config.contact.recipient.as_ref().map(|x| x.email()),
            Some("inbox@example.com")
        );
        assert_eq!(config.contact.subject_prefix.as_deref(), Some("[Web]"));
        assert_eq!(config.email.resend.api_key, None);
    }

    #[test]
    fn subject_prefix_is_kept_verbatim() {
        let config = load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &["contact.subject_prefix = \"[Web] \""],
        )
        .unwrap();
        assert_eq!(config.contact.subject_prefix.as_deref(), Some("[Web] "));

        let config = load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &["contact.subject_prefix = \"  \""],
        )
        .unwrap();
        assert_eq!(config.contact.subject_prefix, None);
    }

    #[test]
    fn invalid_recipient_is_rejected() {
        let result = load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &["contact.recipient = \"not an address\""],
        );
        assert!(result.is_err());
    }
}
