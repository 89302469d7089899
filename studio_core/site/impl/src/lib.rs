use std::sync::Arc;

use studio_core_site_contracts::SiteService;
use studio_models::site::{Navigation, Site, SiteEmbeds, SiteNavLink, SocialLink};

#[derive(Debug, Clone)]
pub struct SiteServiceImpl {
    config: Arc<SiteServiceConfig>,
}

#[derive(Debug, Clone)]
pub struct SiteServiceConfig {
    pub navigation: Navigation,
    pub socials: Vec<SocialLink>,
    pub embeds: SiteEmbeds,
}

impl SiteServiceImpl {
    pub fn new(config: SiteServiceConfig) -> Self {
        Self {
            config: config.into(),
        }
    }
}

impl SiteService for SiteServiceImpl {
    fn get_site(&self, path: Option<String>) -> Site {
        let navigation = &self.config.navigation;

        let links = navigation
            .links
            .iter()
            .map(|link| SiteNavLink {
                href: link.href.clone(),
                label: link.label.clone(),
                active: path.as_deref().is_some_and(|p| link.is_active(p)),
            })
            .collect();

        let socials = if navigation.show_socials {
            self.config.socials.clone()
        } else {
            Vec::new()
        };

        Site {
            links,
            show_socials: navigation.show_socials,
            show_logo: navigation.show_logo,
            socials,
            embeds: self.config.embeds.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use studio_models::site::NavLink;

    use super::*;

    fn config(show_socials: bool) -> SiteServiceConfig {
        SiteServiceConfig {
            navigation: Navigation {
                links: [("/", "Home"), ("/services", "Services"), ("/contact", "Contact")]
                    .into_iter()
                    .map(|(href, label)| NavLink {
                        href: href.into(),
                        label: label.into(),
                    })
                    .collect(),
                show_socials,
                show_logo: true,
            },
            socials: vec![SocialLink {
                label: "Instagram".into(),
                url: "https://instagram.com/studio".parse().unwrap(),
            }],
            embeds: SiteEmbeds {
                booking_url: Some("https://book.example.com/".parse().unwrap()),
                availability_url: None,
            },
        }
    }

    fn active(site: &Site) -> Vec<&str> {
        site.links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.href.as_str())
            .collect()
    }

    #[test]
    fn active_link() {
        let sut = SiteServiceImpl::new(config(true));

        assert_eq!(active(&sut.get_site(Some("/".into()))), ["/"]);
        assert_eq!(
            active(&sut.get_site(Some("/services/maternity".into()))),
            ["/services"]
        );
        assert_eq!(active(&sut.get_site(None)), Vec::<&str>::new());
    }

    #[test]
    fn socials() {
        let site = SiteServiceImpl::new(config(true)).get_site(None);
        assert!(site.show_socials);
        assert_eq!(site.socials.len(), 1);
        assert_eq!(
            site.embeds.booking_url.unwrap().as_str(),
            "https://book.example.com/"
        );
    }

    #[test]
    fn hidden_socials() {
        let site = SiteServiceImpl::new(config(false)).get_site(None);
        assert!(!site.show_socials);
        assert!(site.socials.is_empty());
        assert!(site.show_logo);
    }
}
