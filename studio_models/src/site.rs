use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    /// Whether this link points at the page `path` or one of its sub pages.
    /// The root link is only active on the root page itself.
    pub fn is_active(&self, path: &str) -> bool {
        if self.href == "/" {
            return path == "/";
        }
        path == self.href
            || path
                .strip_prefix(self.href.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// One navigation description shared by the header and the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub links: Vec<NavLink>,
    pub show_socials: bool,
    pub show_logo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: Url,
}

/// Embeddable third-party pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteEmbeds {
    pub booking_url: Option<Url>,
    pub availability_url: Option<Url>,
}

/// The site chrome as rendered for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub links: Vec<SiteNavLink>,
    pub show_socials: bool,
    pub show_logo: bool,
    pub socials: Vec<SocialLink>,
    pub embeds: SiteEmbeds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteNavLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}
