//! Social share links

use std::str::FromStr;

/// Networks a link can be shared on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareNetwork {
    Facebook,
    Twitter,
    Tumblr,
}

impl ShareNetwork {
    pub const ALL: [ShareNetwork; 3] = [
        ShareNetwork::Facebook,
        ShareNetwork::Twitter,
        ShareNetwork::Tumblr,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShareNetwork::Facebook => "facebook",
            ShareNetwork::Twitter => "twitter",
            ShareNetwork::Tumblr => "tumblr",
        }
    }
}

impl std::fmt::Display for ShareNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ShareNetwork {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|network| network.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown share network: {}", s))
    }
}

/// Build the URL that shares `link` on `network`
///
/// `name` and `image` are optional and skipped by networks that have no use
/// for them.
pub fn share_link(
    network: ShareNetwork,
    link: &str,
    name: Option<&str>,
    image: Option<&str>,
) -> String {
    let mut query: Vec<(&str, &str)> = Vec::new();
    let base = match network {
        ShareNetwork::Facebook => {
            query.push(("u", link));
            "https://www.facebook.com/sharer/sharer.php"
        }
        ShareNetwork::Twitter => {
            if let Some(name) = name {
                query.push(("text", name));
            }
            query.push(("url", link));
            "https://twitter.com/intent/tweet"
        }
        ShareNetwork::Tumblr => {
            query.push(("url", link));
            if let Some(name) = name {
                query.push(("name", name));
            }
            if let Some(image) = image {
                query.push(("description", image));
            }
            "https://www.tumblr.com/share/link"
        }
    };

    let query = query
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, query)
}
