use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Social network a connection edge or linked account is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Facebook,
    Instagram,
    Twitter,
    Youtube,
    Snapchat,
    Linkedin,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported provider \"{0}\"")]
pub struct UnsupportedProvider(pub String);

impl Provider {
    pub const ALL: [Provider; 6] = [
        Provider::Facebook,
        Provider::Instagram,
        Provider::Twitter,
        Provider::Youtube,
        Provider::Snapchat,
        Provider::Linkedin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Facebook => "facebook",
            Provider::Instagram => "instagram",
            Provider::Twitter => "twitter",
            Provider::Youtube => "youtube",
            Provider::Snapchat => "snapchat",
            Provider::Linkedin => "linkedin",
        }
    }
}

impl FromStr for Provider {
    type Err = UnsupportedProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "facebook" => Ok(Provider::Facebook),
            "instagram" => Ok(Provider::Instagram),
            "twitter" => Ok(Provider::Twitter),
            "youtube" => Ok(Provider::Youtube),
            "snapchat" => Ok(Provider::Snapchat),
            "linkedin" => Ok(Provider::Linkedin),
            _ => Err(UnsupportedProvider(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
