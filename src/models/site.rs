use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of site a page belongs to.
///
/// - `Portal`: a public portal site (e.g. `classic`)
/// - `Site`: a group site, shared by members of a group
/// - `User`: a user's personal dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SiteType {
    Portal,
    Site,
    User,
}

impl SiteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Portal => "portal",
            Self::Site => "site",
            Self::User => "user",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "portal" => Some(Self::Portal),
            "site" => Some(Self::Site),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

impl fmt::Display for SiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies a site by type and name, e.g. `portal:classic`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SiteId {
    pub site_type: SiteType,
    pub name: String,
}

impl SiteId {
    pub fn new(site_type: SiteType, name: impl Into<String>) -> Self {
        Self {
            site_type,
            name: name.into(),
        }
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.site_type, self.name)
    }
}

/// Identifies a page within a site, e.g. `portal:classic:home`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageId {
    pub site: SiteId,
    pub page_name: String,
}

impl PageId {
    pub fn new(site: SiteId, page_name: impl Into<String>) -> Self {
        Self {
            site,
            page_name: page_name.into(),
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.site, self.page_name)
    }
}
