use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CompositionError, Result};

const EVERYONE_TEXT: &str = "Everyone";
const ANY_MEMBERSHIP: &str = "*";

/// An access-control descriptor restricting an operation to certain users.
///
/// Permissions are only described here, never evaluated. The text form is
/// either `Everyone` or a comma-separated list of `type:/group` memberships,
/// e.g. `manager:/platform/administrators,*:/platform/users`.
///
/// Every membership is validated when it is created, so the text form of
/// any `Permission` always parses back to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission {
    /// Empty means everyone.
    memberships: Vec<Membership>,
}

/// A membership of some type within a group. `*` matches any membership type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Membership {
    membership_type: String,
    group: String,
}

impl Permission {
    pub const EVERYONE: Permission = Permission {
        memberships: Vec::new(),
    };

    pub fn everyone() -> Self {
        Self::EVERYONE
    }

    /// Any membership in `group`.
    pub fn any(group: impl Into<String>) -> Result<Self> {
        Ok(Self::of(vec![Membership::any(group)?]))
    }

    /// An empty list means everyone.
    pub fn of(memberships: Vec<Membership>) -> Self {
        Self { memberships }
    }

    pub fn is_everyone(&self) -> bool {
        self.memberships.is_empty()
    }

    pub fn memberships(&self) -> &[Membership] {
        &self.memberships
    }
}

impl Membership {
    /// Fails with [`CompositionError::InvalidPermission`] unless the type is
    /// non-empty and free of `:` and `,`, and the group starts with `/` and
    /// has no `,`. Neither part may carry surrounding whitespace.
    pub fn new(membership_type: impl Into<String>, group: impl Into<String>) -> Result<Self> {
        let membership = Self::new_unchecked(membership_type, group);
        if membership.is_valid() {
            Ok(membership)
        } else {
            Err(CompositionError::InvalidPermission(membership.to_string()))
        }
    }

    pub fn any(group: impl Into<String>) -> Result<Self> {
        Self::new(ANY_MEMBERSHIP, group)
    }

    /// For built-in memberships known to be valid.
    pub(crate) fn new_unchecked(
        membership_type: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            membership_type: membership_type.into(),
            group: group.into(),
        }
    }

    pub fn membership_type(&self) -> &str {
        &self.membership_type
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    fn is_valid(&self) -> bool {
        let (membership_type, group) = (self.membership_type.as_str(), self.group.as_str());
        !membership_type.is_empty()
            && membership_type == membership_type.trim()
            && !membership_type.contains([':', ','])
            && group.starts_with('/')
            && group == group.trim()
            && !group.contains(',')
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.membership_type, self.group)
    }
}

impl FromStr for Membership {
    type Err = CompositionError;

    fn from_str(s: &str) -> Result<Self> {
        let entry = s.trim();
        let (membership_type, group) = entry
            .split_once(':')
            .ok_or_else(|| CompositionError::InvalidPermission(entry.to_string()))?;
        Self::new(membership_type.trim(), group.trim())
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_everyone() {
            return f.write_str(EVERYONE_TEXT);
        }
        let entries: Vec<String> = self.memberships.iter().map(|m| m.to_string()).collect();
        f.write_str(&entries.join(","))
    }
}

impl FromStr for Permission {
    type Err = CompositionError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if text == EVERYONE_TEXT {
            return Ok(Self::EVERYONE);
        }
        if text.is_empty() {
            return Err(CompositionError::InvalidPermission(s.to_string()));
        }

        let memberships = text
            .split(',')
            .map(Membership::from_str)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::of(memberships))
    }
}

impl TryFrom<String> for Permission {
    type Error = CompositionError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.to_string()
    }
}
