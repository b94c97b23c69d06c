use serde::{Deserialize, Serialize};

use super::Permission;

/// A piece of content placed on a page: a portlet, a gadget or a remote portlet.
///
/// Applications are the leaves of a page's layout tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub application_type: ApplicationType,
    /// Registry reference of the content, e.g. `web/HelloWorldPortlet`.
    pub content_id: String,
    pub title: Option<String>,
    pub access_permission: Permission,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationType {
    Portlet,
    Gadget,
    Wsrp,
}

impl Application {
    pub fn new(application_type: ApplicationType, content_id: impl Into<String>) -> Self {
        Self {
            application_type,
            content_id: content_id.into(),
            title: None,
            access_permission: Permission::everyone(),
        }
    }

    pub fn portlet(content_id: impl Into<String>) -> Self {
        Self::new(ApplicationType::Portlet, content_id)
    }

    pub fn gadget(content_id: impl Into<String>) -> Self {
        Self::new(ApplicationType::Gadget, content_id)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_access_permission(mut self, permission: Permission) -> Self {
        self.access_permission = permission;
        self
    }
}
