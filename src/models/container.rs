use serde::{Deserialize, Serialize};

use super::{Application, Permission};

/// Template stacking children vertically.
pub const ROWS_TEMPLATE: &str = "system:/groovy/portal/webui/container/UIContainer.gtmpl";
/// Template laying children out side by side.
pub const COLUMNS_TEMPLATE: &str =
    "system:/groovy/portal/webui/container/UITableColumnContainer.gtmpl";

pub const DEFAULT_ACCESS_PERMISSION: Permission = Permission::EVERYONE;
pub const DEFAULT_MOVE_APPS_PERMISSION: Permission = Permission::EVERYONE;
pub const DEFAULT_MOVE_CONTAINERS_PERMISSION: Permission = Permission::EVERYONE;

/// A child in a page's layout tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContainerItem {
    Application(Application),
    Container(Container),
}

impl From<Application> for ContainerItem {
    fn from(application: Application) -> Self {
        Self::Application(application)
    }
}

impl From<Container> for ContainerItem {
    fn from(container: Container) -> Self {
        Self::Container(container)
    }
}

impl ContainerItem {
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Self::Container(container) => Some(container),
            Self::Application(_) => None,
        }
    }

    pub fn as_application(&self) -> Option<&Application> {
        match self {
            Self::Application(application) => Some(application),
            Self::Container(_) => None,
        }
    }
}

/// A block of content on a page whose template lays out its children.
///
/// The child list is handed out by reference and may be changed freely.
/// Such changes stay local to this value: they reach other readers only
/// once the owning page is saved again through [`crate::Portal::save_page`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    children: Vec<ContainerItem>,
    template: String,
    access_permission: Permission,
    move_apps_permission: Permission,
    move_containers_permission: Permission,
}

impl Container {
    /// A container using a custom template.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            children: Vec::new(),
            template: template.into(),
            access_permission: DEFAULT_ACCESS_PERMISSION,
            move_apps_permission: DEFAULT_MOVE_APPS_PERMISSION,
            move_containers_permission: DEFAULT_MOVE_CONTAINERS_PERMISSION,
        }
    }

    pub fn rows() -> Self {
        Self::new(ROWS_TEMPLATE)
    }

    pub fn columns() -> Self {
        Self::new(COLUMNS_TEMPLATE)
    }

    pub fn with_children(mut self, children: Vec<ContainerItem>) -> Self {
        self.children = children;
        self
    }

    pub fn children(&self) -> &[ContainerItem] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<ContainerItem> {
        &mut self.children
    }

    pub fn set_children(&mut self, children: Vec<ContainerItem>) {
        self.children = children;
    }

    /// Internal path to the template used when rendering this container.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }

    pub fn access_permission(&self) -> &Permission {
        &self.access_permission
    }

    pub fn set_access_permission(&mut self, permission: Permission) {
        self.access_permission = permission;
    }

    /// Who may move, add and remove child applications.
    pub fn move_apps_permission(&self) -> &Permission {
        &self.move_apps_permission
    }

    pub fn set_move_apps_permission(&mut self, permission: Permission) {
        self.move_apps_permission = permission;
    }

    /// Who may move, add and remove child containers.
    pub fn move_containers_permission(&self) -> &Permission {
        &self.move_containers_permission
    }

    pub fn set_move_containers_permission(&mut self, permission: Permission) {
        self.move_containers_permission = permission;
    }

    /// Number of applications anywhere below this container.
    pub fn application_count(&self) -> usize {
        count_applications(&self.children)
    }
}

pub(crate) fn count_applications(items: &[ContainerItem]) -> usize {
    items
        .iter()
        .map(|item| match item {
            ContainerItem::Application(_) => 1,
            ContainerItem::Container(container) => container.application_count(),
        })
        .sum()
}
