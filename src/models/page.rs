use serde::{Deserialize, Serialize};

use super::container::count_applications;
use super::{ContainerItem, Membership, PageId, Permission, SiteId};

/// Group whose managers may edit a page unless told otherwise.
pub const ADMINISTRATORS_GROUP: &str = "/platform/administrators";

/// Default edit permission: managers of the administrators group.
pub fn default_edit_permission() -> Permission {
    Permission::of(vec![Membership::new_unchecked("manager", ADMINISTRATORS_GROUP)])
}

/// A page of a site, made of a top-level list of layout items.
///
/// Pages are produced by [`crate::PageBuilder::build`] and stored with
/// [`crate::Portal::save_page`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub display_name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub show_max_window: bool,
    pub access_permission: Permission,
    pub edit_permission: Permission,
    pub move_apps_permission: Permission,
    pub move_containers_permission: Permission,
    pub children: Vec<ContainerItem>,
}

impl Page {
    pub fn name(&self) -> &str {
        &self.id.page_name
    }

    pub fn site(&self) -> &SiteId {
        &self.id.site
    }

    pub fn children(&self) -> &[ContainerItem] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<ContainerItem> {
        &mut self.children
    }

    pub fn application_count(&self) -> usize {
        count_applications(&self.children)
    }
}
