//! Fluent, reusable builder for [`Page`]s.
//!
//! Nested layouts are assembled with a stack of open containers:
//!
//! ```
//! use page_composer::{Application, PageBuilder};
//!
//! let mut builder = PageBuilder::new();
//! let page = builder
//!     .new_rows_builder()
//!     .new_columns_builder()
//!     .child(Application::portlet("web/UsefulLinks"))
//!     .child(Application::gadget("Calculator"))
//!     .build_to_top_builder()
//!     .site_name("classic")
//!     .site_type("portal")?
//!     .name("awesome")
//!     .display_name("Awesome page")
//!     .build()?;
//!
//! assert_eq!(page.application_count(), 2);
//! # Ok::<(), page_composer::CompositionError>(())
//! ```

use crate::error::{CompositionError, Result};
use crate::models::*;

/// Accumulates page settings and layout until [`PageBuilder::build`] is called.
///
/// `build` leaves the builder untouched, so one builder can stamp out several
/// pages that differ in a few settings.
#[derive(Debug, Clone, Default)]
pub struct PageBuilder {
    name: Option<String>,
    site_name: Option<String>,
    site_type: Option<SiteType>,
    display_name: Option<String>,
    description: Option<String>,
    show_max_window: bool,
    access_permission: Option<Permission>,
    edit_permission: Option<Permission>,
    move_apps_permission: Option<Permission>,
    move_containers_permission: Option<Permission>,
    children: Vec<ContainerItem>,
    /// Containers opened by `new_*_builder` and not yet closed, innermost last.
    open: Vec<Container>,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required: the page name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Required: the name of the site this page belongs to.
    pub fn site_name(&mut self, site_name: impl Into<String>) -> &mut Self {
        self.site_name = Some(site_name.into());
        self
    }

    /// Required: one of `portal`, `site` or `user`.
    ///
    /// Any other value is rejected and the builder keeps its previous site type.
    pub fn site_type(&mut self, site_type: &str) -> Result<&mut Self> {
        let parsed = SiteType::from_str(site_type)
            .ok_or_else(|| CompositionError::InvalidSiteType(site_type.to_string()))?;
        self.site_type = Some(parsed);
        Ok(self)
    }

    pub fn display_name(&mut self, display_name: impl Into<String>) -> &mut Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn show_max_window(&mut self, show_max_window: bool) -> &mut Self {
        self.show_max_window = show_max_window;
        self
    }

    /// Defaults to [`DEFAULT_ACCESS_PERMISSION`].
    pub fn access_permission(&mut self, permission: Permission) -> &mut Self {
        self.access_permission = Some(permission);
        self
    }

    /// Defaults to [`default_edit_permission`].
    pub fn edit_permission(&mut self, permission: Permission) -> &mut Self {
        self.edit_permission = Some(permission);
        self
    }

    /// Defaults to [`DEFAULT_MOVE_APPS_PERMISSION`].
    pub fn move_apps_permission(&mut self, permission: Permission) -> &mut Self {
        self.move_apps_permission = Some(permission);
        self
    }

    /// Defaults to [`DEFAULT_MOVE_CONTAINERS_PERMISSION`].
    pub fn move_containers_permission(&mut self, permission: Permission) -> &mut Self {
        self.move_containers_permission = Some(permission);
        self
    }

    /// Appends an item to the innermost open container, or to the page itself.
    pub fn child(&mut self, item: impl Into<ContainerItem>) -> &mut Self {
        let item = item.into();
        match self.open.last_mut() {
            Some(container) => container.children_mut().push(item),
            None => self.children.push(item),
        }
        self
    }

    pub fn children<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<ContainerItem>,
    {
        for item in items {
            self.child(item);
        }
        self
    }

    /// Opens a container stacking its children vertically.
    pub fn new_rows_builder(&mut self) -> &mut Self {
        self.open.push(Container::rows());
        self
    }

    /// Opens a container laying its children out side by side.
    pub fn new_columns_builder(&mut self) -> &mut Self {
        self.open.push(Container::columns());
        self
    }

    /// Opens a caller-supplied container. Children it already has are kept.
    pub fn new_custom_container_builder(&mut self, container: Container) -> &mut Self {
        self.open.push(container);
        self
    }

    /// Closes the innermost open container and appends it to its parent.
    pub fn build_to_parent_builder(&mut self) -> Result<&mut Self> {
        let container = self.open.pop().ok_or(CompositionError::NoOpenContainer)?;
        Ok(self.child(container))
    }

    /// Closes every open container, innermost first.
    pub fn build_to_top_builder(&mut self) -> &mut Self {
        while let Some(container) = self.open.pop() {
            self.child(container);
        }
        self
    }

    /// Number of containers currently open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Builds a new page from the current settings.
    ///
    /// Fails with [`CompositionError::MissingField`] when the name, site name
    /// or site type is missing (blank names count as missing), and with
    /// [`CompositionError::UnclosedContainers`] while nested containers are
    /// still open.
    pub fn build(&self) -> Result<Page> {
        let name = required(&self.name, "name")?;
        let site_name = required(&self.site_name, "site_name")?;
        let site_type = self
            .site_type
            .ok_or(CompositionError::MissingField("site_type"))?;
        if !self.open.is_empty() {
            return Err(CompositionError::UnclosedContainers(self.open.len()));
        }

        let page = Page {
            id: PageId::new(SiteId::new(site_type, site_name), name),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            show_max_window: self.show_max_window,
            access_permission: self
                .access_permission
                .clone()
                .unwrap_or(DEFAULT_ACCESS_PERMISSION),
            edit_permission: self
                .edit_permission
                .clone()
                .unwrap_or_else(default_edit_permission),
            move_apps_permission: self
                .move_apps_permission
                .clone()
                .unwrap_or(DEFAULT_MOVE_APPS_PERMISSION),
            move_containers_permission: self
                .move_containers_permission
                .clone()
                .unwrap_or(DEFAULT_MOVE_CONTAINERS_PERMISSION),
            children: self.children.clone(),
        };

        tracing::debug!(
            "Built page {} with {} application(s)",
            page.id,
            page.application_count()
        );
        Ok(page)
    }
}

fn required(value: &Option<String>, field: &'static str) -> Result<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .ok_or(CompositionError::MissingField(field))
}
