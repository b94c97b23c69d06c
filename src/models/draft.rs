use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Application, ApplicationType, Container, Page, Permission};
use crate::builder::PageBuilder;
use crate::error::Result;

/// Input for creating a page, e.g. from a JSON file or an HTTP request.
///
/// The draft is replayed through [`PageBuilder`], so it is validated exactly
/// like a page assembled in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDraft {
    pub name: String,
    /// One of `portal`, `site` or `user`. Kept as text so the builder can reject it.
    pub site_type: String,
    pub site_name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub show_max_window: bool,
    pub access_permission: Option<Permission>,
    pub edit_permission: Option<Permission>,
    pub move_apps_permission: Option<Permission>,
    pub move_containers_permission: Option<Permission>,
    #[serde(default)]
    pub layout: Vec<DraftItem>,
}

/// One node of a draft layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DraftItem {
    Application {
        application_type: ApplicationType,
        content_id: String,
        title: Option<String>,
        access_permission: Option<Permission>,
    },
    Rows {
        #[serde(default)]
        children: Vec<DraftItem>,
    },
    Columns {
        #[serde(default)]
        children: Vec<DraftItem>,
    },
    Container {
        template: String,
        #[serde(default)]
        children: Vec<DraftItem>,
    },
}

impl PageDraft {
    /// Reads a draft from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn into_page(self) -> Result<Page> {
        let mut builder = PageBuilder::new();
        builder
            .name(self.name)
            .site_name(self.site_name)
            .site_type(&self.site_type)?
            .show_max_window(self.show_max_window);

        if let Some(display_name) = self.display_name {
            builder.display_name(display_name);
        }
        if let Some(description) = self.description {
            builder.description(description);
        }
        if let Some(permission) = self.access_permission {
            builder.access_permission(permission);
        }
        if let Some(permission) = self.edit_permission {
            builder.edit_permission(permission);
        }
        if let Some(permission) = self.move_apps_permission {
            builder.move_apps_permission(permission);
        }
        if let Some(permission) = self.move_containers_permission {
            builder.move_containers_permission(permission);
        }

        for item in self.layout {
            apply_item(&mut builder, item)?;
        }
        builder.build()
    }
}

fn apply_item(builder: &mut PageBuilder, item: DraftItem) -> Result<()> {
    let (container, children) = match item {
        DraftItem::Application {
            application_type,
            content_id,
            title,
            access_permission,
        } => {
            let mut application = Application::new(application_type, content_id);
            application.title = title;
            if let Some(permission) = access_permission {
                application = application.with_access_permission(permission);
            }
            builder.child(application);
            return Ok(());
        }
        DraftItem::Rows { children } => (Container::rows(), children),
        DraftItem::Columns { children } => (Container::columns(), children),
        DraftItem::Container { template, children } => (Container::new(template), children),
    };

    builder.new_custom_container_builder(container);
    for child in children {
        apply_item(builder, child)?;
    }
    builder.build_to_parent_builder()?;
    Ok(())
}
