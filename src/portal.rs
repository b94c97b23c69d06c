//! In-memory page registry.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::builder::PageBuilder;
use crate::error::{CompositionError, Result};
use crate::models::*;

/// Filter for [`Portal::find_pages`]. Unset fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub site_type: Option<SiteType>,
    pub site_name: Option<String>,
    /// Case-insensitive substring of the display name.
    pub display_name: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl PageQuery {
    pub fn site(site: &SiteId) -> Self {
        Self {
            site_type: Some(site.site_type),
            site_name: Some(site.name.clone()),
            ..Self::default()
        }
    }

    fn matches(&self, page: &Page) -> bool {
        if self.site_type.is_some_and(|t| t != page.site().site_type) {
            return false;
        }
        if self
            .site_name
            .as_deref()
            .is_some_and(|name| name != page.site().name)
        {
            return false;
        }
        match &self.display_name {
            Some(needle) => page
                .display_name
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle.to_lowercase())),
            None => true,
        }
    }
}

/// Where built pages are saved.
///
/// Handles are cheap to clone and share one registry. Pages go in and come
/// out by value, so editing a page after saving it changes nothing here
/// until it is saved again.
#[derive(Clone, Default)]
pub struct Portal {
    pages: Arc<RwLock<BTreeMap<PageId, Page>>>,
}

impl Portal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_page_builder(&self) -> PageBuilder {
        PageBuilder::new()
    }

    /// Stores `page`, replacing any page with the same id.
    ///
    /// Returns `true` when an existing page was replaced.
    pub fn save_page(&self, page: Page) -> Result<bool> {
        let id = page.id.clone();
        let replaced = self.write()?.insert(id.clone(), page).is_some();
        if replaced {
            tracing::info!("Updated page {}", id);
        } else {
            tracing::info!("Saved new page {}", id);
        }
        Ok(replaced)
    }

    pub fn get_page(&self, id: &PageId) -> Result<Option<Page>> {
        Ok(self.read()?.get(id).cloned())
    }

    /// Returns `true` when a page was removed.
    pub fn remove_page(&self, id: &PageId) -> Result<bool> {
        let removed = self.write()?.remove(id).is_some();
        if removed {
            tracing::info!("Removed page {}", id);
        }
        Ok(removed)
    }

    /// Pages matching `query`, ordered by page id.
    pub fn find_pages(&self, query: &PageQuery) -> Result<Vec<Page>> {
        let registry = self.read()?;
        let matching = registry
            .values()
            .filter(|page| query.matches(page))
            .skip(query.offset.unwrap_or(0) as usize);

        let pages = match query.limit {
            Some(limit) => matching.take(limit as usize).cloned().collect(),
            None => matching.cloned().collect(),
        };
        Ok(pages)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<PageId, Page>>> {
        self.pages
            .read()
            .map_err(|_| CompositionError::RegistryPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<PageId, Page>>> {
        self.pages
            .write()
            .map_err(|_| CompositionError::RegistryPoisoned)
    }
}
