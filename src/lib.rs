//! Page composition for portal sites.
//!
//! A [`Page`] is a tree of [`Container`]s and [`Application`]s. Pages are
//! assembled with a reusable [`PageBuilder`] and saved to a [`Portal`]:
//!
//! ```
//! use page_composer::{Application, Portal};
//!
//! let portal = Portal::new();
//! let page = portal
//!     .new_page_builder()
//!     .child(Application::gadget("Calculator"))
//!     .child(Application::portlet("web/HelloWorldPortlet"))
//!     .site_name("classic")
//!     .site_type("portal")?
//!     .name("my_flat_page")
//!     .build()?;
//!
//! portal.save_page(page)?;
//! # Ok::<(), page_composer::CompositionError>(())
//! ```

pub mod api;
pub mod builder;
pub mod config;
pub mod error;
pub mod models;
pub mod outline;
pub mod portal;

pub use builder::PageBuilder;
pub use error::{CompositionError, Result};
pub use models::*;
pub use portal::{PageQuery, Portal};
