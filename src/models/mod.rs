//! Domain models for page composition.
//!
//! # Core Concepts
//!
//! - [`Page`]: a page of a site, identified by a [`PageId`], holding a layout tree.
//! - [`Container`]: a layout node whose template arranges its children.
//! - [`Application`]: a leaf of the layout tree (portlet, gadget, remote portlet).
//! - [`ContainerItem`]: either of the two above.
//! - [`Permission`]: who may access a node or rearrange its children.
//! - [`PageDraft`]: the serialized input form of a page, replayed through the builder.

mod application;
mod container;
mod draft;
mod page;
mod permission;
mod site;

pub use application::*;
pub use container::*;
pub use draft::*;
pub use page::*;
pub use permission::*;
pub use site::*;
