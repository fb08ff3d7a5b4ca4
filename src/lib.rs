//! # Reinhardt Breadcrumb
//!
//! Breadcrumb navigation components for Reinhardt pages.
//!
//! The crate provides the structural primitives of a breadcrumb trail
//! (landmark, list, item, link, current page, separator, ellipsis) and a
//! composite that derives the whole trail from the current URL path.
//! Components render to a [`Page`](page::Page) tree that serializes to HTML.
//!
//! ## Derivation
//!
//! The trail logic is a pure function of the path, independent of rendering:
//!
//! ```
//! use reinhardt_breadcrumb::prelude::*;
//!
//! let trail = derive_trail("/shop/men-shoes", &TrailOptions::default());
//! assert_eq!(trail.len(), 3);
//! assert_eq!(trail.separator_count(), 2);
//! assert_eq!(format_segment("user-settings"), "User Settings");
//! ```
//!
//! ## Rendering
//!
//! ```
//! use reinhardt_breadcrumb::prelude::*;
//!
//! let path = CurrentPath::new("/docs");
//! let view = DynamicBreadcrumb::reactive(path.clone(), BreadcrumbConfig::default());
//! assert_eq!(view.text_content(), "HomeDocs");
//!
//! path.set("/docs/getting-started");
//! assert_eq!(view.text_content(), "HomeDocsGetting Started");
//! ```
//!
//! ## Modules
//!
//! - [`breadcrumb`]: primitives, link modes, trail derivation, composite
//! - [`page`]: renderable view tree
//! - [`class`]: class-list merging ([`cn!`])
//! - [`config`]: TOML configuration
//! - [`location`]: current-path sources
//! - [`node_ref`]: forwarded element references

pub mod breadcrumb;
pub mod class;
pub mod component;
pub mod config;
pub mod error;
pub mod location;
pub mod node_ref;
pub mod page;
pub mod prelude;

pub use component::Component;
pub use error::{ComponentError, ConfigError, Result};
