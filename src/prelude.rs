//! Convenient re-exports for building breadcrumbs.

pub use crate::breadcrumb::{
	Breadcrumb, BreadcrumbEllipsis, BreadcrumbItem, BreadcrumbLink, BreadcrumbList, BreadcrumbPage,
	BreadcrumbSeparator, DynamicBreadcrumb, LinkMode, LinkProps, Trail, TrailEntry, TrailOptions,
	derive_trail, format_segment,
};
pub use crate::cn;
pub use crate::component::Component;
pub use crate::config::{BreadcrumbConfig, ClassOverrides};
pub use crate::error::{ComponentError, ConfigError};
pub use crate::location::{CurrentPath, PathSource, StaticPath};
pub use crate::node_ref::NodeRef;
pub use crate::page::{IntoPage, Page, PageElement};
