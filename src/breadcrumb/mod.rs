//! Breadcrumb navigation components.
//!
//! The primitives ([`Breadcrumb`], [`BreadcrumbList`], [`BreadcrumbItem`],
//! [`BreadcrumbLink`], [`BreadcrumbPage`], [`BreadcrumbSeparator`],
//! [`BreadcrumbEllipsis`]) compose custom trails by hand.
//! [`DynamicBreadcrumb`] builds the trail for the current path.

pub mod dynamic;
pub mod icons;
pub mod link;
pub mod primitives;
pub mod trail;

pub use dynamic::DynamicBreadcrumb;
pub use link::{BreadcrumbLink, LINK_CLASS, LinkMode, LinkProps, LinkRenderFn};
pub use primitives::{
	Breadcrumb, BreadcrumbEllipsis, BreadcrumbItem, BreadcrumbList, BreadcrumbPage,
	BreadcrumbSeparator, PrimitiveProps,
};
pub use trail::{Trail, TrailEntry, TrailOptions, derive_trail, format_segment, path_segments};
