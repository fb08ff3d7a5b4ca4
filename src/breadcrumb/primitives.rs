//! Structural breadcrumb primitives.
//!
//! Each primitive renders exactly one semantic element with a fixed default
//! class list. The caller's class is merged after the defaults, pass-through
//! attributes are applied last (replacing a default of the same name), and
//! an optional [`NodeRef`] is bound to the rendered element.
//!
//! ```
//! use reinhardt_breadcrumb::breadcrumb::{Breadcrumb, BreadcrumbItem, BreadcrumbList, BreadcrumbPage};
//! use reinhardt_breadcrumb::component::Component;
//!
//! let page = BreadcrumbPage::new().child("Docs").render()?;
//! let item = BreadcrumbItem::new().child(page).render()?;
//! let list = BreadcrumbList::new().child(item).render()?;
//! let nav = Breadcrumb::new().child(list).render()?;
//!
//! assert!(nav.render_to_string().starts_with("<nav aria-label=\"breadcrumb\"><ol"));
//! # Ok::<(), reinhardt_breadcrumb::error::ComponentError>(())
//! ```

use super::icons;
use crate::cn;
use crate::component::Component;
use crate::error::Result;
use crate::node_ref::NodeRef;
use crate::page::{Attrs, IntoPage, Page, PageElement};
use std::borrow::Cow;

/// Default classes of [`BreadcrumbList`].
pub const LIST_CLASS: &str =
	"flex flex-wrap items-center gap-1.5 break-words text-sm text-muted-foreground sm:gap-2.5";
/// Default classes of [`BreadcrumbItem`].
pub const ITEM_CLASS: &str = "inline-flex items-center gap-1.5";
/// Default classes of [`BreadcrumbPage`].
pub const PAGE_CLASS: &str = "font-normal text-foreground";
/// Default classes of [`BreadcrumbSeparator`].
pub const SEPARATOR_CLASS: &str = "[&>svg]:w-3.5 [&>svg]:h-3.5";
/// Default classes of [`BreadcrumbEllipsis`].
pub const ELLIPSIS_CLASS: &str = "flex h-9 w-9 items-center justify-center";

/// Props shared by every primitive: caller class, pass-through attributes
/// and the forwarded reference.
#[derive(Debug, Clone, Default)]
pub struct PrimitiveProps {
	pub(crate) class: Option<String>,
	pub(crate) attrs: Attrs,
	pub(crate) node_ref: Option<NodeRef>,
}

impl PrimitiveProps {
	/// Returns the caller class, if one was set.
	pub fn class(&self) -> Option<&str> {
		self.class.as_deref()
	}

	/// Returns the pass-through attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Applies class, attributes and reference to `el`.
	pub(crate) fn apply(&self, el: PageElement, default_class: &str) -> PageElement {
		el.class_attr(cn!(default_class, self.class))
			.override_attrs(self.attrs.clone())
			.node_ref(self.node_ref.clone())
	}
}

/// Builder methods every primitive exposes through its `props` field.
macro_rules! impl_primitive_props {
	($ty:ty) => {
		impl $ty {
			/// Sets the caller class, merged after the default classes.
			pub fn class(mut self, class: impl Into<String>) -> Self {
				self.props.class = Some(class.into());
				self
			}

			/// Sets the caller class when one is given.
			pub fn maybe_class(mut self, class: Option<impl Into<String>>) -> Self {
				if let Some(class) = class {
					self.props.class = Some(class.into());
				}
				self
			}

			/// Adds a pass-through attribute.
			pub fn attr(
				mut self,
				name: impl Into<std::borrow::Cow<'static, str>>,
				value: impl Into<std::borrow::Cow<'static, str>>,
			) -> Self {
				self.props.attrs.push((name.into(), value.into()));
				self
			}

			/// Forwards a reference to the rendered element.
			pub fn node_ref(mut self, node_ref: &$crate::node_ref::NodeRef) -> Self {
				self.props.node_ref = Some(node_ref.clone());
				self
			}

			/// Returns the shared props.
			pub fn props(&self) -> &$crate::breadcrumb::primitives::PrimitiveProps {
				&self.props
			}
		}
	};
}

/// Builder methods for primitives that accept content.
macro_rules! impl_children {
	($ty:ty) => {
		impl $ty {
			/// Adds a child view.
			pub fn child(mut self, child: impl IntoPage) -> Self {
				self.children.push(child.into_page());
				self
			}

			/// Adds multiple child views.
			pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
				self.children
					.extend(children.into_iter().map(|c| c.into_page()));
				self
			}
		}
	};
}

pub(crate) use impl_primitive_props;

/// Root `<nav aria-label="breadcrumb">` landmark.
#[derive(Debug, Clone, Default)]
pub struct Breadcrumb {
	props: PrimitiveProps,
	children: Vec<Page>,
	separator: Option<Page>,
}

impl Breadcrumb {
	/// Creates an empty breadcrumb landmark.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets custom separator content for composites built on this root.
	///
	/// The root does not render it; [`DynamicBreadcrumb`](super::DynamicBreadcrumb)
	/// reads it back through [`separator_content`](Self::separator_content) for
	/// every separator it places in the list.
	pub fn separator(mut self, separator: impl IntoPage) -> Self {
		self.separator = Some(separator.into_page());
		self
	}

	/// Returns the custom separator content, if any.
	pub fn separator_content(&self) -> Option<&Page> {
		self.separator.as_ref()
	}
}

impl_primitive_props!(Breadcrumb);
impl_children!(Breadcrumb);

impl Component for Breadcrumb {
	fn render(&self) -> Result<Page> {
		tracing::trace!(component = Self::name(), "rendering breadcrumb primitive");
		let nav = PageElement::new("nav").attr("aria-label", "breadcrumb");
		Ok(self
			.props
			.apply(nav, "")
			.children(self.children.clone())
			.into_page())
	}

	fn name() -> &'static str {
		"Breadcrumb"
	}
}

/// Ordered list holding the trail.
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbList {
	props: PrimitiveProps,
	children: Vec<Page>,
}

impl BreadcrumbList {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self::default()
	}
}

impl_primitive_props!(BreadcrumbList);
impl_children!(BreadcrumbList);

impl Component for BreadcrumbList {
	fn render(&self) -> Result<Page> {
		tracing::trace!(component = Self::name(), "rendering breadcrumb primitive");
		Ok(self
			.props
			.apply(PageElement::new("ol"), LIST_CLASS)
			.children(self.children.clone())
			.into_page())
	}

	fn name() -> &'static str {
		"BreadcrumbList"
	}
}

/// One `<li>` of the trail.
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbItem {
	props: PrimitiveProps,
	children: Vec<Page>,
	key: Option<String>,
}

impl BreadcrumbItem {
	/// Creates an empty item.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the reconciliation key of the rendered element.
	pub fn key(mut self, key: impl Into<String>) -> Self {
		self.key = Some(key.into());
		self
	}
}

impl_primitive_props!(BreadcrumbItem);
impl_children!(BreadcrumbItem);

impl Component for BreadcrumbItem {
	fn render(&self) -> Result<Page> {
		tracing::trace!(component = Self::name(), "rendering breadcrumb primitive");
		let mut li = self
			.props
			.apply(PageElement::new("li"), ITEM_CLASS)
			.children(self.children.clone());
		if let Some(key) = &self.key {
			li = li.key(key.clone());
		}
		Ok(li.into_page())
	}

	fn name() -> &'static str {
		"BreadcrumbItem"
	}
}

/// The current page: a non-interactive span marked `aria-current="page"`.
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbPage {
	props: PrimitiveProps,
	children: Vec<Page>,
}

impl BreadcrumbPage {
	/// Creates an empty current-page span.
	pub fn new() -> Self {
		Self::default()
	}
}

impl_primitive_props!(BreadcrumbPage);
impl_children!(BreadcrumbPage);

impl Component for BreadcrumbPage {
	fn render(&self) -> Result<Page> {
		tracing::trace!(component = Self::name(), "rendering breadcrumb primitive");
		let span = PageElement::new("span")
			.attr("role", "link")
			.attr("aria-disabled", "true")
			.attr("aria-current", "page");
		Ok(self
			.props
			.apply(span, PAGE_CLASS)
			.children(self.children.clone())
			.into_page())
	}

	fn name() -> &'static str {
		"BreadcrumbPage"
	}
}

/// Decorative separator item, hidden from assistive technology.
///
/// Renders its children, or a chevron when it has none.
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbSeparator {
	props: PrimitiveProps,
	children: Vec<Page>,
}

impl BreadcrumbSeparator {
	/// Creates a separator with the default chevron.
	pub fn new() -> Self {
		Self::default()
	}
}

impl_primitive_props!(BreadcrumbSeparator);
impl_children!(BreadcrumbSeparator);

impl Component for BreadcrumbSeparator {
	fn render(&self) -> Result<Page> {
		tracing::trace!(component = Self::name(), "rendering breadcrumb primitive");
		let li = PageElement::new("li")
			.attr("role", "presentation")
			.attr("aria-hidden", "true");
		let li = self.props.apply(li, SEPARATOR_CLASS);
		let li = if self.children.is_empty() {
			li.child(icons::chevron_right())
		} else {
			li.children(self.children.clone())
		};
		Ok(li.into_page())
	}

	fn name() -> &'static str {
		"BreadcrumbSeparator"
	}
}

/// "More" indicator for collapsed trails.
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbEllipsis {
	props: PrimitiveProps,
}

impl BreadcrumbEllipsis {
	/// Creates an ellipsis indicator.
	pub fn new() -> Self {
		Self::default()
	}
}

impl_primitive_props!(BreadcrumbEllipsis);

impl Component for BreadcrumbEllipsis {
	fn render(&self) -> Result<Page> {
		tracing::trace!(component = Self::name(), "rendering breadcrumb primitive");
		let span = PageElement::new("span")
			.attr("role", "presentation")
			.attr("aria-hidden", "true");
		Ok(self
			.props
			.apply(span, ELLIPSIS_CLASS)
			.child(icons::more_horizontal("h-4 w-4"))
			.child(PageElement::new("span").attr("class", "sr-only").child("More"))
			.into_page())
	}

	fn name() -> &'static str {
		"BreadcrumbEllipsis"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn root(page: &Page) -> &PageElement {
		page.as_element().unwrap()
	}

	#[rstest]
	fn test_breadcrumb_nav_landmark() {
		let page = Breadcrumb::new().child("x").render().unwrap();
		assert_eq!(page.render_to_string(), "<nav aria-label=\"breadcrumb\">x</nav>");
	}

	#[rstest]
	fn test_breadcrumb_passthrough_overrides_label() {
		let page = Breadcrumb::new()
			.attr("aria-label", "Trail")
			.attr("id", "crumbs")
			.render()
			.unwrap();
		assert_eq!(
			page.render_to_string(),
			"<nav aria-label=\"Trail\" id=\"crumbs\"></nav>"
		);
	}

	#[rstest]
	fn test_breadcrumb_keeps_separator_content() {
		let crumb = Breadcrumb::new().separator("/");
		assert_eq!(
			crumb.separator_content().map(Page::render_to_string),
			Some("/".to_string())
		);
	}

	#[rstest]
	fn test_list_default_and_caller_class() {
		let page = BreadcrumbList::new().class("text-base px-2").render().unwrap();
		let el = root(&page);
		assert_eq!(el.tag_name(), "ol");
		assert_eq!(
			el.get_attr("class"),
			Some("flex flex-wrap items-center gap-1.5 break-words text-muted-foreground sm:gap-2.5 text-base px-2")
		);
	}

	#[rstest]
	#[case("text-ellipsis", "font-normal text-foreground text-ellipsis")]
	#[case("text-nowrap", "font-normal text-foreground text-nowrap")]
	#[case("text-primary", "font-normal text-primary")]
	fn test_page_caller_text_utilities(#[case] class: &str, #[case] expected: &str) {
		let page = BreadcrumbPage::new().class(class).render().unwrap();
		assert_eq!(root(&page).get_attr("class"), Some(expected));
	}

	#[rstest]
	fn test_list_arbitrary_font_size_replaces_size_only() {
		let page = BreadcrumbList::new().class("text-[13px]").render().unwrap();
		assert_eq!(
			root(&page).get_attr("class"),
			Some("flex flex-wrap items-center gap-1.5 break-words text-muted-foreground sm:gap-2.5 text-[13px]")
		);
	}

	#[rstest]
	fn test_item_key_and_children() {
		let page = BreadcrumbItem::new().key("/shop").child("Shop").render().unwrap();
		let el = root(&page);
		assert_eq!(el.tag_name(), "li");
		assert_eq!(el.key_value(), Some("/shop"));
		assert_eq!(el.get_attr("class"), Some(ITEM_CLASS));
		assert_eq!(page.text_content(), "Shop");
	}

	#[rstest]
	fn test_page_is_current_and_not_a_link() {
		let page = BreadcrumbPage::new().child("Men Shoes").render().unwrap();
		assert_eq!(
			page.render_to_string(),
			"<span role=\"link\" aria-disabled=\"true\" aria-current=\"page\" class=\"font-normal text-foreground\">Men Shoes</span>"
		);
	}

	#[rstest]
	fn test_separator_defaults_to_chevron() {
		let page = BreadcrumbSeparator::new().render().unwrap();
		let el = root(&page);
		assert_eq!(el.get_attr("role"), Some("presentation"));
		assert_eq!(el.get_attr("aria-hidden"), Some("true"));
		assert!(!el.has_attr("href"));
		assert_eq!(page.find_elements(|e| e.tag_name() == "svg").len(), 1);
	}

	#[rstest]
	fn test_separator_with_custom_content() {
		let page = BreadcrumbSeparator::new().child("/").render().unwrap();
		assert!(page.find_elements(|e| e.tag_name() == "svg").is_empty());
		assert_eq!(page.text_content(), "/");
	}

	#[rstest]
	fn test_ellipsis_has_hidden_label() {
		let page = BreadcrumbEllipsis::new().render().unwrap();
		let el = root(&page);
		assert_eq!(el.tag_name(), "span");
		assert_eq!(el.get_attr("aria-hidden"), Some("true"));
		assert_eq!(el.get_attr("class"), Some(ELLIPSIS_CLASS));
		let labels = page.find_elements(|e| e.get_attr("class") == Some("sr-only"));
		assert_eq!(labels.len(), 1);
		assert_eq!(page.text_content(), "More");
	}

	#[rstest]
	fn test_node_ref_bound_on_render() {
		let node_ref = NodeRef::new();
		let page = BreadcrumbList::new().node_ref(&node_ref).render().unwrap();
		assert!(!node_ref.is_bound());
		page.render_to_string();
		assert_eq!(node_ref.get().map(|h| h.tag_name().to_string()), Some("ol".to_string()));
	}

	#[rstest]
	fn test_component_names() {
		assert_eq!(Breadcrumb::name(), "Breadcrumb");
		assert_eq!(BreadcrumbList::name(), "BreadcrumbList");
		assert_eq!(BreadcrumbItem::name(), "BreadcrumbItem");
		assert_eq!(BreadcrumbPage::name(), "BreadcrumbPage");
		assert_eq!(BreadcrumbSeparator::name(), "BreadcrumbSeparator");
		assert_eq!(BreadcrumbEllipsis::name(), "BreadcrumbEllipsis");
	}
}
