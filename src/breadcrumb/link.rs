//! Breadcrumb link with explicit rendering modes.
//!
//! A link either renders its own `<a>` element, merges its props onto a
//! single caller-supplied element (slot mode), or hands its props to a
//! caller render function.

use super::primitives::{PrimitiveProps, impl_primitive_props};
use crate::cn;
use crate::component::Component;
use crate::error::{ComponentError, Result};
use crate::node_ref::NodeRef;
use crate::page::{Attrs, IntoPage, Page, PageElement};
use std::rc::Rc;

/// Default classes of [`BreadcrumbLink`].
pub const LINK_CLASS: &str = "transition-colors hover:text-foreground";

/// Props computed by a link and handed to a render function.
#[derive(Debug, Clone)]
pub struct LinkProps {
	/// Target path.
	pub href: Option<String>,
	/// Merged class string (defaults followed by the caller class).
	pub class: String,
	/// Pass-through attributes.
	pub attrs: Attrs,
	/// Forwarded reference.
	pub node_ref: Option<NodeRef>,
	/// Link content.
	pub children: Vec<Page>,
}

/// Caller render function for [`LinkMode::RenderWith`].
pub type LinkRenderFn = Rc<dyn Fn(LinkProps) -> Page>;

/// How a [`BreadcrumbLink`] produces its element.
#[derive(Clone, Default)]
pub enum LinkMode {
	/// Render an `<a>` intercepted by the client router.
	#[default]
	Anchor,
	/// Merge the link props onto the single child element.
	AsChild,
	/// Delegate to a caller render function.
	RenderWith(LinkRenderFn),
}

impl std::fmt::Debug for LinkMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Anchor => f.write_str("Anchor"),
			Self::AsChild => f.write_str("AsChild"),
			Self::RenderWith(_) => f.write_str("RenderWith(<fn>)"),
		}
	}
}

/// A navigable breadcrumb entry.
///
/// # Example
///
/// ```
/// use reinhardt_breadcrumb::breadcrumb::BreadcrumbLink;
/// use reinhardt_breadcrumb::component::Component;
/// use reinhardt_breadcrumb::page::PageElement;
///
/// let anchor = BreadcrumbLink::new("/shop").child("Shop").render()?;
/// assert_eq!(
///     anchor.render_to_string(),
///     "<a href=\"/shop\" data-link=\"true\" class=\"transition-colors hover:text-foreground\">Shop</a>",
/// );
///
/// let slotted = BreadcrumbLink::new("/shop")
///     .as_child()
///     .child(PageElement::new("button").child("Shop"))
///     .render()?;
/// assert!(slotted.render_to_string().starts_with("<button "));
/// # Ok::<(), reinhardt_breadcrumb::error::ComponentError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbLink {
	props: PrimitiveProps,
	href: Option<String>,
	mode: LinkMode,
	children: Vec<Page>,
}

impl BreadcrumbLink {
	/// Creates an anchor link pointing at `href`.
	pub fn new(href: impl Into<String>) -> Self {
		Self {
			href: Some(href.into()),
			..Self::default()
		}
	}

	/// Sets the target path.
	pub fn href(mut self, href: impl Into<String>) -> Self {
		self.href = Some(href.into());
		self
	}

	/// Switches to slot mode: the single child element receives the props.
	pub fn as_child(mut self) -> Self {
		self.mode = LinkMode::AsChild;
		self
	}

	/// Renders through `render` instead of emitting an element.
	pub fn render_with<F>(mut self, render: F) -> Self
	where
		F: Fn(LinkProps) -> Page + 'static,
	{
		self.mode = LinkMode::RenderWith(Rc::new(render));
		self
	}

	/// Sets the rendering mode.
	pub fn mode(mut self, mode: LinkMode) -> Self {
		self.mode = mode;
		self
	}

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

	/// Returns the target path.
	pub fn target(&self) -> Option<&str> {
		self.href.as_deref()
	}

	/// Returns the rendering mode.
	pub fn link_mode(&self) -> &LinkMode {
		&self.mode
	}

	fn merged_class(&self) -> String {
		cn!(LINK_CLASS, self.props.class)
	}

	fn link_props(&self) -> LinkProps {
		LinkProps {
			href: self.href.clone(),
			class: self.merged_class(),
			attrs: self.props.attrs.clone(),
			node_ref: self.props.node_ref.clone(),
			children: self.children.clone(),
		}
	}

	fn render_anchor(&self) -> Result<Page> {
		let Some(href) = self.href.clone() else {
			tracing::warn!(component = Self::name(), "anchor link rendered without href");
			return Err(ComponentError::MissingProperty("href"));
		};
		let a = PageElement::new("a")
			.attr("href", href)
			.attr("data-link", "true");
		Ok(self
			.props
			.apply(a, LINK_CLASS)
			.children(self.children.clone())
			.into_page())
	}

	fn render_slot(&self) -> Result<Page> {
		let mut child = match self.children.as_slice() {
			[Page::Element(child)] => child.clone(),
			[_] => {
				tracing::warn!(component = Self::name(), "slot child is not an element");
				return Err(ComponentError::SlotChildNotElement);
			}
			children => {
				tracing::warn!(
					component = Self::name(),
					found = children.len(),
					"slot requires exactly one child element"
				);
				return Err(ComponentError::SlotChildCount {
					found: children.len(),
				});
			}
		};

		// Attributes the child sets itself take precedence over the link's.
		let child_class = child.take_attr("class");
		let class = cn!(LINK_CLASS, self.props.class, child_class);
		if !class.is_empty() {
			child.push_attr("class", class);
		}
		if let Some(href) = &self.href
			&& !child.has_attr("href")
		{
			child.push_attr("href", href.clone());
		}
		for (name, value) in &self.props.attrs {
			if !child.has_attr(name) {
				child.push_attr(name.clone(), value.clone());
			}
		}
		if let Some(node_ref) = &self.props.node_ref {
			child.push_node_ref(node_ref.clone());
		}

		Ok(child.into_page())
	}
}

impl_primitive_props!(BreadcrumbLink);

impl Component for BreadcrumbLink {
	fn render(&self) -> Result<Page> {
		tracing::trace!(component = Self::name(), mode = ?self.mode, "rendering breadcrumb link");
		match &self.mode {
			LinkMode::Anchor => self.render_anchor(),
			LinkMode::AsChild => self.render_slot(),
			LinkMode::RenderWith(render) => Ok(render(self.link_props())),
		}
	}

	fn name() -> &'static str {
		"BreadcrumbLink"
	}
}
