//! Page types for breadcrumb rendering.
//!
//! `Page` is the renderable tree every breadcrumb primitive produces. It can
//! represent DOM elements, text nodes, fragments, or content that is derived
//! again on every render.
//!
//! ## Example
//!
//! ```
//! use reinhardt_breadcrumb::page::{IntoPage, PageElement};
//!
//! let view = PageElement::new("li")
//!     .attr("class", "inline-flex")
//!     .child("Home")
//!     .into_page();
//!
//! assert_eq!(view.render_to_string(), "<li class=\"inline-flex\">Home</li>");
//! ```

use crate::node_ref::{NodeHandle, NodeRef};
use std::borrow::Cow;
use std::rc::Rc;

/// Attribute list shared by elements and pass-through props.
pub type Attrs = Vec<(Cow<'static, str>, Cow<'static, str>)>;

/// Re-evaluated view.
///
/// Holds a closure that builds a `Page` each time the tree is rendered, so
/// the output follows whatever state the closure reads.
#[derive(Clone)]
pub struct Reactive {
	render: Rc<dyn Fn() -> Page + 'static>,
}

impl std::fmt::Debug for Reactive {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Reactive")
			.field("render", &"<closure>")
			.finish()
	}
}

impl Reactive {
	/// Returns the rendered view.
	pub fn render(&self) -> Page {
		(self.render)()
	}
}

/// A unified representation of renderable content.
#[derive(Debug, Clone)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple views (no wrapper element).
	Fragment(Vec<Page>),
	/// An empty view (renders nothing).
	Empty,
	/// A view derived again on every render.
	Reactive(Reactive),
}

/// Represents a DOM element in the view tree.
#[derive(Debug, Clone)]
pub struct PageElement {
	/// The tag name (e.g., "li", "span").
	tag: Cow<'static, str>,
	/// HTML attributes, in insertion order.
	attrs: Attrs,
	/// Child views.
	children: Vec<Page>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
	/// Reconciliation key. Not rendered.
	key: Option<Cow<'static, str>>,
	/// References bound to this element when it is rendered.
	node_refs: Vec<NodeRef>,
}

impl PageElement {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
			key: None,
			node_refs: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Applies caller attributes on top of the existing ones.
	///
	/// An attribute that is already present has its value replaced in place;
	/// new attributes are appended in order.
	pub fn override_attrs(mut self, attrs: Attrs) -> Self {
		for (name, value) in attrs {
			match self.attrs.iter_mut().find(|(n, _)| *n == name) {
				Some(existing) => existing.1 = value,
				None => self.attrs.push((name, value)),
			}
		}
		self
	}

	/// Adds the `class` attribute unless the merged class string is empty.
	pub fn class_attr(self, class: String) -> Self {
		if class.is_empty() {
			self
		} else {
			self.attr("class", class)
		}
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

	/// Sets the reconciliation key.
	pub fn key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
		self.key = Some(key.into());
		self
	}

	/// Attaches a reference that is bound when this element renders.
	pub fn node_ref(mut self, node_ref: Option<NodeRef>) -> Self {
		if let Some(node_ref) = node_ref {
			self.node_refs.push(node_ref);
		}
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of the first attribute named `name`.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns whether an attribute named `name` is present.
	pub fn has_attr(&self, name: &str) -> bool {
		self.attrs.iter().any(|(n, _)| n == name)
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[Page] {
		&self.children
	}

	/// Returns the reconciliation key.
	pub fn key_value(&self) -> Option<&str> {
		self.key.as_deref()
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Removes and returns the attribute named `name`.
	pub(crate) fn take_attr(&mut self, name: &str) -> Option<Cow<'static, str>> {
		let index = self.attrs.iter().position(|(n, _)| n == name)?;
		Some(self.attrs.remove(index).1)
	}

	/// Adds an attribute mutably.
	pub(crate) fn push_attr(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) {
		self.attrs.push((name.into(), value.into()));
	}

	/// Attaches a reference mutably.
	pub(crate) fn push_node_ref(&mut self, node_ref: NodeRef) {
		self.node_refs.push(node_ref);
	}
}

impl Page {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_page()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Creates a view that is rebuilt by `render` every time it is rendered.
	pub fn reactive<F>(render: F) -> Self
	where
		F: Fn() -> Page + 'static,
	{
		Page::Reactive(Reactive {
			render: Rc::new(render),
		})
	}

	/// Returns the element if this view is one.
	pub fn as_element(&self) -> Option<&PageElement> {
		match self {
			Page::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Visits every element of the tree in document order.
	///
	/// Reactive views are not expanded; render them first with
	/// [`Reactive::render`] to inspect their output.
	pub fn walk_elements<'a>(&'a self, visit: &mut impl FnMut(&'a PageElement)) {
		match self {
			Page::Element(el) => {
				visit(el);
				for child in el.child_views() {
					child.walk_elements(visit);
				}
			}
			Page::Fragment(children) => {
				for child in children {
					child.walk_elements(visit);
				}
			}
			Page::Text(_) | Page::Empty | Page::Reactive(_) => {}
		}
	}

	/// Collects every element matching `predicate`, in document order.
	pub fn find_elements(&self, predicate: impl Fn(&PageElement) -> bool) -> Vec<&PageElement> {
		let mut found = Vec::new();
		self.walk_elements(&mut |el| {
			if predicate(el) {
				found.push(el);
			}
		});
		found
	}

	/// Returns the concatenated text content of the tree.
	pub fn text_content(&self) -> String {
		let mut output = String::new();
		self.text_content_inner(&mut output);
		output
	}

	fn text_content_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				for child in el.child_views() {
					child.text_content_inner(output);
				}
			}
			Page::Text(text) => output.push_str(text),
			Page::Fragment(children) => {
				for child in children {
					child.text_content_inner(output);
				}
			}
			Page::Empty => {}
			Page::Reactive(reactive) => reactive.render().text_content_inner(output),
		}
	}

	/// Renders the view to an HTML string.
	///
	/// Binds every attached [`NodeRef`] to the element it was attached to.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape::encode_double_quoted_attribute(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}

				for node_ref in &el.node_refs {
					node_ref.bind(NodeHandle::new(el.tag.clone(), el.attrs.clone()));
				}
			}
			Page::Text(text) => {
				output.push_str(&html_escape::encode_text(text));
			}
			Page::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Page::Empty => {}
			Page::Reactive(reactive) => {
				reactive.render().render_to_string_inner(output);
			}
		}
	}
}

/// Trait for types that can be converted into a Page.
pub trait IntoPage {
	/// Converts self into a Page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self.clone()))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(|v| v.into_page()).collect())
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}

impl<A: IntoPage, B: IntoPage> IntoPage for (A, B) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![self.0.into_page(), self.1.into_page()])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::cell::Cell;

	#[rstest]
	fn test_void_element_detection() {
		assert!(PageElement::new("br").is_void());
		assert!(PageElement::new("img").is_void());
		assert!(!PageElement::new("li").is_void());
		assert!(!PageElement::new("span").is_void());
	}

	#[rstest]
	fn test_render_element_with_children() {
		let view = PageElement::new("ol")
			.child(PageElement::new("li").child("Home"))
			.child(PageElement::new("li").child("Shop"))
			.into_page();
		assert_eq!(
			view.render_to_string(),
			"<ol><li>Home</li><li>Shop</li></ol>"
		);
	}

	#[rstest]
	fn test_render_void_element() {
		let view = PageElement::new("br").into_page();
		assert_eq!(view.render_to_string(), "<br />");
	}

	#[rstest]
	fn test_render_text_with_escaping() {
		let view = Page::text("<script>");
		assert_eq!(view.render_to_string(), "&lt;script&gt;");
	}

	#[rstest]
	fn test_render_attr_with_escaping() {
		let view = PageElement::new("a").attr("href", "/a?x=1&y=2").into_page();
		assert_eq!(view.render_to_string(), "<a href=\"/a?x=1&amp;y=2\"></a>");
	}

	#[rstest]
	fn test_key_is_not_rendered() {
		let view = PageElement::new("li").key("/shop").child("Shop").into_page();
		assert_eq!(view.render_to_string(), "<li>Shop</li>");
		assert_eq!(view.as_element().and_then(|el| el.key_value()), Some("/shop"));
	}

	#[rstest]
	fn test_empty_class_attr_is_skipped() {
		let view = PageElement::new("nav").class_attr(String::new()).into_page();
		assert_eq!(view.render_to_string(), "<nav></nav>");
	}

	#[rstest]
	fn test_fragment_and_option() {
		let view = Page::fragment(vec![Some("A").into_page(), None::<String>.into_page(), "B".into_page()]);
		assert_eq!(view.render_to_string(), "AB");
	}

	#[rstest]
	fn test_find_elements_in_document_order() {
		let view = PageElement::new("ol")
			.child(PageElement::new("li").attr("id", "1"))
			.child(Page::fragment(vec![PageElement::new("li").attr("id", "2")]))
			.into_page();
		let ids: Vec<_> = view
			.find_elements(|el| el.tag_name() == "li")
			.iter()
			.filter_map(|el| el.get_attr("id"))
			.collect();
		assert_eq!(ids, vec!["1", "2"]);
	}

	#[rstest]
	fn test_reactive_rerenders_each_time() {
		let calls = Rc::new(Cell::new(0));
		let counter = calls.clone();
		let view = Page::reactive(move || {
			counter.set(counter.get() + 1);
			Page::text(format!("render {}", counter.get()))
		});

		assert_eq!(view.render_to_string(), "render 1");
		assert_eq!(view.render_to_string(), "render 2");
		assert_eq!(view.text_content(), "render 3");
		assert_eq!(calls.get(), 3);
	}

	#[rstest]
	fn test_override_attrs_replaces_in_place() {
		let view = PageElement::new("nav")
			.attr("aria-label", "breadcrumb")
			.override_attrs(vec![
				("aria-label".into(), "trail".into()),
				("id".into(), "crumbs".into()),
			])
			.into_page();
		assert_eq!(
			view.render_to_string(),
			"<nav aria-label=\"trail\" id=\"crumbs\"></nav>"
		);
	}

	#[rstest]
	fn test_take_attr_removes_first_match() {
		let mut el = PageElement::new("a").attr("href", "/x").attr("class", "c");
		assert_eq!(el.take_attr("href").as_deref(), Some("/x"));
		assert!(!el.has_attr("href"));
		assert_eq!(el.take_attr("href"), None);
	}
}
