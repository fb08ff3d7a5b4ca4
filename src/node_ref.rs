//! Forwarded element references.
//!
//! Every breadcrumb primitive accepts a [`NodeRef`]. The reference is bound
//! when the element it was attached to is rendered, giving the caller access
//! to the element that was actually produced.

use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

/// Snapshot of a rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeHandle {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl NodeHandle {
	pub(crate) fn new(
		tag: Cow<'static, str>,
		attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	) -> Self {
		Self { tag, attrs }
	}

	/// Returns the tag name of the rendered element.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the value of the first attribute named `name`.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}
}

/// Shared handle to the element a primitive rendered.
///
/// Clones share the same slot. The slot holds the most recently rendered
/// element.
#[derive(Debug, Clone, Default)]
pub struct NodeRef {
	inner: Rc<RefCell<Option<NodeHandle>>>,
}

impl NodeRef {
	/// Creates an unbound reference.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the bound element, if it has been rendered.
	pub fn get(&self) -> Option<NodeHandle> {
		self.inner.borrow().clone()
	}

	/// Returns whether the reference has been bound.
	pub fn is_bound(&self) -> bool {
		self.inner.borrow().is_some()
	}

	pub(crate) fn bind(&self, handle: NodeHandle) {
		*self.inner.borrow_mut() = Some(handle);
	}
}
