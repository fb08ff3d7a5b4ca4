//! Routing context consumed by the dynamic breadcrumb.
//!
//! The breadcrumb only needs the current pathname. [`PathSource`] is the
//! seam to whatever router owns it; [`CurrentPath`] is a shared, observable
//! holder for hosts that drive navigation themselves.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Provides the current URL path.
pub trait PathSource {
	/// Returns the current path, or `None` when the router has none.
	fn current_path(&self) -> Option<String>;
}

/// A fixed path, for server-side rendering of a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPath(pub String);

impl StaticPath {
	/// Creates a fixed path source.
	pub fn new(path: impl Into<String>) -> Self {
		Self(path.into())
	}
}

impl PathSource for StaticPath {
	fn current_path(&self) -> Option<String> {
		Some(self.0.clone())
	}
}

impl<T: PathSource + ?Sized> PathSource for &T {
	fn current_path(&self) -> Option<String> {
		(**self).current_path()
	}
}

impl<T: PathSource + ?Sized> PathSource for Rc<T> {
	fn current_path(&self) -> Option<String> {
		(**self).current_path()
	}
}

type Listener = Rc<dyn Fn(&str)>;

struct CurrentPathInner {
	path: String,
	listeners: Vec<(usize, Listener)>,
	next_id: usize,
}

/// Handle returned by [`CurrentPath::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(usize);

/// Shared current-path state.
///
/// Clones observe the same value. Listeners run synchronously on every
/// change, after the new value is stored.
#[derive(Clone)]
pub struct CurrentPath {
	inner: Rc<RefCell<CurrentPathInner>>,
}

impl fmt::Debug for CurrentPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let inner = self.inner.borrow();
		f.debug_struct("CurrentPath")
			.field("path", &inner.path)
			.field("listeners", &inner.listeners.len())
			.finish()
	}
}

impl Default for CurrentPath {
	fn default() -> Self {
		Self::new("/")
	}
}

impl CurrentPath {
	/// Creates a holder starting at `path`.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			inner: Rc::new(RefCell::new(CurrentPathInner {
				path: path.into(),
				listeners: Vec::new(),
				next_id: 0,
			})),
		}
	}

	/// Returns the current path.
	pub fn get(&self) -> String {
		self.inner.borrow().path.clone()
	}

	/// Navigates to `path`, notifying listeners if it changed.
	pub fn set(&self, path: impl Into<String>) {
		let path = path.into();
		let listeners: Vec<Listener> = {
			let mut inner = self.inner.borrow_mut();
			if inner.path == path {
				return;
			}
			tracing::debug!(from = %inner.path, to = %path, "current path changed");
			inner.path = path.clone();
			inner.listeners.iter().map(|(_, l)| l.clone()).collect()
		};
		for listener in listeners {
			listener(&path);
		}
	}

	/// Registers `listener` to run after every path change.
	pub fn subscribe<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&str) + 'static,
	{
		let mut inner = self.inner.borrow_mut();
		let id = inner.next_id;
		inner.next_id += 1;
		inner.listeners.push((id, Rc::new(listener)));
		Subscription(id)
	}

	/// Removes a listener. Returns whether it was registered.
	pub fn unsubscribe(&self, subscription: Subscription) -> bool {
		let mut inner = self.inner.borrow_mut();
		let before = inner.listeners.len();
		inner.listeners.retain(|(id, _)| *id != subscription.0);
		inner.listeners.len() != before
	}
}

impl PathSource for CurrentPath {
	fn current_path(&self) -> Option<String> {
		Some(self.get())
	}
}
