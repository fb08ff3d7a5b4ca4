//! Trail derivation from a URL path.
//!
//! The whole breadcrumb logic lives here as pure functions over the current
//! path, so it can be exercised without any rendering.
//!
//! ```
//! use reinhardt_breadcrumb::breadcrumb::{TrailOptions, derive_trail};
//!
//! let trail = derive_trail("/shop/men-shoes", &TrailOptions::default());
//! let labels: Vec<_> = trail.entries().iter().map(|e| e.label()).collect();
//! assert_eq!(labels, ["Home", "Shop", "Men Shoes"]);
//! assert_eq!(trail.current().map(|e| e.href()), Some("/shop/men-shoes"));
//! ```

/// Label of the first entry when none is configured.
pub const DEFAULT_HOME_LABEL: &str = "Home";
/// Target of the first entry when none is configured.
pub const DEFAULT_ROOT_PATH: &str = "/";

/// Splits a path into its non-empty segments.
///
/// Anything from the first `?` or `#` on is ignored. Leading, trailing and
/// repeated slashes produce no segments.
pub fn path_segments(path: &str) -> Vec<&str> {
	let pathname = path.split(['?', '#']).next().unwrap_or_default();
	pathname.split('/').filter(|s| !s.is_empty()).collect()
}

/// Turns a path segment into a display label.
///
/// Hyphens become spaces, then the first character of every
/// whitespace-delimited word is upper-cased. Everything else is kept as is.
///
/// ```
/// use reinhardt_breadcrumb::breadcrumb::format_segment;
///
/// assert_eq!(format_segment("user-settings"), "User Settings");
/// assert_eq!(format_segment("already Capitalized"), "Already Capitalized");
/// ```
pub fn format_segment(segment: &str) -> String {
	let mut label = String::with_capacity(segment.len());
	let mut word_start = true;
	for ch in segment.chars() {
		let ch = if ch == '-' { ' ' } else { ch };
		if ch.is_whitespace() {
			word_start = true;
			label.push(ch);
		} else if word_start {
			word_start = false;
			label.extend(ch.to_uppercase());
		} else {
			label.push(ch);
		}
	}
	label
}

/// Joins `root` with `segments` into a target path.
pub fn join_path(root: &str, segments: &[&str]) -> String {
	format!("{}/{}", root.trim_end_matches('/'), segments.join("/"))
}

/// One derived breadcrumb entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailEntry {
	label: String,
	href: String,
	is_current: bool,
}

impl TrailEntry {
	/// Creates an entry.
	pub fn new(label: impl Into<String>, href: impl Into<String>, is_current: bool) -> Self {
		Self {
			label: label.into(),
			href: href.into(),
			is_current,
		}
	}

	/// Display label.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Target path.
	pub fn href(&self) -> &str {
		&self.href
	}

	/// Whether this entry is the current page (rendered without a link).
	pub fn is_current(&self) -> bool {
		self.is_current
	}

	/// Rendering key: the target path.
	pub fn key(&self) -> &str {
		&self.href
	}
}

/// Ordered breadcrumb entries, the home entry first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
	entries: Vec<TrailEntry>,
}

impl Trail {
	/// All entries in display order.
	pub fn entries(&self) -> &[TrailEntry] {
		&self.entries
	}

	/// Number of entries, including home.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Always false: the home entry is always present.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of separators rendered between entries.
	pub fn separator_count(&self) -> usize {
		self.entries.len().saturating_sub(1)
	}

	/// The current-page entry, absent for a root-only path.
	pub fn current(&self) -> Option<&TrailEntry> {
		self.entries.iter().find(|e| e.is_current())
	}

	/// Iterates over the entries.
	pub fn iter(&self) -> std::slice::Iter<'_, TrailEntry> {
		self.entries.iter()
	}
}

impl<'a> IntoIterator for &'a Trail {
	type Item = &'a TrailEntry;
	type IntoIter = std::slice::Iter<'a, TrailEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

/// Inputs of [`derive_trail`] besides the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailOptions {
	/// Label of the home entry.
	pub home_label: String,
	/// Path the home entry points to, and prefix of every target path.
	pub root_path: String,
}

impl Default for TrailOptions {
	fn default() -> Self {
		Self {
			home_label: DEFAULT_HOME_LABEL.to_string(),
			root_path: DEFAULT_ROOT_PATH.to_string(),
		}
	}
}

/// Derives the breadcrumb trail for `path`.
///
/// The first entry always links home. Each segment then yields one entry
/// whose target joins the root with every segment up to and including it;
/// only the last one is marked current. Segments are never deduplicated.
pub fn derive_trail(path: &str, options: &TrailOptions) -> Trail {
	let segments = path_segments(path);
	let mut entries = Vec::with_capacity(segments.len() + 1);
	entries.push(TrailEntry::new(
		options.home_label.clone(),
		options.root_path.clone(),
		false,
	));

	let last = segments.len().checked_sub(1);
	for (index, segment) in segments.iter().enumerate() {
		entries.push(TrailEntry::new(
			format_segment(segment),
			join_path(&options.root_path, &segments[..=index]),
			Some(index) == last,
		));
	}

	tracing::debug!(path, segments = segments.len(), "derived breadcrumb trail");
	Trail { entries }
}
