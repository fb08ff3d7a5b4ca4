//! Path-derived breadcrumb composite.

use super::link::BreadcrumbLink;
use super::primitives::{Breadcrumb, BreadcrumbItem, BreadcrumbList, BreadcrumbPage, BreadcrumbSeparator};
use super::trail::{Trail, TrailEntry, derive_trail};
use crate::component::Component;
use crate::config::BreadcrumbConfig;
use crate::error::Result;
use crate::location::PathSource;
use crate::page::Page;

/// Breadcrumb trail for the current path.
///
/// Renders `nav > ol` with a home link, then a separator and an entry for
/// every path segment. Every entry but the last is a link; the last is the
/// current page.
///
/// # Example
///
/// ```
/// use reinhardt_breadcrumb::breadcrumb::DynamicBreadcrumb;
/// use reinhardt_breadcrumb::component::Component;
///
/// let page = DynamicBreadcrumb::new("/shop/men-shoes").render()?;
/// let html = page.render_to_string();
/// assert!(html.contains("<a href=\"/shop\""));
/// assert!(html.contains("aria-current=\"page\""));
/// # Ok::<(), reinhardt_breadcrumb::error::ComponentError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DynamicBreadcrumb {
	path: String,
	config: BreadcrumbConfig,
}

impl DynamicBreadcrumb {
	/// Creates a breadcrumb for `path` with the default configuration.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			config: BreadcrumbConfig::default(),
		}
	}

	/// Creates a breadcrumb for the source's current path.
	///
	/// A source without a path yields the home entry only.
	pub fn from_source(source: &impl PathSource) -> Self {
		Self::new(source.current_path().unwrap_or_default())
	}

	/// Replaces the configuration.
	pub fn with_config(mut self, config: BreadcrumbConfig) -> Self {
		self.config = config;
		self
	}

	/// Returns the path this breadcrumb renders.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Derives the trail without rendering it.
	pub fn trail(&self) -> Trail {
		derive_trail(&self.path, &self.config.trail_options())
	}

	/// Returns a view that reads `source` again every time it is rendered.
	pub fn reactive<S>(source: S, config: BreadcrumbConfig) -> Page
	where
		S: PathSource + 'static,
	{
		Page::reactive(move || {
			let crumb = Self::from_source(&source).with_config(config.clone());
			match crumb.render() {
				Ok(page) => page,
				Err(error) => {
					tracing::error!(%error, path = %crumb.path, "failed to render breadcrumb");
					Page::empty()
				}
			}
		})
	}

	/// Root landmark carrying the configured classes and separator content.
	fn landmark(&self) -> Breadcrumb {
		let root = Breadcrumb::new().maybe_class(self.config.classes.breadcrumb.clone());
		match &self.config.separator {
			Some(separator) => root.separator(separator.clone()),
			None => root,
		}
	}

	fn separator(&self, root: &Breadcrumb) -> Result<Page> {
		BreadcrumbSeparator::new()
			.maybe_class(self.config.classes.separator.clone())
			.children(root.separator_content().cloned())
			.render()
	}

	fn entry(&self, entry: &TrailEntry) -> Result<Page> {
		let classes = &self.config.classes;
		let label = entry.label().to_string();
		let content = if entry.is_current() {
			BreadcrumbPage::new()
				.maybe_class(classes.page.clone())
				.child(label)
				.render()?
		} else {
			BreadcrumbLink::new(entry.href())
				.maybe_class(classes.link.clone())
				.child(label)
				.render()?
		};
		BreadcrumbItem::new()
			.key(entry.key())
			.maybe_class(classes.item.clone())
			.child(content)
			.render()
	}
}

impl Component for DynamicBreadcrumb {
	fn render(&self) -> Result<Page> {
		let root = self.landmark();
		let trail = self.trail();
		let mut items = Vec::with_capacity(trail.len() + trail.separator_count());
		for (index, entry) in trail.iter().enumerate() {
			if index > 0 {
				items.push(self.separator(&root)?);
			}
			items.push(self.entry(entry)?);
		}

		let classes = &self.config.classes;
		let list = BreadcrumbList::new()
			.maybe_class(classes.list.clone())
			.children(items)
			.render()?;
		root.child(list).render()
	}

	fn name() -> &'static str {
		"DynamicBreadcrumb"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::ClassOverrides;
	use crate::location::{CurrentPath, StaticPath};
	use crate::page::PageElement;
	use rstest::rstest;

	struct NoPath;

	impl PathSource for NoPath {
		fn current_path(&self) -> Option<String> {
			None
		}
	}

	fn links(page: &Page) -> Vec<&PageElement> {
		page.find_elements(|el| el.tag_name() == "a")
	}

	fn separators(page: &Page) -> Vec<&PageElement> {
		page.find_elements(|el| el.get_attr("role") == Some("presentation"))
	}

	#[rstest]
	fn test_root_renders_home_only() {
		let page = DynamicBreadcrumb::new("/").render().unwrap();
		assert_eq!(
			page.render_to_string(),
			concat!(
				"<nav aria-label=\"breadcrumb\">",
				"<ol class=\"flex flex-wrap items-center gap-1.5 break-words text-sm text-muted-foreground sm:gap-2.5\">",
				"<li class=\"inline-flex items-center gap-1.5\">",
				"<a href=\"/\" data-link=\"true\" class=\"transition-colors hover:text-foreground\">Home</a>",
				"</li></ol></nav>"
			)
		);
	}

	#[rstest]
	fn test_missing_path_is_root() {
		let page = DynamicBreadcrumb::from_source(&NoPath).render().unwrap();
		assert_eq!(links(&page).len(), 1);
		assert!(separators(&page).is_empty());
	}

	#[rstest]
	fn test_item_keys_follow_target_paths() {
		let page = DynamicBreadcrumb::new("/a/a").render().unwrap();
		let keys: Vec<_> = page
			.find_elements(|el| el.key_value().is_some())
			.iter()
			.filter_map(|el| el.key_value())
			.collect();
		assert_eq!(keys, ["/", "/a", "/a/a"]);
	}

	#[rstest]
	fn test_config_classes_and_separator() {
		let config = BreadcrumbConfig::default()
			.with_separator("/")
			.with_classes(ClassOverrides {
				list: Some("text-xs".to_string()),
				link: Some("underline".to_string()),
				page: Some("font-semibold".to_string()),
				..ClassOverrides::default()
			});
		let page = DynamicBreadcrumb::from_source(&StaticPath::new("/docs/setup"))
			.with_config(config)
			.render()
			.unwrap();

		let list = page.find_elements(|el| el.tag_name() == "ol");
		assert!(list[0].get_attr("class").unwrap().ends_with("text-xs"));
		assert!(!list[0].get_attr("class").unwrap().contains("text-sm"));
		assert!(links(&page).iter().all(|a| a.get_attr("class").unwrap().ends_with("underline")));
		let current = page.find_elements(|el| el.get_attr("aria-current") == Some("page"));
		assert_eq!(current[0].get_attr("class"), Some("text-foreground font-semibold"));
		assert!(page.find_elements(|el| el.tag_name() == "svg").is_empty());
		assert_eq!(page.text_content(), "Home/Docs/Setup");
	}

	#[rstest]
	fn test_landmark_separator_repeats_between_entries() {
		let crumb = DynamicBreadcrumb::new("/a/b/c")
			.with_config(BreadcrumbConfig::default().with_separator("›"));
		assert_eq!(
			crumb.landmark().separator_content().map(Page::render_to_string),
			Some("›".to_string())
		);

		let page = crumb.render().unwrap();
		let dividers = separators(&page);
		assert_eq!(dividers.len(), 3);
		assert!(dividers.iter().all(|li| li.child_views().len() == 1));
		assert_eq!(page.text_content(), "Home›A›B›C");
	}

	#[rstest]
	fn test_reactive_follows_current_path() {
		let path = CurrentPath::new("/");
		let view = DynamicBreadcrumb::reactive(path.clone(), BreadcrumbConfig::default());
		assert_eq!(view.text_content(), "Home");

		path.set("/user-settings/profile");
		assert_eq!(view.text_content(), "HomeUser SettingsProfile");
		assert!(view.render_to_string().contains("href=\"/user-settings\""));
	}

	#[rstest]
	fn test_component_name() {
		assert_eq!(DynamicBreadcrumb::name(), "DynamicBreadcrumb");
	}
}
