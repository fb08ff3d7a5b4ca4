//! Configuration for the dynamic breadcrumb.
//!
//! Supports TOML configuration files:
//!
//! ```toml
//! home_label = "Inicio"
//! root_path = "/app"
//! separator = "/"
//!
//! [classes]
//! list = "text-xs"
//! page = "font-semibold"
//! ```

use crate::breadcrumb::TrailOptions;
use crate::breadcrumb::trail::{DEFAULT_HOME_LABEL, DEFAULT_ROOT_PATH};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Caller classes merged onto each primitive of the dynamic breadcrumb.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassOverrides {
	/// `<nav>` root
	pub breadcrumb: Option<String>,
	/// `<ol>` list
	pub list: Option<String>,
	/// `<li>` items
	pub item: Option<String>,
	/// Links
	pub link: Option<String>,
	/// Current page
	pub page: Option<String>,
	/// Separators
	pub separator: Option<String>,
}

/// Main configuration for [`DynamicBreadcrumb`](crate::breadcrumb::DynamicBreadcrumb).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbConfig {
	/// Label of the home entry
	pub home_label: String,

	/// Path of the home entry, prefixed to every target path
	pub root_path: String,

	/// Separator text; the chevron glyph is used when unset
	pub separator: Option<String>,

	/// Per-primitive classes
	pub classes: ClassOverrides,
}

impl Default for BreadcrumbConfig {
	fn default() -> Self {
		Self {
			home_label: DEFAULT_HOME_LABEL.to_string(),
			root_path: DEFAULT_ROOT_PATH.to_string(),
			separator: None,
			classes: ClassOverrides::default(),
		}
	}
}

impl BreadcrumbConfig {
	/// Sets the home label.
	pub fn with_home_label(mut self, label: impl Into<String>) -> Self {
		self.home_label = label.into();
		self
	}

	/// Sets the root path.
	pub fn with_root_path(mut self, root: impl Into<String>) -> Self {
		self.root_path = root.into();
		self
	}

	/// Sets the separator text.
	pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
		self.separator = Some(separator.into());
		self
	}

	/// Sets the per-primitive classes.
	pub fn with_classes(mut self, classes: ClassOverrides) -> Self {
		self.classes = classes;
		self
	}

	/// Load configuration from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if file cannot be read, parsed or validated.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
			path: path.as_ref().to_path_buf(),
			source: e,
		})?;

		tracing::debug!(path = %path.as_ref().display(), "loading breadcrumb configuration");
		Self::from_toml(&content)
	}

	/// Parse configuration from TOML string.
	pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// Checks that the values can produce a trail.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if !self.root_path.starts_with('/') {
			return Err(ConfigError::Invalid(format!(
				"root_path must start with '/', got {:?}",
				self.root_path
			)));
		}
		if self.root_path.contains(['?', '#']) {
			return Err(ConfigError::Invalid(format!(
				"root_path must be a bare path, got {:?}",
				self.root_path
			)));
		}
		if self.home_label.trim().is_empty() {
			return Err(ConfigError::Invalid("home_label must not be blank".to_string()));
		}
		Ok(())
	}

	/// Options for [`derive_trail`](crate::breadcrumb::derive_trail).
	pub fn trail_options(&self) -> TrailOptions {
		TrailOptions {
			home_label: self.home_label.clone(),
			root_path: self.root_path.clone(),
		}
	}
}
