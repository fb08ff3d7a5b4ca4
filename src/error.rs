//! Error types for reinhardt-breadcrumb

use std::path::PathBuf;
use thiserror::Error;

/// Error type for component operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComponentError {
	/// Missing required property
	#[error("Missing required property: {0}")]
	MissingProperty(&'static str),

	/// A slot link received the wrong number of children
	#[error("Slot expects exactly one child element, found {found}")]
	SlotChildCount {
		/// Number of children supplied
		found: usize,
	},

	/// A slot link received a child that is not an element
	#[error("Slot child must be an element, not text or a fragment")]
	SlotChildNotElement,
}

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Failed to read a configuration file
	#[error("Failed to read configuration file {path}: {source}")]
	Io {
		/// File that could not be read
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: std::io::Error,
	},

	/// Failed to parse TOML
	#[error("Failed to parse configuration: {0}")]
	Parse(String),

	/// Parsed values are not usable
	#[error("Invalid configuration: {0}")]
	Invalid(String),
}

/// Result type for component operations
pub type Result<T> = std::result::Result<T, ComponentError>;
