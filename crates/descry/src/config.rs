//! Descriptor sourcing from configuration.
//!
//! Descriptors arrive from operator configuration: a table in a config
//! file, or an environment variable.

use descry_core::{DuplicatePolicy, LoadError, Loader, Registry, TypeResolver};
use serde::Deserialize;


/// Provider selection settings as they appear in configuration files.
///
/// ```toml
/// [providers.codec]
/// descriptor = "fast:lz.Codec(onClass:lz.Codec)|fast:plain.Codec"
/// on-duplicate = "first-wins"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProviderConfig {
	/// The descriptor string driving provider selection.
	pub descriptor: String,
	/// How duplicate provider names are handled.
	#[serde(default)]
	pub on_duplicate: DuplicatePolicy,
}

impl ProviderConfig {
	/// Loads the configured providers through `resolver`.
	///
	/// # Errors
	///
	/// See [`Loader::load`].
	pub fn load<T>(&self, resolver: &dyn TypeResolver<T>) -> Result<Registry<T>, LoadError> {
		Loader::new(resolver)
			.with_policy(self.on_duplicate)
			.load(&self.descriptor)
	}
}

/// Reads a descriptor from the environment, treating blank values as unset.
pub fn descriptor_from_env(var: &str) -> Option<String> {
	std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}
