//! Provider management over a resolved registry.
//!
//! A manager is an explicit value handed to consumers; there is no
//! process-wide registry. It layers two things on top of a plain
//! [`Registry`]: programmatic registration after loading, and a default
//! provider chosen from a preference list of targets.

use std::collections::HashMap;

use descry_core::{LoadError, ProviderEntry, ProviderSource, Registry, TypeResolver};


/// Holds resolved providers, accepts registrations, and tracks a default.
pub struct ProviderManager<T> {
	entries: Vec<ProviderEntry<T>>,
	by_name: HashMap<String, usize>,
	default_name: Option<String>,
}

impl<T> ProviderManager<T> {
	/// Creates an empty manager.
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
			by_name: HashMap::new(),
			default_name: None,
		}
	}

	/// Seeds a manager with an already-resolved registry.
	pub fn from_registry(registry: Registry<T>) -> Self {
		let mut manager = Self::new();
		for entry in registry.into_entries() {
			manager.insert(entry);
		}
		manager
	}

	/// Registers a provider under `name`, replacing any existing entry with
	/// that name.
	pub fn register(&mut self, name: impl Into<String>, value: T) {
		let name = name.into();
		let target = name.clone();
		self.insert(ProviderEntry::new(name, target, ProviderSource::Registered, value));
	}

	/// Looks up a provider by name.
	pub fn get(&self, name: &str) -> Option<&T> {
		self.entry(name).map(ProviderEntry::value)
	}

	/// Looks up the full entry by name.
	pub fn entry(&self, name: &str) -> Option<&ProviderEntry<T>> {
		self.by_name.get(name).map(|&index| &self.entries[index])
	}

	/// Looks up by name, falling back to the default provider.
	pub fn get_or_default(&self, name: &str) -> Option<&T> {
		self.get(name).or_else(|| self.default_provider())
	}

	/// The current default provider, if one was selected.
	pub fn default_provider(&self) -> Option<&T> {
		self.default_name.as_deref().and_then(|name| self.get(name))
	}

	/// Marks an existing provider as the default.
	///
	/// Returns false (and changes nothing) when `name` is not registered.
	pub fn set_default(&mut self, name: &str) -> bool {
		if !self.by_name.contains_key(name) {
			return false;
		}
		self.default_name = Some(name.to_string());
		true
	}

	/// Selects and registers a default provider.
	///
	/// The first target in `preferred` that `resolver` reports present is
	/// constructed, registered under its target name, and becomes the
	/// default.
	///
	/// # Errors
	///
	/// Returns [`LoadError::NoDefaultProvider`] when no preferred target is
	/// present, or [`LoadError::Instantiation`] when the chosen one fails
	/// to construct.
	pub fn default_from(
		&mut self,
		preferred: &[&str],
		resolver: &dyn TypeResolver<T>,
	) -> Result<(), LoadError> {
		for &target in preferred {
			if !resolver.exists(target) {
				tracing::debug!(target = %target, "default candidate absent; trying next");
				continue;
			}
			let value = resolver
				.construct(target)
				.map_err(|source| LoadError::Instantiation {
					name: target.to_string(),
					target: target.to_string(),
					source,
				})?;
			self.insert(ProviderEntry::new(
				target,
				target,
				ProviderSource::Registered,
				value,
			));
			self.default_name = Some(target.to_string());
			return Ok(());
		}
		Err(LoadError::NoDefaultProvider {
			tried: preferred.iter().map(ToString::to_string).collect(),
		})
	}

	/// Provider names in registration order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(ProviderEntry::name)
	}

	/// Entries in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &ProviderEntry<T>> {
		self.entries.iter()
	}

	/// Number of registered providers.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true when nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn insert(&mut self, entry: ProviderEntry<T>) {
		match self.by_name.get(entry.name()) {
			Some(&index) => {
				tracing::warn!(
					name = %entry.name(),
					replaced = %self.entries[index].target(),
					new = %entry.target(),
					"provider re-registered; replacing",
				);
				self.entries[index] = entry;
			}
			None => {
				self.by_name.insert(entry.name().to_string(), self.entries.len());
				self.entries.push(entry);
			}
		}
	}
}

impl<T> Default for ProviderManager<T> {
	fn default() -> Self {
		Self::new()
	}
}
