//! Immutable provider registry and its builder.

use std::collections::HashMap;

use crate::error::LoadError;


/// Where a provider entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderSource {
	/// Selected from a descriptor string.
	Descriptor,
	/// Registered programmatically.
	Registered,
}

/// How duplicate provider names are handled during registry construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DuplicatePolicy {
	/// Keep the first entry seen for a name.
	FirstWins,
	/// Overwrite with the last entry seen.
	#[default]
	LastWins,
	/// Fail the load.
	Reject,
}

/// Record of a duplicate name resolved by policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
	/// The contested provider name.
	pub name: String,
	/// Target of the entry that held the name first.
	pub existing_target: String,
	/// Target of the entry that arrived later.
	pub new_target: String,
	/// Whether the later entry replaced the earlier one.
	pub replaced: bool,
}

/// A constructed provider with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEntry<T> {
	name: String,
	target: String,
	source: ProviderSource,
	value: T,
}

impl<T> ProviderEntry<T> {
	/// Creates an entry; `source` records how it was produced.
	pub fn new(
		name: impl Into<String>,
		target: impl Into<String>,
		source: ProviderSource,
		value: T,
	) -> Self {
		Self {
			name: name.into(),
			target: target.into(),
			source,
			value,
		}
	}

	/// Registry name of the provider.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Implementation reference the provider was constructed from.
	pub fn target(&self) -> &str {
		&self.target
	}

	/// How the entry was produced.
	pub fn source(&self) -> ProviderSource {
		self.source
	}

	/// The constructed instance.
	pub fn value(&self) -> &T {
		&self.value
	}

	/// Consumes the entry, returning the instance.
	pub fn into_value(self) -> T {
		self.value
	}
}

/// Immutable name → provider mapping.
///
/// Construction goes through [`RegistryBuilder`]; afterwards the registry
/// never changes, so shared references are safe across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry<T> {
	entries: Vec<ProviderEntry<T>>,
	by_name: HashMap<String, usize>,
	collisions: Vec<Collision>,
}

impl<T> Registry<T> {
	/// Looks up a provider by name.
	pub fn get(&self, name: &str) -> Option<&T> {
		self.entry(name).map(ProviderEntry::value)
	}

	/// Looks up the full entry by name.
	pub fn entry(&self, name: &str) -> Option<&ProviderEntry<T>> {
		self.by_name.get(name).map(|&index| &self.entries[index])
	}

	/// Entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &ProviderEntry<T>> {
		self.entries.iter()
	}

	/// Provider names in insertion order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(ProviderEntry::name)
	}

	/// Number of registered providers.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true when no provider was resolved.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Duplicate names that were resolved by policy during construction.
	pub fn collisions(&self) -> &[Collision] {
		&self.collisions
	}

	/// Consumes the registry, yielding entries in insertion order.
	pub fn into_entries(self) -> impl Iterator<Item = ProviderEntry<T>> {
		self.entries.into_iter()
	}
}

/// Assembles a [`Registry`], applying a [`DuplicatePolicy`] on insert.
pub struct RegistryBuilder<T> {
	label: &'static str,
	policy: DuplicatePolicy,
	entries: Vec<ProviderEntry<T>>,
	by_name: HashMap<String, usize>,
	collisions: Vec<Collision>,
}

impl<T> RegistryBuilder<T> {
	/// Creates a builder; `label` names the registry in log events.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			policy: DuplicatePolicy::default(),
			entries: Vec::new(),
			by_name: HashMap::new(),
			collisions: Vec::new(),
		}
	}

	/// Sets the duplicate policy.
	pub fn policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Inserts an entry, resolving name collisions per policy.
	///
	/// # Errors
	///
	/// Returns [`LoadError::DuplicateName`] for a repeated name under
	/// [`DuplicatePolicy::Reject`].
	pub fn insert(&mut self, entry: ProviderEntry<T>) -> Result<(), LoadError> {
		let Some(&index) = self.by_name.get(entry.name()) else {
			self.by_name.insert(entry.name.clone(), self.entries.len());
			self.entries.push(entry);
			return Ok(());
		};

		let collision = Collision {
			name: entry.name.clone(),
			existing_target: self.entries[index].target.clone(),
			new_target: entry.target.clone(),
			replaced: self.policy == DuplicatePolicy::LastWins,
		};
		match self.policy {
			DuplicatePolicy::Reject => return Err(LoadError::DuplicateName(entry.name)),
			DuplicatePolicy::FirstWins => {
				tracing::warn!(
					registry = self.label,
					name = %collision.name,
					kept = %collision.existing_target,
					ignored = %collision.new_target,
					"duplicate provider name; keeping first",
				);
			}
			DuplicatePolicy::LastWins => {
				tracing::warn!(
					registry = self.label,
					name = %collision.name,
					replaced = %collision.existing_target,
					new = %collision.new_target,
					"duplicate provider name; last wins",
				);
				self.entries[index] = entry;
			}
		}
		self.collisions.push(collision);
		Ok(())
	}

	/// Finishes construction.
	pub fn build(self) -> Registry<T> {
		Registry {
			entries: self.entries,
			by_name: self.by_name,
			collisions: self.collisions,
		}
	}
}
