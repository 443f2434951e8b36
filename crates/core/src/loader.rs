//! Descriptor loading.
//!
//! Parsing and resolution happen exactly once; the output is an immutable
//! [`Registry`]. For each group the candidates are tried left to right and
//! the first whose condition is absent or satisfied is constructed. A group
//! where every condition fails contributes nothing.

use descry_parser::{Candidate, Descriptor};

use crate::condition::{Condition, ConditionSet};
use crate::error::LoadError;
use crate::registry::{DuplicatePolicy, ProviderEntry, ProviderSource, Registry, RegistryBuilder};
use crate::resolve::{TypeLookup, TypeResolver};


/// A source of resolved providers.
pub trait ProviderLoader<T> {
	/// The resolved registry.
	fn load(&self) -> &Registry<T>;
}

/// Configures and runs descriptor loading.
///
/// ```
/// use descry_core::{CatalogResolver, Loader};
///
/// let resolver = CatalogResolver::new().with("linear.Index", || vec![0u32]);
/// let registry = Loader::new(&resolver)
///     .load("fast:simd.Index(onClass:simd.Index)|fast:linear.Index")
///     .unwrap();
///
/// assert!(registry.get("fast").is_some());
/// ```
pub struct Loader<'a, T> {
	resolver: &'a dyn TypeResolver<T>,
	conditions: ConditionSet,
	policy: DuplicatePolicy,
}

impl<'a, T> Loader<'a, T> {
	/// Creates a loader with the builtin conditions and default policy.
	pub fn new(resolver: &'a dyn TypeResolver<T>) -> Self {
		Self {
			resolver,
			conditions: ConditionSet::default(),
			policy: DuplicatePolicy::default(),
		}
	}

	/// Replaces the whole condition set.
	pub fn with_conditions(mut self, conditions: ConditionSet) -> Self {
		self.conditions = conditions;
		self
	}

	/// Registers an additional condition kind.
	pub fn with_condition(mut self, condition: Box<dyn Condition>) -> Self {
		self.conditions = self.conditions.with(condition);
		self
	}

	/// Sets the duplicate-name policy.
	pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Parses `descriptor` and constructs the selected providers.
	///
	/// # Errors
	///
	/// Returns a [`LoadError`] on grammar violations, on an unregistered
	/// condition kind, on construction failure, or on a duplicate name
	/// under [`DuplicatePolicy::Reject`]. No partial registry is produced.
	pub fn load(&self, descriptor: &str) -> Result<Registry<T>, LoadError> {
		let kinds = self.conditions.kinds();
		let parsed = descry_parser::parse_with_kinds(descriptor, &kinds)?;
		tracing::debug!(groups = parsed.groups().len(), "descriptor parsed");
		self.resolve(&parsed)
	}

	fn resolve(&self, descriptor: &Descriptor) -> Result<Registry<T>, LoadError> {
		let mut builder = RegistryBuilder::new("providers").policy(self.policy);
		for group in descriptor.groups() {
			let Some(candidate) = self.select(group.candidates()) else {
				tracing::debug!("no eligible candidate in group");
				continue;
			};
			let value = self
				.resolver
				.construct(&candidate.target)
				.map_err(|source| LoadError::Instantiation {
					name: candidate.name.clone(),
					target: candidate.target.clone(),
					source,
				})?;
			tracing::debug!(name = %candidate.name, target = %candidate.target, "provider selected");
			builder.insert(ProviderEntry::new(
				candidate.name.as_str(),
				candidate.target.as_str(),
				ProviderSource::Descriptor,
				value,
			))?;
		}
		Ok(builder.build())
	}

	/// First candidate whose condition is absent or satisfied.
	fn select<'c>(&self, candidates: &'c [Candidate]) -> Option<&'c Candidate> {
		let types: &dyn TypeLookup = self.resolver;
		candidates.iter().find(|candidate| {
			let Some(spec) = &candidate.condition else {
				return true;
			};
			let Some(condition) = self.conditions.get(&spec.kind) else {
				unreachable!("condition kinds are validated during parse");
			};
			let eligible = condition.eval(&spec.argument, types);
			if !eligible {
				tracing::debug!(
					target = %candidate.target,
					kind = %spec.kind,
					argument = %spec.argument,
					"condition not met; skipping candidate",
				);
			}
			eligible
		})
	}
}

/// Descriptor-backed [`ProviderLoader`].
///
/// Parse and resolve happen at construction; the registry is immutable for
/// the loader's lifetime and safe for concurrent reads.
pub struct DescriptorLoader<T> {
	registry: Registry<T>,
}

impl<T> DescriptorLoader<T> {
	/// Parses `descriptor` and resolves its providers with defaults.
	///
	/// # Errors
	///
	/// See [`Loader::load`].
	pub fn new(descriptor: &str, resolver: &dyn TypeResolver<T>) -> Result<Self, LoadError> {
		Self::with_loader(descriptor, &Loader::new(resolver))
	}

	/// Resolves `descriptor` through a preconfigured [`Loader`].
	///
	/// # Errors
	///
	/// See [`Loader::load`].
	pub fn with_loader(descriptor: &str, loader: &Loader<'_, T>) -> Result<Self, LoadError> {
		Ok(Self {
			registry: loader.load(descriptor)?,
		})
	}

	/// Consumes the loader, returning the registry.
	pub fn into_registry(self) -> Registry<T> {
		self.registry
	}
}

impl<T> ProviderLoader<T> for DescriptorLoader<T> {
	fn load(&self) -> &Registry<T> {
		&self.registry
	}
}
