//! The type-resolution seam.
//!
//! The loader never performs reflection or dynamic loading itself; type
//! existence checks and instance construction go through [`TypeResolver`].
//! Any lookup scheme can sit behind the trait, and tests use fakes.

use std::collections::HashMap;

use crate::error::ConstructError;

/// Read-only type existence checks.
///
/// Split from [`TypeResolver`] so conditions can probe for types without
/// gaining the ability to construct anything.
pub trait TypeLookup {
	/// Reports whether `target` names a known, constructible type.
	fn exists(&self, target: &str) -> bool;
}

/// Capability to construct provider instances by type name.
pub trait TypeResolver<T>: TypeLookup {
	/// Constructs a new instance of the type named `target`.
	///
	/// # Errors
	///
	/// Returns a [`ConstructError`] when `target` is unknown or its
	/// construction fails.
	fn construct(&self, target: &str) -> Result<T, ConstructError>;
}

/// [`TypeResolver`] over a pair of closures.
pub struct FnResolver<E, C> {
	exists: E,
	construct: C,
}

impl<E, C> FnResolver<E, C> {
	/// Creates a resolver from an existence predicate and a constructor.
	pub fn new(exists: E, construct: C) -> Self {
		Self { exists, construct }
	}
}

impl<E, C> TypeLookup for FnResolver<E, C>
where
	E: Fn(&str) -> bool,
{
	fn exists(&self, target: &str) -> bool {
		(self.exists)(target)
	}
}

impl<T, E, C> TypeResolver<T> for FnResolver<E, C>
where
	E: Fn(&str) -> bool,
	C: Fn(&str) -> Result<T, ConstructError>,
{
	fn construct(&self, target: &str) -> Result<T, ConstructError> {
		(self.construct)(target)
	}
}

type Constructor<T> = Box<dyn Fn() -> T + Send + Sync>;

/// [`TypeResolver`] backed by a table of registered constructors.
///
/// Implementations are registered up front under their target names;
/// existence means presence in the table.
pub struct CatalogResolver<T> {
	constructors: HashMap<String, Constructor<T>>,
}

impl<T> CatalogResolver<T> {
	/// Creates an empty catalog.
	pub fn new() -> Self {
		Self {
			constructors: HashMap::new(),
		}
	}

	/// Registers a constructor under `target`, replacing any previous entry.
	pub fn with(
		mut self,
		target: impl Into<String>,
		constructor: impl Fn() -> T + Send + Sync + 'static,
	) -> Self {
		self.constructors.insert(target.into(), Box::new(constructor));
		self
	}

	/// Registered target names, in no particular order.
	pub fn targets(&self) -> impl Iterator<Item = &str> {
		self.constructors.keys().map(String::as_str)
	}
}

impl<T> Default for CatalogResolver<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> TypeLookup for CatalogResolver<T> {
	fn exists(&self, target: &str) -> bool {
		self.constructors.contains_key(target)
	}
}

impl<T> TypeResolver<T> for CatalogResolver<T> {
	fn construct(&self, target: &str) -> Result<T, ConstructError> {
		match self.constructors.get(target) {
			Some(constructor) => Ok(constructor()),
			None => Err(ConstructError::UnknownType(target.to_string())),
		}
	}
}
