//! Provider resolution engine.
//!
//! Ties the parsed descriptor structure to constructed provider instances:
//! - [`TypeResolver`]: the injected capability for type existence checks and
//!   instance construction; the engine itself performs no reflection or
//!   dynamic loading.
//! - [`Condition`] / [`ConditionSet`]: eligibility predicates behind the
//!   `(kind:argument)` clauses, extensible with custom kinds.
//! - [`Loader`] / [`DescriptorLoader`]: parse and resolve a descriptor once,
//!   producing an immutable [`Registry`].
//! - [`Registry`] / [`RegistryBuilder`]: the name → provider mapping, with a
//!   configurable [`DuplicatePolicy`] for name collisions.
//!
//! Loading is all-or-nothing: a descriptor either resolves fully or fails
//! with a [`LoadError`]; no partial registry is ever observable.

pub use descry_parser as parser;

mod condition;
mod error;
mod loader;
mod registry;
mod resolve;

pub use condition::{Condition, ConditionSet, OnClass, OnMissingClass};
pub use error::{ConstructError, LoadError};
pub use loader::{DescriptorLoader, Loader, ProviderLoader};
pub use registry::{
	Collision, DuplicatePolicy, ProviderEntry, ProviderSource, Registry, RegistryBuilder,
};
pub use resolve::{CatalogResolver, FnResolver, TypeLookup, TypeResolver};
