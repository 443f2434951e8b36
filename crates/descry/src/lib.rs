//! Runtime provider discovery.
//!
//! Selects and constructs named implementations ("providers") from a
//! descriptor string with conditional clauses:
//!
//! ```text
//! fast:simd.Index(onClass:simd.Kernels)|fast:linear.Index,codec:lz.Codec
//! ```
//!
//! Groups are separated by `,`; within a group the `|` alternatives are
//! tried left to right and the first whose condition holds is constructed.
//! Type existence and construction are delegated to a [`TypeResolver`], so
//! the library performs no reflection of its own and any lookup scheme can
//! be plugged in.
//!
//! # Example
//!
//! ```
//! use descry::{CatalogResolver, Loader};
//!
//! let resolver = CatalogResolver::new()
//!     .with("mem.Store", || "memory store")
//!     .with("null.Store", || "null store");
//!
//! let registry = Loader::new(&resolver)
//!     .load("store:fast.Store(onClass:fast.Store)|store:mem.Store")
//!     .unwrap();
//!
//! // fast.Store is not in the catalog, so the group falls through.
//! assert_eq!(registry.get("store"), Some(&"memory store"));
//! ```
//!
//! The resulting [`Registry`] is immutable and safe to share across
//! threads. [`ProviderManager`] adds programmatic registration and
//! default-provider selection on top; [`ProviderConfig`] sources the
//! descriptor from configuration files.

mod config;
mod manager;

pub use config::{ProviderConfig, descriptor_from_env};
pub use descry_core::{
	CatalogResolver, Collision, Condition, ConditionSet, ConstructError, DescriptorLoader,
	DuplicatePolicy, FnResolver, LoadError, Loader, OnClass, OnMissingClass, ProviderEntry,
	ProviderLoader, ProviderSource, Registry, RegistryBuilder, TypeLookup, TypeResolver,
};
pub use descry_parser::{
	BUILTIN_KINDS, Candidate, ConditionSpec, Descriptor, Group, KIND_ON_CLASS,
	KIND_ON_MISSING_CLASS, ParseError, parse, parse_with_kinds,
};
pub use manager::ProviderManager;
