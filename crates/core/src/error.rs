use thiserror::Error;

use descry_parser::ParseError;

/// Failure to construct a provider instance through a type resolver.
#[derive(Debug, Error)]
pub enum ConstructError {
	/// The resolver knows no type under the requested target.
	#[error("unknown type: {0}")]
	UnknownType(String),
	/// The type was found but construction failed.
	#[error("construction failed: {0}")]
	Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ConstructError {
	/// Wraps an arbitrary construction failure.
	pub fn failed(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
		Self::Failed(cause.into())
	}
}

/// Errors surfaced while loading providers from a descriptor.
///
/// Loading has no partial-success mode: any of these aborts the whole load
/// and no registry is produced.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The descriptor string failed to parse.
	#[error("invalid descriptor: {0}")]
	Parse(#[from] ParseError),
	/// A selected candidate could not be instantiated.
	#[error("provider {name:?} ({target}) failed to instantiate")]
	Instantiation {
		/// Registry name of the failing candidate.
		name: String,
		/// Implementation reference that was being constructed.
		target: String,
		/// Underlying construction failure.
		#[source]
		source: ConstructError,
	},
	/// Two providers resolved to the same name under the `Reject` policy.
	#[error("duplicate provider name: {0:?}")]
	DuplicateName(String),
	/// No entry of a default-provider preference list was present.
	#[error("no default provider available, tried: {}", .tried.join(", "))]
	NoDefaultProvider {
		/// Targets that were tried, in preference order.
		tried: Vec<String>,
	},
}
