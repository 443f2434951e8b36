//! Parser for provider descriptor strings.
//!
//! A descriptor names one provider per group, with `|`-separated fallback
//! alternatives and optional eligibility conditions:
//!
//! ```text
//! fast:sparse.Index(onClass:simd.Kernels)|fast:linear.Index,codec:lz.Codec
//! ```
//!
//! ## Supported Syntax
//!
//! ```text
//! descriptor := group (',' group)*
//! group      := candidate ('|' candidate)*
//! candidate  := [name ':'] target [condition]
//! condition  := '(' kind ':' argument ')'
//! kind       := 'onClass' | 'onMissingClass' | registered custom kind
//! ```
//!
//! Whitespace around any token is ignored. When a candidate has no
//! `name ':'` prefix, its name is the target itself.
//!
//! This crate only produces the parsed structure; evaluating conditions and
//! constructing providers is the engine crate's job.

mod descriptor;
mod parser;

pub use descriptor::{
	BUILTIN_KINDS, Candidate, ConditionSpec, Descriptor, Group, KIND_ON_CLASS,
	KIND_ON_MISSING_CLASS,
};
pub use parser::{ParseError, parse, parse_with_kinds};
