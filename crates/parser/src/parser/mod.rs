//! # Parser
//!
//! Single-pass scanner for descriptor strings. Groups are split on `,`,
//! alternatives on `|`, and each candidate is decomposed into its optional
//! name prefix, target, and optional trailing `(kind:argument)` clause.
//!
//! Errors carry the byte offset of the offending fragment in the original
//! input.

use std::str::FromStr;

use thiserror::Error;

use crate::descriptor::{BUILTIN_KINDS, Candidate, ConditionSpec, Descriptor, Group};

#[cfg(test)]
mod tests;

/// Separates candidate groups.
const GROUP_SEP: char = ',';
/// Separates alternatives within a group.
const ALT_SEP: char = '|';
/// Separates a name from its target, and a condition kind from its argument.
const NAME_SEP: char = ':';
/// Opens a condition clause.
const CONDITION_OPEN: char = '(';
/// Closes a condition clause.
const CONDITION_CLOSE: char = ')';

/// Represents an error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	/// A candidate or condition clause violates the grammar.
	#[error("malformed candidate at offset {offset}: {fragment:?}")]
	Malformed {
		/// The offending substring.
		fragment: String,
		/// Byte offset of the fragment in the input.
		offset: usize,
	},
	/// A condition kind is not in the registered set.
	#[error("unknown condition kind at offset {offset}: {kind:?}")]
	UnknownCondition {
		/// The unrecognized kind token.
		kind: String,
		/// Byte offset of the clause in the input.
		offset: usize,
	},
}

/// Parses a descriptor, accepting only the builtin condition kinds.
///
/// # Errors
///
/// Returns a [`ParseError`] if any candidate in the input violates the
/// grammar, regardless of whether that candidate would ever be selected.
///
/// # Examples
///
/// ```
/// use descry_parser::parse;
///
/// let descriptor = parse("a:Foo,b:Bar|Baz").unwrap();
/// assert_eq!(descriptor.groups().len(), 2);
/// assert_eq!(descriptor.groups()[0].candidates()[0].name, "a");
/// ```
pub fn parse(s: &str) -> Result<Descriptor, ParseError> {
	parse_with_kinds(s, BUILTIN_KINDS)
}

/// Parses a descriptor, validating condition kinds against `kinds`.
///
/// Used when custom conditions are registered; `kinds` must list every
/// accepted kind token.
///
/// # Errors
///
/// Returns a [`ParseError`] on grammar violations or on a kind outside
/// `kinds`.
pub fn parse_with_kinds(s: &str, kinds: &[&str]) -> Result<Descriptor, ParseError> {
	Parser { kinds }.descriptor(s)
}

/// Splits `s` on `sep`, yielding each piece with its byte offset.
fn split_offsets<'a>(
	s: &'a str,
	offset: usize,
	sep: char,
) -> impl Iterator<Item = (usize, &'a str)> {
	let mut at = offset;
	s.split(sep).map(move |piece| {
		let start = at;
		at += piece.len() + sep.len_utf8();
		(start, piece)
	})
}

/// Trims `s` on both sides, keeping the byte offset of what remains.
fn trim_offset(s: &str, offset: usize) -> (usize, &str) {
	let trimmed = s.trim_start();
	(offset + s.len() - trimmed.len(), trimmed.trim_end())
}

/// Carries the registered condition kinds through a parse.
struct Parser<'a> {
	kinds: &'a [&'a str],
}

impl Parser<'_> {
	fn descriptor(&self, input: &str) -> Result<Descriptor, ParseError> {
		let mut groups = Vec::new();
		for (at, raw) in split_offsets(input, 0, GROUP_SEP) {
			groups.push(self.group(raw, at)?);
		}
		Ok(Descriptor::new(groups))
	}

	fn group(&self, raw: &str, offset: usize) -> Result<Group, ParseError> {
		let mut candidates = Vec::new();
		for (at, alt) in split_offsets(raw, offset, ALT_SEP) {
			let (at, alt) = trim_offset(alt, at);
			candidates.push(self.candidate(alt, at)?);
		}
		Ok(Group::new(candidates))
	}

	/// Parses one `[name ':'] target [condition]` entry. `raw` is trimmed.
	fn candidate(&self, raw: &str, offset: usize) -> Result<Candidate, ParseError> {
		let malformed = || ParseError::Malformed {
			fragment: raw.to_string(),
			offset,
		};

		let (head, condition) = match raw.find(CONDITION_OPEN) {
			None => (raw, None),
			Some(open) => {
				// The clause must be a non-leading suffix with room for a
				// kind and argument between the parentheses.
				if open == 0 || open + 2 > raw.len() - 1 || !raw.ends_with(CONDITION_CLOSE) {
					return Err(malformed());
				}
				let spec = self.condition(&raw[open..], offset + open)?;
				(raw[..open].trim_end(), Some(spec))
			}
		};

		let (name, target) = match head.find(NAME_SEP) {
			None => (head, head),
			Some(sep) => (head[..sep].trim_end(), head[sep + 1..].trim_start()),
		};
		if name.is_empty() || target.is_empty() {
			return Err(malformed());
		}

		Ok(Candidate {
			name: name.to_string(),
			target: target.to_string(),
			condition,
		})
	}

	/// Parses a `(kind:argument)` clause. `raw` includes both parentheses.
	fn condition(&self, raw: &str, offset: usize) -> Result<ConditionSpec, ParseError> {
		let malformed = || ParseError::Malformed {
			fragment: raw.to_string(),
			offset,
		};

		let inner = &raw[1..raw.len() - 1];
		let Some(sep) = inner.find(NAME_SEP) else {
			return Err(malformed());
		};
		let kind = inner[..sep].trim();
		let argument = inner[sep + 1..].trim();
		if kind.is_empty() || argument.is_empty() {
			return Err(malformed());
		}
		if !self.kinds.contains(&kind) {
			return Err(ParseError::UnknownCondition {
				kind: kind.to_string(),
				offset,
			});
		}

		Ok(ConditionSpec {
			kind: kind.to_string(),
			argument: argument.to_string(),
		})
	}
}

impl FromStr for Descriptor {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse(s)
	}
}
