//! Candidate eligibility conditions.

use descry_parser::{KIND_ON_CLASS, KIND_ON_MISSING_CLASS};

use crate::resolve::TypeLookup;

/// A predicate gating whether a candidate is eligible.
///
/// The kind token ties an implementation to `(kind:argument)` clauses in
/// descriptors.
pub trait Condition: Send + Sync {
	/// The kind token this condition answers for.
	fn kind(&self) -> &str;

	/// Evaluates the clause argument against the available types.
	fn eval(&self, argument: &str, types: &dyn TypeLookup) -> bool;
}

/// Eligible when the argument type is present.
pub struct OnClass;

impl Condition for OnClass {
	fn kind(&self) -> &str {
		KIND_ON_CLASS
	}

	fn eval(&self, argument: &str, types: &dyn TypeLookup) -> bool {
		types.exists(argument)
	}
}

/// Eligible when the argument type is absent.
pub struct OnMissingClass;

impl Condition for OnMissingClass {
	fn kind(&self) -> &str {
		KIND_ON_MISSING_CLASS
	}

	fn eval(&self, argument: &str, types: &dyn TypeLookup) -> bool {
		!types.exists(argument)
	}
}

/// The set of condition kinds a load understands.
///
/// Defaults to the builtin `onClass`/`onMissingClass` pair. The parser
/// validates clause kinds against this set, so an unregistered kind fails
/// the parse instead of being silently skipped.
pub struct ConditionSet {
	conditions: Vec<Box<dyn Condition>>,
}

impl ConditionSet {
	/// A set with no conditions registered.
	pub fn empty() -> Self {
		Self {
			conditions: Vec::new(),
		}
	}

	/// Registers a condition. The first registration wins for a repeated
	/// kind token.
	pub fn with(mut self, condition: Box<dyn Condition>) -> Self {
		self.conditions.push(condition);
		self
	}

	/// Looks up the condition answering for `kind`.
	pub fn get(&self, kind: &str) -> Option<&dyn Condition> {
		self.conditions.iter().find(|c| c.kind() == kind).map(|c| &**c)
	}

	/// All registered kind tokens, in registration order.
	pub fn kinds(&self) -> Vec<&str> {
		self.conditions.iter().map(|c| c.kind()).collect()
	}
}

impl Default for ConditionSet {
	fn default() -> Self {
		Self::empty()
			.with(Box::new(OnClass))
			.with(Box::new(OnMissingClass))
	}
}
