use super::*;

fn candidate(descriptor: &Descriptor, group: usize, alt: usize) -> &Candidate {
	&descriptor.groups()[group].candidates()[alt]
}

#[test]
fn test_bare_target() {
	let descriptor = parse("Foo").unwrap();
	assert_eq!(descriptor.groups().len(), 1);

	let c = candidate(&descriptor, 0, 0);
	assert_eq!(c.name, "Foo");
	assert_eq!(c.target, "Foo");
	assert_eq!(c.condition, None);
}

#[test]
fn test_named_target() {
	let descriptor = parse("a:Foo").unwrap();

	let c = candidate(&descriptor, 0, 0);
	assert_eq!(c.name, "a");
	assert_eq!(c.target, "Foo");
	assert_eq!(c.condition, None);
}

#[test]
fn test_group_count_matches_commas() {
	let descriptor = parse("a:Foo,b:Bar,c:Baz").unwrap();
	assert_eq!(descriptor.groups().len(), 3);

	// Alternatives do not add groups.
	let descriptor = parse("a:Foo|Bar,c:Baz").unwrap();
	assert_eq!(descriptor.groups().len(), 2);
	assert_eq!(descriptor.groups()[0].candidates().len(), 2);
}

#[test]
fn test_condition_clause() {
	let descriptor = parse("Foo(onClass:java.lang.String)").unwrap();

	let c = candidate(&descriptor, 0, 0);
	assert_eq!(c.name, "Foo");
	assert_eq!(c.target, "Foo");
	assert_eq!(
		c.condition,
		Some(ConditionSpec {
			kind: "onClass".into(),
			argument: "java.lang.String".into(),
		})
	);
}

#[test]
fn test_on_missing_condition() {
	let descriptor = parse("a:Foo(onMissingClass:gone.Type)").unwrap();

	let c = candidate(&descriptor, 0, 0);
	assert_eq!(c.name, "a");
	assert_eq!(c.condition.as_ref().unwrap().kind, "onMissingClass");
	assert_eq!(c.condition.as_ref().unwrap().argument, "gone.Type");
}

#[test]
fn test_whitespace_is_trimmed() {
	let descriptor = parse(" a : Foo ( onClass : x.Y ) | Bar , b : Baz ").unwrap();

	let c = candidate(&descriptor, 0, 0);
	assert_eq!(c.name, "a");
	assert_eq!(c.target, "Foo");
	assert_eq!(c.condition.as_ref().unwrap().kind, "onClass");
	assert_eq!(c.condition.as_ref().unwrap().argument, "x.Y");

	assert_eq!(candidate(&descriptor, 0, 1).target, "Bar");
	assert_eq!(candidate(&descriptor, 1, 0).name, "b");
}

#[test]
fn test_argument_may_contain_path_separators() {
	let descriptor = parse("Foo(onClass:std::sync::Mutex)").unwrap();

	let spec = candidate(&descriptor, 0, 0).condition.clone().unwrap();
	assert_eq!(spec.kind, "onClass");
	assert_eq!(spec.argument, "std::sync::Mutex");
}

#[test]
fn test_missing_close_paren() {
	assert!(matches!(
		parse("Foo(onClass"),
		Err(ParseError::Malformed { .. })
	));
}

#[test]
fn test_leading_paren() {
	assert!(matches!(
		parse("(onClass:x)"),
		Err(ParseError::Malformed { .. })
	));
}

#[test]
fn test_empty_clause() {
	assert!(matches!(parse("Foo()"), Err(ParseError::Malformed { .. })));
	assert!(matches!(
		parse("Foo(onClass)"),
		Err(ParseError::Malformed { .. })
	));
	assert!(matches!(
		parse("Foo(onClass:)"),
		Err(ParseError::Malformed { .. })
	));
	assert!(matches!(parse("Foo(:x)"), Err(ParseError::Malformed { .. })));
}

#[test]
fn test_unknown_condition_kind() {
	match parse("Foo(unknown:Bar)") {
		Err(ParseError::UnknownCondition { kind, .. }) => assert_eq!(kind, "unknown"),
		other => panic!("expected UnknownCondition, got {other:?}"),
	}
}

#[test]
fn test_custom_kinds() {
	let descriptor = parse_with_kinds("Foo(onFeature:simd)", &["onFeature"]).unwrap();
	assert_eq!(
		candidate(&descriptor, 0, 0).condition.as_ref().unwrap().kind,
		"onFeature"
	);

	// The builtin kinds are not implied.
	assert!(matches!(
		parse_with_kinds("Foo(onClass:x)", &["onFeature"]),
		Err(ParseError::UnknownCondition { .. })
	));
}

#[test]
fn test_empty_tokens_rejected() {
	assert!(matches!(parse(""), Err(ParseError::Malformed { .. })));
	assert!(matches!(parse("a:"), Err(ParseError::Malformed { .. })));
	assert!(matches!(parse(":Foo"), Err(ParseError::Malformed { .. })));
	assert!(matches!(parse("a:Foo,"), Err(ParseError::Malformed { .. })));
	assert!(matches!(parse("a:Foo||b:Bar"), Err(ParseError::Malformed { .. })));
}

#[test]
fn test_error_offsets() {
	match parse("ok,Bar(nope:x)") {
		Err(ParseError::UnknownCondition { kind, offset }) => {
			assert_eq!(kind, "nope");
			assert_eq!(offset, 6);
		}
		other => panic!("expected UnknownCondition, got {other:?}"),
	}

	match parse("ok,(onClass:x)") {
		Err(ParseError::Malformed { fragment, offset }) => {
			assert_eq!(fragment, "(onClass:x)");
			assert_eq!(offset, 3);
		}
		other => panic!("expected Malformed, got {other:?}"),
	}
}

#[test]
fn test_from_str() {
	let descriptor: Descriptor = "x:Foo|y:Bar".parse().unwrap();
	assert_eq!(descriptor.groups()[0].candidates().len(), 2);
}

#[test]
fn test_errors_surface_for_unselected_candidates() {
	// The second alternative would never be reached at resolution time, but
	// parsing still validates it.
	assert!(matches!(
		parse("Foo|Bar(bogus:x)"),
		Err(ParseError::UnknownCondition { .. })
	));
}
