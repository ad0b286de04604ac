use rstest::rstest;

use super::*;

fn opts(match_case: bool, whole_word: bool, use_regex: bool) -> SearchOptions {
	SearchOptions {
		match_case,
		whole_word,
		use_regex,
	}
}

#[test]
fn literal_escapes_metacharacters() {
	let p = CompiledPattern::compile("a.b*c", SearchOptions::literal()).unwrap();
	assert!(p.regex().is_match("xx a.b*c yy"));
	assert!(!p.regex().is_match("aXbbbc"));
	assert!(!p.regex().is_match("abc"));
}

#[test]
fn literal_unbalanced_group_is_not_an_error() {
	let p = CompiledPattern::compile("f(x", SearchOptions::literal()).unwrap();
	assert!(p.regex().is_match("call f(x"));
}

#[test]
fn regex_unbalanced_group_reports_error() {
	let err = CompiledPattern::compile("f(x", opts(false, false, true)).unwrap_err();
	assert!(!err.message.is_empty());
	assert_eq!(err.to_string(), err.message);
}

#[test]
fn whole_word_bounds_both_ends() {
	let p = CompiledPattern::compile("cat", opts(true, true, false)).unwrap();
	assert!(p.regex().is_match("the cat sat"));
	assert!(!p.regex().is_match("category"));
	assert!(!p.regex().is_match("bobcat"));
}

#[test]
fn whole_word_bounds_alternation_as_a_unit() {
	let p = CompiledPattern::compile("cat|dog", opts(true, true, true)).unwrap();
	assert!(p.regex().is_match("a dog here"));
	assert!(!p.regex().is_match("catalog"));
	assert!(!p.regex().is_match("hotdogs"));
}

#[test]
fn case_insensitive_unless_match_case() {
	let loose = CompiledPattern::compile("hello", opts(false, false, false)).unwrap();
	assert!(loose.regex().is_match("Hello world"));

	let strict = CompiledPattern::compile("hello", opts(true, false, false)).unwrap();
	assert!(!strict.regex().is_match("Hello world"));
}

#[test]
fn anchors_are_multiline() {
	let p = CompiledPattern::compile("^b", opts(true, false, true)).unwrap();
	assert!(p.regex().is_match("a\nb"));
	let end = CompiledPattern::compile("a$", opts(true, false, true)).unwrap();
	assert!(end.regex().is_match("a\nb"));
}

#[test]
fn is_for_tracks_query_and_options() {
	let options = opts(true, false, false);
	let p = CompiledPattern::compile("foo", options).unwrap();
	assert!(p.is_for("foo", options));
	assert!(!p.is_for("fo", options));
	assert!(!p.is_for("foo", options.with_whole_word(true)));
	assert_eq!(p.raw(), "foo");
	assert_eq!(p.options(), options);
}

#[test]
fn matches_empty_detects_zero_width_patterns() {
	assert!(CompiledPattern::compile("x*", opts(true, false, true)).unwrap().matches_empty());
	assert!(!CompiledPattern::compile("x+", opts(true, false, true)).unwrap().matches_empty());
	assert!(!CompiledPattern::compile("x*", opts(true, false, false)).unwrap().matches_empty());
}

#[rstest]
#[case::plain("Foo", opts(false, false, false), "a foo b", true)]
#[case::case_miss("Foo", opts(true, false, false), "a foo b", false)]
#[case::word_hit("foo", opts(false, true, false), "a FOO b", true)]
#[case::word_miss("foo", opts(false, true, false), "afoob", false)]
#[case::regex_class("f[aeiou]o", opts(true, false, true), "xfeo", true)]
#[case::literal_class("f[aeiou]o", opts(true, false, false), "xfeo", false)]
#[case::regex_word("\\d+", opts(true, true, true), "v 42 x", true)]
#[case::regex_word_miss("\\d+", opts(true, true, true), "v42x", false)]
fn option_combinations(
	#[case] raw: &str,
	#[case] options: SearchOptions,
	#[case] haystack: &str,
	#[case] expected: bool,
) {
	let p = CompiledPattern::compile(raw, options).unwrap();
	assert_eq!(p.regex().is_match(haystack), expected);
}
