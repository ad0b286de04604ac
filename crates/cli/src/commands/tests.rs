use std::io::Write as _;

use pretty_assertions::assert_eq;
use seek_find::SearchOptions;

use super::*;

fn search(pattern: &str) -> SearchArgs {
	SearchArgs {
		pattern: pattern.to_owned(),
		regex: false,
		match_case: false,
		whole_word: false,
	}
}

#[test]
fn find_reports_one_based_line_and_column() {
	let pattern = CompiledPattern::compile("needle", SearchOptions::literal()).unwrap();
	let found = find_in("hay\nhay Needle\n\tneedle hay", &pattern);
	assert_eq!(
		found,
		vec![
			FoundAt {
				line: 2,
				column: 5,
				text: "Needle".to_owned(),
			},
			FoundAt {
				line: 3,
				column: 2,
				text: "needle".to_owned(),
			},
		]
	);
}

#[test]
fn find_columns_count_characters() {
	let pattern = CompiledPattern::compile("b", SearchOptions::literal()).unwrap();
	let found = find_in("ééb", &pattern);
	assert_eq!(found[0].column, 3);
}

#[test]
fn flags_layer_over_config_defaults() {
	let args = SearchArgs {
		match_case: true,
		..search("x")
	};
	let defaults = SearchOptions::literal().with_whole_word(true);
	assert_eq!(args.options(defaults), SearchOptions::literal().with_whole_word(true).with_match_case(true));
}

#[test]
fn replace_text_counts_and_rewrites() {
	let (text, count) = replace_text("Foo foo food", &search("foo"), "bar", &FindConfig::default()).unwrap();
	assert_eq!(text, "bar bar bard");
	assert_eq!(count, 3);

	let args = SearchArgs {
		whole_word: true,
		match_case: true,
		..search("foo")
	};
	let (text, count) = replace_text("Foo foo food", &args, "bar", &FindConfig::default()).unwrap();
	assert_eq!(text, "Foo bar food");
	assert_eq!(count, 1);
}

#[test]
fn replace_text_rejects_bad_regex_and_empty_pattern() {
	let args = SearchArgs {
		regex: true,
		..search("(unclosed")
	};
	assert!(replace_text("text", &args, "", &FindConfig::default()).is_err());
	assert!(replace_text("text", &search(""), "", &FindConfig::default()).is_err());
}

#[test]
fn replace_in_place_writes_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	write!(file, "one two one").unwrap();

	let command = Command::Replace {
		search: search("one"),
		replacement: "1".to_owned(),
		file: file.path().to_path_buf(),
		in_place: true,
	};
	run(command, &FindConfig::default()).unwrap();

	assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "1 two 1");
}

#[test]
fn find_file_reports_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let err = find_file(&dir.path().join("missing.txt"), &search("x"), &FindConfig::default()).unwrap_err();
	assert!(err.to_string().starts_with("failed to read"));
}
