//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use fancy_regex::Regex;

use tagged_grammar::grammar::{FENCE_BEGIN, FENCE_END};
use tagged_grammar::{build_grammar, GrammarDocument, GrammarOptions, LanguageSpec, Registry};

pub fn python() -> LanguageSpec {
    LanguageSpec::new("python", &["python", "py"], "source.python")
}

/// Build a grammar from specs with default options
pub fn grammar_for(specs: Vec<LanguageSpec>) -> GrammarDocument {
    build_grammar(&Registry::new(specs), &GrammarOptions::default())
}

/// Compile an emitted pattern; panics with the pattern on failure
pub fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("pattern {:?} failed to compile: {}", pattern, e))
}

/// Does `pattern` match anywhere in `line` (which should include its `\n`)
pub fn matches(pattern: &str, line: &str) -> bool {
    compile(pattern).is_match(line).unwrap()
}

/// Text of capture `group` when `pattern` matches `line`
pub fn capture(pattern: &str, line: &str, group: usize) -> Option<String> {
    compile(pattern)
        .captures(line)
        .unwrap()
        .and_then(|caps| caps.get(group).map(|m| m.as_str().to_string()))
}

/// Number of lines the indentation fence keeps, starting at the first
/// non-blank line of `lines`
///
/// Simulates a TextMate engine: the fence begins on the first content line,
/// `\1` in the end pattern is replaced by the captured indentation (plain
/// spaces, so no escaping is needed) and every later line is tested against
/// the end pattern until one matches.
pub fn fence_extent(lines: &[&str]) -> usize {
    let start = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .expect("no content line");

    let first = format!("{}\n", lines[start]);
    let indent = capture(FENCE_BEGIN, &first, 1).expect("fence did not open");
    let end = compile(&FENCE_END.replace(r"\1", &indent));

    let mut kept = 1;
    for line in &lines[start + 1..] {
        if end.is_match(&format!("{}\n", line)).unwrap() {
            break;
        }
        kept += 1;
    }
    kept
}
