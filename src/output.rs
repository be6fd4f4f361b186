//! Grammar serialization and persistence
//!
//! Output is JSON with four-space indentation, keys in a fixed order and a
//! trailing newline, so regenerating from the same registry is byte-identical.

use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::grammar::GrammarDocument;

const INDENT: &[u8] = b"    ";

/// Serialize the grammar to its on-disk text form
pub fn to_json_string(document: &GrammarDocument) -> io::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write the grammar to `path`, replacing any previous output
///
/// Creates the parent directory if it doesn't exist.
pub fn write_grammar(path: &Path, document: &GrammarDocument) -> io::Result<()> {
    let contents = to_json_string(document)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, contents)?;
    tracing::info!("Wrote grammar to {}", path.display());
    Ok(())
}

/// Check whether `path` already holds exactly this grammar
///
/// A missing file counts as stale; other read errors propagate.
pub fn is_up_to_date(path: &Path, document: &GrammarDocument) -> io::Result<bool> {
    let expected = to_json_string(document)?;
    match std::fs::read_to_string(path) {
        Ok(existing) => Ok(existing == expected),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("No grammar at {}", path.display());
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Parse a previously written grammar
pub fn read_grammar(path: &Path) -> io::Result<GrammarDocument> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(io::Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{build_grammar, GrammarOptions};
    use crate::language::LanguageSpec;
    use crate::registry::Registry;

    fn sample() -> GrammarDocument {
        let registry = Registry::new(vec![LanguageSpec::new(
            "python",
            &["python", "py"],
            "source.python",
        )]);
        build_grammar(&registry, &GrammarOptions::default())
    }

    #[test]
    fn test_top_level_key_order() {
        let json = to_json_string(&sample()).unwrap();
        let positions: Vec<usize> = [
            "\"fileTypes\"",
            "\"injectionSelector\"",
            "\"patterns\"",
            "\"scopeName\"",
            "\"repository\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_four_space_indent_and_trailing_newline() {
        let json = to_json_string(&sample()).unwrap();
        assert!(json.starts_with("{\n    \"fileTypes\": [],\n"));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_escaped_patterns_in_json() {
        let json = to_json_string(&sample()).unwrap();
        // `\n` in the pattern is a regex escape, so the JSON holds `\\n`
        assert!(json.contains(r#""begin": "(#)[ \\t]*(python|py)\\n""#));
    }
}
