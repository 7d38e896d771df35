//! Function extraction by definition pattern and brace matching.

use regex::Regex;
use thiserror::Error;

/// Why a function could not be extracted. Both cases degrade to placeholder
/// comments in the assembled output; neither stops the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No definition pattern matched anywhere in the source
    #[error("definition not found")]
    NotFound,

    /// A definition matched but the input ended before its closing brace
    #[error("no matching closing brace before end of input")]
    Unbalanced,
}

impl ExtractError {
    /// The single-line comment substituted for the function body.
    pub fn placeholder(&self, name: &str) -> String {
        match self {
            ExtractError::NotFound => format!("// Function {name} not found\n"),
            ExtractError::Unbalanced => {
                format!("// Could not find complete function body for {name}\n")
            }
        }
    }
}

/// Extracts single function definitions from source text by name.
///
/// Matching is textual: a definition pattern locates the signature up to its
/// opening brace, then a depth counter walks to the matching closing brace.
/// Braces inside string and comment literals are counted too; input whose
/// literals unbalance the braces will produce wrong results.
#[derive(Debug, Default)]
pub struct FunctionExtractor;

impl FunctionExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract the named function, or a placeholder comment when it cannot
    /// be found or completed. Successful extractions carry a trailing blank
    /// line so concatenated output stays readable.
    pub fn extract(&self, source: &str, name: &str) -> String {
        match self.find(source, name) {
            Ok(definition) => format!("{definition}\n\n"),
            Err(err) => {
                tracing::warn!("Could not extract {}: {}", name, err);
                err.placeholder(name)
            }
        }
    }

    /// Locate the named function's full definition, attribute line included,
    /// from signature start through the matching closing brace.
    pub fn find<'a>(&self, source: &'a str, name: &str) -> Result<&'a str, ExtractError> {
        // Async definitions first, then the plain form. First match of the
        // attempted pattern wins; duplicates are not disambiguated.
        let m = self
            .match_definition(source, name, true)
            .or_else(|| self.match_definition(source, name, false))
            .ok_or(ExtractError::NotFound)?;

        // The match ends at the opening brace. Braces are ASCII, so a byte
        // walk is safe in UTF-8 source.
        let bytes = source.as_bytes();
        let mut depth = 0i32;
        let mut pos = m.end() - 1;
        while pos < bytes.len() {
            match bytes[pos] {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(&source[m.start()..=pos]);
                    }
                }
                _ => {}
            }
            pos += 1;
        }

        Err(ExtractError::Unbalanced)
    }

    fn match_definition<'a>(
        &self,
        source: &'a str,
        name: &str,
        with_async: bool,
    ) -> Option<regex::Match<'a>> {
        let re = Regex::new(&definition_pattern(name, with_async))
            .expect("definition pattern is valid");
        re.find(source)
    }
}

/// Build the definition pattern for `name`: optional attribute line,
/// optional visibility, the `fn` keyword, the parameter list (which must not
/// itself contain an opening brace), an optional return annotation, and the
/// opening brace.
fn definition_pattern(name: &str, with_async: bool) -> String {
    let qualifier = if with_async { r"async\s+" } else { "" };
    format!(
        r"(?:#\[[^\]]*\]\s*)?(?:pub(?:\([^)]*\))?\s+)?{qualifier}fn\s+{name}\s*\([^{{]*\)\s*(?:->\s*[^{{]*?)?\s*\{{",
        qualifier = qualifier,
        name = regex::escape(name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_function() {
        let source = r#"
fn hello() {
    println!("Hello, world!");
}

fn goodbye() {
    println!("Goodbye!");
}
"#;
        let extractor = FunctionExtractor::new();
        let result = extractor.extract(source, "hello");

        assert_eq!(result, "fn hello() {\n    println!(\"Hello, world!\");\n}\n\n");
    }

    #[test]
    fn test_extract_nested_braces() {
        let source = r#"
fn outer(x: bool) {
    if x {
        inner();
    } else {
        other();
    }
}
"#;
        let extractor = FunctionExtractor::new();
        let found = extractor.find(source, "outer").unwrap();

        assert!(found.starts_with("fn outer"));
        assert!(found.ends_with('}'));
        assert!(found.contains("other();"));
    }

    #[test]
    fn test_extract_async_with_attribute() {
        let source = r#"
#[cfg(feature = "admin")]
pub async fn list_zones(
    State(state): State<AppState>,
    Query(params): Query<PaginationQuery>,
) -> Result<Html<String>, StatusCode> {
    let page = params.page.unwrap_or(1);
    Ok(Html(format!("{page}")))
}
"#;
        let extractor = FunctionExtractor::new();
        let found = extractor.find(source, "list_zones").unwrap();

        // The attribute line is part of the definition.
        assert!(found.starts_with("#[cfg(feature = \"admin\")]"));
        assert!(found.ends_with('}'));
        assert!(found.contains("pub async fn list_zones"));
    }

    #[test]
    fn test_extract_sync_function_via_retry() {
        let source = r#"
pub fn get_zone_form_header(zone: &Zone) -> String {
    format!("<h1>{}</h1>", zone.name)
}
"#;
        let extractor = FunctionExtractor::new();
        let found = extractor.find(source, "get_zone_form_header").unwrap();

        assert!(found.starts_with("pub fn get_zone_form_header"));
        assert!(found.ends_with('}'));
    }

    #[test]
    fn test_extract_multiline_signature() {
        let source = "fn spread(\n    a: u32,\n    b: u32,\n)\n    -> u32\n{\n    a + b\n}\n";
        let extractor = FunctionExtractor::new();
        let found = extractor.find(source, "spread").unwrap();

        assert!(found.starts_with("fn spread"));
        assert!(found.ends_with("a + b\n}"));
    }

    #[test]
    fn test_missing_function_placeholder() {
        let extractor = FunctionExtractor::new();
        let result = extractor.extract("fn other() {}", "missing");

        assert_eq!(result, "// Function missing not found\n");
    }

    #[test]
    fn test_unbalanced_body_placeholder() {
        let truncated = "fn broken(x: bool) {\n    if x {\n        dangling();\n";
        let extractor = FunctionExtractor::new();

        assert_eq!(
            extractor.find(truncated, "broken"),
            Err(ExtractError::Unbalanced)
        );
        assert_eq!(
            extractor.extract(truncated, "broken"),
            "// Could not find complete function body for broken\n"
        );
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let source = "fn dup() { first() }\n\nfn dup() { second() }\n";
        let extractor = FunctionExtractor::new();
        let found = extractor.find(source, "dup").unwrap();

        assert!(found.contains("first()"));
        assert!(!found.contains("second()"));
    }

    #[test]
    fn test_name_is_matched_literally() {
        // A name that would be a regex wildcard must not match other names.
        let extractor = FunctionExtractor::new();
        let result = extractor.extract("fn abc() {}", "a.c");

        assert_eq!(result, "// Function a.c not found\n");
    }

    #[test]
    fn test_brace_inside_string_is_counted() {
        // Known limitation: literals are not lexed, so a closing brace
        // inside a string ends the scan early.
        let source = "fn tricky() {\n    let s = \"}\";\n}\nfn after() {}\n";
        let extractor = FunctionExtractor::new();
        let found = extractor.find(source, "tricky").unwrap();

        assert!(found.ends_with("let s = \"}"));
        assert!(!found.contains("after"));
    }
}
