//! Line-level content heuristics
//!
//! Shallow textual checks that run on every raw line regardless of
//! placeholder syntax. False positives are expected.

use super::{Check, CheckContext};
use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::position::{Span, char_column};
use regex::Regex;
use std::sync::LazyLock;

struct SecurityPattern {
    regex: Regex,
    code: DiagnosticCode,
    message: &'static str,
}

impl SecurityPattern {
    fn new(pattern: &str, code: DiagnosticCode, message: &'static str) -> Self {
        Self {
            regex: Regex::new(pattern).expect("security pattern must compile"),
            code,
            message,
        }
    }
}

static SECURITY_PATTERNS: LazyLock<Vec<SecurityPattern>> = LazyLock::new(|| {
    vec![
        SecurityPattern::new(
            r"(?i)eval\s*\(",
            DiagnosticCode::EvalUsage,
            "Potential security risk: eval() usage",
        ),
        SecurityPattern::new(
            r#"(?i)password\s*=\s*["'][^"']*["']"#,
            DiagnosticCode::HardcodedPassword,
            "Potential hardcoded password",
        ),
        SecurityPattern::new(
            r#"(?i)api_?key\s*=\s*["'][^"']*["']"#,
            DiagnosticCode::HardcodedApiKey,
            "Potential hardcoded API key",
        ),
        SecurityPattern::new(
            r"(?i)<script",
            DiagnosticCode::ScriptTag,
            "Potential XSS risk: script tag",
        ),
    ]
});

/// Trailing whitespace and security heuristics
pub struct ContentCheck;

impl Check for ContentCheck {
    fn name(&self) -> &str {
        "content"
    }

    fn run(&self, context: &CheckContext) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (line_index, line) in context.text.split('\n').enumerate() {
            if context.config.check_trailing_whitespace {
                check_trailing_whitespace(line, line_index, &mut diagnostics);
            }
            check_security_patterns(line, line_index, &mut diagnostics);
        }

        diagnostics
    }
}

fn check_trailing_whitespace(line: &str, line_index: usize, out: &mut Vec<Diagnostic>) {
    let trimmed = line.trim_end();
    if trimmed.len() == line.len() {
        return;
    }

    out.push(Diagnostic::information(
        DiagnosticCode::TrailingWhitespace,
        Span::on_line(
            line_index,
            trimmed.chars().count(),
            line.chars().count(),
        ),
        "Trailing whitespace detected",
    ));
}

/// First match only per pattern per line
fn check_security_patterns(line: &str, line_index: usize, out: &mut Vec<Diagnostic>) {
    for pattern in SECURITY_PATTERNS.iter() {
        if let Some(found) = pattern.regex.find(line) {
            out.push(Diagnostic::warning(
                pattern.code,
                Span::on_line(
                    line_index,
                    char_column(line, found.start()),
                    char_column(line, found.end()),
                ),
                pattern.message,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationConfig;
    use crate::diagnostic::Severity;
    use crate::scan::scan;

    fn run_content(text: &str, trailing: bool) -> Vec<Diagnostic> {
        let scan = scan(text);
        let config = ValidationConfig {
            check_trailing_whitespace: trailing,
            ..ValidationConfig::default()
        };
        let context = CheckContext {
            text,
            scan: &scan,
            config: &config,
        };
        ContentCheck.run(&context)
    }

    #[test]
    fn test_trailing_whitespace_disabled_by_default() {
        assert!(run_content("let a = 1;   ", false).is_empty());
    }

    #[test]
    fn test_trailing_whitespace_spans_the_run() {
        let diagnostics = run_content("let a = 1; \t ", true);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::TrailingWhitespace);
        assert_eq!(diagnostics[0].severity, Severity::Information);
        assert_eq!(diagnostics[0].span, Span::on_line(0, 10, 13));
    }

    #[test]
    fn test_whitespace_only_line() {
        let diagnostics = run_content("ok\n   \nok", true);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span, Span::on_line(1, 0, 3));
    }

    #[test]
    fn test_eval_usage_case_insensitive() {
        let diagnostics = run_content("let r = EVAL (input);", false);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::EvalUsage);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert_eq!(diagnostics[0].span, Span::on_line(0, 8, 14));
    }

    #[test]
    fn test_hardcoded_password_span_is_matched_text() {
        let line = r#"    password = "hunter2";"#;
        let diagnostics = run_content(line, false);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Potential hardcoded password");
        assert_eq!(diagnostics[0].span, Span::on_line(0, 4, 24));
    }

    #[test]
    fn test_hardcoded_api_key_variants() {
        for line in [r#"api_key = 'abc'"#, r#"apiKey="abc""#, r#"API_KEY = """#] {
            let diagnostics = run_content(line, false);
            assert_eq!(diagnostics.len(), 1, "line {:?}", line);
            assert_eq!(diagnostics[0].code, DiagnosticCode::HardcodedApiKey);
        }
    }

    #[test]
    fn test_password_from_placeholder_is_not_flagged() {
        assert!(run_content("password = @[password_value]@", false).is_empty());
    }

    #[test]
    fn test_script_tag() {
        let diagnostics = run_content("<div><SCRIPT src=x></div>", false);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::ScriptTag);
        assert_eq!(diagnostics[0].span, Span::on_line(0, 5, 12));
    }

    #[test]
    fn test_first_match_only_per_pattern_per_line() {
        let diagnostics = run_content("eval(a); eval(b);\neval(c)", false);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].span.start.line, 0);
        assert_eq!(diagnostics[1].span.start.line, 1);
    }

    #[test]
    fn test_patterns_are_independent() {
        let diagnostics = run_content(r#"eval(x); password = "p"; <script>"#, false);
        let codes: Vec<_> = diagnostics.iter().map(|d| d.code).collect();
        assert_eq!(
            codes,
            vec![
                DiagnosticCode::EvalUsage,
                DiagnosticCode::HardcodedPassword,
                DiagnosticCode::ScriptTag
            ]
        );
    }
}
