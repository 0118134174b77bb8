//! Miette diagnostic wrapper for plural formula parse errors.

use miette::{Diagnostic, NamedSource, SourceSpan};
use plural_rule::ParseError;
use thiserror::Error;

/// A miette-compatible diagnostic for formula parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(plural::syntax))]
pub struct FormulaDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl FormulaDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(name: &str, content: &str, err: &ParseError) -> Self {
        let (span, message, help): (SourceSpan, String, Option<String>) = match err {
            ParseError::Syntax {
                line,
                column,
                message,
            } => {
                // Sum of (line_length + 1) for lines before error line, plus column.
                let offset = content
                    .lines()
                    .take(line.saturating_sub(1))
                    .map(|l| l.len() + 1)
                    .sum::<usize>()
                    + column.saturating_sub(1);

                // Clamp offset to content length to avoid miette panic on out-of-bounds
                let offset = offset.min(content.len());
                (
                    (offset, 1).into(),
                    format!("syntax error: {}", message),
                    None,
                )
            }
            ParseError::NestingTooDeep { max_depth } => (
                (0, content.len()).into(),
                format!("formula nesting exceeds the maximum depth of {}", max_depth),
                Some("raise the limit with --max-depth".to_string()),
            ),
        };

        FormulaDiagnostic {
            src: NamedSource::new(name, content.to_string()),
            span,
            message,
            help,
        }
    }
}
