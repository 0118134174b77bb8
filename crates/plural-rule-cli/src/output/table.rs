//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use owo_colors::{OwoColorize, Stream};

use super::Outcome;

/// Format evaluation outcomes as an ASCII table.
///
/// Indices that do not name one of the `plural_count` forms are highlighted.
pub fn format_index_table(plural_count: usize, outcomes: &[Outcome]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["n", "Index"]);

    for outcome in outcomes {
        match outcome {
            Outcome::Index { n, index } => {
                let in_range = usize::try_from(*index).is_ok_and(|form| form < plural_count);
                let cell = if in_range {
                    index.to_string()
                } else {
                    format!("{} (out of range)", index)
                        .if_supports_color(Stream::Stdout, |text| text.yellow())
                        .to_string()
                };
                table.add_row(vec![n.to_string(), cell]);
            }
            Outcome::Error { n, error } => {
                let cell = error
                    .if_supports_color(Stream::Stdout, |text| text.red())
                    .to_string();
                table.add_row(vec![n.to_string(), cell]);
            }
        }
    }

    table
}
