//! Table renderer for classified plan changes
//!
//! Renders display rows as a two-column terminal table with a bold header
//! and a separator line between every row. The category cell carries its
//! color; addresses are plain. Rendering consumes rows in the order given
//! and never reorders them.

use owo_colors::OwoColorize;

use super::types::DisplayRow;

const ACTION_HEADER: &str = "Action";
const ADDRESSES_HEADER: &str = "Addresses";

/// Renderer producing the final table string
pub struct TableRenderer;

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render rows into a table string. An empty row list yields the header
    /// and its underline only.
    pub fn render(&self, rows: &[DisplayRow]) -> String {
        let action_width = rows
            .iter()
            .map(|row| row.category.label().len())
            .chain([ACTION_HEADER.len()])
            .max()
            .unwrap_or(0);

        let address_width = rows
            .iter()
            .map(|row| row.address.len())
            .chain([ADDRESSES_HEADER.len()])
            .max()
            .unwrap_or(0);

        let separator = format!(
            "{}┼{}",
            "─".repeat(action_width + 2),
            "─".repeat(address_width + 2)
        );

        let mut lines = vec![
            format!(
                " {} │ {}",
                pad(ACTION_HEADER, action_width).bright_white().bold(),
                pad(ADDRESSES_HEADER, address_width).bright_white().bold()
            ),
            separator.clone(),
        ];

        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                lines.push(separator.clone());
            }

            // Pad before coloring so ANSI codes don't skew column widths
            let label = pad(row.category.label(), action_width);
            let action_cell = match row.category.color() {
                Some(color) => label.color(color).to_string(),
                None => label,
            };

            lines.push(format!(
                " {} │ {}",
                action_cell,
                pad(&row.address, address_width)
            ));
        }

        lines.join("\n")
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}
