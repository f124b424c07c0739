use crate::application::read_models::{
    FileView, HostView, PolicySummaryView, ReportReadModel, ScanSummaryView, SourceView,
    TableSection,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Gap between columns
const COLUMN_SEPARATOR: &str = "  ";

/// TableFormatter adapter rendering each section as an aligned text table
///
/// Sections are printed in a fixed order (files, scan summary, scan file
/// source, policy summary, hosts) separated by a blank line. Absent values
/// are empty cells.
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl TableFormatter {
    fn render_section<T: TableSection>(&self, output: &mut String, rows: &[T], legend: bool) {
        if rows.is_empty() {
            return;
        }
        if !output.is_empty() {
            output.push('\n');
        }

        output.push_str(T::TITLE);
        output.push('\n');

        let cells: Vec<Vec<String>> = rows.iter().map(TableSection::cells).collect();
        let widths = Self::column_widths(T::HEADERS, &cells);

        let headers: Vec<String> = T::HEADERS.iter().map(|h| h.to_string()).collect();
        Self::render_row(output, &headers, &widths);
        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        Self::render_row(output, &rule, &widths);
        for row in &cells {
            Self::render_row(output, row, &widths);
        }

        if legend && !T::legend().is_empty() {
            output.push('\n');
            for line in T::legend() {
                output.push_str(line);
                output.push('\n');
            }
        }
    }

    fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
        headers
            .iter()
            .enumerate()
            .map(|(column, header)| {
                rows.iter()
                    .filter_map(|row| row.get(column))
                    .map(|cell| Self::display_width(cell))
                    .chain(std::iter::once(Self::display_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn render_row(output: &mut String, row: &[String], widths: &[usize]) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| {
                let cell = Self::single_line(cell);
                let padding = width.saturating_sub(Self::display_width(&cell));
                format!("{}{}", cell, " ".repeat(padding))
            })
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR);
        output.push_str(line.trim_end());
        output.push('\n');
    }

    fn single_line(cell: &str) -> String {
        cell.replace(['\r', '\n'], " ")
    }

    fn display_width(cell: &str) -> usize {
        Self::single_line(cell).chars().count()
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_section::<FileView>(&mut output, &model.files, false);
        self.render_section::<ScanSummaryView>(&mut output, &model.scan_summaries, model.show_legend);
        self.render_section::<SourceView>(&mut output, &model.scan_file_sources, false);
        self.render_section::<PolicySummaryView>(&mut output, &model.policy_summaries, false);
        self.render_section::<HostView>(&mut output, &model.hosts, false);

        Ok(output)
    }
}
