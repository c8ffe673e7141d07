use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::pipeline::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Output: {}", result.output.display());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Counter", "Rows"]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    let report = &result.report;
    table.add_row(vec![Cell::new("Rows read"), Cell::new(report.rows_read)]);
    table.add_row(vec![Cell::new("Valid"), Cell::new(report.valid)]);
    table.add_row(vec![
        Cell::new("Discarded"),
        Cell::new(report.discarded_total()),
    ]);
    for (reason, count) in report.breakdown() {
        table.add_row(vec![Cell::new(format!("  {reason}")), Cell::new(count)]);
    }
    table.add_row(vec![Cell::new("Noise"), Cell::new(report.noise)]);
    table.add_row(vec![
        Cell::new("Unclassifiable"),
        Cell::new(report.unclassifiable),
    ]);
    table.add_row(vec![
        Cell::new("Brand headers"),
        Cell::new(report.brand_headers),
    ]);
    table.add_row(vec![
        Cell::new("Model headers"),
        Cell::new(report.model_headers),
    ]);

    println!("{table}");
}
