//! Rendering search results for the terminal

use anyhow::Result;
use cask_config::OutputFormat;
use cask_core::{
    CURRENCY, CatalogItem, CsvRowExporter, JsonExporter, TableRow, TableRowExporter, two_places,
};

pub fn render(items: &[CatalogItem], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(items)),
        OutputFormat::Csv => Ok(render_csv(items)),
        OutputFormat::Json => render_json(items),
    }
}

fn render_table(items: &[CatalogItem]) -> String {
    if items.is_empty() {
        return "No matching items.".to_string();
    }

    let headers = vec![
        "Name".to_string(),
        "Alcohol".to_string(),
        "Price".to_string(),
        "Volume".to_string(),
        format!("cl alc per {}", CURRENCY),
    ];
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            let mut exporter = TableRowExporter::new();
            item.export(&mut exporter);
            cells(exporter.into_row())
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(&headers, &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &rows {
        lines.push(format_line(row, &widths));
    }
    lines.join("\n")
}

fn cells(row: TableRow) -> Vec<String> {
    vec![
        row.name,
        format!("{:.2}%", two_places(row.alcohol)),
        format!("{:.2}", two_places(row.price)),
        format!("{} ml", row.volume_ml),
        row.alcohol_cl_per_unit
            .map(|v| format!("{:.2}", two_places(v)))
            .unwrap_or_else(|| "-".to_string()),
    ]
}

// First column left-aligned, the rest right-aligned
fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            let pad = " ".repeat(width.saturating_sub(cell.chars().count()));
            if i == 0 {
                format!("{}{}", cell, pad)
            } else {
                format!("{}{}", pad, cell)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn render_csv(items: &[CatalogItem]) -> String {
    let mut lines = vec![CsvRowExporter::HEADER.to_string()];
    for item in items {
        let mut exporter = CsvRowExporter::new();
        item.export(&mut exporter);
        lines.push(exporter.finish());
    }
    lines.join("\n")
}

fn render_json(items: &[CatalogItem]) -> Result<String> {
    let values: Vec<_> = items
        .iter()
        .map(|item| {
            let mut exporter = JsonExporter::new();
            item.export(&mut exporter);
            exporter.finish()
        })
        .collect();
    Ok(serde_json::to_string_pretty(&values)?)
}
