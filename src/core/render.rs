use crate::core::LookupResult;
use crate::utils::error::{FinderError, Result};

const NO_DATA_NOTICE: &str = "No data found. Please try again..";

/// Column set shared by the table and the CSV export: "id" first, then the
/// value keys of the first entry.
fn columns(results: &[LookupResult]) -> Vec<String> {
    let mut columns = vec!["id".to_string()];
    if let Some(first) = results.first() {
        columns.extend(first.values.keys().cloned());
    }
    columns
}

fn cell(result: &LookupResult, column: &str) -> String {
    if column == "id" {
        return result.id.clone();
    }
    match result.values.get(column) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

/// Render the result set as an aligned text table.
pub fn table(results: &[LookupResult]) -> String {
    if results.is_empty() {
        return NO_DATA_NOTICE.to_string();
    }

    let columns = columns(results);
    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|result| columns.iter().map(|c| cell(result, c)).collect())
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
    for row in &rows {
        for (i, value) in row.iter().enumerate() {
            widths[i] = widths[i].max(value.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&columns, &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Serialize the result set to CSV with the same column set as the table.
pub fn to_csv(results: &[LookupResult]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let columns = columns(results);

    writer.write_record(&columns)?;
    for result in results {
        let row: Vec<String> = columns.iter().map(|c| cell(result, c)).collect();
        writer.write_record(&row)?;
    }

    writer.into_inner().map_err(|e| {
        FinderError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            e.to_string(),
        ))
    })
}
