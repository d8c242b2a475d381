use std::fs::File;
use std::io::{BufWriter, Write};

use pad::{Alignment, PadStr};

use schema::Table;

/// Writes the table as delimited text: header row first, one line per
/// record. An existing file at `path` is overwritten; a failed write may
/// leave a partial file behind.
pub fn write_delimited(table: &Table, path: &str, delimiter: &str) -> Result<(), String> {
    let file = File::create(path)
        .map_err(|err| format!("Failed to create {}: {}", path, err))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(table.to_delimited(delimiter).as_bytes())
        .map_err(|err| format!("Failed to write {}: {}", path, err))?;
    writer.flush()
        .map_err(|err| format!("Failed to flush {}: {}", path, err))
}

/// Lays the table out as right-aligned, space-separated columns for a
/// console preview. Readability is the only contract here.
pub fn format_preview(table: &Table) -> String {
    let widths: Vec<usize> = table.header.iter().enumerate().map(|(index, name)| {
        let mut width = name.chars().count();
        for row in table.rows.iter() {
            let cell = row[index].chars().count();
            if cell > width {
                width = cell;
            }
        }
        width
    }).collect();

    let mut output = pad_row(&table.header, &widths);
    for row in table.rows.iter() {
        output.push('\n');
        output.push_str(&pad_row(row, &widths));
    }
    output
}

fn pad_row(row: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = row.iter().zip(widths.iter()).map(|(cell, width)| {
        cell.pad(*width, ' ', Alignment::Right, false)
    }).collect();
    cells.join("  ")
}
