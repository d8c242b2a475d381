//! Text rendering of a two-column scatter, for a quick visual check of the
//! derived column's correlation. Illustrative only; the serialized table is
//! the real output.

use schema::Table;

/// Renders an x/y scatter of two numeric columns as a character grid.
/// Both axes are scaled to the data range; the caption carries the ranges.
///
/// # Examples
///
/// let rendering = scatter_plot(&table, "Koerpergroesse", "Schuhgroesse", 64, 20);
///
pub fn scatter_plot(table: &Table, x_col: &str, y_col: &str,
                    width: usize, height: usize) -> Result<String, String> {
    if width < 2 || height < 2 {
        return Err(format!("Plot area {}x{} is too small.", width, height));
    }

    let xs = numeric_column(table, x_col)?;
    let ys = numeric_column(table, y_col)?;
    if xs.is_empty() {
        return Err("Cannot plot an empty table.".to_string());
    }

    let (x_min, x_max) = bounds(&xs);
    let (y_min, y_max) = bounds(&ys);
    let x_span = span(x_min, x_max);
    let y_span = span(y_min, y_max);

    let mut grid = vec![vec![' '; width]; height];
    for (x, y) in xs.iter().zip(ys.iter()) {
        let column = ((x - x_min) / x_span * (width - 1) as f64).round() as usize;
        let row = ((y - y_min) / y_span * (height - 1) as f64).round() as usize;
        grid[height - 1 - row][column] = 'x';
    }

    let border: String = ::std::iter::repeat('-').take(width).collect();
    let mut output = format!("{} vs {}\n", x_col, y_col);
    output.push_str(&format!("+{}+ y_max = {}\n", border, format_number(y_max)));
    for row in grid.iter() {
        output.push('|');
        output.extend(row.iter());
        output.push_str("|\n");
    }
    output.push_str(&format!("+{}+ y_min = {}\n", border, format_number(y_min)));
    output.push_str(&format!("x: {} .. {}\n", format_number(x_min), format_number(x_max)));

    Ok(output)
}

fn numeric_column(table: &Table, name: &str) -> Result<Vec<f64>, String> {
    let values = table.column(name)
        .ok_or(format!("Column {} not found in the table.", name))?;

    let mut parsed = Vec::with_capacity(values.len());
    for value in values.iter() {
        let number = value.parse::<f64>().map_err(|_| {
            format!("Column {} holds non-numeric value {:?}.", name, value)
        })?;
        parsed.push(number);
    }
    Ok(parsed)
}

fn bounds(values: &[f64]) -> (f64, f64) {
    let mut min = values[0];
    let mut max = values[0];
    for value in values.iter() {
        if *value < min { min = *value; }
        if *value > max { max = *value; }
    }
    (min, max)
}

// Degenerate ranges (a single point, or a constant column) still need a
// nonzero span to scale against.
fn span(min: f64, max: f64) -> f64 {
    if max > min { max - min } else { 1.0 }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
