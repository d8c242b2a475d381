use std::collections::HashMap;
use std::fmt;
use rand;

use generators::*;

/// How a single column of the table gets its values.
#[derive(Debug)]
pub enum FieldGenerator {
    /// Row identifier: start + row index, so identifiers are unique and
    /// strictly ascending.
    Sequence { start: i64 },
    /// Uniform integer in [min, max).
    Integer { min: i64, max: i64 },
    /// Uniform real in [min, max), rounded to `decimals` places and
    /// rendered with exactly that many places.
    Real { min: f64, max: f64, decimals: usize },
    /// Uniform draw, with replacement, from a fixed label set.
    Choice { choices: Vec<String> },
    /// Anchor date plus one day per row.
    DateSequence { start: Date },
    /// (source + offset) / divisor + N(0, noise_std_dev), rounded to the
    /// nearest integer. `source` must name an earlier numeric field.
    Derived { source: String, offset: f64, divisor: f64, noise_std_dev: f64 }
}

#[derive(Debug)]
pub struct Field {
    pub name: String,
    pub generator: FieldGenerator
}

#[derive(Debug)]
pub struct Schema {
    pub table_name: String,
    pub fields: Vec<Field>
}

impl Schema {
    pub fn add_field(&mut self, f: Field) {
        self.fields.push(f);
    }

    pub fn header(&self) -> Vec<String> {
        self.fields.iter().map(|field| field.name.clone()).collect()
    }

    /// Generates one row, fields in declaration order. Numeric values are
    /// recorded along the way so Derived fields can reference them.
    pub fn generate_row<R: rand::Rng>(&self, rng: &mut R, row_index: u64)
            -> Result<Vec<String>, String> {
        let mut numeric: HashMap<&str, f64> = HashMap::new();
        let mut result = Vec::with_capacity(self.fields.len());

        for field in self.fields.iter() {
            let rendered = match field.generator {
                FieldGenerator::Sequence { start } => {
                    let value = start + row_index as i64;
                    numeric.insert(field.name.as_str(), value as f64);
                    value.to_string()
                }
                FieldGenerator::Integer { min, max } => {
                    let value = generate_integer(rng, min, max);
                    numeric.insert(field.name.as_str(), value as f64);
                    value.to_string()
                }
                FieldGenerator::Real { min, max, decimals } => {
                    let scale = 10f64.powi(decimals as i32);
                    let value = (generate_real(rng, min, max) * scale).round() / scale;
                    numeric.insert(field.name.as_str(), value);
                    format!("{:.*}", decimals, value)
                }
                FieldGenerator::Choice { ref choices } => {
                    generate_choice(rng, choices.as_slice()).clone()
                }
                FieldGenerator::DateSequence { start } => {
                    start.plus_days(row_index).to_string()
                }
                FieldGenerator::Derived { ref source, offset, divisor, noise_std_dev } => {
                    let base = match numeric.get(source.as_str()) {
                        Some(value) => *value,
                        None => return Err(format!(
                            "Derived field {} references {}, which is not an \
                             earlier numeric field.", field.name, source))
                    };
                    let noise = generate_gauss(rng, 0.0, noise_std_dev);
                    let value = ((base + offset) / divisor + noise).round() as i64;
                    numeric.insert(field.name.as_str(), value as f64);
                    value.to_string()
                }
            };
            result.push(rendered);
        }

        Ok(result)
    }

    /// Generates the whole table in one pass. All randomness flows through
    /// `rng`, so a fixed seed reproduces the table exactly.
    pub fn generate_table<R: rand::Rng>(&self, rng: &mut R, num_rows: u64)
            -> Result<Table, String> {
        let mut rows = Vec::with_capacity(num_rows as usize);

        for row_index in 0..num_rows {
            let row = self.generate_row(rng, row_index)?;
            debug!("{}", row.join(" "));
            rows.push(row);
        }

        Ok(Table {
            header: self.header(),
            rows: rows
        })
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.table_name)
    }
}

/// A fully generated table. Built once, never mutated afterwards.
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>
}

impl Table {
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.header.len()
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        self.header.iter().position(|h| h == name).map(|index| {
            self.rows.iter().map(|row| row[index].as_str()).collect()
        })
    }

    /// Header line plus one line per row, each terminated with a newline.
    pub fn to_delimited(&self, delimiter: &str) -> String {
        let mut output = self.header.join(delimiter);
        output.push('\n');

        for row in self.rows.iter() {
            output.push_str(&row.join(delimiter));
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use generators::Date;
    use rand::{SeedableRng, StdRng};

    fn seeded(seed: usize) -> StdRng {
        let seed: &[usize] = &[seed];
        SeedableRng::from_seed(seed)
    }

    fn sample_schema() -> Schema {
        let mut schema = Schema {
            table_name: "sample".to_string(),
            fields: Vec::new()
        };
        schema.add_field(Field {
            name: "id".to_string(),
            generator: FieldGenerator::Sequence { start: 1 }
        });
        schema.add_field(Field {
            name: "height".to_string(),
            generator: FieldGenerator::Integer { min: 158, max: 190 }
        });
        schema.add_field(Field {
            name: "reach".to_string(),
            generator: FieldGenerator::Real { min: 60.0, max: 75.0, decimals: 1 }
        });
        schema.add_field(Field {
            name: "color".to_string(),
            generator: FieldGenerator::Choice {
                choices: vec!["red".to_string(), "blue".to_string()]
            }
        });
        schema.add_field(Field {
            name: "day".to_string(),
            generator: FieldGenerator::DateSequence {
                start: Date { day: 30, month: 12, year: 2023 }
            }
        });
        schema.add_field(Field {
            name: "shoe".to_string(),
            generator: FieldGenerator::Derived {
                source: "height".to_string(),
                offset: -50.0,
                divisor: 3.0,
                noise_std_dev: 1.0
            }
        });
        schema
    }

    #[test]
    fn table_has_requested_shape() {
        let schema = sample_schema();
        let mut rng = seeded(42);
        let table = schema.generate_table(&mut rng, 5).unwrap();
        assert_eq!(table.num_rows(), 5);
        assert_eq!(table.num_columns(), 6);
        assert_eq!(table.header, schema.header());
    }

    #[test]
    fn sequence_column_counts_from_start() {
        let schema = sample_schema();
        let mut rng = seeded(42);
        let table = schema.generate_table(&mut rng, 4).unwrap();
        assert_eq!(table.column("id").unwrap(), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn date_column_advances_one_day_per_row() {
        let schema = sample_schema();
        let mut rng = seeded(42);
        let table = schema.generate_table(&mut rng, 4).unwrap();
        assert_eq!(
            table.column("day").unwrap(),
            vec!["30.12.2023", "31.12.2023", "01.01.2024", "02.01.2024"]
        );
    }

    #[test]
    fn real_column_renders_one_decimal() {
        let schema = sample_schema();
        let mut rng = seeded(42);
        let table = schema.generate_table(&mut rng, 10).unwrap();
        for value in table.column("reach").unwrap() {
            let parsed = value.parse::<f64>().unwrap();
            assert!(parsed >= 60.0 && parsed <= 75.0, "{} out of range", value);
            assert_eq!(value.split('.').count(), 2, "{} not rendered with a decimal", value);
            assert_eq!(value.split('.').nth(1).unwrap().len(), 1);
        }
    }

    #[test]
    fn derived_column_tracks_its_source() {
        let schema = sample_schema();
        let mut rng = seeded(42);
        let table = schema.generate_table(&mut rng, 50).unwrap();
        let heights = table.column("height").unwrap();
        let shoes = table.column("shoe").unwrap();
        for (height, shoe) in heights.iter().zip(shoes.iter()) {
            let height = height.parse::<f64>().unwrap();
            let shoe = shoe.parse::<f64>().unwrap();
            let expected = (height - 50.0) / 3.0;
            // Noise is N(0, 1); a residual beyond 6 would be a ~5.5 sigma event.
            assert!((shoe - expected).abs() < 6.0,
                    "shoe {} too far from {}", shoe, expected);
        }
    }

    #[test]
    fn same_seed_reproduces_the_table() {
        let schema = sample_schema();
        let mut first = seeded(42);
        let mut second = seeded(42);
        let left = schema.generate_table(&mut first, 20).unwrap();
        let right = schema.generate_table(&mut second, 20).unwrap();
        assert_eq!(left.to_delimited(","), right.to_delimited(","));
    }

    #[test]
    fn derived_field_with_unknown_source_is_an_error() {
        let mut schema = Schema {
            table_name: "broken".to_string(),
            fields: Vec::new()
        };
        schema.add_field(Field {
            name: "shoe".to_string(),
            generator: FieldGenerator::Derived {
                source: "height".to_string(),
                offset: 0.0,
                divisor: 1.0,
                noise_std_dev: 0.0
            }
        });
        let mut rng = seeded(42);
        assert!(schema.generate_table(&mut rng, 1).is_err());
    }

    #[test]
    fn derived_field_may_not_reference_a_choice_field() {
        let mut schema = Schema {
            table_name: "broken".to_string(),
            fields: Vec::new()
        };
        schema.add_field(Field {
            name: "label".to_string(),
            generator: FieldGenerator::Choice { choices: vec!["a".to_string()] }
        });
        schema.add_field(Field {
            name: "copy".to_string(),
            generator: FieldGenerator::Derived {
                source: "label".to_string(),
                offset: 0.0,
                divisor: 1.0,
                noise_std_dev: 0.0
            }
        });
        let mut rng = seeded(42);
        assert!(schema.generate_row(&mut rng, 0).is_err());
    }

    #[test]
    fn to_delimited_ends_every_line_with_a_newline() {
        let schema = sample_schema();
        let mut rng = seeded(42);
        let table = schema.generate_table(&mut rng, 3).unwrap();
        let text = table.to_delimited(",");
        assert_eq!(text.lines().count(), 4);
        assert!(text.ends_with('\n'));
    }
}
