extern crate rand;
extern crate synthtab;

use rand::{SeedableRng, StdRng};

use synthtab::json::load_schema_from_file;

/// A script that loads the shipped survey schema file, generates a few
/// rows from it, and prints the result.
///
/// # Example
///
/// cargo run --example survey_schema
///
fn main() {
    let seed: &[usize] = &[42];
    let mut rng: StdRng = SeedableRng::from_seed(seed);

    match load_schema_from_file("schemas/survey.json") {
        Ok(schema) => {
            println!("Schema \"{}\" successfully loaded.", schema);
            match schema.generate_table(&mut rng, 3) {
                Ok(table) => print!("{}", table.to_delimited(",")),
                Err(err) => println!("{}", err)
            }
        }
        Err(err) => {
            println!("{}", err);
            return;
        }
    }
}
