extern crate rand;
extern crate time;
extern crate synthtab;

#[macro_use]
extern crate log;

use std::env;
use std::process;

use rand::{Rng, SeedableRng, StdRng};

use synthtab::config::{self, Config};
use synthtab::json::load_schema_from_file;
use synthtab::plot::scatter_plot;
use synthtab::schema::Schema;
use synthtab::survey;
use synthtab::util::{format_preview, write_delimited};

const PLOT_WIDTH: usize = 64;
const PLOT_HEIGHT: usize = 20;

fn main() {
    let args: Vec<String> = env::args().collect();

    let config = match config::load(args) {
        Ok(config) => config,
        Err(message) => {
            // An empty message means help was printed; that is a clean exit.
            if message.is_empty() {
                return;
            }
            println!("ERROR - {}", message);
            process::exit(1);
        }
    };

    let schema = match config.schema_file {
        Some(ref path) => {
            info!("Loading schema from: {}", path);
            match load_schema_from_file(path) {
                Ok(schema) => schema,
                Err(err) => {
                    error!("{}", err);
                    process::exit(1);
                }
            }
        }
        None => survey::survey_schema()
    };

    let start_time = time::precise_time_s();

    let result = match config.seed {
        Some(seed) => {
            info!("Seeding the generator with {}", seed);
            let seed_slice: &[usize] = &[seed];
            let mut rng: StdRng = SeedableRng::from_seed(seed_slice);
            run(&config, &schema, &mut rng)
        }
        None => {
            warn!("Running unseeded, the output will not be reproducible.");
            let mut rng = rand::thread_rng();
            run(&config, &schema, &mut rng)
        }
    };

    if let Err(err) = result {
        error!("{}", err);
        process::exit(1);
    }

    let end_time = time::precise_time_s();
    info!("Elapsed time: {} s", end_time - start_time);
}

fn run<R: Rng>(config: &Config, schema: &Schema, rng: &mut R) -> Result<(), String> {
    let table = schema.generate_table(rng, config.num_rows)?;
    info!("{} rows generated for table {}", table.num_rows(), schema);

    println!("{}", format_preview(&table));
    println!("");

    // The scatter is illustrative; a schema without the requested columns
    // just skips it.
    match scatter_plot(&table, &config.plot_x, &config.plot_y, PLOT_WIDTH, PLOT_HEIGHT) {
        Ok(rendering) => println!("{}", rendering),
        Err(err) => warn!("Skipping the scatter plot: {}", err)
    }

    write_delimited(&table, &config.output_file, survey::DELIMITER)?;
    info!("Table written to {}", config.output_file);

    Ok(())
}
