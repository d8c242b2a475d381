use getopts::{Matches, Options};
use log::LogLevelFilter;

use logger::init_logger;
use survey;

/// Everything the generator binary needs to run. Every option has a
/// default, so a bare invocation reproduces the canonical dataset.
pub struct Config {
    pub num_rows: u64,
    /// None means "draw entropy from the OS"; the output is then not
    /// reproducible, which is sometimes exactly what is wanted.
    pub seed: Option<usize>,
    pub output_file: String,
    pub schema_file: Option<String>,
    pub plot_x: String,
    pub plot_y: String
}

/// Prints the command line usage options
fn print_usage(program: &str, opts: Options) {
    let brief = format!("Usage: {} [options]", program);
    print!("{}\n", opts.usage(&brief));
}

pub fn load(args: Vec<String>) -> Result<Config, String> {
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optopt("n", "num_rows", "number of records to generate (default: 28)", "NUM_ROWS");
    opts.optopt("s", "seed", "seed for the random generator (default: 42)", "SEED");
    opts.optflag("u", "unseeded", "draw entropy from the OS; output is not reproducible");
    opts.optopt("o", "output", "file to write the table to (default: synthetic_data.csv)", "OUTPUT_FILE");
    opts.optopt("", "schema", "JSON schema to use instead of the built-in survey", "SCHEMA_FILE");
    opts.optopt("p", "plot", "columns to draw as a scatter (default: Koerpergroesse:Schuhgroesse)", "X_COL:Y_COL");
    opts.optopt("l", "log_file", "write the log to a file instead of the console", "LOG_FILE_PATH");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(error) => {
            print_usage(&program, opts);
            return Err(format!("{}", error));
        }
    };

    if matches.opt_present("h") {
        print_usage(&program, opts);
        return Err("".to_string());
    }

    // Setup logging
    let log_file = matches.opt_str("l").map(|path| path.trim().to_string());
    if init_logger(LogLevelFilter::Info, log_file).is_err() {
        return Err("Failed to initialize the logger.".to_string());
    }

    info!("Logging initialized, processing command line options.");

    let num_rows = numeric_option(&matches, "n", survey::DEFAULT_NUM_ROWS as u64);

    let seed = if matches.opt_present("u") {
        if matches.opt_present("s") {
            return Err("--seed and --unseeded contradict each other.".to_string());
        }
        None
    } else {
        Some(numeric_option(&matches, "s", survey::DEFAULT_SEED as u64) as usize)
    };

    let output_file = match matches.opt_str("o") {
        Some(path) => path.trim().to_string(),
        None => survey::DEFAULT_OUTPUT_FILE.to_string()
    };

    let schema_file = matches.opt_str("schema").map(|path| path.trim().to_string());

    let (plot_x, plot_y) = match matches.opt_str("p") {
        Some(ref columns) => parse_plot_columns(columns)?,
        None => (survey::PLOT_X_COLUMN.to_string(), survey::PLOT_Y_COLUMN.to_string())
    };

    Ok(Config {
        num_rows: num_rows,
        seed: seed,
        output_file: output_file,
        schema_file: schema_file,
        plot_x: plot_x,
        plot_y: plot_y
    })
}

// Bad numeric input falls back to the default with a warning rather than
// aborting, matching how the rest of the options behave.
fn numeric_option(matches: &Matches, name: &str, default: u64) -> u64 {
    match matches.opt_str(name) {
        Some(value) => {
            info!("Received option: {} = {}", name, value);
            match value.trim().parse::<u64>() {
                Ok(parsed) => parsed,
                Err(err) => {
                    warn!("{}, using default value {}", err, default);
                    default
                }
            }
        }
        None => default
    }
}

fn parse_plot_columns(columns: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = columns.split(':').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(format!("--plot expects X_COL:Y_COL, got {:?}", columns));
    }
    Ok((parts[0].trim().to_string(), parts[1].trim().to_string()))
}
