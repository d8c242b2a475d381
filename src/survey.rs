//! The built-in teaching dataset: a fake classroom survey with one pair of
//! weakly correlated columns (body height and shoe size), suitable for
//! scatter-plot exercises.

use generators::Date;
use schema::{Field, FieldGenerator, Schema};

pub const DEFAULT_SEED: usize = 42;
pub const DEFAULT_NUM_ROWS: u64 = 28;
pub const DEFAULT_OUTPUT_FILE: &'static str = "synthetic_data.csv";
pub const DELIMITER: &'static str = ",";

/// The correlated pair the scatter plot draws by default.
pub const PLOT_X_COLUMN: &'static str = "Koerpergroesse";
pub const PLOT_Y_COLUMN: &'static str = "Schuhgroesse";

pub const FILMS: [&'static str; 12] = [
    "Hangover", "Top Gun: Maverick", "Oppenheimer", "Harry Potter",
    "Gefährten", "Honig im Kopf", "Mamma Mia!", "House of Gucci",
    "Little Women", "Inception", "Pretty Women", "Coach Carter"
];

pub const SOCK_COLORS: [&'static str; 5] = [
    "weiß", "schwarz", "dunkelgrau", "grün", "braun"
];

pub const BATTERY_LEVELS: [&'static str; 4] = ["30%", "50%", "70%", "90%"];

// Opaque labels, kept verbatim; the digit grouping carries no numeric
// meaning the generator needs to understand.
pub const SAND_GRAIN_COUNTS: [&'static str; 5] = [
    "500 000 000 000 000 000",
    "60 000 000 000 000 000 000",
    "7 000 000 000 000 000 000",
    "25 000 000 000 000 000 000",
    "100 000 000 000 000"
];

pub const DISTANCES: [&'static str; 5] = ["24km", "35km", "42km", "50km", "70km"];

fn choice_field(name: &str, choices: &[&str]) -> Field {
    Field {
        name: name.to_string(),
        generator: FieldGenerator::Choice {
            choices: choices.iter().map(|choice| choice.to_string()).collect()
        }
    }
}

/// Builds the survey schema: 13 columns, identifiers first, shoe size
/// derived from body height.
pub fn survey_schema() -> Schema {
    let mut schema = Schema {
        table_name: "synthetic_survey".to_string(),
        fields: Vec::new()
    };

    schema.add_field(Field {
        name: "nr".to_string(),
        generator: FieldGenerator::Sequence { start: 1 }
    });
    schema.add_field(Field {
        name: "Koerpergroesse".to_string(),
        generator: FieldGenerator::Integer { min: 158, max: 190 }
    });
    schema.add_field(choice_field("Lieblingsfilm", &FILMS));
    schema.add_field(choice_field("Sockenfarbe", &SOCK_COLORS));
    schema.add_field(Field {
        name: "Armlaenge".to_string(),
        generator: FieldGenerator::Real { min: 60.0, max: 75.0, decimals: 1 }
    });
    schema.add_field(Field {
        name: "Einwohnerzahl".to_string(),
        generator: FieldGenerator::Integer { min: 1, max: 2000000 }
    });
    schema.add_field(choice_field("Akku", &BATTERY_LEVELS));
    schema.add_field(choice_field("Sandkoerner", &SAND_GRAIN_COUNTS));
    schema.add_field(choice_field("Distanz_Wohnort", &DISTANCES));
    schema.add_field(Field {
        name: "letzte_Pizza".to_string(),
        generator: FieldGenerator::DateSequence {
            start: Date { day: 1, month: 12, year: 2023 }
        }
    });
    schema.add_field(Field {
        name: "Statistik".to_string(),
        generator: FieldGenerator::Integer { min: 1, max: 11 }
    });
    schema.add_field(Field {
        name: "Schuhgroesse".to_string(),
        generator: FieldGenerator::Derived {
            source: "Koerpergroesse".to_string(),
            offset: -50.0,
            divisor: 3.0,
            noise_std_dev: 1.0
        }
    });
    schema.add_field(Field {
        name: "Mahlzeiten_Mensa".to_string(),
        generator: FieldGenerator::Integer { min: 100, max: 300 }
    });

    schema
}
