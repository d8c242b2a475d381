extern crate rand;
extern crate synthtab;

use std::env;
use std::fs;
use std::io::Read;

use rand::{SeedableRng, StdRng};

use synthtab::json::parse_schema_json;
use synthtab::schema::Table;
use synthtab::survey::{self, survey_schema};
use synthtab::util::write_delimited;

fn seeded(seed: usize) -> StdRng {
    let seed: &[usize] = &[seed];
    SeedableRng::from_seed(seed)
}

fn default_table() -> Table {
    let mut rng = seeded(survey::DEFAULT_SEED);
    survey_schema()
        .generate_table(&mut rng, survey::DEFAULT_NUM_ROWS)
        .unwrap()
}

#[test]
fn the_default_run_serializes_to_identical_bytes() {
    let first = default_table().to_delimited(survey::DELIMITER);
    let second = default_table().to_delimited(survey::DELIMITER);
    assert_eq!(first, second);
}

#[test]
fn the_csv_has_the_published_header_and_shape() {
    let csv = default_table().to_delimited(survey::DELIMITER);
    let mut lines = csv.lines();

    assert_eq!(
        lines.next().unwrap(),
        "nr,Koerpergroesse,Lieblingsfilm,Sockenfarbe,Armlaenge,Einwohnerzahl,\
         Akku,Sandkoerner,Distanz_Wohnort,letzte_Pizza,Statistik,Schuhgroesse,\
         Mahlzeiten_Mensa"
    );
    assert_eq!(lines.count(), 28);

    let table = default_table();
    assert_eq!(table.num_columns(), 13);
    for row in table.rows.iter() {
        assert_eq!(row.len(), 13);
    }
}

#[test]
fn a_different_seed_yields_a_different_table() {
    let mut other = seeded(7);
    let table = survey_schema()
        .generate_table(&mut other, survey::DEFAULT_NUM_ROWS)
        .unwrap();
    assert!(table.to_delimited(",") != default_table().to_delimited(","));
}

#[test]
fn the_table_survives_a_trip_through_the_filesystem() {
    let table = default_table();
    let path = env::temp_dir().join("synthtab_integration.csv");
    let path = path.to_str().unwrap().to_string();

    write_delimited(&table, &path, survey::DELIMITER).unwrap();

    let mut written = String::new();
    fs::File::open(&path).unwrap().read_to_string(&mut written).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(written, table.to_delimited(survey::DELIMITER));
}

#[test]
fn the_shipped_schema_file_matches_the_built_in_schema() {
    let mut raw = String::new();
    fs::File::open("schemas/survey.json")
        .unwrap()
        .read_to_string(&mut raw)
        .unwrap();
    let from_file = parse_schema_json(&raw).unwrap();
    let built_in = survey_schema();

    assert_eq!(from_file.table_name, built_in.table_name);
    assert_eq!(from_file.header(), built_in.header());

    // Same seed, same schema definition: the tables must agree exactly.
    let mut first = seeded(survey::DEFAULT_SEED);
    let mut second = seeded(survey::DEFAULT_SEED);
    let left = from_file
        .generate_table(&mut first, survey::DEFAULT_NUM_ROWS)
        .unwrap();
    let right = built_in
        .generate_table(&mut second, survey::DEFAULT_NUM_ROWS)
        .unwrap();
    assert_eq!(
        left.to_delimited(survey::DELIMITER),
        right.to_delimited(survey::DELIMITER)
    );
}

#[test]
fn row_counts_other_than_the_default_work() {
    let mut rng = seeded(survey::DEFAULT_SEED);
    let table = survey_schema().generate_table(&mut rng, 100).unwrap();
    assert_eq!(table.num_rows(), 100);

    let identifiers = table.column("nr").unwrap();
    let expected: Vec<String> = (1..101).map(|n: i64| n.to_string()).collect();
    assert_eq!(identifiers, expected);

    // 100 rows reach past New Year; the date column must keep stepping.
    let dates = table.column("letzte_Pizza").unwrap();
    assert_eq!(dates[30], "31.12.2023");
    assert_eq!(dates[31], "01.01.2024");
    assert_eq!(dates[99], "09.03.2024");
}
