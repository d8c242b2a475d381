#[macro_use]
extern crate synthtab;
extern crate rand;

use synthtab::generators::*;

static SOCK_COLORS: [&'static str; 5] = ["weiß", "schwarz", "dunkelgrau", "grün", "braun"];

fn main() {
    // Create our generator
    let mut rng = rand::thread_rng();

    let row = gen_row![
        ",";
        generate_integer(&mut rng, 158, 190),
        generate_choice(&mut rng, &SOCK_COLORS),
        format!("{:.1}", generate_real(&mut rng, 60.0, 75.0)),
        generate_integer(&mut rng, 1, 2000000),
        generate_integer(&mut rng, 1, 11),
        generate_integer(&mut rng, 100, 300)
    ];

    println!("\nFake Data");
    println!("=========\n");
    println!("Row: {}\n", row);
}
