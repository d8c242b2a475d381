extern crate rand;
extern crate synthtab;

use rand::{SeedableRng, StdRng};

use synthtab::generators::*;

static BATTERY_LEVELS: [&'static str; 4] = ["30%", "50%", "70%", "90%"];

fn main() {
    // Create our generator; a fixed seed makes the tour reproducible.
    let seed: &[usize] = &[42];
    let mut rng: StdRng = SeedableRng::from_seed(seed);

    // Generate a random int from a half-open range
    let my_int = generate_integer(&mut rng, 158, 190);
    println!("Random height: {}", my_int);

    // Generate a random real, rounded for display
    let my_real = generate_real(&mut rng, 60.0, 75.0);
    println!("Random arm length: {:.1}", my_real);

    // Generate a number from a Gaussian distribution
    let my_gaussian = generate_gauss(&mut rng, 0.0, 1.0);
    println!("Random gaussian: {}", my_gaussian);

    // Generate a choice from an array
    let my_choice = generate_choice(&mut rng, &BATTERY_LEVELS);
    println!("Random choice from {:?}: {}", BATTERY_LEVELS, my_choice);

    // Walk a date forward
    let anchor = Date::parse("01.12.2023").unwrap();
    println!("Anchor date: {}", anchor.to_string());
    println!("Four weeks later: {}", anchor.plus_days(28).to_string());

    // Shuffle a whole range
    let drawn = generate_permutation(&mut rng, 1, 16);
    println!("Permutation of 1..16: {:?}", drawn);
}
