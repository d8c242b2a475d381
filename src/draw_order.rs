extern crate rand;
extern crate synthtab;

use synthtab::generators::generate_permutation;

/// Draws the numbers 1 through 16 in a uniformly random order, the way a
/// physical lottery would. Deliberately unseeded: successive runs differ.
fn main() {
    let mut rng = rand::thread_rng();
    let numbers = generate_permutation(&mut rng, 1, 16);
    println!("Numbers drawn in random order: {:?}", numbers);
}
