//! The fixture application.
//!
//! Prints the greeting on stdout and exits 0. External runners spawn
//! this binary and the harness compares its output against the
//! expected literal.

fn main() {
    println!("{}", herald::greeting::say_hello());
}
