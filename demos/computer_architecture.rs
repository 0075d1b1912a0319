//! Cycle counts, instruction counts, frequencies and periods as distinct nominal types.
//!
//! Run with: `cargo run --example computer_architecture`

use strong_caps::prelude::*;

strong! {
    /// Counts the number of cycles.
    CycleCount(i32): Equals, Orders, Adds, Subtracts, Increments, Decrements;
    /// Counts the number of instructions. No operators at all.
    InstructionCount(i32);
    /// Clock rate, in hertz.
    Frequency(f64);
    /// Inverse of a frequency, in seconds.
    Period(f64);
}

/// Calculate the period given a frequency.
fn inverse(hertz: &Frequency) -> Period {
    Period::new(1.0 / get(hertz))
}

fn main() {
    let cycles = CycleCount::new(50);
    let more_cycles = CycleCount::new(60);
    let even_more_cycles = cycles + more_cycles;

    println!("{}", cycles == more_cycles); // false
    println!("{}", cycles < more_cycles); // true
    println!("{}", cycles <= even_more_cycles); // true
    println!("{}", cycles > more_cycles); // false
    println!("{}", cycles >= CycleCount::new(50)); // true
    println!("{}", cycles == CycleCount::new(35) + CycleCount::new(15)); // true
    println!("{}", get(&cycles)); // 50

    let mut less_cycles = even_more_cycles - cycles;
    less_cycles += CycleCount::new(4);
    println!("{}", get(&(less_cycles - more_cycles + CycleCount::new(5)))); // 9

    less_cycles -= CycleCount::new(3);
    less_cycles.increment();
    less_cycles.post_increment();
    less_cycles.decrement();
    println!("{}", get(&less_cycles)); // 62

    let to_be_moved = InstructionCount::new(10_000);
    let instructions = to_be_moved;
    println!("{}", get(&instructions)); // 10000

    let clock_rate = Frequency::new(2.6);
    let p1 = inverse(&clock_rate);
    let p2 = inverse(&Frequency::new(3.2));
    println!("{:.4} {:.4}", get(&p1), get(&p2)); // 0.3846 0.3125
}
