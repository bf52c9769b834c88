//! Example demonstrating TrackerBuilder.
//!
//! Run with: cargo run --example builder

use recentkit::builder::{TrackerBuilder, ZeroCapacity};

fn main() {
    println!("=== TrackerBuilder Examples ===\n");

    println!("1. Preallocated tracker");
    match TrackerBuilder::new(3).preallocate(true).build::<u32>() {
        Ok(mut tracker) => {
            for id in [1, 2, 3, 1, 4] {
                let _ = tracker.visit(id);
            }
            println!("   order: {:?}", tracker.to_vec());
        },
        Err(err) => println!("   build failed: {}", err),
    }
    println!();

    println!("2. Zero capacity (default: visits underflow)");
    if let Ok(mut tracker) = TrackerBuilder::new(0).build::<u32>() {
        println!("   visit(1): {:?}", tracker.visit(1));
    }
    println!();

    println!("3. Zero capacity rejected");
    let rejected = TrackerBuilder::new(0)
        .zero_capacity(ZeroCapacity::Reject)
        .build::<u32>();
    if let Err(err) = rejected {
        println!("   build failed: {}", err);
    }
}
