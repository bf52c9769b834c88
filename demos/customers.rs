use recentkit::error::ListError;
use recentkit::policy::recent::CustomerTracker;
use recentkit::traits::Visit;

fn main() -> Result<(), ListError> {
    let mut customers = CustomerTracker::new(4);

    for name in ["A", "B", "C", "D", "E", "D", "F"] {
        let outcome = customers.visit(name.to_string())?;
        let order: Vec<&str> = customers.iter().map(String::as_str).collect();
        match outcome {
            Visit::Admitted => println!("{} admitted    -> {:?}", name, order),
            Visit::Promoted { previous_rank } => {
                println!("{} from rank {} -> {:?}", name, previous_rank, order)
            },
            Visit::Evicted(old) => println!("{} evicts {}   -> {:?}", name, old, order),
        }
    }

    customers.reset();
    println!("after reset: {} customers", customers.len());
    Ok(())
}

// Expected output:
// A admitted    -> ["A"]
// B admitted    -> ["B", "A"]
// C admitted    -> ["C", "B", "A"]
// D admitted    -> ["D", "C", "B", "A"]
// E evicts A   -> ["E", "D", "C", "B"]
// D from rank 1 -> ["D", "E", "C", "B"]
// F evicts B   -> ["F", "D", "E", "C"]
// after reset: 0 customers
//
// Explanation: capacity=4; the fifth distinct customer evicts the least
// recent one, and revisiting D moves it back to the front.
