use recentkit::ds::PositionalList;
use recentkit::error::ListError;

fn main() -> Result<(), ListError> {
    let mut list = PositionalList::new();

    let b = list.add_first("b");
    let a = list.add_before(b, "a")?;
    let d = list.add_last("d");
    list.add_after(b, "c")?;
    println!("list: {:?}", list.to_vec());

    let old = list.set(d, "D")?;
    println!("replaced {} -> {:?}", old, list.to_vec());

    list.remove(a)?;
    println!("removed a -> {:?}", list.to_vec());

    match list.get(a) {
        Ok(value) => println!("still there: {}", value),
        Err(err) => println!("stale position: {}", err),
    }

    let mut cursor = list.last();
    let mut backwards = Vec::new();
    while let Some(p) = cursor {
        backwards.push(*list.get(p)?);
        cursor = list.before(p)?;
    }
    println!("backwards: {:?}", backwards);

    list.clear();
    println!("remove_last on empty: {:?}", list.remove_last());
    Ok(())
}

// Expected output:
// list: ["a", "b", "c", "d"]
// replaced d -> ["a", "b", "c", "D"]
// removed a -> ["b", "c", "D"]
// stale position: invalid position: position refers to a removed element
// backwards: ["D", "c", "b"]
// remove_last on empty: Err(EmptyUnderflow)
