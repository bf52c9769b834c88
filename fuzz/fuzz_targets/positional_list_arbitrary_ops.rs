#![no_main]

use libfuzzer_sys::fuzz_target;
use recentkit::ds::{Position, PositionalList};
use recentkit::error::{ListError, PositionFault};

// Arbitrary operation sequences on PositionalList, checked against a
// Vec<(Position, u8)> model after every step.
fuzz_target!(|data: &[u8]| {
    let mut list: PositionalList<u8> = PositionalList::new();
    let mut other: PositionalList<u8> = PositionalList::new();
    let foreign = other.add_last(0);
    let mut model: Vec<(Position, u8)> = Vec::new();
    let mut removed: Vec<Position> = Vec::new();

    for pair in data.chunks_exact(2) {
        let value = pair[1];
        let pick = |model: &Vec<(Position, u8)>| model[value as usize % model.len()].0;

        match pair[0] % 10 {
            0 => {
                let p = list.add_first(value);
                model.insert(0, (p, value));
            }
            1 => {
                let p = list.add_last(value);
                model.push((p, value));
            }
            2 if !model.is_empty() => {
                let anchor = pick(&model);
                let at = model.iter().position(|(p, _)| *p == anchor).unwrap_or(0);
                let p = list.add_before(anchor, value).unwrap();
                model.insert(at, (p, value));
            }
            3 if !model.is_empty() => {
                let anchor = pick(&model);
                let at = model.iter().position(|(p, _)| *p == anchor).unwrap_or(0);
                let p = list.add_after(anchor, value).unwrap();
                model.insert(at + 1, (p, value));
            }
            4 if !model.is_empty() => {
                let target = pick(&model);
                let at = model.iter().position(|(p, _)| *p == target).unwrap_or(0);
                assert_eq!(list.set(target, value), Ok(model[at].1));
                model[at].1 = value;
            }
            5 if !model.is_empty() => {
                let target = pick(&model);
                let at = model.iter().position(|(p, _)| *p == target).unwrap_or(0);
                assert_eq!(list.remove(target), Ok(model.remove(at).1));
                removed.push(target);
            }
            6 => match model.is_empty() {
                true => assert_eq!(list.remove_first(), Err(ListError::EmptyUnderflow)),
                false => {
                    let (p, v) = model.remove(0);
                    assert_eq!(list.remove_first(), Ok(v));
                    removed.push(p);
                }
            },
            7 => match model.pop() {
                None => assert_eq!(list.remove_last(), Err(ListError::EmptyUnderflow)),
                Some((p, v)) => {
                    assert_eq!(list.remove_last(), Ok(v));
                    removed.push(p);
                }
            },
            8 if !removed.is_empty() => {
                let stale = removed[value as usize % removed.len()];
                assert_eq!(
                    list.get(stale),
                    Err(ListError::InvalidPosition(PositionFault::Stale))
                );
            }
            _ => {
                assert_eq!(
                    list.remove(foreign),
                    Err(ListError::InvalidPosition(PositionFault::ForeignList))
                );
            }
        }

        assert_eq!(list.len(), model.len());
        let values: Vec<u8> = model.iter().map(|(_, v)| *v).collect();
        assert_eq!(list.to_vec(), values);
        assert_eq!(list.first(), model.first().map(|(p, _)| *p));
        assert_eq!(list.last(), model.last().map(|(p, _)| *p));
    }
    #[cfg(debug_assertions)]
    assert!(list.check_invariants().is_ok());
});
