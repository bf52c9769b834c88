#![no_main]

use libfuzzer_sys::fuzz_target;
use recentkit::ds::SlotArena;

// Arbitrary insert/remove/get/clear sequences on SlotArena.
//
// Every issued id is kept; removed ids must never resolve again, even after
// their slot is reused.
fuzz_target!(|data: &[u8]| {
    let mut arena: SlotArena<u32> = SlotArena::new();
    let mut all_ids = Vec::new();
    let mut dead = Vec::new();

    for pair in data.chunks_exact(2) {
        let value = u32::from(pair[1]);
        match pair[0] % 5 {
            0 | 1 => {
                let id = arena.insert(value);
                assert_eq!(arena.get(id), Some(&value));
                all_ids.push(id);
            }
            2 => {
                if !all_ids.is_empty() {
                    let id = all_ids[value as usize % all_ids.len()];
                    let old_len = arena.len();
                    if arena.remove(id).is_some() {
                        assert_eq!(arena.len(), old_len - 1);
                        dead.push(id);
                    } else {
                        assert_eq!(arena.len(), old_len);
                    }
                }
            }
            3 => {
                if !all_ids.is_empty() {
                    let id = all_ids[value as usize % all_ids.len()];
                    if let Some(slot) = arena.get_mut(id) {
                        *slot = value;
                        assert_eq!(arena.get(id), Some(&value));
                    }
                }
            }
            _ => {
                dead.extend(arena.iter_ids());
                arena.clear();
                assert!(arena.is_empty());
            }
        }

        for id in &dead {
            assert!(!arena.contains(*id));
        }
        assert_eq!(arena.iter().count(), arena.len());
    }
});
