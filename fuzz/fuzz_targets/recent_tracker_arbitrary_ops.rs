#![no_main]

use libfuzzer_sys::fuzz_target;
use recentkit::error::ListError;
use recentkit::policy::recent::RecentTracker;
use recentkit::traits::Visit;

// Arbitrary visit/reset sequences on RecentTracker, checked against a
// Vec model of linear-scan LRU. The first byte picks the capacity.
fuzz_target!(|data: &[u8]| {
    let Some((&cap_byte, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap_byte % 17);
    let mut tracker = RecentTracker::new(capacity);
    let mut model: Vec<u8> = Vec::new();

    for &byte in ops {
        if byte == u8::MAX {
            tracker.reset();
            model.clear();
        } else {
            let id = byte % 32;
            let outcome = tracker.visit(id);
            if let Some(rank) = model.iter().position(|m| *m == id) {
                assert_eq!(outcome, Ok(Visit::Promoted { previous_rank: rank }));
                model.remove(rank);
                model.insert(0, id);
            } else if capacity == 0 {
                assert_eq!(outcome, Err(ListError::EmptyUnderflow));
            } else if model.len() == capacity {
                let evicted = model.pop();
                assert_eq!(outcome.ok().and_then(Visit::evicted), evicted);
                model.insert(0, id);
            } else {
                assert_eq!(outcome, Ok(Visit::Admitted));
                model.insert(0, id);
            }
        }

        assert!(tracker.len() <= capacity);
        assert_eq!(tracker.to_vec(), model);
        #[cfg(debug_assertions)]
        assert!(tracker.check_invariants().is_ok());
    }
});
