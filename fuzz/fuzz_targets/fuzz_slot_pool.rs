#![no_main]

use libfuzzer_sys::fuzz_target;

use parker_core::pool::SlotIdPool;
use parker_core::PoolError;

fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    // Small capacities keep collisions and boundary ids frequent
    let capacity = usize::from(cap % 32);
    let mut pool = SlotIdPool::new(capacity);
    let mut taken: Vec<usize> = Vec::new();

    for &op in ops {
        if op & 1 == 0 {
            match pool.extract_min() {
                Ok(id) => {
                    assert!(taken.iter().all(|&t| t != id));
                    assert!(pool.iter().all(|other| other > id));
                    taken.push(id);
                }
                Err(PoolError::Empty) => assert!(pool.is_empty()),
                Err(err) => panic!("unexpected extract error: {err}"),
            }
        } else {
            // Any id, including 0 and ids past capacity
            let id = usize::from(op >> 1);
            let before = pool.len();
            match pool.insert(id) {
                Ok(()) => {
                    assert!(pool.contains(id));
                    taken.retain(|&t| t != id);
                }
                Err(_) => assert_eq!(pool.len(), before),
            }
        }
        assert_eq!(pool.len() + taken.len(), capacity);
        assert!(pool.len() <= capacity);
    }
});
