extern crate softraster;

use proptest::prelude::*;

use softraster::{Arena, Error, WORD_SIZE};

#[test]
fn t01_arena_pixels() {
    let mut arena = Arena::new(64).unwrap();
    let a = arena.alloc_pixels(6).unwrap();
    arena.pixels_mut(a).unwrap().copy_from_slice(&[1, 2, 3, 4, 5, 6]);
    // forces a grow
    let b = arena.alloc_pixels(100).unwrap();
    assert_eq!(arena.pixels(b).unwrap().len(), 100);
    assert_eq!(arena.pixels(a).unwrap(), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(arena.bytes(a).unwrap()[..4], 1u32.to_ne_bytes());
    arena.free();
}

#[test]
fn t01_arena_stale_handle() {
    let mut arena = Arena::new(64).unwrap();
    let mark = arena.mark();
    let a = arena.alloc(10).unwrap();
    arena.rewind(mark);
    match arena.bytes(a) {
        Err(Error::StaleHandle { offset, len, used }) => assert_eq!((offset, len, used), (0, 10, 0)),
        other => panic!("expected stale handle, got {:?}", other),
    }
    // same bytes handed out again
    let b = arena.alloc(10).unwrap();
    assert_eq!(b.offset(), a.offset());
}

proptest! {
    #[test]
    fn growth_preserves_data(cap in 0usize..64, sizes in prop::collection::vec(0usize..300, 1..20)) {
        let mut arena = Arena::new(cap).unwrap();
        let mut allocs = Vec::new();
        for (i, &size) in sizes.iter().enumerate() {
            let a = arena.alloc(size).unwrap();
            prop_assert_eq!(a.offset() % WORD_SIZE, 0);
            arena.bytes_mut(a).unwrap().iter_mut().for_each(|b| *b = i as u8);
            allocs.push(a);
        }
        prop_assert!(arena.used() <= arena.capacity());
        for (i, &a) in allocs.iter().enumerate() {
            let bytes = arena.bytes(a).unwrap();
            prop_assert_eq!(bytes.len(), sizes[i]);
            prop_assert!(bytes.iter().all(|&b| b == i as u8));
        }
    }

    #[test]
    fn rewind_is_idempotent(before in 0usize..100, after in 0usize..400) {
        let mut arena = Arena::new(32).unwrap();
        let _keep = arena.alloc(before).unwrap();
        let mark = arena.mark();
        let _scratch = arena.alloc(after).unwrap();
        arena.rewind(mark);
        let used = arena.used();
        arena.rewind(mark);
        prop_assert_eq!(arena.used(), used);
        prop_assert_eq!(used, mark.bytes());
    }
}
