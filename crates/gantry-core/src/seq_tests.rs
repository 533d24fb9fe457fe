//! Tests for the growable sequence.

use crate::seq::Seq;

/// Small deterministic generator so the surgery tests are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

#[test]
fn starts_empty_without_allocating() {
    let seq: Seq<u32> = Seq::new();
    assert_eq!(seq.len(), 0);
    assert_eq!(seq.capacity(), 0);
    assert!(seq.is_empty());
}

#[test]
fn push_grows_with_floor_then_doubles() {
    let mut seq = Seq::new();
    seq.push(1u32);
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.capacity(), 8);

    for value in 2..=8u32 {
        seq.push(value);
    }
    assert_eq!(seq.capacity(), 8);

    seq.push(9);
    assert_eq!(seq.capacity(), 16);
    assert_eq!(seq.len(), 9);
}

#[test]
fn push_many_keeps_size_and_capacity_invariant() {
    let mut seq = Seq::new();
    for k in 1..=100u32 {
        seq.push(k);
        assert_eq!(seq.len(), k as usize);
        assert!(seq.capacity() >= k as usize);
    }
    assert_eq!(seq[0], 1);
    assert_eq!(seq[99], 100);
}

#[test]
fn grow_clamps_to_exact_request_when_doubling_is_short() {
    let mut seq: Seq<u8> = Seq::new();
    seq.grow_by(100);
    assert_eq!(seq.len(), 100);
    assert_eq!(seq.capacity(), 100);
    assert!(seq.iter().all(|&b| b == 0));
}

#[test]
fn reserve_is_exact_and_idempotent() {
    let mut seq: Seq<u32> = Seq::new();
    seq.reserve(10);
    assert_eq!(seq.capacity(), 10);
    assert_eq!(seq.len(), 0);

    // Smaller or equal requests change nothing.
    seq.reserve(4);
    assert_eq!(seq.capacity(), 10);
}

#[test]
fn grow_by_zero_is_a_no_op() {
    let mut seq: Seq<u64> = Seq::new();
    seq.grow_by(0);
    assert_eq!(seq.capacity(), 0);
}

#[test]
fn pop_front_back() {
    let mut seq = Seq::new();
    assert_eq!(seq.pop(), None);
    seq.push(1u32);
    seq.push(2);
    seq.push(3);
    assert_eq!(seq.front(), Some(&1));
    assert_eq!(seq.back(), Some(&3));
    assert_eq!(seq.pop(), Some(3));
    assert_eq!(seq.pop(), Some(2));
    assert_eq!(seq.pop(), Some(1));
    assert_eq!(seq.pop(), None);
}

#[test]
fn erase_shifts_left() {
    let mut seq = Seq::new();
    for value in [10u32, 20, 30, 40] {
        seq.push(value);
    }
    assert_eq!(seq.erase(1), 20);
    assert_eq!(seq.as_slice(), &[10, 30, 40]);
    assert_eq!(seq.erase(2), 40);
    assert_eq!(seq.as_slice(), &[10, 30]);
}

#[test]
fn insert_shifts_right() {
    let mut seq = Seq::new();
    seq.push(1u32);
    seq.push(3);
    seq.insert(1, 2);
    seq.insert(3, 4);
    seq.insert(0, 0);
    assert_eq!(seq.as_slice(), &[0, 1, 2, 3, 4]);
}

#[test]
fn clear_keeps_storage_reset_releases_it() {
    let mut seq = Seq::new();
    for value in 0..20u32 {
        seq.push(value);
    }
    let capacity = seq.capacity();
    seq.clear();
    assert_eq!(seq.len(), 0);
    assert_eq!(seq.capacity(), capacity);

    seq.reset();
    assert_eq!(seq.len(), 0);
    assert_eq!(seq.capacity(), 0);

    // Reset twice is fine, and the sequence stays usable.
    seq.reset();
    seq.push(7);
    assert_eq!(seq.as_slice(), &[7]);
}

#[test]
fn extend_assign_swap() {
    let mut a = Seq::new();
    a.extend_from_slice(&[1u32, 2, 3]);
    assert_eq!(a.as_slice(), &[1, 2, 3]);

    let mut b = Seq::new();
    b.push(9u32);
    b.assign(&a);
    assert_eq!(b.as_slice(), &[1, 2, 3]);

    let mut c = Seq::new();
    c.push(5u32);
    b.swap(&mut c);
    assert_eq!(b.as_slice(), &[5]);
    assert_eq!(c.as_slice(), &[1, 2, 3]);
}

#[test]
fn splice_as_erase_and_insert() {
    let mut seq = Seq::new();
    seq.extend_from_slice(&[1u32, 2, 3, 4, 5]);

    // new_count = 0 erases.
    seq.splice(1, 2, 0, None);
    assert_eq!(seq.as_slice(), &[1, 4, 5]);

    // old_count = 0 inserts from a source.
    seq.splice(1, 0, 2, Some(&[8, 9]));
    assert_eq!(seq.as_slice(), &[1, 8, 9, 4, 5]);

    // Without a source the inserted elements are default-initialized.
    seq.splice(5, 0, 2, None);
    assert_eq!(seq.as_slice(), &[1, 8, 9, 4, 5, 0, 0]);
}

#[test]
fn splice_matches_reference_surgery() {
    let mut rng = Lcg(0x9E37_79B9_7F4A_7C15);
    for _ in 0..500 {
        let len = (rng.next() % 12) as usize;
        let mut seq = Seq::new();
        let mut model: Vec<u32> = Vec::new();
        for _ in 0..len {
            let value = (rng.next() % 100) as u32;
            seq.push(value);
            model.push(value);
        }

        let index = (rng.next() as usize) % (len + 1);
        let old_count = (rng.next() as usize) % (len - index + 1);
        let new_count = (rng.next() as usize) % 5;
        let source: Vec<u32> = (0..new_count).map(|_| (rng.next() % 100) as u32).collect();

        if rng.next() % 2 == 0 {
            seq.splice(index, old_count, new_count, Some(&source));
            model.splice(index..index + old_count, source.iter().copied());
        } else {
            seq.splice(index, old_count, new_count, None);
            model.splice(index..index + old_count, std::iter::repeat_n(0u32, new_count));
        }
        assert_eq!(seq.as_slice(), model.as_slice());
    }
}

#[test]
#[should_panic(expected = "splice range out of bounds")]
fn splice_past_end_panics() {
    let mut seq = Seq::new();
    seq.push(1u32);
    seq.splice(1, 1, 0, None);
}

#[test]
fn search_sorted_insertion_points() {
    let mut seq = Seq::new();
    seq.extend_from_slice(&[10u32, 20, 30]);
    let by_value = |elem: &u32, needle: &u32| elem.cmp(needle);

    assert_eq!(seq.search_sorted_by(by_value, &5), (0, false));
    assert_eq!(seq.search_sorted_by(by_value, &10), (0, true));
    assert_eq!(seq.search_sorted_by(by_value, &15), (1, false));
    assert_eq!(seq.search_sorted_by(by_value, &30), (2, true));
    assert_eq!(seq.search_sorted_by(by_value, &35), (3, false));

    let empty: Seq<u32> = Seq::new();
    assert_eq!(empty.search_sorted_by(by_value, &1), (0, false));
}

#[test]
fn search_sorted_duplicates_follow_narrowing_rule() {
    // The lower bound moves up while the midpoint compares <= 0, so among a
    // run of equal keys the search lands on the run's highest index.
    let mut seq = Seq::new();
    seq.extend_from_slice(&[1u32, 2, 2, 2, 3]);
    let by_value = |elem: &u32, needle: &u32| elem.cmp(needle);
    assert_eq!(seq.search_sorted_by(by_value, &2), (3, true));

    let mut all_equal = Seq::new();
    all_equal.extend_from_slice(&[2u32, 2, 2]);
    assert_eq!(all_equal.search_sorted_by(by_value, &2), (2, true));
}

#[test]
fn insert_sorted_keeps_order_and_dedupes() {
    let mut seq = Seq::new();
    let by_value = |a: &u32, b: &u32| a.cmp(b);
    for value in [30u32, 10, 20, 40, 10, 30] {
        seq.insert_sorted_by(by_value, value);
    }
    assert_eq!(seq.as_slice(), &[10, 20, 30, 40]);

    assert!(!seq.insert_sorted_by(by_value, 20));
    assert!(seq.insert_sorted_by(by_value, 25));
    assert_eq!(seq.as_slice(), &[10, 20, 25, 30, 40]);
}

#[test]
fn insert_sorted_by_struct_field() {
    #[derive(Clone, Debug, PartialEq)]
    struct Entry {
        key: u32,
        payload: &'static str,
    }
    let by_key = |a: &Entry, b: &Entry| a.key.cmp(&b.key);

    let mut seq = Seq::new();
    seq.insert_sorted_by(by_key, Entry { key: 3, payload: "c" });
    seq.insert_sorted_by(by_key, Entry { key: 1, payload: "a" });
    seq.insert_sorted_by(by_key, Entry { key: 2, payload: "b" });
    // Equal key: first write wins.
    seq.insert_sorted_by(by_key, Entry { key: 2, payload: "dup" });

    let keys: Vec<u32> = seq.iter().map(|e| e.key).collect();
    assert_eq!(keys, [1, 2, 3]);
    assert_eq!(seq[1].payload, "b");
}

#[test]
fn deref_clone_eq() {
    let mut seq = Seq::new();
    seq.extend_from_slice(&[1u32, 2, 3]);
    assert_eq!(seq.iter().sum::<u32>(), 6);
    assert_eq!(seq[2], 3);

    let copy = seq.clone();
    assert_eq!(copy, seq);
    assert_eq!(copy.len(), 3);
}

#[test]
fn search_sorted_with_key_type_differing_from_elements() {
    struct Named {
        name: &'static str,
    }
    let mut seq = Seq::new();
    for name in ["alpha", "bravo", "delta"] {
        seq.push(Named { name });
    }
    let by_name = |elem: &Named, needle: &&str| elem.name.cmp(needle);
    assert_eq!(seq.search_sorted_by(by_name, &"bravo"), (1, true));
    assert_eq!(seq.search_sorted_by(by_name, &"charlie"), (2, false));
}

#[test]
fn comparator_ordering_contract() {
    // A reversed comparator searches a descending sequence.
    let mut seq = Seq::new();
    seq.extend_from_slice(&[30u32, 20, 10]);
    let descending = |elem: &u32, needle: &u32| needle.cmp(elem);
    assert_eq!(seq.search_sorted_by(descending, &20), (1, true));
    assert_eq!(seq.search_sorted_by(descending, &25), (1, false));
}
