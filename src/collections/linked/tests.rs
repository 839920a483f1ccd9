use super::*;
use crate::testing::rng;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::Rng;

fn contents<T: Copy>(seq: &LinkedSeq<T>) -> Vec<T> {
    seq.iter().copied().collect()
}

#[test]
fn new_seq_is_empty() {
    let seq: LinkedSeq<u32> = LinkedSeq::new();
    assert!(seq.is_empty());
    assert_eq!(seq.len(), 0);
    assert_eq!(seq.front(), None);
    assert_eq!(seq.back(), None);
    assert!(seq.front_position().is_none());
    assert!(seq.back_position().is_none());
    assert_eq!(seq.iter().next(), None);
}

#[test]
fn push_back_and_front() {
    let mut seq = LinkedSeq::new();
    seq.push_back(2);
    seq.push_back(3);
    seq.push_front(1);
    seq.push_front(0);

    assert_eq!(seq.len(), 4);
    assert_eq!(contents(&seq), [0, 1, 2, 3]);
    assert_eq!(seq.front(), Some(&0));
    assert_eq!(seq.back(), Some(&3));
}

#[test]
fn insert_before_and_after() {
    let mut seq = LinkedSeq::new();
    let b = seq.push_back('b');
    let d = seq.push_back('d');

    let a = seq.insert_before(b, 'a').unwrap();
    seq.insert_after(b, 'c').unwrap();
    seq.insert_after(d, 'e').unwrap();

    assert_eq!(contents(&seq), ['a', 'b', 'c', 'd', 'e']);
    assert_eq!(seq.front_position(), Some(a));
    assert_eq!(seq.back(), Some(&'e'));
}

#[test]
fn stepping() {
    let mut seq = LinkedSeq::new();
    let a = seq.push_back(1);
    let b = seq.push_back(2);
    let c = seq.push_back(3);

    assert_eq!(seq.next(a), Some(b));
    assert_eq!(seq.next(b), Some(c));
    assert_eq!(seq.next(c), None);
    assert_eq!(seq.prev(c), Some(b));
    assert_eq!(seq.prev(a), None);
}

#[test]
fn circular_stepping_wraps() {
    let mut seq = LinkedSeq::new();
    let a = seq.push_back(1);
    let b = seq.push_back(2);
    let c = seq.push_back(3);

    assert_eq!(seq.next_circular(b), Some(c));
    assert_eq!(seq.next_circular(c), Some(a));
    assert_eq!(seq.prev_circular(a), Some(c));
    assert_eq!(seq.prev_circular(b), Some(a));
}

#[test]
fn circular_stepping_single_element() {
    let mut seq = LinkedSeq::new();
    let a = seq.push_back(1);
    assert_eq!(seq.next_circular(a), Some(a));
    assert_eq!(seq.prev_circular(a), Some(a));

    seq.remove(a);
    assert_eq!(seq.next_circular(a), None);
    assert_eq!(seq.prev_circular(a), None);
}

#[test]
fn remove_head_middle_tail() {
    let mut seq = LinkedSeq::new();
    let a = seq.push_back(1);
    let b = seq.push_back(2);
    let c = seq.push_back(3);
    let d = seq.push_back(4);

    assert_eq!(seq.remove(b), Some(2));
    assert_eq!(contents(&seq), [1, 3, 4]);
    assert_eq!(seq.remove(a), Some(1));
    assert_eq!(seq.front_position(), Some(c));
    assert_eq!(seq.remove(d), Some(4));
    assert_eq!(seq.back_position(), Some(c));
    assert_eq!(seq.remove(c), Some(3));
    assert!(seq.is_empty());
    assert!(seq.front_position().is_none());
}

#[test]
fn stale_position_is_rejected() {
    let mut seq = LinkedSeq::new();
    let a = seq.push_back(1);
    assert_eq!(seq.remove(a), Some(1));

    // the slot is reused, the old position must not see the new value
    let b = seq.push_back(2);
    assert!(!seq.contains(a));
    assert_eq!(seq.get(a), None);
    assert_eq!(seq.remove(a), None);
    assert_eq!(seq.insert_before(a, 9), Err(9));
    assert_eq!(seq.insert_after(a, 9), Err(9));
    assert_eq!(seq.next(a), None);
    assert_eq!(seq.get(b), Some(&2));
    assert_eq!(seq.len(), 1);
}

#[test]
fn foreign_position_is_rejected() {
    let mut left = LinkedSeq::new();
    let mut right = LinkedSeq::new();
    let l = left.push_back(1);
    let r = right.push_back(1);

    assert!(!left.contains(r));
    assert!(!right.contains(l));
    assert_eq!(right.remove(l), None);
    assert_eq!(right.len(), 1);
}

#[test]
fn clone_has_fresh_positions() {
    let mut seq = LinkedSeq::new();
    let a = seq.push_back(1);
    seq.push_back(2);

    let copy = seq.clone();
    assert_eq!(copy, seq);
    assert!(!copy.contains(a));
    assert!(copy.front_position().is_some());
}

#[test]
fn clear_invalidates_positions() {
    let mut seq = LinkedSeq::new();
    let a = seq.push_back(1);
    seq.push_back(2);
    seq.clear();

    assert!(seq.is_empty());
    seq.push_back(3);
    assert_eq!(seq.get(a), None);
    assert_eq!(contents(&seq), [3]);
}

#[test]
fn pop_both_ends() {
    let mut seq: LinkedSeq<_> = (1..=4).collect();
    assert_eq!(seq.pop_front(), Some(1));
    assert_eq!(seq.pop_back(), Some(4));
    assert_eq!(seq.pop_back(), Some(3));
    assert_eq!(seq.pop_front(), Some(2));
    assert_eq!(seq.pop_front(), None);
    assert_eq!(seq.pop_back(), None);
}

#[test]
fn iter_double_ended_meets_in_middle() {
    let seq: LinkedSeq<_> = (1..=5).collect();
    let mut iter = seq.iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next_back(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn into_iter_by_value() {
    let seq: LinkedSeq<_> = (1..=3).collect();
    let forward: Vec<_> = seq.clone().into_iter().collect();
    let backward: Vec<_> = seq.into_iter().rev().collect();
    assert_eq!(forward, [1, 2, 3]);
    assert_eq!(backward, [3, 2, 1]);
}

#[test]
fn debug_lists_elements() {
    let seq: LinkedSeq<_> = (1..=3).collect();
    assert_eq!(alloc::format!("{:?}", seq), "[1, 2, 3]");
}

#[test]
fn random_ops_match_vecdeque() {
    let mut rng = rng();
    let mut seq = LinkedSeq::new();
    let mut model: VecDeque<u32> = VecDeque::new();
    // parallel to `model`
    let mut positions: VecDeque<Position> = VecDeque::new();

    for step in 0..4_000u32 {
        match rng.gen_range(0..6) {
            0 => {
                positions.push_back(seq.push_back(step));
                model.push_back(step);
            }
            1 => {
                positions.push_front(seq.push_front(step));
                model.push_front(step);
            }
            2 if !model.is_empty() => {
                let i = rng.gen_range(0..model.len());
                let pos = seq.insert_before(positions[i], step).unwrap();
                positions.insert(i, pos);
                model.insert(i, step);
            }
            3 if !model.is_empty() => {
                let i = rng.gen_range(0..model.len());
                let pos = seq.insert_after(positions[i], step).unwrap();
                positions.insert(i + 1, pos);
                model.insert(i + 1, step);
            }
            4 if !model.is_empty() => {
                let i = rng.gen_range(0..model.len());
                let pos = positions.remove(i).unwrap();
                assert_eq!(seq.remove(pos), model.remove(i));
                assert_eq!(seq.remove(pos), None);
            }
            _ => {
                assert_eq!(seq.pop_front(), model.pop_front());
                positions.pop_front();
            }
        }
        assert_eq!(seq.len(), model.len());
    }

    assert!(seq.iter().eq(model.iter()));
    assert!(seq.iter().rev().eq(model.iter().rev()));
}
