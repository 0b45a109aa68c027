use rand::prelude::random;

use crate::set::LlrbSet;

#[test]
fn test_set_dedup() {
    let mut set: LlrbSet<i64> = LlrbSet::new();
    for _ in 0..1000 {
        set.insert((random::<i64>() % 10).abs());
    }
    assert!(set.len() <= 10);
}

#[test]
fn test_set_insert_delete() {
    let mut set: LlrbSet<i32> = LlrbSet::new();
    let a = [3, 5, 1, 4, 2];

    for x in a.iter() {
        assert!(!set.insert(*x));
    }
    // second pass, every element already present.
    for x in a.iter() {
        assert!(set.insert(*x));
    }
    assert_eq!(set.len(), 5);

    for x in a.iter() {
        assert!(set.has(x));
    }
    assert!(!set.has(&42));

    let mut collect: Vec<i32> = vec![];
    set.range(|x: &i32| {
        collect.push(*x);
        true
    });
    assert_eq!(collect, vec![1, 2, 3, 4, 5]);

    let items: Vec<i32> = set.iter().collect();
    assert_eq!(items, vec![1, 2, 3, 4, 5]);

    for x in a.iter() {
        assert!(set.delete(x));
    }
    assert_eq!(set.len(), 0);
    for x in a.iter() {
        assert!(!set.delete(x));
    }
}

#[test]
fn test_set_range_break() {
    let set: LlrbSet<i32> = (0..100).collect();

    let mut calls = 0;
    set.range(|_: &i32| {
        calls += 1;
        calls < 3
    });
    assert_eq!(calls, 3);
}

#[test]
fn test_set_from_iter() {
    let set: LlrbSet<i32> = vec![2, 1, 2, 3].into_iter().collect();
    assert_eq!(set.len(), 3);
    let items: Vec<i32> = set.iter().collect();
    assert_eq!(items, vec![1, 2, 3]);
}

#[test]
fn test_set_borrowed_key() {
    let mut set: LlrbSet<String> = LlrbSet::new();
    set.insert("hello".to_string());
    assert!(set.has("hello"));
    assert!(set.delete("hello"));
    assert!(!set.has("hello"));
    assert!(set.is_empty());
}

#[test]
fn test_set_default() {
    let set: LlrbSet<i32> = Default::default();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}
