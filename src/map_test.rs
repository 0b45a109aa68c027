use crate::map::LlrbMap;

#[test]
fn test_map_crud() {
    let mut map: LlrbMap<String, String> = LlrbMap::new();

    assert!(map.is_empty());
    assert!(map.set("foo".to_string(), "bar".to_string()).is_none());
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("foo"), Some(&"bar".to_string()));
    assert_eq!(map.get("baz"), None);
    assert!(map.has("foo"));
    assert!(!map.has("baz"));

    // overwrite returns the previous value.
    let prev = map.set("foo".to_string(), "baz".to_string());
    assert_eq!(prev, Some("bar".to_string()));
    assert_eq!(map.get("foo"), Some(&"baz".to_string()));
    assert_eq!(map.len(), 1);

    assert_eq!(map.delete("foo"), Some("baz".to_string()));
    assert_eq!(map.len(), 0);
    assert_eq!(map.delete("foo"), None);
    assert_eq!(map.len(), 0);
}

#[test]
fn test_map_range() {
    let mut map: LlrbMap<i32, &str> = LlrbMap::new();
    map.set(1, "apple");
    map.set(2, "banana");
    map.set(3, "cherry");

    assert_eq!(map.delete(&3), Some("cherry"));

    let mut collect: Vec<(i32, &str)> = vec![];
    map.range(|key: &i32, value: &&str| {
        collect.push((*key, *value));
        true
    });
    assert_eq!(collect, vec![(1, "apple"), (2, "banana")]);
}

#[test]
fn test_map_range_break() {
    let mut map: LlrbMap<i32, i32> = LlrbMap::new();
    for key in 0..10 {
        map.set(key, key * 2);
    }

    let mut calls = 0;
    map.range(|_key: &i32, _value: &i32| {
        calls += 1;
        false
    });
    assert_eq!(calls, 1);
}

#[test]
fn test_map_order() {
    let mut map: LlrbMap<i32, ()> = LlrbMap::new();
    for key in [3, 5, 1, 4, 2].iter() {
        map.set(*key, ());
    }
    assert_eq!(map.len(), 5);

    let mut collect: Vec<i32> = vec![];
    map.range(|key: &i32, _value: &()| {
        collect.push(*key);
        true
    });
    assert_eq!(collect, vec![1, 2, 3, 4, 5]);

    map.clear();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
}

#[test]
fn test_map_default() {
    let map: LlrbMap<i32, i32> = Default::default();
    assert!(map.is_empty());
}
