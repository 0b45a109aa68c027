#[derive(Clone)]
struct RefNode {
    key: i64,
    value: i64,
}

struct RefNodes {
    entries: Vec<RefNode>,
}

impl RefNodes {
    fn new(capacity: usize) -> RefNodes {
        let mut entries: Vec<RefNode> = Vec::with_capacity(capacity);
        (0..capacity).for_each(|_| entries.push(RefNode { key: -1, value: 0 }));
        RefNodes { entries }
    }

    fn get(&self, key: i64) -> Option<i64> {
        let entry = &self.entries[key as usize];
        if entry.key < 0 {
            None
        } else {
            Some(entry.value)
        }
    }

    fn set(&mut self, key: i64, value: i64) -> Option<i64> {
        let entry = &mut self.entries[key as usize];
        let old_value = if entry.key < 0 {
            None
        } else {
            Some(entry.value)
        };
        entry.key = key;
        entry.value = value;
        old_value
    }

    fn delete(&mut self, key: i64) -> Option<i64> {
        let entry = &mut self.entries[key as usize];
        if entry.key < 0 {
            None
        } else {
            entry.key = -1;
            Some(entry.value)
        }
    }

    fn iter(&self) -> std::vec::IntoIter<(i64, i64)> {
        self.entries
            .iter()
            .filter_map(|item| {
                if item.key < 0 {
                    None
                } else {
                    Some((item.key, item.value))
                }
            })
            .collect::<Vec<(i64, i64)>>()
            .into_iter()
    }

    // entries within [greater_or_equal, less_than), in ascending order.
    fn ascend(&self, greater_or_equal: Option<i64>, less_than: Option<i64>) -> Vec<(i64, i64)> {
        let lo = greater_or_equal.unwrap_or(0) as usize;
        let hi = less_than.unwrap_or(self.entries.len() as i64) as usize;
        if lo >= hi {
            return vec![];
        }
        self.entries[lo..hi]
            .iter()
            .filter_map(|item| {
                if item.key < 0 {
                    None
                } else {
                    Some((item.key, item.value))
                }
            })
            .collect()
    }

    // entries within (greater_than, less_or_equal], in descending order.
    fn descend(&self, less_or_equal: Option<i64>, greater_than: Option<i64>) -> Vec<(i64, i64)> {
        let lo = greater_than.map_or(0, |x| x + 1) as usize;
        let hi = less_or_equal.map_or(self.entries.len() as i64, |x| x + 1) as usize;
        if lo >= hi {
            return vec![];
        }
        self.entries[lo..hi]
            .iter()
            .rev()
            .filter_map(|item| {
                if item.key < 0 {
                    None
                } else {
                    Some((item.key, item.value))
                }
            })
            .collect()
    }
}

fn random_bounds(size: usize) -> (Option<i64>, Option<i64>) {
    let size = size as u64;
    let low = (random::<u64>() % size) as i64;
    let high = (random::<u64>() % size) as i64;
    let low = match random::<u8>() % 2 {
        0 => Some(low),
        _ => None,
    };
    let high = match random::<u8>() % 2 {
        0 => Some(high),
        _ => None,
    };
    (low, high)
}
