use super::traverse;
use crate::Sequence;

/// Reference model: a plain vector plus an optional cursor index.
struct Model {
    items: Vec<u32>,
    cursor: Option<usize>,
}

impl Model {
    fn new() -> Model {
        Model {
            items: Vec::new(),
            cursor: None,
        }
    }

    fn start(&mut self) {
        self.cursor = if self.items.is_empty() { None } else { Some(0) };
    }

    fn advance(&mut self) {
        let next = self.cursor.unwrap() + 1;
        self.cursor = (next < self.items.len()).then_some(next);
    }

    fn insert(&mut self, value: u32) {
        let index = self.cursor.unwrap_or(0);
        self.items.insert(index, value);
        self.cursor = Some(index);
    }

    fn attach(&mut self, value: u32) {
        let index = self.cursor.map_or(self.items.len(), |i| i + 1);
        self.items.insert(index, value);
        self.cursor = Some(index);
    }

    fn remove_current(&mut self) -> u32 {
        let index = self.cursor.unwrap();
        let value = self.items.remove(index);
        self.cursor = (index < self.items.len()).then_some(index);
        value
    }
}

fn check(seq: &Sequence<u32>, model: &Model) {
    seq.assert_invariants();
    assert_eq!(seq.items(), model.items.as_slice());
    assert_eq!(seq.size(), model.items.len());
    assert_eq!(seq.has_current(), model.cursor.is_some());
    if let Some(index) = model.cursor {
        assert_eq!(seq.cursor_position(), index);
        assert_eq!(seq.current(), model.items[index]);
    }
}

fn run_random_ops(seed: u64, initial_capacity: usize, ops: usize) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut seq = Sequence::new(initial_capacity);
    let mut model = Model::new();

    for _ in 0..ops {
        match rng.u32(0..100) {
            0..=29 => {
                let value = rng.u32(..);
                seq.insert(value);
                model.insert(value);
            }
            30..=59 => {
                let value = rng.u32(..);
                seq.attach(value);
                model.attach(value);
            }
            60..=74 => {
                if seq.has_current() {
                    assert_eq!(seq.remove_current(), model.remove_current());
                }
            }
            75..=89 => {
                if seq.has_current() {
                    seq.advance();
                    model.advance();
                }
            }
            90..=94 => {
                seq.start();
                model.start();
            }
            95..=97 => {
                let target = rng.usize(0..seq.size() + 8);
                seq.resize(target);
                assert_eq!(seq.capacity(), target.max(1).max(seq.size()));
            }
            _ => {
                let copy = seq.clone();
                assert_eq!(copy, seq);
                assert_eq!(copy.capacity(), seq.capacity());
                seq = copy;
            }
        }
        check(&seq, &model);
    }

    assert_eq!(traverse(&mut seq), model.items);
}

#[test]
fn test_random_ops_small_capacity() {
    for seed in 0..20 {
        run_random_ops(seed, 0, 500);
    }
}

#[test]
fn test_random_ops_large_capacity() {
    for seed in 100..110 {
        run_random_ops(seed, 64, 2000);
    }
}

#[test]
fn test_random_clone_independence() {
    let mut rng = fastrand::Rng::with_seed(42);
    let mut original = Sequence::new(1);
    for _ in 0..50 {
        original.attach(rng.u32(..1000));
    }
    original.start();
    let snapshot = original.items().to_vec();

    let mut copy = Sequence::new(1);
    copy.clone_from(&original);
    while copy.has_current() {
        if rng.bool() {
            copy.remove_current();
        } else {
            copy.attach(rng.u32(..1000));
            copy.advance();
        }
        copy.assert_invariants();
    }

    assert_eq!(original.items(), snapshot.as_slice());
    assert_eq!(original.cursor_position(), 0);
}
