mod model_tests;

use crate::Sequence;

/// Walks the sequence from the first item and collects a copy of each item.
/// The cursor is left at the end.
pub(crate) fn traverse<T: Clone>(seq: &mut Sequence<T>) -> Vec<T> {
    let mut items = Vec::with_capacity(seq.size());
    seq.start();
    while seq.has_current() {
        items.push(seq.current());
        seq.advance();
    }
    items
}
