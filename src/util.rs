//! Utility functions for list reordering

/// Move the element at `from` so it ends up at index `to`
///
/// Everything between the two positions shifts by one. Out-of-range
/// indices leave the list unchanged.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Return a copy of `items` with one element moved
pub fn array_moved<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    array_move(&mut moved, from, to);
    moved
}
