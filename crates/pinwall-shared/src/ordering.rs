//! Drag-and-drop reordering over ordered collections.
//!
//! The primitive is a plain array move: remove the item at `from`, insert
//! it at `to`, every other item keeps its relative order. Everything else
//! here is a thin keyed layer on top of it, shared by the board list and
//! the post list of a board. Items that report [`Ordered::is_fixed`]
//! (pinned posts) can neither be dragged nor dropped onto.
//!
//! All functions return fresh vectors and leave their input untouched.

use crate::error::Rejection;

/// An item that lives in a user-ordered collection.
pub trait Ordered {
    type Key: PartialEq;

    fn key(&self) -> &Self::Key;

    /// Fixed items keep their slot during drag reordering.
    fn is_fixed(&self) -> bool {
        false
    }
}

/// Move the item at `from` to `to`.
///
/// Equal indices yield an unchanged copy.
pub fn reorder<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>, Rejection> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(Rejection::IndexOutOfRange { index, len });
        }
    }

    let mut out = items.to_vec();
    if from != to {
        let item = out.remove(from);
        out.insert(to, item);
    }
    Ok(out)
}

/// Index of the item carrying `key`, if any.
pub fn position_of<T: Ordered>(items: &[T], key: &T::Key) -> Option<usize> {
    items.iter().position(|item| item.key() == key)
}

/// Move the item keyed `source` into the slot currently held by `target`.
///
/// `missing` builds the rejection for a key that is not in `items`.
/// Dropping onto a fixed item, or dragging a fixed item, is rejected.
pub fn reorder_by_key<T, F>(
    items: &[T],
    source: &T::Key,
    target: &T::Key,
    missing: F,
) -> Result<Vec<T>, Rejection>
where
    T: Ordered + Clone,
    F: Fn(&T::Key) -> Rejection,
{
    let from = position_of(items, source).ok_or_else(|| missing(source))?;
    let to = position_of(items, target).ok_or_else(|| missing(target))?;

    if from == to {
        return Ok(items.to_vec());
    }
    if items[to].is_fixed() {
        return Err(Rejection::PinnedTarget);
    }
    if items[from].is_fixed() {
        return Err(Rejection::PinnedSource);
    }

    reorder(items, from, to)
}

/// Rearrange `items` to follow `order`, which must be a permutation of
/// their keys.
pub fn reorder_to_match<T>(items: &[T], order: &[T::Key]) -> Result<Vec<T>, Rejection>
where
    T: Ordered + Clone,
{
    if order.len() != items.len() {
        return Err(Rejection::OrderMismatch);
    }

    let mut taken = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    for key in order {
        let idx = position_of(items, key).ok_or(Rejection::OrderMismatch)?;
        // a repeated key means some other item is missing from `order`
        if std::mem::replace(&mut taken[idx], true) {
            return Err(Rejection::OrderMismatch);
        }
        out.push(items[idx].clone());
    }
    Ok(out)
}

/// Stable partition: fixed items first, then the rest, each run keeping
/// its relative order.
pub fn partition_fixed_first<T: Ordered + Clone>(items: &[T]) -> Vec<T> {
    let (mut fixed, rest): (Vec<T>, Vec<T>) = items.iter().cloned().partition(|i| i.is_fixed());
    fixed.extend(rest);
    fixed
}
