use crate::cursor::ValueCursor;
use crate::ranger::Ranger;
use crate::sink::Sink;

/// Source ranger over a borrowed slice
///
/// Each drive call resumes from the last remembered position. When the
/// sink refuses an element the position is stored past it, because a
/// refused element still counts as delivered.
#[derive(Debug, Clone)]
pub struct All<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> All<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        All { items, pos: 0 }
    }
}

impl<'a, T> Ranger for All<'a, T> {
    type Cursor = &'a T;

    fn drive<S: Sink<&'a T>>(&mut self, sink: &mut S) -> bool {
        let items: &'a [T] = self.items;
        while self.pos < items.len() {
            let p = &items[self.pos];
            self.pos += 1;
            if !sink.accept(p) {
                return false;
            }
        }
        true
    }
}

/// Source ranger that owns a value copy of its sequence
///
/// Used when the sequence would otherwise be a temporary. The cursor
/// carries the element by value, so elements must be `Copy`; traversal
/// behavior is otherwise identical to the borrowing source.
#[derive(Debug, Clone)]
pub struct AllOwned<T> {
    items: Vec<T>,
    pos: usize,
}

impl<T> AllOwned<T> {
    pub fn new(items: Vec<T>) -> Self {
        AllOwned { items, pos: 0 }
    }
}

impl<T: Copy> Ranger for AllOwned<T> {
    type Cursor = ValueCursor<T>;

    fn drive<S: Sink<ValueCursor<T>>>(&mut self, sink: &mut S) -> bool {
        while self.pos < self.items.len() {
            let p = ValueCursor::new(self.items[self.pos]);
            self.pos += 1;
            if !sink.accept(p) {
                return false;
            }
        }
        true
    }
}

/// Conversion from a sequence into its source ranger
///
/// Borrowed sequences convert to the borrowing source, moved-in `Vec`s to
/// the owning one. `ranger_join` uses this to adapt each inner sequence of
/// a ranger-of-sequences.
pub trait IntoRanger {
    type Ranger: Ranger;

    fn into_ranger(self) -> Self::Ranger;
}

impl<'a, T> IntoRanger for &'a [T] {
    type Ranger = All<'a, T>;

    fn into_ranger(self) -> All<'a, T> {
        All::new(self)
    }
}

impl<'a, T> IntoRanger for &'a Vec<T> {
    type Ranger = All<'a, T>;

    fn into_ranger(self) -> All<'a, T> {
        All::new(self)
    }
}

impl<'a, T, const N: usize> IntoRanger for &'a [T; N] {
    type Ranger = All<'a, T>;

    fn into_ranger(self) -> All<'a, T> {
        All::new(self)
    }
}

impl<T: Copy> IntoRanger for Vec<T> {
    type Ranger = AllOwned<T>;

    fn into_ranger(self) -> AllOwned<T> {
        AllOwned::new(self)
    }
}

/// Adapt a sequence into the ranger protocol
///
/// `all(&seq)` borrows (the sequence must outlive the pipeline) and
/// `all(vec)` takes ownership of a moved-in copy.
pub fn all<S: IntoRanger>(seq: S) -> S::Ranger {
    seq.into_ranger()
}
