/// Generic cursor trait for ranger combinators
///
/// A cursor is a lightweight, copyable handle to one element's position in
/// whatever storage the producing ranger manages. It carries no traversal
/// state of its own; advancing past an element is the exclusive
/// responsibility of the ranger that handed the cursor out. Every pipeline
/// stage has its own cursor representation: a plain reference for slice
/// sources, a cursor/function pair after `transform`, a pair of cursors
/// after `zip`.
pub trait Cursor: Copy {
    /// The value obtained by reading through the cursor
    type Item;

    /// Read the element at the cursor's position
    ///
    /// Reading is pure: it may be called any number of times and never
    /// advances the cursor.
    fn read(&self) -> Self::Item;
}

/// Slice sources hand out plain references as cursors.
impl<'a, T> Cursor for &'a T {
    type Item = &'a T;

    fn read(&self) -> &'a T {
        self
    }
}

/// Cursor used by owning sources: the element itself travels inside the
/// cursor, which is why owning sources require `Copy` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCursor<T> {
    value: T,
}

impl<T> ValueCursor<T> {
    pub fn new(value: T) -> Self {
        ValueCursor { value }
    }
}

impl<T: Copy> Cursor for ValueCursor<T> {
    type Item = T;

    fn read(&self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_cursor_reads_element() {
        let data = [7, 8, 9];
        let p: &i32 = &data[1];
        assert_eq!(*p.read(), 8);
    }

    #[test]
    fn test_reference_cursor_read_is_repeatable() {
        let data = [3];
        let p: &i32 = &data[0];
        assert_eq!(p.read(), p.read());
    }

    #[test]
    fn test_value_cursor_reads_copy() {
        let p = ValueCursor::new(42);
        assert_eq!(p.read(), 42);
        assert_eq!(p.read(), 42);
    }
}
