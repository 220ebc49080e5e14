use crate::cursor::Cursor;
use crate::ranger::{ItemOf, Ranger};
use crate::sink::Sink;

/// Cursor produced by `Transform`: the wrapped cursor paired with the
/// mapping function
///
/// The function travels by value inside the cursor, which is why it must
/// be `Copy`. A non-capturing closure is a zero-sized `Copy` type, so in
/// the common case the pairing costs nothing.
#[derive(Debug, Clone, Copy)]
pub struct TransformCursor<C, F> {
    inner: C,
    f: F,
}

impl<C, F, U> Cursor for TransformCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U + Copy,
{
    type Item = U;

    fn read(&self) -> U {
        (self.f)(self.inner.read())
    }
}

/// Ranger that applies a mapping function at cursor-read time
///
/// Purely stateless with respect to position; resumability is inherited
/// directly from the wrapped ranger.
#[derive(Debug, Clone)]
pub struct Transform<R, F> {
    inner: R,
    f: F,
}

impl<R, F> Transform<R, F> {
    pub fn new(inner: R, f: F) -> Self {
        Transform { inner, f }
    }
}

impl<R, F, U> Ranger for Transform<R, F>
where
    R: Ranger,
    F: Fn(ItemOf<R>) -> U + Copy,
{
    type Cursor = TransformCursor<R::Cursor, F>;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        let f = self.f;
        self.inner
            .drive(&mut |p: R::Cursor| sink.accept(TransformCursor { inner: p, f }))
    }
}

/// Convenience function to create a Transform ranger
pub fn transform<R, F, U>(f: F, rgr: R) -> Transform<R, F>
where
    R: Ranger,
    F: Fn(ItemOf<R>) -> U + Copy,
{
    Transform::new(rgr, f)
}

/// Extension trait to add .transform() method support for rangers
pub trait TransformExt: Ranger + Sized {
    fn transform<F, U>(self, f: F) -> Transform<Self, F>
    where
        F: Fn(ItemOf<Self>) -> U + Copy,
    {
        Transform::new(self, f)
    }
}

impl<R: Ranger> TransformExt for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::all::all;
    use crate::iter::IterExt;

    #[test]
    fn test_transform_maps_every_element() {
        let data = vec![1, 2, 3];
        let out: Vec<i32> = transform(|x: &i32| 3 * x, all(&data)).input_iter().collect();
        assert_eq!(out, vec![3, 6, 9]);
    }

    #[test]
    fn test_transform_changes_element_type() {
        let data = vec![1, 2];
        let out: Vec<String> = all(&data)
            .transform(|x: &i32| format!("#{x}"))
            .input_iter()
            .collect();
        assert_eq!(out, vec!["#1".to_string(), "#2".to_string()]);
    }

    #[test]
    fn test_transform_reads_are_repeatable() {
        let data = vec![5];
        let mut rgr = all(&data).transform(|x: &i32| x + 1);
        let p = rgr.next_cursor().map(|p| (p.read(), p.read()));
        assert_eq!(p, Some((6, 6)));
    }

    #[test]
    fn test_transform_resumes_where_it_stopped() {
        let data = vec![1, 2, 3];
        let mut rgr = transform(|x: &i32| x * 10, all(&data));
        let mut seen = Vec::new();
        assert!(!rgr.drive(&mut |p: TransformCursor<_, _>| {
            seen.push(p.read());
            false
        }));
        assert!(rgr.drive(&mut |p: TransformCursor<_, _>| {
            seen.push(p.read());
            true
        }));
        assert_eq!(seen, vec![10, 20, 30]);
    }
}
