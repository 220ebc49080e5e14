use crate::cursor::Cursor;
use crate::ranger::{ItemOf, Ranger};

/// Single-pass iterator over a ranger
///
/// Each `next` performs a one-shot pull: the ranger is driven with a sink
/// that captures one cursor and answers `false`. Exhaustion maps to
/// `None`. This is the bridge between the push protocol and conventional
/// `Iterator` consumers (`for` loops, `collect`, adapter chains).
pub struct InputIter<R> {
    rgr: R,
}

impl<R: Ranger> InputIter<R> {
    pub fn new(rgr: R) -> Self {
        InputIter { rgr }
    }
}

impl<R: Ranger> Iterator for InputIter<R> {
    type Item = ItemOf<R>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rgr.next_cursor().map(|p| p.read())
    }
}

/// Forward-style iterator over a ranger
///
/// Like [`InputIter`], plus a monotonically increasing position counter
/// so that two iterator values over the same traversal compare equal by
/// position rather than only by end state. When the ranger is `Clone` the
/// iterator is too, each clone resuming independently from the shared
/// prefix, which is what makes multiple passes possible.
#[derive(Clone, Debug)]
pub struct ForwardIter<R> {
    rgr: R,
    pos: usize,
}

impl<R: Ranger> ForwardIter<R> {
    pub fn new(rgr: R) -> Self {
        ForwardIter { rgr, pos: 0 }
    }

    /// Number of elements delivered so far
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<R: Ranger> Iterator for ForwardIter<R> {
    type Item = ItemOf<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let p = self.rgr.next_cursor()?;
        self.pos += 1;
        Some(p.read())
    }
}

impl<R: Ranger> PartialEq for ForwardIter<R> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

/// Extension trait to expose rangers as iterators
pub trait IterExt: Ranger + Sized {
    fn input_iter(self) -> InputIter<Self> {
        InputIter::new(self)
    }

    fn forward_iter(self) -> ForwardIter<Self> {
        ForwardIter::new(self)
    }
}

impl<R: Ranger> IterExt for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::all::all;
    use crate::filter::FilterExt;

    #[test]
    fn test_input_iter_yields_every_element() {
        let data = vec![1, 2, 3];
        let out: Vec<i32> = all(&data).input_iter().map(|p| *p).collect();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_input_iter_end_is_stable() {
        let data = vec![1];
        let mut it = all(&data).input_iter();
        assert_eq!(it.next().map(|p| *p), Some(1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_input_iter_over_composed_pipeline() {
        let data = vec![1, 2, 3, 4];
        let out: Vec<i32> = all(&data)
            .filter(|x: &i32| x % 2 == 0)
            .input_iter()
            .map(|p| *p)
            .collect();
        assert_eq!(out, vec![2, 4]);
    }

    #[test]
    fn test_forward_iter_counts_positions() {
        let data = vec![5, 6, 7];
        let mut it = all(&data).forward_iter();
        assert_eq!(it.position(), 0);
        it.next();
        it.next();
        assert_eq!(it.position(), 2);
    }

    #[test]
    fn test_forward_iter_compares_by_position() {
        let data = vec![1, 2, 3];
        let mut x = all(&data).forward_iter();
        let mut y = all(&data).forward_iter();
        assert_eq!(x, y);
        x.next();
        assert_ne!(x, y);
        y.next();
        assert_eq!(x, y);
    }

    #[test]
    fn test_forward_iter_clone_resumes_independently() {
        let data = vec![1, 2, 3];
        let mut x = all(&data).forward_iter();
        x.next();
        let y = x.clone();
        let first_pass: Vec<i32> = x.map(|p| *p).collect();
        let second_pass: Vec<i32> = y.map(|p| *p).collect();
        assert_eq!(first_pass, vec![2, 3]);
        assert_eq!(second_pass, vec![2, 3]);
    }
}
