use crate::cursor::Cursor;
use crate::ranger::{ItemOf, Ranger};
use crate::sink::Sink;

/// Ranger that forwards only the elements satisfying a predicate
///
/// Elements that fail the predicate are answered with `true` upstream so
/// the wrapped ranger keeps scanning. No decision is ever deferred across
/// calls, so resumability is inherited unchanged.
#[derive(Debug, Clone)]
pub struct Filter<R, P> {
    inner: R,
    pred: P,
}

impl<R, P> Filter<R, P> {
    pub fn new(inner: R, pred: P) -> Self {
        Filter { inner, pred }
    }
}

impl<R, P> Ranger for Filter<R, P>
where
    R: Ranger,
    P: FnMut(ItemOf<R>) -> bool,
{
    type Cursor = R::Cursor;

    fn drive<S: Sink<R::Cursor>>(&mut self, sink: &mut S) -> bool {
        let Filter { inner, pred } = self;
        inner.drive(&mut |p: R::Cursor| {
            if pred(p.read()) { sink.accept(p) } else { true }
        })
    }
}

/// Convenience function to create a Filter ranger
pub fn filter<R, P>(pred: P, rgr: R) -> Filter<R, P>
where
    R: Ranger,
    P: FnMut(ItemOf<R>) -> bool,
{
    Filter::new(rgr, pred)
}

/// Extension trait to add .filter() method support for rangers
pub trait FilterExt: Ranger + Sized {
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        P: FnMut(ItemOf<Self>) -> bool,
    {
        Filter::new(self, pred)
    }
}

impl<R: Ranger> FilterExt for R {}
