use crate::cursor::Cursor;
use crate::ranger::{ItemOf, Ranger};
use crate::sink::Sink;

/// Ranger that suppresses consecutive duplicate elements
///
/// Equality is structural on the element type, not identity on the
/// cursor. The remembered cursor tracks the last element *seen*, so a
/// skipped duplicate still moves the comparison point forward; a
/// duplicate is forwarded again as soon as a different element has been
/// delivered in between. The wrapped ranger is asked to continue past
/// skipped elements without the downstream sink being consulted.
#[derive(Clone)]
pub struct Unique<R: Ranger> {
    inner: R,
    prev: Option<R::Cursor>,
}

impl<R: Ranger> Unique<R> {
    pub fn new(inner: R) -> Self {
        Unique { inner, prev: None }
    }
}

impl<R> Ranger for Unique<R>
where
    R: Ranger,
    ItemOf<R>: PartialEq,
{
    type Cursor = R::Cursor;

    fn drive<S: Sink<R::Cursor>>(&mut self, sink: &mut S) -> bool {
        let Unique { inner, prev } = self;
        inner.drive(&mut |q: R::Cursor| {
            let repeat = match prev {
                Some(p) => p.read() == q.read(),
                // Nothing delivered yet: the first element always goes through.
                None => false,
            };
            *prev = Some(q);
            if repeat { true } else { sink.accept(q) }
        })
    }
}

/// Convenience function to create a Unique ranger
pub fn unique<R>(rgr: R) -> Unique<R>
where
    R: Ranger,
    ItemOf<R>: PartialEq,
{
    Unique::new(rgr)
}

/// Extension trait to add .unique() method support for rangers
pub trait UniqueExt: Ranger + Sized {
    fn unique(self) -> Unique<Self>
    where
        ItemOf<Self>: PartialEq,
    {
        Unique::new(self)
    }
}

impl<R: Ranger> UniqueExt for R {}
