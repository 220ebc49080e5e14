use crate::all::IntoRanger;
use crate::cursor::Cursor;
use crate::ranger::{ItemOf, Ranger};
use crate::sink::Sink;

/// Ranger that flattens a ranger-of-rangers into one flat traversal
///
/// Reading an outer cursor yields an inner ranger by value. When an inner
/// ranger suspends, that driven value is stored across calls so its
/// progress is never lost or replayed; the outer ranger has already moved
/// past the element it came from. Inner rangers that turn out to be empty
/// are drained within the same call and never surface as a pause point.
pub struct Join<R: Ranger> {
    outer: R,
    active: Option<ItemOf<R>>,
}

impl<R: Ranger> Join<R> {
    pub fn new(outer: R) -> Self {
        Join {
            outer,
            active: None,
        }
    }
}

impl<R> Ranger for Join<R>
where
    R: Ranger,
    ItemOf<R>: Ranger,
{
    type Cursor = <ItemOf<R> as Ranger>::Cursor;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        if let Some(sub) = self.active.as_mut() {
            if !sub.drive(&mut *sink) {
                return false;
            }
        }
        self.active = None;
        let Join { outer, active } = self;
        outer.drive(&mut |p: R::Cursor| {
            let mut sub = p.read();
            if sub.drive(&mut *sink) {
                true
            } else {
                *active = Some(sub);
                false
            }
        })
    }
}

impl<R> Clone for Join<R>
where
    R: Ranger + Clone,
    ItemOf<R>: Clone,
{
    fn clone(&self) -> Self {
        Join {
            outer: self.outer.clone(),
            active: self.active.clone(),
        }
    }
}

/// Convenience function to create a Join ranger
pub fn join<R>(rgr: R) -> Join<R>
where
    R: Ranger,
    ItemOf<R>: Ranger,
{
    Join::new(rgr)
}

/// Flatten a ranger-of-sequences by adapting each sequence through the
/// source adaptor first
pub fn ranger_join<R>(
    rgr: R,
) -> impl Ranger<Cursor = <<ItemOf<R> as IntoRanger>::Ranger as Ranger>::Cursor>
where
    R: Ranger,
    ItemOf<R>: IntoRanger,
{
    Join::new(crate::transform::transform(
        |seq: ItemOf<R>| seq.into_ranger(),
        rgr,
    ))
}

/// Extension trait to add .join() method support for rangers
pub trait JoinExt: Ranger + Sized {
    fn join(self) -> Join<Self>
    where
        ItemOf<Self>: Ranger,
    {
        Join::new(self)
    }
}

impl<R: Ranger> JoinExt for R {}
