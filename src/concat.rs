use crate::ranger::Ranger;
use crate::sink::Sink;

/// Ranger that traverses one ranger, then another of the same cursor type
///
/// k-way concatenation is spelled by nesting: `concat(a, concat(b, c))`,
/// or `a.concat(b).concat(c)` with the extension method. When the first
/// constituent reports exhaustion the second is tried within the same
/// call; no extra round-trip to the consumer is needed at the seam.
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
    first_done: bool,
}

impl<A, B> Concat<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Concat {
            first,
            second,
            first_done: false,
        }
    }
}

impl<A, B> Ranger for Concat<A, B>
where
    A: Ranger,
    B: Ranger<Cursor = A::Cursor>,
{
    type Cursor = A::Cursor;

    fn drive<S: Sink<A::Cursor>>(&mut self, sink: &mut S) -> bool {
        if !self.first_done {
            if !self.first.drive(&mut *sink) {
                return false;
            }
            self.first_done = true;
        }
        self.second.drive(sink)
    }
}

/// Convenience function to create a Concat ranger
pub fn concat<A, B>(first: A, second: B) -> Concat<A, B>
where
    A: Ranger,
    B: Ranger<Cursor = A::Cursor>,
{
    Concat::new(first, second)
}

/// Extension trait to add .concat() method support for rangers
pub trait ConcatExt: Ranger + Sized {
    fn concat<B>(self, second: B) -> Concat<Self, B>
    where
        B: Ranger<Cursor = Self::Cursor>,
    {
        Concat::new(self, second)
    }
}

impl<R: Ranger> ConcatExt for R {}
