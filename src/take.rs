use crate::ranger::Ranger;
use crate::sink::Sink;

/// Ranger that delivers at most `n` elements over its whole lifetime
///
/// The budget is decremented on every sink invocation regardless of the
/// sink's answer, and survives suspension: resuming continues counting
/// down where the previous call stopped. When the budget reaches zero the
/// combinator reports exhaustion on that same call, even if the wrapped
/// ranger has more elements.
#[derive(Debug, Clone)]
pub struct Take<R> {
    inner: R,
    n: usize,
}

impl<R> Take<R> {
    pub fn new(inner: R, n: usize) -> Self {
        Take { inner, n }
    }
}

impl<R: Ranger> Ranger for Take<R> {
    type Cursor = R::Cursor;

    fn drive<S: Sink<R::Cursor>>(&mut self, sink: &mut S) -> bool {
        // A spent budget never touches the wrapped ranger.
        if self.n == 0 {
            return true;
        }
        let Take { inner, n } = self;
        let exhausted = inner.drive(&mut |p: R::Cursor| {
            *n -= 1;
            sink.accept(p) && *n != 0
        });
        exhausted || *n == 0
    }
}

/// Convenience function to create a Take ranger
pub fn take<R: Ranger>(n: usize, rgr: R) -> Take<R> {
    Take::new(rgr, n)
}

/// Extension trait to add .take() method support for rangers
pub trait TakeExt: Ranger + Sized {
    fn take(self, n: usize) -> Take<Self> {
        Take::new(self, n)
    }
}

impl<R: Ranger> TakeExt for R {}
