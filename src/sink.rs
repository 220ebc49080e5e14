/// Per-element contract between a ranger and its consumer
///
/// A ranger calls `accept` once per element it offers. Returning `true`
/// asks for more elements; returning `false` suspends the traversal at
/// that point. A ranger must not call the sink again after it returned
/// `false` until the enclosing drive call has itself returned.
///
/// Sinks are per-call parameters: no ranger retains a sink across calls,
/// so the same ranger may be resumed with a different sink each time.
pub trait Sink<C> {
    fn accept(&mut self, cursor: C) -> bool;
}

/// Any `FnMut(C) -> bool` closure is a sink.
impl<C, F> Sink<C> for F
where
    F: FnMut(C) -> bool,
{
    fn accept(&mut self, cursor: C) -> bool {
        self(cursor)
    }
}
