use crate::cursor::Cursor;
use crate::sink::Sink;

/// Shorthand for the element type a ranger's cursors read to.
pub type ItemOf<R> = <<R as Ranger>::Cursor as Cursor>::Item;

/// Core trait for resumable push-style producers
///
/// Driving a ranger offers zero or more cursors to the sink, in order.
/// The return value is a completion flag: `true` means the underlying
/// source is exhausted and no further call will ever produce elements;
/// `false` means the sink answered `false` and the ranger suspended,
/// keeping whatever state it needs to resume.
///
/// Resumability contract: after `drive` returns `false`, the next call on
/// the same value continues at the first element not yet delivered,
/// exactly once, with no element skipped or repeated. An element the sink
/// refused counts as delivered. Every combinator in this crate preserves
/// this contract for the rangers it wraps.
pub trait Ranger {
    type Cursor: Cursor;

    /// Offer successive elements to `sink`, starting where the previous
    /// call left off
    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool;

    /// Extract exactly one cursor with a one-shot sink
    ///
    /// Returns `None` once the ranger is exhausted. This is the pull
    /// primitive behind `zip` and the iterator bridge: the sink captures
    /// the cursor and answers `false`, so the traversal suspends right
    /// after the captured element. A ranger may deliver its last element
    /// and report exhaustion within the same call (`take` does, when the
    /// budget runs out); the captured cursor is still surfaced, and the
    /// following call observes the stable exhausted state.
    fn next_cursor(&mut self) -> Option<Self::Cursor> {
        let mut slot = None;
        self.drive(&mut |p: Self::Cursor| {
            slot = Some(p);
            false
        });
        slot
    }
}

/// Rangers can be driven through a mutable reference without being
/// consumed, like iterators.
impl<R: Ranger> Ranger for &mut R {
    type Cursor = R::Cursor;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        (**self).drive(sink)
    }
}
