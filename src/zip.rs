use crate::cursor::Cursor;
use crate::ranger::Ranger;
use crate::sink::Sink;

/// Cursor produced by the zip rangers: one cursor per constituent
#[derive(Debug, Clone, Copy)]
pub struct ZipCursor<A, B> {
    a: A,
    b: B,
}

impl<A, B> Cursor for ZipCursor<A, B>
where
    A: Cursor,
    B: Cursor,
{
    type Item = (A::Item, B::Item);

    fn read(&self) -> Self::Item {
        (self.a.read(), self.b.read())
    }
}

/// Ranger pairing simultaneously advanced elements of two rangers
///
/// Both constituents are advanced through one-shot pulls, one element per
/// pair. The first constituent to report exhaustion ends the whole
/// combination; the other is not pulled again once that happens. Wider
/// zips nest: `zip(a, zip(b, c))` pairs into nested tuples.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Zip { a, b }
    }
}

impl<A, B> Ranger for Zip<A, B>
where
    A: Ranger,
    B: Ranger,
{
    type Cursor = ZipCursor<A::Cursor, B::Cursor>;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        loop {
            let Some(a) = self.a.next_cursor() else {
                return true;
            };
            let Some(b) = self.b.next_cursor() else {
                return true;
            };
            if !sink.accept(ZipCursor { a, b }) {
                return false;
            }
        }
    }
}

/// Push variant of `Zip`: the first ranger is the outer driver
///
/// The first constituent runs under its own sink, which single-pulls the
/// second constituent per element and composes the pair. Exhaustion of
/// the second constituent ends the combination even while the first still
/// has elements.
#[derive(Debug, Clone)]
pub struct PushZip<A, B> {
    a: A,
    b: B,
}

impl<A, B> PushZip<A, B> {
    pub fn new(a: A, b: B) -> Self {
        PushZip { a, b }
    }
}

impl<A, B> Ranger for PushZip<A, B>
where
    A: Ranger,
    B: Ranger,
{
    type Cursor = ZipCursor<A::Cursor, B::Cursor>;

    fn drive<S: Sink<Self::Cursor>>(&mut self, sink: &mut S) -> bool {
        let PushZip { a, b } = self;
        let mut finished = false;
        let exhausted = a.drive(&mut |p: A::Cursor| match b.next_cursor() {
            Some(q) => sink.accept(ZipCursor { a: p, b: q }),
            None => {
                finished = true;
                false
            }
        });
        exhausted || finished
    }
}

/// Convenience function to create a Zip ranger
pub fn zip<A: Ranger, B: Ranger>(a: A, b: B) -> Zip<A, B> {
    Zip::new(a, b)
}

/// Convenience function to create a PushZip ranger
pub fn push_zip<A: Ranger, B: Ranger>(a: A, b: B) -> PushZip<A, B> {
    PushZip::new(a, b)
}

/// Extension trait to add .zip() and .push_zip() method support for rangers
pub trait ZipExt: Ranger + Sized {
    fn zip<B: Ranger>(self, other: B) -> Zip<Self, B> {
        Zip::new(self, other)
    }

    fn push_zip<B: Ranger>(self, other: B) -> PushZip<Self, B> {
        PushZip::new(self, other)
    }
}

impl<R: Ranger> ZipExt for R {}
