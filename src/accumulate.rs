use std::ops::AddAssign;

use crate::cursor::Cursor;
use crate::ranger::{ItemOf, Ranger};

/// Terminal reduction: drive a ranger to exhaustion and fold every element
/// into an accumulator
///
/// The sink always answers `true`, so this is the one operation guaranteed
/// to exhaust its ranger in a single call. It is not resumable and does
/// not need to be. Traversal is strictly sequential; the fold is a plain
/// left fold.
pub fn accumulate<R, T>(mut rgr: R, init: T) -> T
where
    R: Ranger,
    T: AddAssign<ItemOf<R>>,
{
    let mut acc = init;
    rgr.drive(&mut |p: R::Cursor| {
        acc += p.read();
        true
    });
    acc
}

/// Extension trait to add .accumulate() method support for rangers
pub trait AccumulateExt: Ranger + Sized {
    fn accumulate<T>(self, init: T) -> T
    where
        T: AddAssign<ItemOf<Self>>,
    {
        accumulate(self, init)
    }
}

impl<R: Ranger> AccumulateExt for R {}
