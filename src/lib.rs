//! # Rangers - Resumable Range Combinators
//!
//! A lazy sequence-processing library built on a single abstraction: a
//! push-style producer (a "ranger") that a consumer drives by supplying a
//! short-circuitable callback (a "sink"). Chains of transformations
//! compose into one traversal, and a paused traversal picks up exactly
//! where it stopped. The library emphasizes:
//!
//! - **Single traversal**: filtering, mapping, truncation, concatenation,
//!   deduplication, flattening and pairing fuse into one pass with no
//!   intermediate materialization
//! - **Resumability**: a sink returning `false` suspends the whole
//!   pipeline; a later call resumes at the first undelivered element, with
//!   nothing skipped and nothing repeated
//! - **Static dispatch**: every pipeline's concrete type encodes its whole
//!   structure, so composition involves no indirect calls
//! - **Zero panics**: the protocol has no error channel and the crate has
//!   no panicking paths; captured functions are assumed total
//!
//! ```
//! use rangers::{AccumulateExt, FilterExt, TransformExt, all};
//!
//! let data = vec![0, 1, 2, 3, 4, 5];
//! let sum = all(&data)
//!     .filter(|x: &i32| x % 2 == 0)
//!     .transform(|x: &i32| 3 * x)
//!     .accumulate(0);
//! assert_eq!(sum, 18);
//! ```

pub mod accumulate;
pub mod all;
pub mod concat;
pub mod cursor;
pub mod filter;
pub mod iter;
pub mod join;
pub mod ranger;
pub mod sink;
pub mod take;
pub mod transform;
pub mod unique;
pub mod zip;

pub use accumulate::{AccumulateExt, accumulate};
pub use all::{All, AllOwned, IntoRanger, all};
pub use concat::{Concat, ConcatExt, concat};
pub use cursor::{Cursor, ValueCursor};
pub use filter::{Filter, FilterExt, filter};
pub use iter::{ForwardIter, InputIter, IterExt};
pub use join::{Join, JoinExt, join, ranger_join};
pub use ranger::{ItemOf, Ranger};
pub use sink::Sink;
pub use take::{Take, TakeExt, take};
pub use transform::{Transform, TransformCursor, TransformExt, transform};
pub use unique::{Unique, UniqueExt, unique};
pub use zip::{PushZip, Zip, ZipCursor, ZipExt, push_zip, zip};
