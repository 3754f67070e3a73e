//! One-dimensional interval resolution.
//!
//! Two resolvers turn a list of sized items into a [`Track`] of [`Interval`]s:
//! [`sequence`] lays items out back to back with flexible grow/shrink, and
//! [`stack`] aligns possibly-overlapping items inside a shared extent. Both are
//! pure functions; every number they hand out is rounded with [`round`].

mod auto;
mod interval;
mod item;
mod precision;
mod sequence;
mod stack;
mod track;

pub use auto::AutoOr;
pub use interval::Interval;
pub use item::{SequenceTrackItem, StackTrackItem, TrackItem};
pub use precision::{PRECISION, TOLERANCE, approx_eq, round, round_to};
pub use sequence::{SequenceOptions, sequence};
pub use stack::{StackOptions, stack};
pub use track::{Track, TrackError, check_ratio};
