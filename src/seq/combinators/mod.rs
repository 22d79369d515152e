//! Zero-cost combinator types for sequence composition.
//!
//! This module contains the concrete types returned by sequence combinators.
//! Unlike [`BoxedSeq`](crate::seq::boxed::BoxedSeq), these types don't
//! allocate and can be optimized by the compiler.
//!
//! Most users won't need to name these types directly. Instead, use the
//! combinator methods on [`SeqExt`](crate::seq::ext::SeqExt) and
//! [`PairSeqExt`](crate::seq::ext::PairSeqExt) which return them.
//!
//! Every combinator here obeys the same two rules:
//! - a `false` from the downstream receiver is forwarded upstream at once
//! - per-traversal state is created inside `produce`, never stored on the type

mod dedup;
mod filter;
mod inspect;
mod jitter;
mod map;
mod max_elapsed;
mod merge;
mod not_empty;
mod not_none;
mod project;
mod trim;
mod with_index;

pub use dedup::{Dedup, DedupByKey, DedupKeys, DedupPairsBy};
pub use filter::{Filter, FilterPairs};
pub use inspect::Inspect;
pub use jitter::Jitter;
pub use map::{Map, MapKeys, MapPairs, MapValues, ToPairs, WithKeys};
pub use max_elapsed::MaxElapsed;
pub use merge::{Chain, Merge};
pub use not_empty::{NotEmpty, NotEmptyValues};
pub use not_none::{NotNone, NotNoneValues};
pub use project::{Keys, Values};
pub use trim::Trim;
pub use with_index::WithIndex;
