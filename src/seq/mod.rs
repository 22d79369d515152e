//! Lazy, restartable sequences and their combinators.
//!
//! A [`Seq`] pushes values into a receiver closure until the receiver
//! answers `false` or the values run out. Sources ([`of`](sources::of),
//! [`repeat`](sources::repeat), [`exponential`](sources::exponential), ...)
//! start a chain, combinators from [`SeqExt`] and [`PairSeqExt`] wrap it,
//! and a terminal operation from [`aggregate`] (or a plain `produce` call)
//! drives it.
//!
//! # Example
//!
//! ```rust
//! use seqflow::prelude::*;
//!
//! let labelled = from_iter(1..=6)
//!     .filter(|n| n % 2 == 0)
//!     .with_keys(|n| if *n > 3 { "big" } else { "small" });
//!
//! let groups = labelled.group();
//! assert_eq!(groups["small"], vec![2]);
//! assert_eq!(groups["big"], vec![4, 6]);
//! ```

pub mod aggregate;
pub mod boxed;
pub mod combinators;
pub mod ext;
pub mod magnitude;
pub mod pull;
pub mod sources;
pub mod trait_def;

pub use boxed::BoxedSeq;
pub use ext::{PairSeqExt, SeqExt};
pub use magnitude::Magnitude;
pub use pull::Pull;
pub use trait_def::{Seq, Seq2};
