//! Pull adapter - step through a push-style sequence by hand.
//!
//! A [`Seq`] pushes values at its receiver; sometimes the consumer needs to
//! ask for values one at a time instead (comparing two sequences in
//! lockstep is the canonical case). [`Pull`] turns a sequence into an
//! [`Iterator`].
//!
//! The sequence runs on a scoped helper thread that is parked between
//! values: it computes nothing until `next` is called, hands over exactly
//! one value, then waits for the next request. Only one side is ever
//! running, so the traversal stays sequential.
//!
//! A `Pull` holds a live traversal and must be released: call
//! [`Pull::stop`] or drop it. Releasing answers `false` to the sequence's
//! pending receiver call and joins the helper thread.
//!
//! # Example
//!
//! ```rust
//! use seqflow::prelude::*;
//! use std::thread;
//!
//! let naturals = from_iter(0u64..);
//!
//! thread::scope(|scope| {
//!     let mut cursor = Pull::spawn(scope, &naturals);
//!     assert_eq!(cursor.next(), Some(0));
//!     assert_eq!(cursor.next(), Some(1));
//!     cursor.stop();
//!     assert_eq!(cursor.next(), None);
//! });
//! ```

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, Scope, ScopedJoinHandle};

use crate::seq::trait_def::Seq;

/// A manually advanced cursor over a sequence.
pub struct Pull<'scope, T> {
    demand: Option<SyncSender<()>>,
    supply: Option<Receiver<T>>,
    worker: Option<ScopedJoinHandle<'scope, ()>>,
}

impl<T> std::fmt::Debug for Pull<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pull")
            .field("active", &self.worker.is_some())
            .finish()
    }
}

impl<'scope, T: Send + 'scope> Pull<'scope, T> {
    /// Start a pull over `seq` inside `scope`.
    ///
    /// Nothing is produced until the first call to `next`.
    pub fn spawn<'env, S>(scope: &'scope Scope<'scope, 'env>, seq: &'env S) -> Self
    where
        S: Seq<Item = T> + Sync,
    {
        let (demand, demand_rx) = mpsc::sync_channel::<()>(0);
        let (supply_tx, supply) = mpsc::sync_channel::<T>(0);
        let worker = scope.spawn(move || {
            if demand_rx.recv().is_err() {
                return;
            }
            seq.produce(|v| supply_tx.send(v).is_ok() && demand_rx.recv().is_ok());
        });

        Pull {
            demand: Some(demand),
            supply: Some(supply),
            worker: Some(worker),
        }
    }
}

impl<T> Pull<'_, T> {
    /// Release the traversal: tell the sequence to stop and wait for the
    /// helper thread to finish. Later calls to `next` return `None`.
    ///
    /// # Panics
    ///
    /// Re-raises a panic that happened inside the sequence.
    pub fn stop(&mut self) {
        if let Err(panic) = self.release() {
            std::panic::resume_unwind(panic);
        }
    }

    /// Whether the traversal is still live.
    pub fn is_active(&self) -> bool {
        self.worker.is_some()
    }

    fn release(&mut self) -> thread::Result<()> {
        // Dropping both ends fails whichever channel operation the
        // sequence is parked on, which makes its receiver return `false`.
        self.demand.take();
        self.supply.take();
        match self.worker.take() {
            Some(worker) => worker.join(),
            None => Ok(()),
        }
    }
}

impl<T> Iterator for Pull<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let received = match (&self.demand, &self.supply) {
            (Some(demand), Some(supply)) => demand.send(()).ok().and_then(|()| supply.recv().ok()),
            _ => return None,
        };
        if received.is_none() {
            self.stop();
        }
        received
    }
}

impl<T> Drop for Pull<'_, T> {
    fn drop(&mut self) {
        let result = self.release();
        if let Err(panic) = result {
            if !thread::panicking() {
                std::panic::resume_unwind(panic);
            }
        }
    }
}
