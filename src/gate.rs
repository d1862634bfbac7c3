//! Binary pause token guarding one actuator loop.
//!
//! A [`Gate`] holds a single token. While the worker side can get at the token
//! the actuator runs; while the controller keeps it, the actuator stalls at its
//! next [`Gate::checkpoint`].
//!
//! # Protocol
//!
//! | Party      | Operation                                   | Effect                       |
//! |------------|---------------------------------------------|------------------------------|
//! | Worker     | [`checkpoint`](Gate::checkpoint)            | acquire, then give back      |
//! | Controller | [`try_acquire`](Gate::try_acquire) + [`retain`](GatePermit::retain) | pause      |
//! | Controller | [`release`](Gate::release)                  | resume                       |
//!
//! Releasing a gate whose token is already available is a protocol error. It
//! is not detected here; the controller only resumes gates it paused.
//!
//! The token is an [`embassy_sync`] semaphore permit. Releasing does not need
//! the permit that was acquired, which is what lets the controller hand the
//! token back long after it took it.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::semaphore::{GreedySemaphore, Semaphore, SemaphoreReleaser};

/// Binary token shared by one controller and one worker.
pub struct Gate<M: RawMutex> {
    token: GreedySemaphore<M>,
}

/// Ownership of a gate's token.
///
/// Dropping the permit gives the token back. [`GatePermit::retain`] keeps it
/// out of circulation instead, which is how the controller pauses a worker.
#[must_use = "dropping a permit immediately gives the token back"]
pub struct GatePermit<'a, M: RawMutex> {
    releaser: SemaphoreReleaser<'a, GreedySemaphore<M>>,
}

impl<M: RawMutex> Gate<M> {
    /// Create a gate in the running state (token available to the worker).
    pub const fn new() -> Self {
        Self {
            token: GreedySemaphore::new(1),
        }
    }

    /// Wait until the token is available, then take it.
    ///
    /// Suspends without consuming CPU while the controller holds the token.
    pub async fn acquire_blocking(&self) -> GatePermit<'_, M> {
        // GreedySemaphore's error type is Infallible
        let Ok(releaser) = self.token.acquire(1).await;
        GatePermit { releaser }
    }

    /// Take the token if it is available right now.
    pub fn try_acquire(&self) -> Option<GatePermit<'_, M>> {
        self.token.try_acquire(1).map(|releaser| GatePermit { releaser })
    }

    /// Put the token back and wake the waiting worker, if any.
    pub fn release(&self) {
        self.token.release(1);
    }

    /// Worker checkpoint: block while paused, otherwise pass straight through.
    pub async fn checkpoint(&self) {
        let permit = self.acquire_blocking().await;
        drop(permit);
    }
}

impl<M: RawMutex> Default for Gate<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> GatePermit<'_, M> {
    /// Keep the token. The gate stays closed until [`Gate::release`].
    pub fn retain(self) {
        self.releaser.disarm();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
