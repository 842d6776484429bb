//! Concurrent fan-out over independent provider calls
//!
//! Every branch starts together and the join waits for all of them. A
//! failing required branch fails the whole join; a failing optional branch
//! is logged and leaves an empty slot.

use std::future::Future;
use std::pin::Pin;

use futures::future::join_all;
use tracing::warn;

use crate::error::ApplicationError;

type Branch<'a, T> = Pin<Box<dyn Future<Output = Result<T, ApplicationError>> + Send + 'a>>;

/// Whether a branch failure aborts the join
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Necessity {
    Required,
    Optional,
}

/// Builder collecting named branches
pub struct FanOut<'a, T> {
    branches: Vec<(&'static str, Necessity, Branch<'a, T>)>,
}

impl<T> std::fmt::Debug for FanOut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.branches.iter().map(|(n, k, _)| (*n, *k)).collect();
        f.debug_struct("FanOut").field("branches", &names).finish()
    }
}

impl<'a, T: Send + 'a> Default for FanOut<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Send + 'a> FanOut<'a, T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            branches: Vec::new(),
        }
    }

    /// Add a branch whose failure fails the join
    #[must_use]
    pub fn required<F>(self, name: &'static str, fut: F) -> Self
    where
        F: Future<Output = Result<T, ApplicationError>> + Send + 'a,
    {
        self.push(name, Necessity::Required, fut)
    }

    /// Add a branch whose failure is tolerated
    #[must_use]
    pub fn optional<F>(self, name: &'static str, fut: F) -> Self
    where
        F: Future<Output = Result<T, ApplicationError>> + Send + 'a,
    {
        self.push(name, Necessity::Optional, fut)
    }

    fn push<F>(mut self, name: &'static str, necessity: Necessity, fut: F) -> Self
    where
        F: Future<Output = Result<T, ApplicationError>> + Send + 'a,
    {
        self.branches.push((name, necessity, Box::pin(fut)));
        self
    }

    /// Run all branches concurrently and wait for every one to settle
    ///
    /// # Errors
    ///
    /// Returns the error of the first required branch, in declaration
    /// order, that failed.
    pub async fn join(self) -> Result<Joined<T>, ApplicationError> {
        let (meta, futures): (Vec<_>, Vec<_>) = self
            .branches
            .into_iter()
            .map(|(name, necessity, fut)| ((name, necessity), fut))
            .unzip();

        let outcomes = join_all(futures).await;

        let mut slots = Vec::with_capacity(outcomes.len());
        for ((name, necessity), outcome) in meta.into_iter().zip(outcomes) {
            match (outcome, necessity) {
                (Ok(value), _) => slots.push((name, Some(value))),
                (Err(e), Necessity::Required) => return Err(e),
                (Err(e), Necessity::Optional) => {
                    warn!(branch = name, error = %e, "Optional branch failed");
                    slots.push((name, None));
                },
            }
        }

        Ok(Joined { slots })
    }
}

/// Settled results of a fan-out, by branch name
#[derive(Debug)]
pub struct Joined<T> {
    slots: Vec<(&'static str, Option<T>)>,
}

impl<T> Joined<T> {
    /// Remove and return the value of a named branch
    ///
    /// `None` if the branch is unknown, already taken, or was optional and failed.
    pub fn take(&mut self, name: &str) -> Option<T> {
        self.slots
            .iter_mut()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.take())
    }
}
