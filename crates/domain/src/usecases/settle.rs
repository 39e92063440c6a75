//! Settle-all join: wait for every future and report each outcome

use futures::future::join_all;
use std::future::Future;

/// Outcome of one settled future
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<T, E> {
    Fulfilled(T),
    Rejected(E),
}

impl<T, E> Settled<T, E> {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Settled::Fulfilled(_))
    }
}

impl<T, E> From<Result<T, E>> for Settled<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Settled::Fulfilled(value),
            Err(error) => Settled::Rejected(error),
        }
    }
}

/// Drive all futures concurrently; one failure never cancels the others
///
/// Outcomes are returned in input order.
pub async fn settle_all<I, F, T, E>(futures: I) -> Vec<Settled<T, E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    join_all(futures)
        .await
        .into_iter()
        .map(Settled::from)
        .collect()
}
