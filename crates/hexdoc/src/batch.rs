//! All-or-nothing joining of per-package tasks.

use tokio::task::JoinSet;
use tracing::warn;

use crate::error::{Error, Result};

/// A per-package task outcome tagged with its position in the batch.
pub(crate) type Tagged<T> = (usize, String, Result<T>);

/// Waits for every task in `join_set` and returns the results in index order.
///
/// The first failure ends the batch: tasks still running are detached (they keep
/// running but their results are discarded) and the error is wrapped in
/// [`Error::Batch`] together with the packages that already completed.
pub(crate) async fn join_batch<T: Send + 'static>(
    mut join_set: JoinSet<Tagged<T>>,
    len: usize,
) -> Result<Vec<T>> {
    let mut slots: Vec<Option<T>> = (0..len).map(|_| None).collect();
    let mut completed = Vec::with_capacity(len);

    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, package, Ok(value))) => {
                if let Some(slot) = slots.get_mut(index) {
                    *slot = Some(value);
                }
                completed.push(package);
            }
            Ok((_, package, Err(source))) => {
                join_set.detach_all();
                warn!(%package, completed = completed.len(), "batch aborted");
                return Err(Error::Batch {
                    package,
                    completed,
                    source: Box::new(source),
                });
            }
            Err(join_err) => {
                join_set.detach_all();
                return Err(Error::TaskFailed(join_err.to_string()));
            }
        }
    }

    Ok(slots.into_iter().flatten().collect())
}
