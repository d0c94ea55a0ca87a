use crate::shared::api_error::ApiError;
use futures::stream::{self, Stream};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag for a running submission.
///
/// Checked before each row: once raised, no further request is started.
/// A request already in flight is not interrupted and its outcome is still
/// reported.
#[derive(Debug, Clone, Default)]
pub struct AbortSignal(Arc<AtomicBool>);

impl AbortSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Live progress: rows attempted so far (success or failure) out of total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub attempted: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        Self {
            attempted: 0,
            total,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.attempted >= self.total
    }

    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        ((self.attempted * 100) / self.total) as u32
    }
}

/// Result of one create request
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Created,
    Failed(ApiError),
}

impl RowOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RowOutcome::Created)
    }
}

/// Emitted after each attempted row
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionEvent {
    /// Index into the submitted rows
    pub index: usize,
    pub outcome: RowOutcome,
    pub progress: Progress,
}

/// Submit rows one at a time, yielding an event per attempted row.
///
/// Exactly one request is in flight at any moment, so `progress.attempted`
/// grows by one per event and is attributable to `index`. A failed row does
/// not stop the loop. The stream ends after the last row, or early when
/// `abort` is raised.
pub fn submit_sequentially<T, O, F, Fut>(
    rows: Vec<T>,
    create: F,
    abort: AbortSignal,
) -> impl Stream<Item = SubmissionEvent>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<O, ApiError>>,
{
    let total = rows.len();
    let state = (rows.into_iter().enumerate(), create, abort, 0usize);

    stream::unfold(
        state,
        move |(mut rows, mut create, abort, attempted)| async move {
            if abort.is_aborted() {
                return None;
            }
            let (index, row) = rows.next()?;

            let outcome = match create(row).await {
                Ok(_) => RowOutcome::Created,
                Err(e) => RowOutcome::Failed(e),
            };
            let attempted = attempted + 1;
            let event = SubmissionEvent {
                index,
                outcome,
                progress: Progress { attempted, total },
            };

            Some((event, (rows, create, abort, attempted)))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::StreamExt;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_rows_are_attempted_in_order_with_monotonic_progress() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let log = calls.clone();
        let events: Vec<SubmissionEvent> = block_on(
            submit_sequentially(
                vec!["a", "b", "c"],
                move |row| {
                    log.borrow_mut().push(row.to_string());
                    async move {
                        if row == "b" {
                            Err(ApiError::Status { status: 500 })
                        } else {
                            Ok(())
                        }
                    }
                },
                AbortSignal::new(),
            )
            .collect(),
        );

        assert_eq!(*calls.borrow(), vec!["a", "b", "c"]);
        assert_eq!(events.len(), 3);
        for (i, event) in events.iter().enumerate() {
            assert_eq!(event.index, i);
            assert_eq!(event.progress, Progress { attempted: i + 1, total: 3 });
        }
        assert!(events[0].outcome.is_success());
        assert_eq!(
            events[1].outcome,
            RowOutcome::Failed(ApiError::Status { status: 500 })
        );
        assert!(events[2].outcome.is_success());
        assert!(events[2].progress.is_complete());
    }

    #[test]
    fn test_abort_stops_before_next_row() {
        let abort = AbortSignal::new();
        let trigger = abort.clone();
        let started = Rc::new(RefCell::new(0usize));
        let counter = started.clone();

        let events: Vec<SubmissionEvent> = block_on(
            submit_sequentially(
                vec![1, 2, 3, 4],
                move |n: i32| {
                    *counter.borrow_mut() += 1;
                    if n == 2 {
                        // leaving the screen while row 2 is in flight
                        trigger.abort();
                    }
                    async move { Ok::<i32, ApiError>(n) }
                },
                abort.clone(),
            )
            .collect(),
        );

        assert_eq!(*started.borrow(), 2);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].progress, Progress { attempted: 2, total: 4 });
        assert!(abort.is_aborted());
    }

    #[test]
    fn test_already_aborted_submits_nothing() {
        let abort = AbortSignal::new();
        abort.abort();
        let events: Vec<SubmissionEvent> = block_on(
            submit_sequentially(vec![1, 2], |_n: i32| async { Ok::<(), ApiError>(()) }, abort)
                .collect(),
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(Progress::new(0).percent(), 100);
        assert_eq!(Progress { attempted: 1, total: 3 }.percent(), 33);
        assert_eq!(Progress { attempted: 3, total: 3 }.percent(), 100);
    }
}
