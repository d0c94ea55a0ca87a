use super::submission::{RowOutcome, SubmissionEvent};
use crate::shared::notice::Notice;
use futures::{pin_mut, Stream, StreamExt};

/// Aggregate result of a bulk submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkImportSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// The submission stopped before reaching the last row
    pub cancelled: bool,
}

impl BulkImportSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, event: &SubmissionEvent) {
        match event.outcome {
            RowOutcome::Created => self.succeeded += 1,
            RowOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Rows never attempted because the submission was cancelled
    pub fn skipped(&self) -> usize {
        self.total.saturating_sub(self.attempted())
    }

    /// Mark the end of the stream; anything not attempted means cancellation
    pub fn finish(&mut self) {
        self.cancelled = self.attempted() < self.total;
    }

    /// Two independent notices: one for successes (if any), one for
    /// failures (if any).
    pub fn notices(&self, list_name: &str) -> Vec<Notice> {
        let mut notices = Vec::new();
        if self.succeeded > 0 {
            notices.push(Notice::success(format!(
                "{} of {} {} imported",
                self.succeeded, self.total, list_name
            )));
        }
        if self.failed > 0 {
            notices.push(Notice::error(format!(
                "{} of {} {} failed to import",
                self.failed, self.total, list_name
            )));
        }
        notices
    }

    /// Leave the import screen only when at least one row landed; otherwise
    /// the pasted text stays for correction.
    pub fn should_leave(&self) -> bool {
        self.succeeded > 0
    }
}

/// Drive a submission stream to its end, calling `on_event` after every row.
pub async fn run_to_completion<S>(
    events: S,
    total: usize,
    mut on_event: impl FnMut(&SubmissionEvent),
) -> BulkImportSummary
where
    S: Stream<Item = SubmissionEvent>,
{
    let mut summary = BulkImportSummary::new(total);
    pin_mut!(events);
    while let Some(event) = events.next().await {
        summary.record(&event);
        on_event(&event);
    }
    summary.finish();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_error::ApiError;
    use crate::shared::bulk_import::submission::{submit_sequentially, AbortSignal, Progress};
    use crate::shared::notice::NoticeKind;
    use futures::executor::block_on;

    fn run(results: Vec<Result<(), ApiError>>) -> (BulkImportSummary, Vec<Progress>) {
        let total = results.len();
        let mut progress = Vec::new();
        let summary = block_on(run_to_completion(
            submit_sequentially(results, |r| async move { r }, AbortSignal::new()),
            total,
            |event| progress.push(event.progress),
        ));
        (summary, progress)
    }

    #[test]
    fn test_partial_failure_keeps_going_and_leaves() {
        let (summary, progress) = run(vec![
            Ok(()),
            Err(ApiError::Network("connection reset".to_string())),
            Ok(()),
        ]);

        assert_eq!(progress.last(), Some(&Progress { attempted: 3, total: 3 }));
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert!(!summary.cancelled);
        assert!(summary.should_leave());

        let kinds: Vec<NoticeKind> = summary.notices("partners").iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NoticeKind::Success, NoticeKind::Error]);
    }

    #[test]
    fn test_all_failed_stays_on_screen() {
        let (summary, _) = run(vec![
            Err(ApiError::Status { status: 422 }),
            Err(ApiError::Status { status: 500 }),
        ]);

        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.failed, 2);
        assert!(!summary.should_leave());

        let notices = summary.notices("clients");
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert_eq!(notices[0].message, "2 of 2 clients failed to import");
    }

    #[test]
    fn test_all_succeeded_has_single_success_notice() {
        let (summary, _) = run(vec![Ok(()), Ok(())]);
        let notices = summary.notices("values");
        assert_eq!(notices, vec![Notice::success("2 of 2 values imported")]);
    }

    #[test]
    fn test_cancelled_summary() {
        let abort = AbortSignal::new();
        let trigger = abort.clone();
        let summary = block_on(run_to_completion(
            submit_sequentially(vec![1, 2, 3], |_n: i32| async { Ok::<(), ApiError>(()) }, abort),
            3,
            move |event| {
                if event.index == 0 {
                    trigger.abort();
                }
            },
        ));

        assert_eq!(summary.succeeded, 1);
        assert!(summary.cancelled);
        assert_eq!(summary.skipped(), 2);
        assert!(summary.should_leave());
    }
}
