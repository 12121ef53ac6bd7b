//! Background fetch sequence with cancel-on-restart.
//!
//! At most one sequence runs per [`Loader`]. Starting a new one aborts the
//! previous task, so a manual retry issued while a backoff sleep is pending
//! never leaves two sequences racing. Events are tagged with a generation and
//! anything from an older sequence is dropped on receipt.

use crate::fetch::{load_heroes, HeroSource};
use crate::retry::RetryPolicy;
use crate::state::Event;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct Loader {
    source: Arc<dyn HeroSource>,
    policy: RetryPolicy,
    generation: u64,
    task: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<(u64, Event)>,
    rx: mpsc::UnboundedReceiver<(u64, Event)>,
}

impl Loader {
    pub fn new(source: Arc<dyn HeroSource>, policy: RetryPolicy) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            policy,
            generation: 0,
            task: None,
            tx,
            rx,
        }
    }

    /// Begin a fresh sequence from attempt zero, cancelling any pending one.
    ///
    /// Returns the `Started` event for the caller to feed into its state.
    pub fn start(&mut self) -> Event {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let policy = self.policy;
        let tx = self.tx.clone();
        tracing::debug!(generation, "starting fetch sequence");

        self.task = Some(tokio::spawn(async move {
            let retry_tx = tx.clone();
            let result = load_heroes(source.as_ref(), &policy, |e| {
                let _ = retry_tx.send((generation, Event::Retrying(e.clone())));
            })
            .await;
            let event = match result {
                Ok(heroes) => Event::Loaded(heroes),
                Err(failure) => Event::Exhausted(failure),
            };
            let _ = tx.send((generation, event));
        }));

        Event::Started {
            max_retries: self.policy.max_retries,
        }
    }

    /// Abort the running sequence, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                tracing::info!(generation = self.generation, "cancelling pending fetch");
            }
            task.abort();
        }
    }

    /// Next event from the current sequence. Never resolves while idle.
    pub async fn next_event(&mut self) -> Event {
        loop {
            // The loader holds a sender, so the channel never closes.
            let Some((generation, event)) = self.rx.recv().await else {
                return futures::future::pending().await;
            };
            if generation == self.generation {
                return event;
            }
            tracing::debug!(generation, "dropping stale fetch event");
        }
    }
}

impl Drop for Loader {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::fetch::stub::ScriptedSource;
    use crate::sort::hero;
    use crate::state::Phase;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn reports_retries_then_result() {
        let source = Arc::new(ScriptedSource::new(vec![
            Err(FetchError::Status(502)),
            Ok(vec![hero(1, "A", 40.0), hero(2, "B", 60.0)]),
        ]));
        let mut loader = Loader::new(source.clone(), RetryPolicy::default());
        let mut phase = Phase::Idle.apply(loader.start());

        let event = loader.next_event().await;
        assert!(matches!(&event, Event::Retrying(r) if r.retry == 1));
        phase = phase.apply(event);
        assert_eq!(
            phase,
            Phase::Fetching {
                attempt: 1,
                max_retries: 3
            }
        );

        phase = phase.apply(loader.next_event().await);
        let Phase::Ready { heroes, .. } = &phase else {
            panic!("expected ready, got {phase:?}");
        };
        assert_eq!(heroes[0].name, "B");
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_cancels_pending_sequence() {
        let source = Arc::new(ScriptedSource::new(vec![
            Err(FetchError::Status(500)),
            Ok(vec![hero(1, "A", 50.0)]),
        ]));
        let mut loader = Loader::new(source.clone(), RetryPolicy::default());
        loader.start();
        let first = loader.next_event().await;
        assert!(matches!(first, Event::Retrying(_)));

        // The first sequence is now sleeping 2s before its retry.
        loader.start();
        let event = loader.next_event().await;
        assert!(matches!(&event, Event::Loaded(h) if h.len() == 1));

        // Let the aborted sequence's backoff elapse; it must not fire again.
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn drops_events_from_previous_sequence() {
        let source = Arc::new(ScriptedSource::new(vec![
            Ok(vec![hero(1, "Old", 50.0)]),
            Ok(vec![hero(2, "New", 55.0), hero(3, "X", 45.0)]),
        ]));
        let mut loader = Loader::new(source.clone(), RetryPolicy::default());
        loader.start();
        // Let the first sequence finish and queue its result unread.
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(source.calls(), 1);

        loader.start();
        let event = loader.next_event().await;
        let Event::Loaded(heroes) = event else {
            panic!("expected loaded, got {event:?}");
        };
        let names: Vec<_> = heroes.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["New", "X"]);
        assert_eq!(source.calls(), 2);
    }
}
