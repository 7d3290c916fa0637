use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use timeline_engine::{
    EngineEvent, EngineHandle, FetchError, FetchMetadata, FetchOutput, Fetcher, ProgressSink,
    StepId,
};

/// Records overlap: `max_in_flight` would exceed 1 if two fetches ran at once.
#[derive(Default)]
struct SlowFetcher {
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    order: Mutex<Vec<StepId>>,
}

#[async_trait::async_trait]
impl Fetcher for SlowFetcher {
    async fn fetch(
        &self,
        step: StepId,
        url: &str,
        _sink: &dyn ProgressSink,
    ) -> Result<FetchOutput, FetchError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.order.lock().unwrap().push(step);
        tokio::time::sleep(Duration::from_millis(10)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        Ok(FetchOutput {
            payload: json!({ "step": step }),
            metadata: FetchMetadata {
                original_url: url.to_string(),
                final_url: url.to_string(),
                redirect_count: 0,
                content_type: None,
                byte_len: 0,
            },
        })
    }
}

#[test]
fn queued_fetches_run_one_at_a_time_in_order() {
    let fetcher = Arc::new(SlowFetcher::default());
    let engine = EngineHandle::with_fetcher(fetcher.clone());

    for step in 0..3 {
        assert!(engine.fetch(step, format!("https://example.com/{step}")));
    }

    let mut completed = Vec::new();
    while completed.len() < 3 {
        match engine.recv().expect("engine alive") {
            EngineEvent::FetchCompleted { step, result } => {
                assert_eq!(result.unwrap().payload, json!({ "step": step }));
                completed.push(step);
            }
            EngineEvent::Progress(_) => {}
        }
    }

    assert_eq!(completed, vec![0, 1, 2]);
    assert_eq!(*fetcher.order.lock().unwrap(), vec![0, 1, 2]);
    assert_eq!(fetcher.max_in_flight.load(Ordering::SeqCst), 1);
    assert!(engine.try_recv().is_none());
}
