use std::sync::{mpsc, Arc};
use std::thread;

use timeline_logging::{timeline_debug, timeline_error};

use crate::fetch::{ChannelProgressSink, FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, StepId};

enum EngineCommand {
    Fetch { step: StepId, url: String },
}

/// Background fetch worker. Commands run one after another on a single
/// thread, so two fetches never overlap even if several are queued.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    timeline_error!("could not start fetch runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                runtime.block_on(handle_command(fetcher.as_ref(), command, &event_tx));
            }
            timeline_debug!("fetch worker shutting down");
        });

        Self { cmd_tx, event_rx }
    }

    /// Queues a fetch. Returns false when the worker is gone.
    pub fn fetch(&self, step: StepId, url: impl Into<String>) -> bool {
        self.cmd_tx
            .send(EngineCommand::Fetch {
                step,
                url: url.into(),
            })
            .is_ok()
    }

    /// Blocks until the worker reports something. `None` once it has stopped.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: &mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { step, url } => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = fetcher.fetch(step, &url, &sink).await;
            let _ = event_tx.send(EngineEvent::FetchCompleted { step, result });
        }
    }
}
