//! Timeline engine: resource fetching and the background fetch worker.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{ChannelProgressSink, FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
pub use types::{
    EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, Stage, StepId, StepProgress,
};
