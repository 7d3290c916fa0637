use std::collections::VecDeque;
use std::io;

use timeline_core::{
    update, Accumulator, Effect, FetchFailure, MalformedPayload, Msg, Payload, PresentationView,
    Sequencer, StepIndex,
};
use timeline_engine::{EngineEvent, EngineHandle, FailureKind, FetchError, FetchOutput};
use timeline_logging::{
    clear_current_step, set_current_step, timeline_debug, timeline_error, timeline_info,
    timeline_warn,
};

use super::ui::render::render;
use super::ui::sink::PresentationSink;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Malformed(#[from] MalformedPayload),
    #[error("presentation sink failed: {0}")]
    Sink(#[from] io::Error),
}

/// How a run ended.
#[derive(Debug)]
pub struct RunOutcome {
    pub sequencer: Sequencer,
    /// `None` when the sequence never completed, so nothing was rendered.
    pub render: Option<Result<(), RenderError>>,
}

/// Executes the sequencer's effects: fetches go to the engine one at a time,
/// the render goes to the presentation sink.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    /// Runs `state` from its first step to a terminal phase.
    pub fn run(&self, state: Sequencer, sink: &mut dyn PresentationSink) -> RunOutcome {
        timeline_info!("sequence started with {} steps", state.steps().len());

        let (mut state, effects) = update(state, Msg::Start);
        let mut pending: VecDeque<Effect> = effects.into();
        let mut rendered = None;

        while let Some(effect) = pending.pop_front() {
            match effect {
                Effect::Fetch { step, locator } => {
                    set_current_step(step);
                    timeline_info!("fetching {}", locator);
                    let msg = self.fetch_one(step, &locator);
                    let (next, effects) = update(state, msg);
                    state = next;
                    pending.extend(effects);
                }
                Effect::Render => {
                    clear_current_step();
                    let result = render_accumulator(state.accumulator(), sink);
                    match &result {
                        Ok(()) => timeline_info!("All done"),
                        Err(err) => timeline_error!("rendering stopped: {}", err),
                    }
                    rendered = Some(result);
                }
                Effect::ReportFailure { failure, .. } => {
                    // No retry: the sequence is over and the failure is only logged.
                    timeline_error!("sequence halted: {}", failure);
                    if let Some(body) = &failure.body {
                        timeline_debug!("response body: {}", body);
                    }
                    clear_current_step();
                }
            }
        }

        RunOutcome {
            sequencer: state,
            render: rendered,
        }
    }

    /// Hands one fetch to the engine and blocks until its completion arrives.
    fn fetch_one(&self, step: StepIndex, locator: &str) -> Msg {
        if !self.engine.fetch(step, locator) {
            return completion(step, locator, Err(engine_stopped()));
        }

        loop {
            match self.engine.recv() {
                Some(EngineEvent::Progress(progress)) => {
                    timeline_debug!("{:?} bytes={:?}", progress.stage, progress.bytes);
                }
                Some(EngineEvent::FetchCompleted { step: done, result }) if done == step => {
                    return completion(step, locator, result);
                }
                Some(EngineEvent::FetchCompleted { step: other, .. }) => {
                    timeline_warn!("dropping completion for step {}", other);
                }
                None => return completion(step, locator, Err(engine_stopped())),
            }
        }
    }
}

pub fn render_accumulator(
    accumulator: &Accumulator,
    sink: &mut dyn PresentationSink,
) -> Result<(), RenderError> {
    let view = PresentationView::from_accumulator(accumulator)?;
    for command in render(&view) {
        sink.apply(command)?;
    }
    Ok(())
}

fn completion(step: StepIndex, locator: &str, result: Result<FetchOutput, FetchError>) -> Msg {
    let result = match result {
        Ok(output) => {
            timeline_debug!("received {} bytes", output.metadata.byte_len);
            Ok(Payload::new(output.payload))
        }
        Err(err) => Err(map_failure(locator, err)),
    };
    Msg::FetchCompleted { step, result }
}

fn map_failure(locator: &str, err: FetchError) -> FetchFailure {
    let failure = FetchFailure::new(locator, err.to_string());
    match err.body {
        Some(body) => failure.with_body(body),
        None => failure,
    }
}

fn engine_stopped() -> FetchError {
    FetchError::new(FailureKind::EngineStopped, "no completion from fetch worker")
}
