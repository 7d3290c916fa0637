use std::io;

use timeline_core::Sequencer;
use timeline_engine::EngineHandle;
use timeline_logging::timeline_info;

use super::config::TimelineConfig;
use super::effects::EffectRunner;
use super::logging;
use super::ui::sink::TerminalSink;

pub fn run_app() -> anyhow::Result<()> {
    let config = TimelineConfig::default();
    logging::initialize(config.log_destination);

    let runner = EffectRunner::new(EngineHandle::new(config.fetch.clone()));
    let stdout = io::stdout();
    let mut sink = TerminalSink::new(stdout.lock());

    let outcome = runner.run(Sequencer::new(config.endpoints), &mut sink);
    sink.flush()?;

    let view = outcome.sequencer.view();
    timeline_info!(
        "sequence ended {:?} with {} of {} resources fetched",
        view.phase,
        view.fetched,
        view.total_steps
    );

    // Fetch failures were already reported; only a broken render is fatal.
    if let Some(Err(err)) = outcome.render {
        return Err(err.into());
    }
    Ok(())
}
