use crate::{FetchFailure, StepIndex};

/// Work the sequencer asks its driver to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue exactly one GET for `locator` and report back with `Msg::FetchCompleted`.
    Fetch { step: StepIndex, locator: String },
    /// Every step succeeded; hand the accumulator to the presentation layer.
    Render,
    /// A step failed and the sequence halted.
    ReportFailure {
        step: StepIndex,
        failure: FetchFailure,
    },
}
