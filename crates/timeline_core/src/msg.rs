#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Kick off the sequence at step 0.
    Start,
    /// The fetch issued for `step` finished.
    FetchCompleted {
        step: crate::StepIndex,
        result: Result<crate::Payload, crate::FetchFailure>,
    },
}
