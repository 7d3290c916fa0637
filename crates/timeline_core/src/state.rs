use timeline_logging::timeline_warn;

use crate::view_model::SequenceViewModel;
use crate::{Effect, FetchFailure, Payload};

pub type StepIndex = usize;

/// Where the sequence is in its lifecycle.
///
/// `Completed` and `Failed` are terminal. A sequence reaches exactly one of
/// them, exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Pending { step: StepIndex },
    Suspended { step: StepIndex },
    Completed,
    Failed { step: StepIndex, failure: FetchFailure },
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Pending { step: 0 }
    }
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Completed | Phase::Failed { .. })
    }
}

/// Append-only list of payloads, in step order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Accumulator {
    items: Vec<Payload>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Payload> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Payload> {
        self.items.iter()
    }

    pub(crate) fn push(&mut self, payload: Payload) {
        self.items.push(payload);
    }
}

impl FromIterator<Payload> for Accumulator {
    fn from_iter<I: IntoIterator<Item = Payload>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Accumulator {
    type Item = &'a Payload;
    type IntoIter = std::slice::Iter<'a, Payload>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Resumable fetch sequence: owns the step list, the cursor and the
/// accumulator. It never performs IO; it hands out [`Effect`]s and is resumed
/// with the outcome of each fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequencer {
    steps: Vec<String>,
    cursor: StepIndex,
    accumulator: Accumulator,
    phase: Phase,
}

impl Sequencer {
    pub fn new<I, S>(locators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            steps: locators.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn cursor(&self) -> StepIndex {
        self.cursor
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    pub fn into_accumulator(self) -> Accumulator {
        self.accumulator
    }

    pub fn view(&self) -> SequenceViewModel {
        SequenceViewModel {
            phase: self.phase.clone(),
            total_steps: self.steps.len(),
            fetched: self.accumulator.len(),
        }
    }

    /// Leaves `Pending` and issues the first fetch, or completes right away
    /// when there are no steps. A second call yields nothing.
    pub fn start(&mut self) -> Vec<Effect> {
        if !matches!(self.phase, Phase::Pending { .. }) {
            timeline_warn!("start ignored, sequence is {:?}", self.phase);
            return Vec::new();
        }
        self.advance()
    }

    /// Feeds the outcome of the outstanding fetch back into the sequence.
    ///
    /// Completions for any step other than the one being awaited are dropped.
    pub fn resume(
        &mut self,
        step: StepIndex,
        result: Result<Payload, FetchFailure>,
    ) -> Vec<Effect> {
        match self.phase {
            Phase::Suspended { step: awaiting } if awaiting == step => {}
            ref phase => {
                timeline_warn!("completion for step {} ignored, sequence is {:?}", step, phase);
                return Vec::new();
            }
        }

        match result {
            Ok(payload) => {
                self.accumulator.push(payload);
                self.cursor = step + 1;
                self.advance()
            }
            Err(failure) => {
                self.phase = Phase::Failed {
                    step,
                    failure: failure.clone(),
                };
                vec![Effect::ReportFailure { step, failure }]
            }
        }
    }

    fn advance(&mut self) -> Vec<Effect> {
        match self.steps.get(self.cursor) {
            Some(locator) => {
                let step = self.cursor;
                self.phase = Phase::Suspended { step };
                vec![Effect::Fetch {
                    step,
                    locator: locator.clone(),
                }]
            }
            None => {
                self.phase = Phase::Completed;
                vec![Effect::Render]
            }
        }
    }
}
