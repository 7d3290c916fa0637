//! Timeline core: pure step sequencer and presentation view-model helpers.
mod effect;
mod msg;
mod payload;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use payload::{FetchFailure, Payload};
pub use state::{Accumulator, Phase, Sequencer, StepIndex};
pub use update::update;
pub use view_model::{
    count_property, Counters, MalformedPayload, PresentationView, SequenceViewModel, TimelineRow,
    FAVOURITED_KEY, PHOTO_KEY, USER_KEY,
};
