use crate::{Effect, Msg, Sequencer};

/// Pure update function: applies a message to the sequence and returns any effects.
pub fn update(mut state: Sequencer, msg: Msg) -> (Sequencer, Vec<Effect>) {
    let effects = match msg {
        Msg::Start => state.start(),
        Msg::FetchCompleted { step, result } => state.resume(step, result),
    };

    (state, effects)
}
