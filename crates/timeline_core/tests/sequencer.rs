use pretty_assertions::assert_eq;
use serde_json::json;
use timeline_core::{update, Effect, FetchFailure, Msg, Payload, Phase, Sequencer};

const STEPS: [&str; 3] = [
    "https://a.example.com/1",
    "https://a.example.com/2",
    "https://a.example.com/3",
];

fn init_logging() {
    timeline_logging::initialize_for_tests();
}

fn completed(step: usize, value: serde_json::Value) -> Msg {
    Msg::FetchCompleted {
        step,
        result: Ok(Payload::new(value)),
    }
}

fn failed(step: usize) -> Msg {
    Msg::FetchCompleted {
        step,
        result: Err(FetchFailure::new(STEPS[step], "http status 500").with_body("{}")),
    }
}

#[test]
fn new_sequence_is_pending_at_step_zero() {
    let state = Sequencer::new(STEPS);

    assert_eq!(state.phase(), &Phase::Pending { step: 0 });
    assert_eq!(state.cursor(), 0);
    assert!(state.accumulator().is_empty());
    assert_eq!(state.view().total_steps, 3);
}

#[test]
fn start_issues_only_the_first_fetch() {
    init_logging();
    let (state, effects) = update(Sequencer::new(STEPS), Msg::Start);

    assert_eq!(
        effects,
        vec![Effect::Fetch {
            step: 0,
            locator: STEPS[0].to_string(),
        }]
    );
    assert_eq!(state.phase(), &Phase::Suspended { step: 0 });
}

#[test]
fn successful_steps_accumulate_in_order_then_render_once() {
    init_logging();
    let (mut state, _) = update(Sequencer::new(STEPS), Msg::Start);

    for step in 0..STEPS.len() {
        let (next, effects) = update(state, completed(step, json!({ "n": step })));
        state = next;
        assert_eq!(state.accumulator().len(), step + 1);

        if step + 1 < STEPS.len() {
            assert_eq!(
                effects,
                vec![Effect::Fetch {
                    step: step + 1,
                    locator: STEPS[step + 1].to_string(),
                }]
            );
            assert_eq!(state.phase(), &Phase::Suspended { step: step + 1 });
        } else {
            assert_eq!(effects, vec![Effect::Render]);
        }
    }

    assert_eq!(state.phase(), &Phase::Completed);
    let numbers: Vec<_> = state
        .accumulator()
        .iter()
        .map(|payload| payload.as_value()["n"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, vec![0, 1, 2]);

    // Terminal: a late start or completion changes nothing.
    let (state, effects) = update(state, Msg::Start);
    assert!(effects.is_empty());
    let (state, effects) = update(state, completed(2, json!({})));
    assert!(effects.is_empty());
    assert_eq!(state.accumulator().len(), 3);
}

#[test]
fn failure_halts_and_keeps_earlier_payloads() {
    init_logging();
    let (state, _) = update(Sequencer::new(STEPS), Msg::Start);
    let (state, _) = update(state, completed(0, json!({ "first": true })));
    let (state, effects) = update(state, failed(1));

    let failure = FetchFailure::new(STEPS[1], "http status 500").with_body("{}");
    assert_eq!(
        effects,
        vec![Effect::ReportFailure {
            step: 1,
            failure: failure.clone(),
        }]
    );
    assert_eq!(state.phase(), &Phase::Failed { step: 1, failure });
    assert_eq!(state.accumulator().len(), 1);
    assert!(state.is_terminal());

    // Nothing can revive a failed sequence.
    let (state, effects) = update(state, completed(1, json!({})));
    assert!(effects.is_empty());
    let (state, effects) = update(state, completed(2, json!({})));
    assert!(effects.is_empty());
    assert_eq!(state.accumulator().len(), 1);
    assert_eq!(state.view().fetched, 1);
}

#[test]
fn completions_for_other_steps_are_ignored() {
    init_logging();
    let (state, _) = update(Sequencer::new(STEPS), Msg::Start);

    let (next, effects) = update(state.clone(), completed(1, json!({ "early": true })));
    assert!(effects.is_empty());
    assert_eq!(next, state);
    assert!(next.accumulator().is_empty());
    assert_eq!(next.phase(), &Phase::Suspended { step: 0 });
    let state = next;

    let (state, _) = update(state, completed(0, json!({})));
    let (next, effects) = update(state.clone(), completed(0, json!({ "duplicate": true })));
    assert!(effects.is_empty());
    assert_eq!(next, state);
    assert_eq!(next.accumulator().len(), 1);
}

#[test]
fn empty_sequence_completes_on_start() {
    init_logging();
    let mut state = Sequencer::new(Vec::<String>::new());

    assert_eq!(state.start(), vec![Effect::Render]);
    assert_eq!(state.phase(), &Phase::Completed);
    assert!(state.start().is_empty());
}

#[test]
fn accumulator_can_be_handed_off() {
    let mut state = Sequencer::new(["https://a.example.com"]);
    state.start();
    state.resume(0, Ok(Payload::new(json!({ "user": {} }))));

    let accumulator = state.into_accumulator();
    assert_eq!(accumulator.len(), 1);
    assert!(accumulator.get(0).unwrap().has_key("user"));
}
