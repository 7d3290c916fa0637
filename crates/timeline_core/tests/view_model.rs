use pretty_assertions::assert_eq;
use serde_json::json;
use timeline_core::{
    count_property, Accumulator, Counters, MalformedPayload, Payload, PresentationView,
    TimelineRow, PHOTO_KEY, USER_KEY,
};

fn accumulator(values: Vec<serde_json::Value>) -> Accumulator {
    values.into_iter().map(Payload::new).collect()
}

fn three_tweets() -> Accumulator {
    accumulator(vec![
        json!({ "user": { "name": "A", "handle": "a" }, "message": "hi" }),
        json!({ "user": { "name": "B", "handle": "b" }, "message": "yo", "photo": true }),
        json!({ "favourited": true, "user": { "name": "C", "handle": "c" }, "message": "sup" }),
    ])
}

#[test]
fn empty_accumulator_counts_zero_everywhere() {
    let counters = Counters::from_accumulator(&Accumulator::new());

    assert_eq!(
        counters,
        Counters {
            tweets: 0,
            photos: 0,
            favourited: 0,
        }
    );
}

#[test]
fn counters_match_field_presence() {
    let counters = Counters::from_accumulator(&three_tweets());

    assert_eq!(
        counters,
        Counters {
            tweets: 3,
            photos: 1,
            favourited: 1,
        }
    );
}

#[test]
fn counting_is_repeatable() {
    let acc = three_tweets();
    let before = acc.clone();

    let first = Counters::from_accumulator(&acc);
    let second = Counters::from_accumulator(&acc);

    assert_eq!(first, second);
    assert_eq!(acc, before);
}

#[test]
fn presence_counts_null_values_but_not_non_objects() {
    let acc = accumulator(vec![
        json!({ "photo": null }),
        json!(["photo"]),
        json!("photo"),
    ]);

    assert_eq!(count_property(&acc, PHOTO_KEY), 1);
    assert_eq!(count_property(&acc, USER_KEY), 0);
}

#[test]
fn rows_preserve_order_and_prefix_handle() {
    let view = PresentationView::from_accumulator(&three_tweets()).expect("well formed");

    let rows: Vec<_> = view
        .rows
        .iter()
        .map(|row| (row.name.as_str(), row.handle.as_str(), row.message.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![("A", "@a", "hi"), ("B", "@b", "yo"), ("C", "@c", "sup")]
    );
    assert_eq!(view.counters.tweets, 3);
}

#[test]
fn missing_user_is_reported_as_malformed() {
    let acc = accumulator(vec![
        json!({ "user": { "name": "A", "handle": "a" }, "message": "hi" }),
        json!({ "message": "orphan" }),
    ]);

    let err = PresentationView::from_accumulator(&acc).unwrap_err();
    assert_eq!(
        err,
        MalformedPayload {
            index: 1,
            field: "user.name",
        }
    );
}

#[test]
fn wrongly_typed_message_is_reported_as_malformed() {
    let payload = Payload::new(json!({ "user": { "name": "A", "handle": "a" }, "message": 7 }));

    let err = TimelineRow::from_payload(4, &payload).unwrap_err();
    assert_eq!(err.index, 4);
    assert_eq!(err.field, "message");
}
