use timeline_core::{Counters, PresentationView, TimelineRow};

use super::constants::CounterSlot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCommand {
    SetCounter { slot: CounterSlot, value: usize },
    AppendEntry(TimelineRow),
}

/// Counters first, then one entry per row in accumulation order.
pub fn render(view: &PresentationView) -> Vec<SinkCommand> {
    let mut cmds = Vec::with_capacity(CounterSlot::ALL.len() + view.rows.len());

    for slot in CounterSlot::ALL {
        cmds.push(SinkCommand::SetCounter {
            slot,
            value: counter_value(&view.counters, slot),
        });
    }

    cmds.extend(view.rows.iter().cloned().map(SinkCommand::AppendEntry));
    cmds
}

fn counter_value(counters: &Counters, slot: CounterSlot) -> usize {
    match slot {
        CounterSlot::TotalTweets => counters.tweets,
        CounterSlot::TotalPhotos => counters.photos,
        CounterSlot::TotalFavourites => counters.favourited,
    }
}
