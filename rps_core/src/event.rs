use serde::{Deserialize, Serialize};

use crate::{choice::Choice, player::PlayerId, resolver::RoundResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Seated(usize),
    ChoiceLocked(PlayerId, Option<Choice>),
    CountdownTick(u8),
    Revealed(Vec<RoundResult>),
    Winner(Vec<PlayerId>),
}

#[derive(Debug, PartialEq)]
pub enum EventVisibility {
    Public,
    Private(PlayerId),
}

#[derive(Debug)]
pub struct EventEntry {
    pub visibility: EventVisibility,
    pub event: Event,
}

impl EventEntry {
    pub fn public(event: Event) -> Self {
        EventEntry {
            visibility: EventVisibility::Public,
            event,
        }
    }

    pub fn private(player_id: PlayerId, event: Event) -> Self {
        EventEntry {
            visibility: EventVisibility::Private(player_id),
            event,
        }
    }
}

/// Log as seen by `visible_to`. `None` is the shared screen, which sees no
/// private details.
pub fn filter_events(log: &[EventEntry], visible_to: Option<PlayerId>) -> Vec<Event> {
    log.iter()
        .map(|e| match e.visibility {
            EventVisibility::Public => e.event.clone(),
            EventVisibility::Private(player) => {
                if visible_to == Some(player) {
                    e.event.clone()
                } else {
                    match e.event {
                        Event::ChoiceLocked(p, _) => Event::ChoiceLocked(p, None),
                        _ => e.event.clone(),
                    }
                }
            }
        })
        .collect()
}
