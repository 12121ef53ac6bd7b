//! Loading/error/ready state of the viewer as an explicit state machine.
//!
//! Transitions are pure: [`Phase::apply`] consumes the current phase and an
//! event and returns the next phase. Events that make no sense in the current
//! phase leave it untouched.

use crate::retry::RetryEvent;
use crate::sort::{toggle_sort, SortDirection};
use crate::types::{FetchFailure, FetchOutcome, Hero, HeroList};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// `attempt` is 0 for the first try and the retry number afterwards.
    Fetching { attempt: u32, max_retries: u32 },
    Ready {
        heroes: HeroList,
        direction: SortDirection,
        /// Index into `heroes` of the hero whose detail is open.
        selected: Option<usize>,
    },
    Failed { message: String, attempts: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Started { max_retries: u32 },
    Retrying(RetryEvent),
    Loaded(HeroList),
    Exhausted(FetchFailure),
    ToggleSort,
    Select(usize),
    CloseDetail,
}

impl Phase {
    pub fn apply(self, event: Event) -> Phase {
        match (self, event) {
            (_, Event::Started { max_retries }) => Phase::Fetching {
                attempt: 0,
                max_retries,
            },
            (Phase::Fetching { .. }, Event::Retrying(r)) => Phase::Fetching {
                attempt: r.retry,
                max_retries: r.max_retries,
            },
            // Fetched lists arrive already ranked best first.
            (Phase::Fetching { .. }, Event::Loaded(heroes)) => Phase::Ready {
                heroes,
                direction: SortDirection::Descending,
                selected: None,
            },
            (Phase::Fetching { .. }, Event::Exhausted(f)) => Phase::Failed {
                message: f.message,
                attempts: f.attempts,
            },
            (
                Phase::Ready {
                    heroes,
                    direction,
                    selected,
                },
                Event::ToggleSort,
            ) => {
                // Keep the open detail pointing at the same hero.
                let selected_id = selected
                    .and_then(|i| heroes.get(i))
                    .map(|h| h.hero_id.clone());
                let (heroes, direction) = toggle_sort(&heroes, direction);
                let selected = selected_id
                    .and_then(|id| heroes.iter().position(|h| h.hero_id == id));
                Phase::Ready {
                    heroes,
                    direction,
                    selected,
                }
            }
            (
                Phase::Ready {
                    heroes, direction, ..
                },
                Event::Select(i),
            ) if i < heroes.len() => Phase::Ready {
                heroes,
                direction,
                selected: Some(i),
            },
            (
                Phase::Ready {
                    heroes, direction, ..
                },
                Event::CloseDetail,
            ) => Phase::Ready {
                heroes,
                direction,
                selected: None,
            },
            (phase, _) => phase,
        }
    }

    pub fn selected_hero(&self) -> Option<&Hero> {
        match self {
            Phase::Ready {
                heroes,
                selected: Some(i),
                ..
            } => heroes.get(*i),
            _ => None,
        }
    }

    pub fn outcome(&self) -> FetchOutcome {
        match self {
            Phase::Idle | Phase::Fetching { .. } => FetchOutcome::Pending,
            Phase::Ready { heroes, .. } => FetchOutcome::Success(heroes.clone()),
            Phase::Failed { message, attempts } => FetchOutcome::Failure(FetchFailure {
                message: message.clone(),
                attempts: *attempts,
            }),
        }
    }
}
