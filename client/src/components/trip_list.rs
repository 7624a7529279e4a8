//! Trip list renderer.
//!
//! DESIGN
//! ======
//! Rows are computed by the pure [`trip_rows`] and memoized, so typing in the
//! forms does not rebuild the list. Row buttons carry their trip id (and the
//! title for the meetings header) as data attributes; a single delegated
//! click listener on the `<ul>` decodes them.

#[cfg(test)]
#[path = "trip_list_test.rs"]
mod trip_list_test;

use leptos::prelude::*;

use crate::net::types::{Trip, TripId};
use crate::state::controller::activate;
use crate::state::trips::{ListView, TRIPS_EMPTY, TRIPS_FAILED, TripsState};
use crate::util::date::format_trip_date;
use crate::util::delegation::{DELETE_BTN, DETAILS_BTN, action_target, decode};
use crate::util::dom;

/// One rendered `<li>` of the trip list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TripRow {
    Placeholder(&'static str),
    Trip { id: TripId, title: String, start: String, description: String },
}

/// Rows for the current list state. Nothing is shown until the first fetch
/// completes.
pub fn trip_rows(list: &ListView<Trip>) -> Vec<TripRow> {
    match list {
        ListView::Pending => Vec::new(),
        ListView::Failed => vec![TripRow::Placeholder(TRIPS_FAILED)],
        ListView::Ready(trips) if trips.is_empty() => vec![TripRow::Placeholder(TRIPS_EMPTY)],
        ListView::Ready(trips) => trips
            .iter()
            .map(|t| TripRow::Trip {
                id: t.id,
                title: t.title.clone(),
                start: format_trip_date(t.start_trip.as_ref()),
                description: t.description.clone(),
            })
            .collect(),
    }
}

#[component]
pub fn TripList() -> impl IntoView {
    let state = expect_context::<RwSignal<TripsState>>();
    let rows = Memo::new(move |_| state.with(|s| trip_rows(&s.trips)));

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(action) = action_target(&ev).as_ref().and_then(decode) {
            activate(state, action);
        }
    };

    view! {
        <ul id=dom::TRIPS_LIST on:click=on_click>
            {move || rows.get().into_iter().map(render_row).collect::<Vec<_>>()}
        </ul>
    }
}

fn render_row(row: TripRow) -> AnyView {
    match row {
        TripRow::Placeholder(text) => view! { <li>{text}</li> }.into_any(),
        TripRow::Trip { id, title, start, description } => {
            let id = id.to_string();
            view! {
                <li>
                    <span>
                        <strong>{title.clone()}</strong>
                        {format!(" ({start})")}
                        <br/>
                        <small>{description}</small>
                    </span>
                    <div class="button-group">
                        <button type="button" class=DETAILS_BTN data-trip-id=id.clone() data-trip-title=title>
                            "Meetings anzeigen"
                        </button>
                        <button type="button" class=DELETE_BTN data-trip-id=id>
                            "Löschen"
                        </button>
                    </div>
                </li>
            }
                .into_any()
        }
    }
}
