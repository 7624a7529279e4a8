//! Meeting list renderer for the selected trip.

#[cfg(test)]
#[path = "meeting_list_test.rs"]
mod meeting_list_test;

use leptos::prelude::*;

use crate::net::types::{Meeting, MeetingId};
use crate::state::controller::activate;
use crate::state::trips::{ListView, MEETINGS_EMPTY, MEETINGS_FAILED, TripsState};
use crate::util::delegation::{DELETE_BTN, action_target, decode};
use crate::util::dom;

/// One rendered `<li>` of the meeting list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MeetingRow {
    Placeholder(&'static str),
    Meeting { id: MeetingId, title: String, description: String },
}

pub fn meeting_rows(list: &ListView<Meeting>) -> Vec<MeetingRow> {
    match list {
        ListView::Pending => Vec::new(),
        ListView::Failed => vec![MeetingRow::Placeholder(MEETINGS_FAILED)],
        ListView::Ready(meetings) if meetings.is_empty() => vec![MeetingRow::Placeholder(MEETINGS_EMPTY)],
        ListView::Ready(meetings) => meetings
            .iter()
            .map(|m| MeetingRow::Meeting { id: m.id, title: m.title.clone(), description: m.description.clone() })
            .collect(),
    }
}

#[component]
pub fn MeetingList() -> impl IntoView {
    let state = expect_context::<RwSignal<TripsState>>();
    let rows = Memo::new(move |_| state.with(|s| meeting_rows(&s.meetings)));

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(action) = action_target(&ev).as_ref().and_then(decode) {
            activate(state, action);
        }
    };

    view! {
        <ul id=dom::MEETINGS_LIST on:click=on_click>
            {move || rows.get().into_iter().map(render_row).collect::<Vec<_>>()}
        </ul>
    }
}

fn render_row(row: MeetingRow) -> AnyView {
    match row {
        MeetingRow::Placeholder(text) => view! { <li>{text}</li> }.into_any(),
        MeetingRow::Meeting { id, title, description } => view! {
            <li>
                <span>
                    <strong>{title}</strong>
                    <br/>
                    <small>{description}</small>
                </span>
                <button type="button" class=DELETE_BTN data-meeting-id=id.to_string()>
                    "Löschen"
                </button>
            </li>
        }
            .into_any(),
    }
}
