//! Add-trip and add-meeting form drafts.
//!
//! Drafts mirror the raw input values. Conversion into request bodies happens
//! at submit time, where date-only inputs are expanded to fixed times of day.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::net::types::{NewMeeting, NewTrip};

/// Description sent with every trip created from the form.
pub const NEW_TRIP_DESCRIPTION: &str = "New Trip";

const START_HOUR: u32 = 9;
const END_HOUR: u32 = 18;

/// Rejected add-trip submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("destination is required")]
    MissingDestination,

    #[error("{0} is required")]
    MissingDate(DateField),

    #[error("{field} is not a valid date: {value:?}")]
    InvalidDate { field: DateField, value: String },
}

/// Which of the two trip date inputs an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("start date"),
            Self::End => f.write_str("end date"),
        }
    }
}

/// Inputs of the add-trip form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TripField {
    Destination,
    StartDate,
    EndDate,
}

/// Current contents of the add-trip form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripDraft {
    pub destination: String,
    /// `YYYY-MM-DD` as delivered by `<input type="date">`.
    pub start_date: String,
    pub end_date: String,
}

impl TripDraft {
    pub fn set(&mut self, field: TripField, value: String) {
        match field {
            TripField::Destination => self.destination = value,
            TripField::StartDate => self.start_date = value,
            TripField::EndDate => self.end_date = value,
        }
    }

    pub fn get(&self, field: TripField) -> &str {
        match field {
            TripField::Destination => &self.destination,
            TripField::StartDate => &self.start_date,
            TripField::EndDate => &self.end_date,
        }
    }

    /// Build the `POST /trips` body.
    ///
    /// The start date is pinned to 09:00 and the end date to 18:00. The end
    /// date is not compared against the start date.
    ///
    /// # Errors
    ///
    /// Returns `FormError` if the destination is blank or either date is
    /// missing or not `YYYY-MM-DD`.
    pub fn to_new_trip(&self) -> Result<NewTrip, FormError> {
        if self.destination.trim().is_empty() {
            return Err(FormError::MissingDestination);
        }
        let start_trip = expand_date(&self.start_date, DateField::Start, START_HOUR)?;
        let end_trip = expand_date(&self.end_date, DateField::End, END_HOUR)?;
        Ok(NewTrip {
            title: self.destination.clone(),
            description: NEW_TRIP_DESCRIPTION.to_owned(),
            start_trip,
            end_trip,
            meetings: Vec::new(),
        })
    }
}

fn expand_date(raw: &str, field: DateField, hour: u32) -> Result<NaiveDateTime, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormError::MissingDate(field));
    }
    let invalid = || FormError::InvalidDate { field, value: raw.to_owned() };
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())?;
    let time = NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(invalid)?;
    Ok(date.and_time(time))
}

/// Inputs of the add-meeting form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeetingField {
    Title,
    Description,
}

/// Current contents of the add-meeting form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeetingDraft {
    pub title: String,
    pub description: String,
}

impl MeetingDraft {
    pub fn set(&mut self, field: MeetingField, value: String) {
        match field {
            MeetingField::Title => self.title = value,
            MeetingField::Description => self.description = value,
        }
    }

    pub fn get(&self, field: MeetingField) -> &str {
        match field {
            MeetingField::Title => &self.title,
            MeetingField::Description => &self.description,
        }
    }

    /// Build the `POST /trips/{id}/meetings` body; values are sent verbatim.
    pub fn to_new_meeting(&self) -> NewMeeting {
        NewMeeting { title: self.title.clone(), description: self.description.clone() }
    }
}
