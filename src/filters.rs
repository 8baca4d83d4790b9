//! Checklist List Filters
//!
//! Filter fields of the dashboard and the query string they produce.
//! All filtering happens on the server; this only decides what gets sent.

use percent_encoding::utf8_percent_encode;

use crate::api::URL_COMPONENT;

/// Filter field names as they appear in the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    StartDate,
    EndDate,
    Location,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [Self::StartDate, Self::EndDate, Self::Location];

    pub fn param(self) -> &'static str {
        match self {
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
            Self::Location => "location",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistFilters {
    pub start_date: String,
    pub end_date: String,
    pub location: String,
}

impl ChecklistFilters {
    pub fn value(&self, field: FilterField) -> &str {
        match field {
            FilterField::StartDate => &self.start_date,
            FilterField::EndDate => &self.end_date,
            FilterField::Location => &self.location,
        }
    }

    pub fn set(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::StartDate => self.start_date = value,
            FilterField::EndDate => self.end_date = value,
            FilterField::Location => self.location = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Non-empty fields as (param, trimmed value), in a fixed order
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        FilterField::ALL
            .into_iter()
            .map(|field| (field.param(), self.value(field).trim()))
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }

    /// Encoded query without the leading `?`; empty when no filter is set
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(param, value)| format!("{}={}", param, utf8_percent_encode(value, URL_COMPONENT)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
