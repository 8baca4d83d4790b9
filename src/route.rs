//! Hash Routes
//!
//! `#/` for the checklist list, `#/checklist/{id}` for one checklist.

use percent_encoding::{percent_decode_str, utf8_percent_encode};

use crate::api::URL_COMPONENT;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Checklist(String),
}

impl Route {
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["checklist", id] => Self::Checklist(percent_decode_str(id).decode_utf8_lossy().into_owned()),
            _ => Self::Dashboard,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Self::Dashboard => "#/".to_string(),
            Self::Checklist(id) => format!("#/checklist/{}", utf8_percent_encode(id, URL_COMPONENT)),
        }
    }

    pub fn checklist_id(&self) -> Option<&str> {
        match self {
            Self::Checklist(id) => Some(id),
            Self::Dashboard => None,
        }
    }
}

/// Route for the current `location.hash`
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hash() {
        assert_eq!(Route::from_hash(""), Route::Dashboard);
        assert_eq!(Route::from_hash("#/"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/checklist/12"), Route::Checklist("12".into()));
        assert_eq!(Route::from_hash("#checklist/12/"), Route::Checklist("12".into()));
        assert_eq!(Route::from_hash("#/checklist"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/unknown/12"), Route::Dashboard);
    }

    #[test]
    fn test_href_round_trips_awkward_ids() {
        let route = Route::Checklist("a b/c".into());
        assert_eq!(route.href(), "#/checklist/a%20b%2Fc");
        assert_eq!(Route::from_hash(&route.href()), route);
    }
}
