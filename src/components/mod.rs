//! UI Components
//!
//! Leptos components for the list and detail screens.

mod dashboard;
mod filter_bar;
mod checklist_card;
mod progress_bar;
mod checklist_detail;
mod group_section;
mod item_row;
mod status_badge;
mod photo_evidence;
mod evidence_overlay;

pub use dashboard::Dashboard;
pub use filter_bar::FilterBar;
pub use checklist_card::ChecklistCard;
pub use progress_bar::ProgressBar;
pub use checklist_detail::ChecklistDetail;
pub use group_section::GroupSection;
pub use item_row::ItemRow;
pub use status_badge::StatusBadge;
pub use photo_evidence::PhotoEvidence;
pub use evidence_overlay::EvidenceOverlay;
