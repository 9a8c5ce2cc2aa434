//! Service layer for pms-suggest
//!
//! Drives the suggestion store the way the parcel form and the local data
//! screen do: writes on submit, bulk refresh, gated keystroke suggestions,
//! export.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod query_ticket;
mod suggestion_service;

pub use error::ServiceError;
pub use query_ticket::{LatestOnly, QueryTicket};
pub use suggestion_service::{
    ExportReport, ParcelSubmission, RefreshReport, StoreStats, SuggestionField, SuggestionPolicy,
    SuggestionService,
};
