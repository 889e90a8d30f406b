//! Service layer for the directory client.
//!
//! This module contains the client-side logic for:
//! - List synchronization against the remote API (`FacultyStore`)
//! - Form-state reconciliation during create/edit (`EditBuffer`)

mod form;
mod store;

pub use form::{EditBuffer, FormField, PaperField};
pub use store::{FacultyStore, filter_by_specialization, specializations};
