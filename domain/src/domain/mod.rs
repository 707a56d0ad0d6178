//! # Domain Module
//!
//! Business logic of the Billed employee pages, independent of Yew and of
//! the concrete document store.
//!
//! ## Module Organization
//!
//! - **file_validation**: proof file extension gating and the error indicator
//! - **new_bill_service**: the new bill flow (upload hand-off, record
//!   assembly, submission, close)
//! - **bills_service**: bills listing read path and list interactions
//! - **session_service**: reading, writing and clearing the session user
//! - **navigation**: the navigation seam
//! - **layout**: route guarding and vertical layout icon highlighting
//!
//! ## Business Rules
//!
//! - Proofs must be .jpg, .jpeg or .png (any case)
//! - New bills are always `pending`
//! - `pct` defaults to 20 when missing, unparseable or zero
//! - Bills are listed most recent first

pub mod file_validation;
pub mod new_bill_service;
pub mod bills_service;
pub mod session_service;
pub mod navigation;
pub mod layout;

pub use file_validation::*;
pub use new_bill_service::*;
pub use bills_service::*;
pub use session_service::*;
pub use navigation::*;
pub use layout::*;
