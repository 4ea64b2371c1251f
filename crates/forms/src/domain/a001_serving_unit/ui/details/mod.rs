//! Serving unit details form module
//!
//! Simplified MVVM pattern implementation:
//! - form.rs: form state, validation and save command
//!
//! The rendering layer (widgets, input capture, feedback) belongs to the
//! embedding application.

mod form;

pub use form::{LocalizedNameSlot, SaveError, ServingUnitForm};
