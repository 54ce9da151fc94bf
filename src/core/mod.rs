//! Core AFIP bill types, barcode code composition, and configuration.
//!
//! This module classifies fiscal document types and derives the numeric
//! code that AFIP requires on every printed invoice, including its
//! modulo-10 check digit.

mod bill;
mod bill_type;
pub mod check_digit;
mod composer;
mod config;
mod document;
mod error;

pub use bill::*;
pub use bill_type::*;
pub use check_digit::{append_check_digit, check_digit, verify_check_digit};
pub use composer::*;
pub use config::*;
pub use document::*;
pub use error::*;
