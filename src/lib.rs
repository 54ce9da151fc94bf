//! # afip-bill
//!
//! Prepares Argentine fiscal invoices (AFIP) for printing: classifies the
//! document type and derives the numeric barcode code with its modulo-10
//! check digit.
//!
//! Rendering and PDF generation are left to the caller; this crate hands
//! them an [`InvoiceDocument`](crate::core::InvoiceDocument) and, with the
//! `barcode` feature, the Interleaved 2 of 5 modules to draw.
//!
//! ## Quick Start
//!
//! ```rust
//! use afip_bill::*;
//!
//! let config = AfipConfigBuilder::new()
//!     .sale_point(SalePoint::new("00001").unwrap())
//!     .build();
//! let composer = CodeComposer::new(config);
//!
//! let bill = BillRecord::from_json(
//!     r#"{"doc_num":"20-12345678-9","cbte_tipo":"01",
//!         "cae":"61123456789012","fch_vto_pago":"20240115"}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(classify("01").unwrap(), BillCategory::A);
//! assert_eq!(
//!     composer.compose(&bill).unwrap().as_str(),
//!     "020123456789010000161123456789012202401153"
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Bill types, code composition, check digit, config |
//! | `barcode` | Interleaved 2 of 5 encoding and barcode cache |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "barcode")]
pub mod barcode;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
