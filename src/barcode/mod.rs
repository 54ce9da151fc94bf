//! Interleaved 2 of 5 barcode encoding for AFIP payloads.
//!
//! # Example
//!
//! ```
//! use afip_bill::*;
//! use afip_bill::barcode::*;
//!
//! let composer = CodeComposer::new(
//!     AfipConfigBuilder::new().sale_point(SalePoint::padded(1, 5)).build(),
//! );
//! let bill = BillRecord::new("20-12345678-9", "01", "61123456789012", "20240115");
//! let payload = composer.compose(&bill).unwrap();
//!
//! let mut cache = BarcodeCache::default();
//! let barcode = cache.get_or_encode(&payload);
//! assert_eq!(barcode.data(), payload.as_str());
//! ```

mod cache;
mod itf;

pub use cache::{BarcodeCache, DEFAULT_CACHE_CAPACITY};
pub use itf::{DEFAULT_WIDE_RATIO, Interleaved2of5};
