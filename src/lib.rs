//! Shipping label creation for the Spring GDS carrier API.
//!
//! The centre of the crate is [`AddressWrapper`]: it turns a free-form
//! address into at most three label lines that respect the per-service
//! width limits of the carrier ([`service::ServiceTable`]). Around it sit
//! the order payload ([`ShipmentBuilder`]) and a small async
//! [`SpringClient`] that orders shipments and fetches their labels.
//!
//! ```
//! use spring_courier::wrap_address;
//!
//! let lines = wrap_address(
//!     "This is a very long address that needs to be split properly according to the hard limit rule",
//!     "RM24/48(S)",
//! )??;
//! assert_eq!(
//!     lines.iter().collect::<Vec<_>>(),
//!     ["This is a very long address that", "needs to be split properly", "according to the hard limit rule"]
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub type Result<T> = std::result::Result<T, CourierError>;

pub mod limits;
pub mod service;
pub(crate) mod util;

mod errors;
pub use errors::*;

pub mod address;
pub use address::{AddressLines, AddressWrapper, WrapResult, wrap_address, wrap_with_limits};

pub mod shipment;
pub use shipment::{Address, Party, Shipment};

pub mod builder;
pub use builder::*;

pub mod config;
pub use config::CourierConfig;

pub mod client;
pub use client::{Label, ShipmentInfo, SpringClient};

pub mod prelude;
