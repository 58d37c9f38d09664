//! Crate prelude: the types needed to wrap addresses and place an order.
//!
//! ```
//! use spring_courier::prelude::*;
//!
//! let lines = AddressWrapper::spring().wrap("Kopernika 10", "PPTT")??;
//! assert_eq!(lines.line(1), Some("Kopernika 10"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Transport details (request envelopes, raw responses) are left out; import
//! them from [`crate::client`] when needed.

pub use crate::{
    // Address wrapping
    AddressLines,
    AddressWrapper,
    WrapResult,
    service::{ServiceLimits, ServiceTable, WrapPolicy},
    // Errors
    CourierError,
    Result,
    UnknownService,
    WrapError,
    // Orders
    Party,
    Shipment,
    ShipmentBuilder,
    // Transport
    CourierConfig,
    Label,
    SpringClient,
};
