//! Carrier label limits and transport defaults.
//!
//! The label address block holds a fixed number of printable lines; each
//! service adds its own per-line width (see [`crate::service`]). The values
//! here come from the XBS API manual, section 2.1.1 "Label character limit
//! and service validations".

use std::time::Duration;

/// Number of physical address lines on a label (`AddressLine1..AddressLine3`).
pub const MAX_ADDRESS_LINES: usize = 3;

/// Label format requested when the caller does not pick one.
pub const DEFAULT_LABEL_FORMAT: &str = "PDF";

/// Service used by the order demo when none is given.
pub const DEFAULT_SERVICE: &str = "PPTT";

/// Carrier endpoint used when `SPRING_API_URL` is not set (test mode).
pub const DEFAULT_API_URL: &str = "https://mtapi.net/?testMode=1";

/// Total time allowed for one carrier request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Time allowed to establish the connection to the carrier.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
