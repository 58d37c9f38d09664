//! Wrapping free-form addresses into label address lines.
//!
//! A label prints at most [`MAX_ADDRESS_LINES`] address lines. The address is
//! first normalized (whitespace runs collapsed, ends trimmed) and then cut
//! into lines according to the service's [`WrapPolicy`]:
//!
//! - **Soft**: a line that is too long ends at the first space at or after
//!   the limit, so it may run past the limit to keep a word whole.
//! - **Hard**: a line ends at the last space within the limit and never
//!   exceeds it. Addresses longer than three full lines are rejected up front.
//!
//! Both policies cut a word at the limit when no usable space exists. Text
//! left over after the third line is dropped.
//!
//! Widths are counted in characters, not bytes.
//!
//! # Example
//!
//! ```
//! use spring_courier::{AddressWrapper, WrapError};
//!
//! let wrapper = AddressWrapper::spring();
//! let lines = wrapper
//!     .wrap("Strada Foisorului, Nr. 16, Bl. F11C, Sc. 1, Ap. 10", "PPLEU")??;
//! assert_eq!(lines.line(1), Some("Strada Foisorului, Nr. 16, Bl. F11C,"));
//! assert_eq!(lines.line(2), Some("Sc. 1, Ap. 10"));
//! assert_eq!(lines.line(3), None);
//!
//! assert_eq!(wrapper.wrap("   ", "PPLEU")?, Err(WrapError::EmptyAddress));
//! assert!(wrapper.wrap("Kopernika 10", "NOPE").is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::limits::MAX_ADDRESS_LINES;
use crate::service::{ServiceLimits, ServiceTable, WrapPolicy};
use crate::util::{char_offset, find_next_space, find_previous_space, normalize_whitespace};
use crate::{UnknownService, WrapError};

/// Outcome of wrapping one address: the lines, or a recoverable data error.
pub type WrapResult = std::result::Result<AddressLines, WrapError>;

const LINE_KEYS: [&str; MAX_ADDRESS_LINES] = ["AddressLine1", "AddressLine2", "AddressLine3"];

/// Up to three non-empty label lines, in print order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressLines {
    lines: Vec<String>,
}

impl AddressLines {
    /// Keeps the non-empty entries of `lines`, at most [`MAX_ADDRESS_LINES`].
    fn from_lines(lines: Vec<String>) -> Self {
        let lines = lines
            .into_iter()
            .filter(|line| !line.is_empty())
            .take(MAX_ADDRESS_LINES)
            .collect();
        AddressLines { lines }
    }

    /// The 1-based line `n`, as printed on the label.
    pub fn line(&self, n: usize) -> Option<&str> {
        n.checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    pub fn into_vec(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for AddressLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Serializes as `{"AddressLine1": .., "AddressLine2": .., "AddressLine3": ..}`
/// with absent lines omitted.
impl Serialize for AddressLines {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.lines.len()))?;
        for (key, line) in LINE_KEYS.iter().zip(&self.lines) {
            map.serialize_entry(key, line)?;
        }
        map.end()
    }
}

/// Splits addresses using the limits of a [`ServiceTable`].
#[derive(Clone, Copy, Debug)]
pub struct AddressWrapper<'a> {
    services: &'a ServiceTable,
}

impl AddressWrapper<'static> {
    /// A wrapper over the Spring GDS service catalog.
    pub fn spring() -> Self {
        AddressWrapper::new(ServiceTable::spring())
    }
}

impl<'a> AddressWrapper<'a> {
    pub fn new(services: &'a ServiceTable) -> Self {
        AddressWrapper { services }
    }

    pub fn services(&self) -> &'a ServiceTable {
        self.services
    }

    /// Wraps `address` into label lines for `service_key`.
    ///
    /// The outer error reports a service key missing from the catalog and is
    /// returned whatever the address holds. The inner [`WrapResult`] carries
    /// the outcomes callers branch on: the lines, [`WrapError::EmptyAddress`]
    /// or, for hard-limit services, [`WrapError::TotalLimitExceeded`].
    pub fn wrap(&self, address: &str, service_key: &str) -> Result<WrapResult, UnknownService> {
        let limits = self.services.get(service_key)?;
        Ok(wrap_with_limits(address, limits))
    }
}

/// Wraps `address` for `service_key` using the Spring GDS catalog.
pub fn wrap_address(address: &str, service_key: &str) -> Result<WrapResult, UnknownService> {
    AddressWrapper::spring().wrap(address, service_key)
}

/// Wraps `address` under the active policy of `limits`.
pub fn wrap_with_limits(address: &str, limits: &ServiceLimits) -> WrapResult {
    wrap_with_policy(address, limits.policy())
}

/// Normalizes `address` and splits it under `policy`. The limit is positive;
/// [`ServiceLimits`] guarantees it.
pub(crate) fn wrap_with_policy(address: &str, policy: WrapPolicy) -> WrapResult {
    let address = normalize_whitespace(address);
    if address.is_empty() {
        return Err(WrapError::EmptyAddress);
    }

    let lines = match policy {
        WrapPolicy::Hard(limit) => {
            let total_limit = limit.saturating_mul(MAX_ADDRESS_LINES);
            let length = address.chars().count();
            if length > total_limit {
                return Err(WrapError::TotalLimitExceeded {
                    length,
                    total_limit,
                });
            }
            split_lines(&address, limit, find_previous_space)
        }
        WrapPolicy::Soft(limit) => split_lines(&address, limit, find_next_space),
    };
    Ok(AddressLines::from_lines(lines))
}

/// Cuts up to three lines off `address`. `find_split` picks the byte position
/// of the space a too-long line ends at; without one the line is cut at
/// `limit` characters.
fn split_lines(address: &str, limit: usize, find_split: fn(&str, usize) -> Option<usize>) -> Vec<String> {
    let mut lines = Vec::with_capacity(MAX_ADDRESS_LINES);
    let mut remaining = address;

    while lines.len() < MAX_ADDRESS_LINES {
        if remaining.chars().count() <= limit {
            lines.push(remaining.to_string());
            break;
        }
        let split = find_split(remaining, limit).unwrap_or_else(|| char_offset(remaining, limit));
        lines.push(remaining[..split].to_string());
        remaining = remaining[split..].trim();
    }
    lines
}
