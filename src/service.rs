//! Per-service address line limits.
//!
//! Every carrier service prints the address block with its own width
//! constraint. A service either has a *soft* limit (a line may run past it
//! up to the next word boundary) or a *hard* limit (a line never exceeds
//! it). When both are configured the hard limit governs.
//!
//! # Example
//!
//! ```
//! use spring_courier::service::{ServiceTable, WrapPolicy};
//!
//! let table = ServiceTable::spring();
//! let limits = table.get("RM24/48(S)")?;
//! assert_eq!(limits.policy(), WrapPolicy::Hard(35));
//! assert_eq!(table.get("PPLEU")?.policy(), WrapPolicy::Soft(35));
//! assert!(table.get("pplEU").is_err()); // keys are case sensitive
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::{CourierError, UnknownService};

/// Width constraints of one service. At least one limit is always set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceLimits {
    soft: Option<usize>,
    hard: Option<usize>,
}

/// The wrapping rule selected for a service, carrying its line width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapPolicy {
    /// Lines may overflow up to the next space.
    Soft(usize),
    /// Lines never exceed the width.
    Hard(usize),
}

impl WrapPolicy {
    pub fn limit(self) -> usize {
        match self {
            WrapPolicy::Soft(limit) | WrapPolicy::Hard(limit) => limit,
        }
    }
}

impl ServiceLimits {
    /// A service with only a soft limit.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero; use [`ServiceLimits::new`] for untrusted input.
    pub const fn soft(limit: usize) -> Self {
        assert!(limit > 0, "soft limit must be positive");
        ServiceLimits {
            soft: Some(limit),
            hard: None,
        }
    }

    /// A service with only a hard limit.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero; use [`ServiceLimits::new`] for untrusted input.
    pub const fn hard(limit: usize) -> Self {
        assert!(limit > 0, "hard limit must be positive");
        ServiceLimits {
            soft: None,
            hard: Some(limit),
        }
    }

    /// A service with both limits; the hard limit governs wrapping.
    ///
    /// # Panics
    ///
    /// Panics if either limit is zero; use [`ServiceLimits::new`] for untrusted input.
    pub const fn both(soft: usize, hard: usize) -> Self {
        assert!(soft > 0, "soft limit must be positive");
        assert!(hard > 0, "hard limit must be positive");
        ServiceLimits {
            soft: Some(soft),
            hard: Some(hard),
        }
    }

    /// Builds limits from catalog values. Zero counts as "not set", the same
    /// way the carrier catalog leaves a column empty.
    pub fn new(service: &str, soft: Option<usize>, hard: Option<usize>) -> crate::Result<Self> {
        let soft = soft.filter(|&l| l > 0);
        let hard = hard.filter(|&l| l > 0);
        if soft.is_none() && hard.is_none() {
            return Err(CourierError::InvalidServiceLimits(service.to_string()));
        }
        Ok(ServiceLimits { soft, hard })
    }

    pub fn soft_limit(&self) -> Option<usize> {
        self.soft
    }

    pub fn hard_limit(&self) -> Option<usize> {
        self.hard
    }

    /// The active policy: hard if a hard limit is present, soft otherwise.
    pub fn policy(&self) -> WrapPolicy {
        match (self.hard, self.soft) {
            (Some(hard), _) => WrapPolicy::Hard(hard),
            (None, Some(soft)) => WrapPolicy::Soft(soft),
            // unreachable through the constructors
            (None, None) => unreachable!("service limits without soft or hard limit"),
        }
    }
}

/// Catalog of services keyed by their exact, case-sensitive identifier.
///
/// The table is read-only once built. [`ServiceTable::spring`] hands out the
/// process-wide carrier catalog; other tables can be built with
/// [`ServiceTable::builder`] and injected into an
/// [`AddressWrapper`](crate::AddressWrapper).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceTable {
    services: BTreeMap<String, ServiceLimits>,
}

static SPRING_SERVICES: LazyLock<ServiceTable> = LazyLock::new(|| {
    ServiceTable::builder()
        .service("PPLEU", ServiceLimits::soft(35))
        .service("PPLGE/GU", ServiceLimits::soft(50))
        .service("RM24/48(S)", ServiceLimits::both(30, 35))
        .service("PPTT", ServiceLimits::soft(30))
        .service("PPTR/NT", ServiceLimits::soft(30))
        .service("SEND(2)", ServiceLimits::soft(35))
        .service("ITCR", ServiceLimits::soft(60))
        .service("SC", ServiceLimits::soft(35))
        .service("PPND", ServiceLimits::soft(35))
        .build()
});

impl ServiceTable {
    /// The Spring GDS service catalog.
    // TODO: HEHDS is listed with a "Validation" hard limit in the manual;
    // add it once the carrier documents what that validation checks.
    pub fn spring() -> &'static ServiceTable {
        &SPRING_SERVICES
    }

    pub fn builder() -> ServiceTableBuilder {
        ServiceTableBuilder::default()
    }

    pub fn get(&self, key: &str) -> Result<&ServiceLimits, UnknownService> {
        self.services.get(key).ok_or_else(|| UnknownService::new(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.services.contains_key(key)
    }

    /// Service identifiers in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[derive(Default)]
pub struct ServiceTableBuilder {
    services: BTreeMap<String, ServiceLimits>,
}

impl ServiceTableBuilder {
    /// Adds a service, replacing any earlier entry with the same key.
    pub fn service(mut self, key: impl Into<String>, limits: ServiceLimits) -> Self {
        self.services.insert(key.into(), limits);
        self
    }

    pub fn build(self) -> ServiceTable {
        ServiceTable {
            services: self.services,
        }
    }
}
