use crate::limits::DEFAULT_LABEL_FORMAT;
use crate::service::{ServiceLimits, ServiceTable};
use crate::shipment::{Address, Party, Shipment};
use crate::{CourierError, wrap_with_limits};

/// The builder assembles a [`Shipment`] whose addresses fit the service's label.
///
/// The service is fixed up front so every address is wrapped with that
/// service's limits as soon as it is added.
///
/// ```
/// use spring_courier::{Party, ShipmentBuilder};
///
/// let shipment = ShipmentBuilder::new("PPTT")?
///     .consignor(Party::new("Jan Kowalski").city("Gdansk").zip("80208"), "Kopernika 10")?
///     .consignee(
///         Party::new("Maud Driant").city("Bucuresti, Sector 3").zip("031179").country("RO"),
///         "Strada Foisorului, Nr. 16, Bl. F11C, Sc. 1, Ap. 10",
///     )?
///     .weight(1.2)
///     .value(100.0)
///     .build()?;
///
/// assert_eq!(shipment.consignee_address.lines.line(1), Some("Strada Foisorului, Nr. 16, Bl."));
/// # Ok::<(), spring_courier::CourierError>(())
/// ```
#[derive(Debug)]
pub struct ShipmentBuilder {
    service: String,
    limits: ServiceLimits,
    label_format: String,
    shipper_reference: Option<String>,
    weight: f64,
    value: f64,
    consignor: Option<Address>,
    consignee: Option<Address>,
}

impl ShipmentBuilder {
    /// Starts a shipment for a service of the Spring GDS catalog.
    pub fn new(service: &str) -> crate::Result<Self> {
        Self::with_table(ServiceTable::spring(), service)
    }

    /// Starts a shipment for a service of a custom catalog.
    pub fn with_table(table: &ServiceTable, service: &str) -> crate::Result<Self> {
        let limits = *table.get(service)?;
        Ok(ShipmentBuilder {
            service: service.to_string(),
            limits,
            label_format: DEFAULT_LABEL_FORMAT.to_string(),
            shipper_reference: None,
            weight: 0.0,
            value: 0.0,
            consignor: None,
            consignee: None,
        })
    }

    pub fn consignor(mut self, party: Party, address: &str) -> crate::Result<Self> {
        self.consignor = Some(self.address(party, address)?);
        Ok(self)
    }

    pub fn consignee(mut self, party: Party, address: &str) -> crate::Result<Self> {
        self.consignee = Some(self.address(party, address)?);
        Ok(self)
    }

    pub fn label_format(mut self, format: impl Into<String>) -> Self {
        self.label_format = format.into();
        self
    }

    pub fn shipper_reference(mut self, reference: impl Into<String>) -> Self {
        self.shipper_reference = Some(reference.into());
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    fn address(&self, party: Party, address: &str) -> crate::Result<Address> {
        let lines = wrap_with_limits(address, &self.limits)?;
        Ok(Address { party, lines })
    }

    /// Builds the shipment. Both addresses are required.
    pub fn build(self) -> crate::Result<Shipment> {
        let consignor_address = self.consignor.ok_or(CourierError::MissingField("ConsignorAddress"))?;
        let consignee_address = self.consignee.ok_or(CourierError::MissingField("ConsigneeAddress"))?;
        Ok(Shipment {
            label_format: self.label_format,
            service: self.service,
            shipper_reference: self.shipper_reference,
            weight: self.weight,
            value: self.value,
            consignor_address,
            consignee_address,
        })
    }
}
