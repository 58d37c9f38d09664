//! Spring GDS (XBS) API client.
//!
//! Every call is a JSON `POST` to a single endpoint. The envelope names the
//! command and carries a command-specific `Shipment` object:
//!
//! ```text
//! { "Apikey": "...", "Command": "OrderShipment", "Shipment": { ... } }
//! ```
//!
//! Responses carry an `ErrorLevel` (0 on success), an `Error` message and a
//! `Shipment` object. Labels come back base64 encoded in
//! `Shipment.LabelImage`.
//!
//! # Example
//!
//! ```no_run
//! use spring_courier::{CourierConfig, Party, ShipmentBuilder, SpringClient};
//!
//! # async fn run() -> spring_courier::Result<()> {
//! let client = SpringClient::new(CourierConfig::from_env()?)?;
//! let shipment = ShipmentBuilder::new("PPTT")?
//!     .consignor(Party::new("Jan Kowalski"), "Kopernika 10")?
//!     .consignee(Party::new("Maud Driant").country("RO"), "Strada Foisorului 16")?
//!     .build()?;
//!
//! let created = client.create_shipment(&shipment).await?;
//! let tracking = created.tracking_number.unwrap_or_default();
//! let label = client.shipment_label(&tracking).await?;
//! label.write_to(&mut std::fs::File::create("label.pdf")?)?;
//! # Ok(())
//! # }
//! ```

use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::limits::{CONNECT_TIMEOUT, DEFAULT_LABEL_FORMAT, REQUEST_TIMEOUT};
use crate::{CourierConfig, CourierError, Shipment};

/// API command, serialized as its name in the `Command` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Command {
    /// Creates a shipment and returns its tracking number.
    OrderShipment,
    /// Returns the label of an existing shipment.
    GetShipmentLabel,
}

/// Request envelope shared by all commands.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CarrierRequest<'a, T: Serialize> {
    /// Account key, sent as `Apikey`.
    pub apikey: &'a str,
    pub command: Command,
    /// Command payload, sent as `Shipment`.
    pub shipment: T,
}

/// `Shipment` payload of `GetShipmentLabel`: `{ "TrackingNumber": ... }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackingReference<'a> {
    pub tracking_number: &'a str,
}

impl<'a> CarrierRequest<'a, &'a Shipment> {
    /// An `OrderShipment` request carrying the full order.
    pub fn order_shipment(api_key: &'a str, shipment: &'a Shipment) -> Self {
        CarrierRequest {
            apikey: api_key,
            command: Command::OrderShipment,
            shipment,
        }
    }
}

impl<'a> CarrierRequest<'a, TrackingReference<'a>> {
    /// A `GetShipmentLabel` request for one tracking number.
    pub fn shipment_label(api_key: &'a str, tracking_number: &'a str) -> Self {
        CarrierRequest {
            apikey: api_key,
            command: Command::GetShipmentLabel,
            shipment: TrackingReference { tracking_number },
        }
    }
}

/// Response envelope shared by all commands. Missing fields take their
/// defaults, so an absent `ErrorLevel` reads as success.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CarrierResponse {
    pub error_level: i64,
    pub error: Option<String>,
    pub shipment: Option<ShipmentInfo>,
}

/// Shipment details returned by the carrier. Which fields are filled
/// depends on the command.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShipmentInfo {
    pub tracking_number: Option<String>,
    pub shipper_reference: Option<String>,
    pub display_id: Option<String>,
    pub service: Option<String>,
    pub carrier: Option<String>,
    pub carrier_tracking_number: Option<String>,
    pub carrier_tracking_url: Option<String>,
    pub label_format: Option<String>,
    pub label_type: Option<String>,
    pub label_image: Option<String>,
}

impl CarrierResponse {
    /// Parses a raw response body.
    pub fn from_json(body: &str) -> crate::Result<Self> {
        serde_json::from_str(body).map_err(|err| CourierError::parse(err.to_string(), body))
    }

    /// The shipment details, or the carrier's error when `ErrorLevel` is not 0.
    pub fn into_shipment(self) -> crate::Result<ShipmentInfo> {
        if self.error_level != 0 {
            let message = self.error.unwrap_or_else(|| "Unknown error".to_string());
            log::warn!("carrier reported error level {}: {message}", self.error_level);
            return Err(CourierError::Carrier {
                level: self.error_level,
                message,
            });
        }
        self.shipment.ok_or(CourierError::Parse {
            message: "response has no Shipment object".to_string(),
            body: None,
        })
    }
}

/// A decoded shipping label document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    /// Document format reported by the carrier, e.g. `PDF`.
    pub format: String,
    pub bytes: Vec<u8>,
}

impl Label {
    pub fn from_shipment(info: &ShipmentInfo) -> crate::Result<Self> {
        let image = info
            .label_image
            .as_deref()
            .filter(|image| !image.is_empty())
            .ok_or(CourierError::MissingLabel)?;
        let bytes = STANDARD.decode(image.trim())?;
        Ok(Label {
            format: info.label_format.clone().unwrap_or_else(|| DEFAULT_LABEL_FORMAT.to_string()),
            bytes,
        })
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> crate::Result<()> {
        writer.write_all(&self.bytes)?;
        writer.flush()?;
        Ok(())
    }
}

/// Client for the carrier API. Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct SpringClient {
    config: CourierConfig,
    http: Client,
}

impl SpringClient {
    pub fn new(config: CourierConfig) -> crate::Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(SpringClient { config, http })
    }

    /// Uses a preconfigured reqwest client (proxies, custom TLS, ...).
    pub fn with_http_client(config: CourierConfig, http: Client) -> Self {
        SpringClient { config, http }
    }

    pub fn config(&self) -> &CourierConfig {
        &self.config
    }

    /// Orders a shipment (`OrderShipment`) and returns the carrier's
    /// shipment details, including the tracking number.
    pub async fn create_shipment(&self, shipment: &Shipment) -> crate::Result<ShipmentInfo> {
        let request = CarrierRequest::order_shipment(&self.config.api_key, shipment);
        self.send(&request).await?.into_shipment()
    }

    /// Fetches and decodes the label of a shipment (`GetShipmentLabel`).
    pub async fn shipment_label(&self, tracking_number: &str) -> crate::Result<Label> {
        let request = CarrierRequest::shipment_label(&self.config.api_key, tracking_number);
        let info = self.send(&request).await?.into_shipment()?;
        Label::from_shipment(&info)
    }

    async fn send<T: Serialize>(&self, request: &CarrierRequest<'_, T>) -> crate::Result<CarrierResponse> {
        log::debug!("POST {} command={:?}", self.config.api_url, request.command);
        let response = self.http.post(&self.config.api_url).json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!("{:?} -> HTTP {} ({} bytes)", request.command, status.as_u16(), body.len());

        if status != StatusCode::OK {
            return Err(CourierError::Http {
                status: status.as_u16(),
                body,
            });
        }
        CarrierResponse::from_json(&body)
    }
}
