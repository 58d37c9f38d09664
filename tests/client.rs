use std::io::Cursor;

use serde_json::json;
use spring_courier::{
    CourierConfig, CourierError, Label, Party, ShipmentBuilder, SpringClient,
    client::{CarrierRequest, CarrierResponse},
};

#[test]
fn order_shipment_envelope() {
    let shipment = ShipmentBuilder::new("PPTT")
        .unwrap()
        .consignor(Party::new("Jan Kowalski"), "Kopernika 10")
        .unwrap()
        .consignee(Party::new("Maud Driant"), "Strada Foisorului 16")
        .unwrap()
        .build()
        .unwrap();
    let request = CarrierRequest::order_shipment("f16753b55cac6c6e", &shipment);
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["Apikey"], "f16753b55cac6c6e");
    assert_eq!(value["Command"], "OrderShipment");
    assert_eq!(value["Shipment"]["Service"], "PPTT");
    assert_eq!(
        value["Shipment"]["ConsignorAddress"]["AddressLine1"],
        "Kopernika 10"
    );
}

#[test]
fn shipment_label_envelope() {
    let request = CarrierRequest::shipment_label("key", "3A0B1C2D3E4F");
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "Apikey": "key",
            "Command": "GetShipmentLabel",
            "Shipment": { "TrackingNumber": "3A0B1C2D3E4F" }
        })
    );
}

#[test]
fn successful_order_response() {
    let body = r#"{
        "ErrorLevel": 0,
        "Error": "",
        "Shipment": {
            "TrackingNumber": "3A0B1C2D3E4F",
            "ShipperReference": "",
            "DisplayId": "1234567",
            "Service": "PPTT",
            "Carrier": "PostNL",
            "LabelFormat": "PDF",
            "LabelType": "",
            "LabelImage": ""
        }
    }"#;
    let info = CarrierResponse::from_json(body)
        .unwrap()
        .into_shipment()
        .unwrap();
    assert_eq!(info.tracking_number.as_deref(), Some("3A0B1C2D3E4F"));
    assert_eq!(info.carrier.as_deref(), Some("PostNL"));
    assert_eq!(info.carrier_tracking_url, None);
}

#[test]
fn carrier_error_response() {
    let body = r#"{"ErrorLevel": 10, "Error": "Invalid Apikey"}"#;
    let err = CarrierResponse::from_json(body)
        .unwrap()
        .into_shipment()
        .unwrap_err();
    match err {
        CourierError::Carrier { level, message } => {
            assert_eq!(level, 10);
            assert_eq!(message, "Invalid Apikey");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn carrier_error_without_message() {
    let err = CarrierResponse::from_json(r#"{"ErrorLevel": 1}"#)
        .unwrap()
        .into_shipment()
        .unwrap_err();
    assert_eq!(err.to_string(), "Carrier error (level 1): Unknown error");
}

#[test]
fn invalid_json_keeps_body() {
    let err = CarrierResponse::from_json("<html>Bad Gateway</html>").unwrap_err();
    match err {
        CourierError::Parse { body, .. } => {
            assert_eq!(body.as_deref(), Some("<html>Bad Gateway</html>"))
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn success_without_shipment_is_a_parse_error() {
    let err = CarrierResponse::from_json(r#"{"ErrorLevel": 0}"#)
        .unwrap()
        .into_shipment()
        .unwrap_err();
    assert!(matches!(err, CourierError::Parse { .. }));
}

#[test]
fn decodes_label_image() {
    // "%PDF-1.4\n" base64 encoded
    let body = r#"{
        "ErrorLevel": 0,
        "Shipment": {
            "TrackingNumber": "3A0B1C2D3E4F",
            "LabelFormat": "PDF",
            "LabelImage": "JVBERi0xLjQK"
        }
    }"#;
    let info = CarrierResponse::from_json(body)
        .unwrap()
        .into_shipment()
        .unwrap();
    let label = Label::from_shipment(&info).unwrap();
    assert_eq!(label.format, "PDF");
    assert_eq!(label.bytes, b"%PDF-1.4\n");

    let mut out = Cursor::new(Vec::new());
    label.write_to(&mut out).unwrap();
    assert_eq!(out.into_inner(), b"%PDF-1.4\n");
}

#[test]
fn missing_label_image() {
    let info = CarrierResponse::from_json(r#"{"ErrorLevel": 0, "Shipment": {"LabelImage": ""}}"#)
        .unwrap()
        .into_shipment()
        .unwrap();
    assert!(matches!(
        Label::from_shipment(&info),
        Err(CourierError::MissingLabel)
    ));
}

#[test]
fn corrupt_label_image() {
    let info = CarrierResponse::from_json(r#"{"ErrorLevel": 0, "Shipment": {"LabelImage": "not base64!"}}"#)
        .unwrap()
        .into_shipment()
        .unwrap();
    assert!(matches!(
        Label::from_shipment(&info),
        Err(CourierError::LabelDecode(_))
    ));
}

#[test]
fn client_keeps_config() {
    let config = CourierConfig::new("https://mtapi.net/?testMode=1", "key");
    let client = SpringClient::new(config.clone()).unwrap();
    assert_eq!(client.config(), &config);
}

/// Places a real test-mode order. Needs `SPRING_API_KEY` (a `.env` file
/// works); run with `cargo test -- --ignored`.
#[tokio::test]
#[ignore]
async fn test_mode_order_and_label() {
    let _ = dotenvy::dotenv();
    let Ok(config) = CourierConfig::from_env() else {
        eprintln!("SPRING_API_KEY not set, skipping");
        return;
    };
    let client = SpringClient::new(config).unwrap();
    let shipment = ShipmentBuilder::new("PPTT")
        .unwrap()
        .consignor(
            Party::new("Jan Kowalski").city("Gdansk").zip("80208").phone("666666666"),
            "Kopernika 10",
        )
        .unwrap()
        .consignee(
            Party::new("Maud Driant")
                .city("Bucuresti, Sector 3")
                .zip("031179")
                .country("RO")
                .phone("555555555"),
            "Strada Foisorului, Nr. 16, Bl. F11C, Sc. 1, Ap. 10",
        )
        .unwrap()
        .weight(1.2)
        .value(100.0)
        .build()
        .unwrap();

    let info = client.create_shipment(&shipment).await.unwrap();
    let tracking = info.tracking_number.expect("tracking number");
    let label = client.shipment_label(&tracking).await.unwrap();
    assert!(label.bytes.starts_with(b"%PDF"));
}
