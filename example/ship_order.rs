use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use spring_courier::limits::{DEFAULT_LABEL_FORMAT, DEFAULT_SERVICE};
use spring_courier::service::ServiceTable;
use spring_courier::{CourierConfig, Party, Shipment, ShipmentBuilder, SpringClient};

/// Order a shipment from the Spring GDS API and save its label
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Carrier service identifier
    #[arg(short, long, default_value = DEFAULT_SERVICE)]
    service: String,

    /// Consignor street address
    #[arg(long, default_value = "Kopernika 10")]
    from: String,

    /// Consignee street address
    #[arg(long, default_value = "Strada Foisorului, Nr. 16, Bl. F11C, Sc. 1, Ap. 10")]
    to: String,

    /// Label format requested from the carrier
    #[arg(short, long, default_value = DEFAULT_LABEL_FORMAT)]
    format: String,

    /// Write the label here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the order payload and exit without calling the API
    #[arg(long)]
    dry_run: bool,

    /// List the known services and their limits
    #[arg(long)]
    list_services: bool,
}

fn build_shipment(args: &Args) -> spring_courier::Result<Shipment> {
    let consignor = Party::new("Jan Kowalski")
        .company("BaseLinker")
        .city("Gdansk")
        .zip("80208")
        .phone("666666666");
    let consignee = Party::new("Maud Driant")
        .company("Spring GDS")
        .city("Bucuresti, Sector 3")
        .zip("031179")
        .country("RO")
        .phone("555555555")
        .email("john@doe.com");

    ShipmentBuilder::new(&args.service)?
        .label_format(&args.format)
        .consignor(consignor, &args.from)?
        .consignee(consignee, &args.to)?
        .weight(1.2)
        .value(100.0)
        .build()
}

async fn ship(args: &Args, shipment: &Shipment) -> spring_courier::Result<()> {
    let client = SpringClient::new(CourierConfig::from_env()?)?;
    let created = client.create_shipment(shipment).await?;
    let Some(tracking) = created.tracking_number else {
        return Err(spring_courier::CourierError::MissingField("TrackingNumber"));
    };
    eprintln!("Tracking number: {tracking}");

    let label = client.shipment_label(&tracking).await?;
    match &args.output {
        Some(path) => label.write_to(&mut File::create(path)?)?,
        None => label.write_to(&mut io::stdout().lock())?,
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    env_logger::init();
    let args = Args::parse();

    if args.list_services {
        let table = ServiceTable::spring();
        for key in table.keys() {
            if let Ok(limits) = table.get(key) {
                println!("{key:12} {:?}", limits.policy());
            }
        }
        return;
    }

    let shipment = match build_shipment(&args) {
        Ok(shipment) => shipment,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    if args.dry_run {
        match serde_json::to_string_pretty(&shipment) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        }
        return;
    }

    if let Err(err) = ship(&args, &shipment).await {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
