//! Ruko channel tail — diagnostic consumer for the real-time push layer.
//!
//! Opens a ride or driver push channel against the configured backend and
//! logs every event until interrupted. Useful for watching ride-lifecycle
//! traffic without either mobile app running.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use ruko_core::config::AppConfig;
use ruko_realtime::{ChannelEvent, PushMessage, RealtimeClient};

#[derive(Debug, Parser)]
#[command(name = "ruko-tail", about = "Tail real-time ride events from the Ruko backend")]
struct Args {
    /// Ride ID to follow.
    #[arg(long, conflicts_with = "driver")]
    ride: Option<i64>,

    /// Driver ID to follow.
    #[arg(long)]
    driver: Option<i64>,

    /// Session token used to authenticate the channel.
    #[arg(long)]
    token: String,

    /// Configuration environment overlay to load.
    #[arg(long, default_value = "development")]
    env: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match AppConfig::load(&args.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    let endpoint = match (args.ride, args.driver) {
        (Some(ride_id), None) => config.api.ride_channel(ride_id, &args.token),
        (None, Some(driver_id)) => config.api.driver_channel(driver_id, &args.token),
        _ => {
            eprintln!("Specify exactly one of --ride or --driver");
            std::process::exit(2);
        }
    };

    tracing::info!(endpoint = %endpoint, "Starting ruko-tail v{}", env!("CARGO_PKG_VERSION"));

    let (client, mut events) = RealtimeClient::new(endpoint, config.realtime.clone());
    client.connect();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, closing channel");
                client.close();
            }
            event = events.recv() => match event {
                None => break,
                Some(ChannelEvent::Opened) => tracing::info!("Channel open"),
                Some(ChannelEvent::Message(message)) => log_message(message),
                Some(ChannelEvent::Error(error)) => tracing::warn!(error = %error, "Channel error"),
                Some(ChannelEvent::Closed) => tracing::info!("Channel closed"),
            },
        }
    }

    tracing::info!("ruko-tail shut down");
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

fn log_message(message: PushMessage) {
    match message {
        PushMessage::RideUpdate { ride } => {
            tracing::info!(
                ride_id = ride.id,
                status = ?ride.status,
                pickup = %ride.pickup_location,
                dropoff = %ride.dropoff_location,
                "Ride update"
            );
        }
        PushMessage::CurrentRide { ride } => {
            tracing::info!(ride_id = ride.id, status = ?ride.status, "Current ride");
        }
        PushMessage::NewRideRequest { ride } => {
            tracing::info!(
                ride_id = ride.id,
                pickup = %ride.pickup_location,
                dropoff = %ride.dropoff_location,
                "New ride request"
            );
        }
        PushMessage::Unknown(raw) => {
            tracing::info!(payload = %raw, "Unrecognized event");
        }
    }
}
