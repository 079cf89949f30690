use std::{
    future::IntoFuture,
    process,
    sync::{Arc, OnceLock},
};

use junos_exporter::{
    config::Config, core::collector::JunosCollector, logger::LoggerManager, print_error,
    snmp::Snmp2Connector, web,
};
use tracing::{error, info};

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        Config::new().unwrap_or_else(|e| {
            print_error!("{}", e);
            process::exit(1);
        })
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config();
    let mut logger_manager = LoggerManager::new(cfg.logger.clone()).unwrap_or_else(|e| {
        print_error!("Failed to setup Log Manager: {}", e);
        process::exit(1);
    });
    logger_manager.init().unwrap_or_else(|e| {
        print_error!("Failed to init Log Manager: {}", e);
        process::exit(1);
    });

    info!(
        "Starting junos-exporter version {}...",
        env!("CARGO_PKG_VERSION")
    );
    info!("Log level: {}", cfg.logger.level);

    for target in &cfg.snmp.targets {
        info!(device = %target, port = cfg.snmp.port, "configured SNMP target");
    }

    let connector = Arc::new(Snmp2Connector::new());
    let collector = Arc::new(JunosCollector::new(
        cfg.snmp.targets.clone(),
        cfg.snmp.community.clone(),
        cfg.snmp.port,
        connector,
    ));

    let router = web::create_router(collector);
    let listener = tokio::net::TcpListener::bind(&cfg.web.listen_address)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind {}: {}", cfg.web.listen_address, e);
            process::exit(1);
        });

    info!("Serving metrics on http://{}/metrics", cfg.web.listen_address);

    tokio::select! {
        result = axum::serve(listener, router).into_future() => {
            if let Err(e) = result {
                error!("HTTP server terminated: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C — shutting down");
        }
    }

    Ok(())
}
