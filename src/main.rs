// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use operator_check::checks::ReadinessCheck;
use operator_check::config::Config;
use operator_check::kubernetes::create_client;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::parse();
    info!(
        "Checking OpenTelemetry operator readiness: timeout={}s, interval={}ms",
        config.timeout, config.poll_interval_ms
    );

    let client = match create_client(&config.client_settings()).await {
        Ok(client) => client,
        Err(e) => {
            error!("Unable to create the Kubernetes client: {}", e);
            return Err(e.into());
        }
    };

    let check = ReadinessCheck::new(client, config.targets(), config.check_options());
    let report = check.run().await?;
    if report.is_success() {
        info!("OpenTelemetry operator is ready");
    }

    // Any failed phase, not only the last one, exits with a failure status
    report.into_result()?;
    Ok(())
}
