// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Collector admission probe and cleanup

use super::classify_error;
use crate::poll::Probe;
use crate::types::OpenTelemetryCollector;
use kube::{
    api::{DeleteParams, PostParams},
    Api, ResourceExt,
};
use tracing::{debug, info, instrument, warn};

/// Try to create the collector. The operator's admission webhook has to answer
/// for this to succeed, so it catches a deployment that exists but is not serving yet.
#[instrument(skip(api, collector), fields(collector = %collector.name_any()))]
pub async fn probe_collector_create(
    api: &Api<OpenTelemetryCollector>,
    collector: &OpenTelemetryCollector,
) -> Probe<kube::Error> {
    match api.create(&PostParams::default(), collector).await {
        Ok(created) => {
            debug!("Collector {} created", created.name_any());
            Probe::Success
        }
        Err(e) => classify_error(
            &format!("Failed to create collector {}", collector.name_any()),
            e,
        ),
    }
}

/// Best-effort delete. A collector that is already gone is fine and any other
/// failure is only logged.
#[instrument(skip(api))]
pub async fn delete_collector(api: &Api<OpenTelemetryCollector>, name: &str) {
    match api.delete(name, &DeleteParams::default()).await {
        Ok(_) => info!("Collector {} deleted", name),
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("Collector {} does not exist, nothing to delete", name)
        }
        Err(e) => warn!("Failed to delete collector {}: {}", name, e),
    }
}
