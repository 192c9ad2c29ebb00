// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Operator deployment presence probe

use super::classify_error;
use crate::poll::Probe;
use k8s_openapi::api::apps::v1::Deployment;
use kube::Api;
use tracing::{debug, instrument};

/// Check that the deployment exists. With `require_available` it must also
/// report at least one available replica.
#[instrument(skip(api))]
pub async fn probe_deployment(
    api: &Api<Deployment>,
    name: &str,
    require_available: bool,
) -> Probe<kube::Error> {
    let deployment = match api.get(name).await {
        Ok(deployment) => deployment,
        Err(e) => return classify_error(&format!("Failed to get deployment {}", name), e),
    };

    if !require_available {
        debug!("Deployment {} exists", name);
        return Probe::Success;
    }

    let available = deployment
        .status
        .as_ref()
        .and_then(|s| s.available_replicas)
        .unwrap_or(0);

    if available > 0 {
        debug!("Deployment {} has {} available replica(s)", name, available);
        Probe::Success
    } else {
        Probe::Retry(format!("Deployment {} has no available replicas yet", name))
    }
}
