// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::{api::ObjectMeta, CustomResource};
use serde::{Deserialize, Serialize};

/// The subset of the collector spec this tool needs. The operator fills in
/// defaults for everything left out, so an empty spec is a valid instance.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(
    group = "opentelemetry.io",
    version = "v1alpha1",
    kind = "OpenTelemetryCollector"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct OpenTelemetryCollectorSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
}

impl OpenTelemetryCollector {
    /// Build the throwaway instance used to check that the operator admits collectors
    pub fn probe_instance(name: &str, namespace: &str) -> Self {
        Self {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            },
            spec: OpenTelemetryCollectorSpec::default(),
        }
    }
}
