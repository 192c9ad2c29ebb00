// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from an explicit kubeconfig location

use crate::error::{ReadinessError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// How to reach the cluster. Passed to [`create_client`] instead of relying on
/// any process-wide state.
#[derive(Debug, Clone, Default)]
pub struct ClientSettings {
    /// Kubeconfig file to read. `None` uses `$KUBECONFIG` or `~/.kube/config`.
    pub kubeconfig_path: Option<PathBuf>,
    /// Context to use instead of the kubeconfig's current context
    pub context: Option<String>,
}

/// Create a Kubernetes client from the configured kubeconfig
#[instrument(skip(settings), fields(
    kubeconfig = ?settings.kubeconfig_path,
    context = ?settings.context
))]
pub async fn create_client(settings: &ClientSettings) -> Result<Client> {
    let kubeconfig = load_kubeconfig(settings.kubeconfig_path.as_deref())?;
    let client_config = client_config(kubeconfig, settings.context.clone()).await?;

    info!("Connecting to cluster at {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| ReadinessError::KubeconfigError(format!("Failed to create client: {}", e)))
}

async fn client_config(kubeconfig: Kubeconfig, context: Option<String>) -> Result<kube::Config> {
    let options = KubeConfigOptions {
        context,
        ..Default::default()
    };

    kube::Config::from_custom_kubeconfig(kubeconfig, &options)
        .await
        .map_err(|e| ReadinessError::KubeconfigError(format!("Failed to create config: {}", e)))
}

fn load_kubeconfig(path: Option<&Path>) -> Result<Kubeconfig> {
    let Some(path) = path else {
        debug!("No kubeconfig path given, using the default location");
        return Kubeconfig::read().map_err(|e| {
            ReadinessError::KubeconfigError(format!("Failed to read default kubeconfig: {}", e))
        });
    };

    debug!("Reading kubeconfig from {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ReadinessError::KubeconfigError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_kubeconfig(&contents)
}

/// Parse a kubeconfig document
pub fn parse_kubeconfig(contents: &str) -> Result<Kubeconfig> {
    serde_yaml::from_str(contents)
        .map_err(|e| ReadinessError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))
}
