// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::checks::{CheckOptions, CheckTargets};
use crate::constants::{collector, operator, poll};
use crate::kubernetes::ClientSettings;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Check that the OpenTelemetry operator is deployed and accepts collectors.
///
/// Every flag can also be set through its environment variable.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Timeout for each check phase, in seconds
    #[arg(long, env = "OPERATOR_CHECK_TIMEOUT", default_value_t = poll::TIMEOUT_SECS)]
    pub timeout: u64,

    /// Path to the kubeconfig file. Defaults to $KUBECONFIG or ~/.kube/config
    #[arg(long, env = "OPERATOR_CHECK_KUBECONFIG")]
    pub kubeconfig_path: Option<PathBuf>,

    /// Kubeconfig context to use instead of the current one
    #[arg(long, env = "OPERATOR_CHECK_CONTEXT")]
    pub context: Option<String>,

    /// Interval between two attempts, in milliseconds
    #[arg(
        long,
        env = "OPERATOR_CHECK_POLL_INTERVAL_MS",
        default_value_t = poll::INTERVAL_MILLIS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub poll_interval_ms: u64,

    /// Name of the operator deployment
    #[arg(
        long,
        env = "OPERATOR_CHECK_DEPLOYMENT_NAME",
        default_value = operator::DEPLOYMENT_NAME
    )]
    pub deployment_name: String,

    /// Namespace of the operator deployment
    #[arg(
        long,
        env = "OPERATOR_CHECK_DEPLOYMENT_NAMESPACE",
        default_value = operator::DEPLOYMENT_NAMESPACE
    )]
    pub deployment_namespace: String,

    /// Name of the throwaway collector created to test admission
    #[arg(
        long,
        env = "OPERATOR_CHECK_COLLECTOR_NAME",
        default_value = collector::NAME
    )]
    pub collector_name: String,

    /// Namespace of the throwaway collector
    #[arg(
        long,
        env = "OPERATOR_CHECK_COLLECTOR_NAMESPACE",
        default_value = collector::NAMESPACE
    )]
    pub collector_namespace: String,

    /// Also require at least one available replica of the operator deployment
    #[arg(long, env = "OPERATOR_CHECK_REQUIRE_AVAILABLE")]
    pub require_available: bool,
}

impl Config {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            kubeconfig_path: self.kubeconfig_path.clone(),
            context: self.context.clone(),
        }
    }

    pub fn targets(&self) -> CheckTargets {
        CheckTargets {
            deployment_name: self.deployment_name.clone(),
            deployment_namespace: self.deployment_namespace.clone(),
            collector_name: self.collector_name.clone(),
            collector_namespace: self.collector_namespace.clone(),
        }
    }

    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            interval: Duration::from_millis(self.poll_interval_ms),
            timeout: Duration::from_secs(self.timeout),
            require_available: self.require_available,
        }
    }
}
