// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The two sequential readiness phases: operator deployment presence, then a
//! collector create/delete round-trip.

use crate::constants::{collector, operator, poll as poll_defaults};
use crate::error::{ReadinessError, Result};
use crate::kubernetes::{delete_collector, probe_collector_create, probe_deployment};
use crate::poll::{poll, Outcome, PollSpec};
use crate::types::OpenTelemetryCollector;
use k8s_openapi::api::apps::v1::Deployment;
use kube::{Api, Client};
use std::fmt;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Which objects the checks look at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTargets {
    pub deployment_name: String,
    pub deployment_namespace: String,
    pub collector_name: String,
    pub collector_namespace: String,
}

impl Default for CheckTargets {
    fn default() -> Self {
        Self {
            deployment_name: operator::DEPLOYMENT_NAME.to_string(),
            deployment_namespace: operator::DEPLOYMENT_NAMESPACE.to_string(),
            collector_name: collector::NAME.to_string(),
            collector_namespace: collector::NAMESPACE.to_string(),
        }
    }
}

/// Timing and strictness shared by both phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    pub interval: Duration,
    pub timeout: Duration,
    pub require_available: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(poll_defaults::INTERVAL_MILLIS),
            timeout: Duration::from_secs(poll_defaults::TIMEOUT_SECS),
            require_available: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    OperatorDeployment,
    CollectorCreation,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::OperatorDeployment => write!(f, "operator deployment"),
            Phase::CollectorCreation => write!(f, "collector creation"),
        }
    }
}

#[derive(Debug)]
pub struct PhaseResult {
    pub phase: Phase,
    pub outcome: Outcome<kube::Error>,
}

/// Outcome of every phase that ran, in order
#[derive(Debug)]
pub struct CheckReport {
    pub phases: Vec<PhaseResult>,
    timeout: Duration,
}

impl CheckReport {
    /// True only when both phases ran and succeeded
    pub fn is_success(&self) -> bool {
        self.phases.len() == 2 && self.phases.iter().all(|p| p.outcome.is_success())
    }

    /// The first failing phase as an error. A failure in either phase is an
    /// error, so the process exit code does not depend on which phase failed.
    pub fn into_result(self) -> Result<()> {
        for result in self.phases {
            match result.outcome {
                Outcome::Succeeded => continue,
                Outcome::TimedOut => {
                    return Err(ReadinessError::Timeout {
                        phase: result.phase.to_string(),
                        timeout: self.timeout,
                    })
                }
                Outcome::Failed(e) => return Err(ReadinessError::KubeError(e)),
            }
        }

        Ok(())
    }
}

/// Runs the readiness phases against one cluster
pub struct ReadinessCheck {
    client: Client,
    targets: CheckTargets,
    options: CheckOptions,
}

impl ReadinessCheck {
    pub fn new(client: Client, targets: CheckTargets, options: CheckOptions) -> Self {
        Self {
            client,
            targets,
            options,
        }
    }

    /// Run the deployment phase, then the collector phase. The collector phase
    /// is skipped when the operator deployment never showed up.
    pub async fn run(&self) -> Result<CheckReport> {
        let mut report = CheckReport {
            phases: Vec::with_capacity(2),
            timeout: self.options.timeout,
        };

        info!("Waiting until the OpenTelemetry operator is deployed");
        let outcome = self.check_deployment().await?;
        let deployed = self.record(&mut report, Phase::OperatorDeployment, outcome);
        if !deployed {
            return Ok(report);
        }
        info!("OpenTelemetry operator is deployed");

        info!("Ensuring OpenTelemetryCollector instances can be created");
        let outcome = self.check_collector().await?;
        if self.record(&mut report, Phase::CollectorCreation, outcome) {
            info!("OpenTelemetryCollector instances can be created");
        }

        Ok(report)
    }

    fn record(
        &self,
        report: &mut CheckReport,
        phase: Phase,
        outcome: Outcome<kube::Error>,
    ) -> bool {
        match &outcome {
            Outcome::Succeeded => {}
            Outcome::TimedOut => error!(
                "The {} check timed out after {:?}",
                phase, self.options.timeout
            ),
            Outcome::Failed(e) => error!("The {} check failed: {}", phase, e),
        }

        let success = outcome.is_success();
        report.phases.push(PhaseResult { phase, outcome });
        success
    }

    #[instrument(skip(self), fields(
        deployment = %self.targets.deployment_name,
        namespace = %self.targets.deployment_namespace
    ))]
    async fn check_deployment(&self) -> Result<Outcome<kube::Error>> {
        let api: Api<Deployment> =
            Api::namespaced(self.client.clone(), &self.targets.deployment_namespace);
        let name = self.targets.deployment_name.as_str();
        let require_available = self.options.require_available;

        let spec = PollSpec::new(self.options.interval, self.options.timeout, || {
            probe_deployment(&api, name, require_available)
        })?;

        Ok(poll(spec).await)
    }

    #[instrument(skip(self), fields(
        collector = %self.targets.collector_name,
        namespace = %self.targets.collector_namespace
    ))]
    async fn check_collector(&self) -> Result<Outcome<kube::Error>> {
        let api: Api<OpenTelemetryCollector> =
            Api::namespaced(self.client.clone(), &self.targets.collector_namespace);
        let collector = OpenTelemetryCollector::probe_instance(
            &self.targets.collector_name,
            &self.targets.collector_namespace,
        );

        // Leftover from an earlier run would make every create conflict
        delete_collector(&api, &self.targets.collector_name).await;

        let spec = PollSpec::new(self.options.interval, self.options.timeout, || {
            probe_collector_create(&api, &collector)
        })?;
        let outcome = poll(spec).await;

        // A create cut off by the timeout may still have been admitted
        delete_collector(&api, &self.targets.collector_name).await;

        Ok(outcome)
    }
}
