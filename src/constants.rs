// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The OpenTelemetry operator deployment that must exist before collectors can be created
pub mod operator {
    pub const DEPLOYMENT_NAME: &str = "opentelemetry-operator-controller-manager";
    pub const DEPLOYMENT_NAMESPACE: &str = "opentelemetry-operator-system";
}

/// The throwaway collector instance used to check that the admission webhook answers
pub mod collector {
    pub const NAME: &str = "operator-check";
    pub const NAMESPACE: &str = "default";
}

/// Polling configuration shared by both readiness phases
pub mod poll {
    /// Interval between two probe attempts, in milliseconds
    pub const INTERVAL_MILLIS: u64 = 500;
    /// Overall timeout for each phase, in seconds
    pub const TIMEOUT_SECS: u64 = 300;
}
