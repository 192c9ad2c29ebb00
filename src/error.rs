// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadinessError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("{phase} did not become ready within {timeout:?}")]
    Timeout { phase: String, timeout: Duration },

    #[error("Invalid poll spec: {0}")]
    InvalidPollSpec(String),
}

pub type Result<T> = std::result::Result<T, ReadinessError>;
