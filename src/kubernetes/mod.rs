// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation and the readiness probes.

pub mod client;
pub mod collector;
pub mod deployment;

pub use client::{create_client, ClientSettings};
pub use collector::{delete_collector, probe_collector_create};
pub use deployment::probe_deployment;

use crate::poll::Probe;

/// Map an API error onto a probe result. Authentication and authorization
/// failures are fatal; everything else may clear up on a later attempt.
pub(crate) fn classify_error(context: &str, err: kube::Error) -> Probe<kube::Error> {
    match &err {
        kube::Error::Api(resp) if resp.code == 403 && is_namespace_terminating(&resp.message) => {
            Probe::Retry(format!("{}: {}", context, err))
        }
        kube::Error::Api(resp) if resp.code == 401 || resp.code == 403 => Probe::Fatal(err),
        _ => Probe::Retry(format!("{}: {}", context, err)),
    }
}

/// The NamespaceLifecycle admission plugin answers 403 for creates into a
/// namespace that is being deleted. That goes away once deletion finishes.
fn is_namespace_terminating(message: &str) -> bool {
    message.contains("because it is being terminated")
}

