// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;
use tower::Service;

type Route = (String, String);

/// A mock HTTP service that returns predefined responses based on request method and path.
///
/// A route registered with several responses hands them out in order and keeps
/// repeating the last one, which is how retries are exercised.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<Route, VecDeque<(u16, String)>>>>,
    latencies: Arc<Mutex<HashMap<Route, Duration>>>,
    requests: Arc<Mutex<Vec<Route>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            latencies: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, vec![(status, body.to_string())])
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, vec![(status, body.to_string())])
    }

    /// Add a response for DELETE requests matching the exact path
    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on("DELETE", path, vec![(status, body.to_string())])
    }

    /// Add a sequence of responses for one method and path
    pub fn on(self, method: &str, path: &str, responses: Vec<(u16, String)>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), responses.into());
        self
    }

    /// Delay every response for one method and path, like a hung API server
    pub fn with_latency(self, method: &str, path: &str, latency: Duration) -> Self {
        self.latencies
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), latency);
        self
    }

    /// Every request received so far, as (method, path)
    pub fn requests(&self) -> Vec<Route> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received for one method and path
    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, p)| m == method && p == path)
            .count()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn next_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let mut responses = self.responses.lock().unwrap();
        let queue = responses.get_mut(&(method.to_string(), path.to_string()))?;

        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let response = self.next_response(&method, &path);
        let latency = self
            .latencies
            .lock()
            .unwrap()
            .get(&(method.clone(), path.clone()))
            .copied();
        self.requests.lock().unwrap().push((method, path.clone()));

        Box::pin(async move {
            if let Some(latency) = latency {
                tokio::time::sleep(latency).await;
            }

            let (status, body) =
                response.unwrap_or_else(|| (404, not_found_json("resource", &path)));

            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a mock Deployment JSON response
pub fn deployment_json(name: &str, namespace: &str, available_replicas: Option<i32>) -> String {
    let mut deployment = serde_json::json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "spec": {
            "selector": { "matchLabels": { "app": name } },
            "template": { "metadata": { "labels": { "app": name } } }
        }
    });

    if let Some(available) = available_replicas {
        deployment["status"] = serde_json::json!({ "availableReplicas": available });
    }

    deployment.to_string()
}

/// Create a mock OpenTelemetryCollector JSON response
pub fn collector_json(name: &str, namespace: &str) -> String {
    serde_json::json!({
        "apiVersion": "opentelemetry.io/v1alpha1",
        "kind": "OpenTelemetryCollector",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "spec": {}
    })
    .to_string()
}

/// Create a failure Status response with the given code and reason
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}

/// Path of a namespaced Deployment
pub fn deployment_path(namespace: &str, name: &str) -> String {
    format!("/apis/apps/v1/namespaces/{}/deployments/{}", namespace, name)
}

/// Path of the OpenTelemetryCollector collection in a namespace
pub fn collectors_path(namespace: &str) -> String {
    format!(
        "/apis/opentelemetry.io/v1alpha1/namespaces/{}/opentelemetrycollectors",
        namespace
    )
}

/// Path of a single OpenTelemetryCollector
pub fn collector_path(namespace: &str, name: &str) -> String {
    format!("{}/{}", collectors_path(namespace), name)
}
