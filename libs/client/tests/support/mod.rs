//! Shared helpers for the integration tests: an in-process mock backend
//! and a client pointed at it.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::http::HeaderMap;
use axum::http::header::{AUTHORIZATION, COOKIE};
use client::{AuthClient, ClientOptions, RecordingNotifier, TokenStore};
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL nothing is listening on
pub async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn options(base_url: &str) -> ClientOptions {
    ClientOptions::new(format!("{}/auth/refresh", base_url)).with_timeout(Duration::from_secs(2))
}

pub fn connect_with(
    base_url: &str,
    options: ClientOptions,
    store: &TokenStore,
    notifier: &RecordingNotifier,
) -> AuthClient {
    AuthClient::new(
        base_url,
        options,
        store.clone(),
        Arc::new(notifier.clone()),
    )
    .unwrap()
}

pub fn connect(base_url: &str, store: &TokenStore, notifier: &RecordingNotifier) -> AuthClient {
    connect_with(base_url, options(base_url), store, notifier)
}

/// What the mock backend saw
#[derive(Default)]
pub struct Recorder {
    hits: AtomicUsize,
    refreshes: AtomicUsize,
    authorizations: Mutex<Vec<Option<String>>>,
    refresh_cookies: Mutex<Vec<Option<String>>>,
    refresh_bodies: Mutex<Vec<serde_json::Value>>,
    bodies: Mutex<Vec<serde_json::Value>>,
}

impl Recorder {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn hit(&self, headers: &HeaderMap) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        self.authorizations
            .lock()
            .unwrap()
            .push(header(headers, AUTHORIZATION.as_str()));
    }

    pub fn refreshed(&self, headers: &HeaderMap, body: serde_json::Value) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        self.refresh_cookies
            .lock()
            .unwrap()
            .push(header(headers, COOKIE.as_str()));
        self.refresh_bodies.lock().unwrap().push(body);
    }

    pub fn record_body(&self, body: serde_json::Value) {
        self.bodies.lock().unwrap().push(body);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }

    pub fn authorizations(&self) -> Vec<Option<String>> {
        self.authorizations.lock().unwrap().clone()
    }

    pub fn refresh_cookies(&self) -> Vec<Option<String>> {
        self.refresh_cookies.lock().unwrap().clone()
    }

    pub fn refresh_bodies(&self) -> Vec<serde_json::Value> {
        self.refresh_bodies.lock().unwrap().clone()
    }

    pub fn bodies(&self) -> Vec<serde_json::Value> {
        self.bodies.lock().unwrap().clone()
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

pub fn ok<T: serde::Serialize>(data: T) -> serde_json::Value {
    serde_json::json!({ "status": 200, "message": "OK", "data": data })
}
