//! Offline-cache service worker registration.
//!
//! The worker script itself (`/sw.js`) ships with the host page; this
//! module only registers it. The script the adapter expects is
//! cache-first with a versioned cache name: install pre-caches the app
//! shell, activate drops stale caches, and fetch serves cache hits,
//! falling back to the network and opportunistically caching successful
//! same-origin GET responses. API calls (`/api/` paths) and non-GET
//! requests always bypass the cache.

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
use wasm_bindgen_futures::JsFuture;

use crate::error::AdapterError;

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub async fn register_service_worker() -> Result<(), AdapterError> {
    let window = web_sys::window().ok_or(AdapterError::BackendUnavailable)?;
    let sw_container = window.navigator().service_worker();
    tracing::debug!("registering service worker");
    let promise = sw_container.register("/sw.js");
    JsFuture::from(promise).await?;
    tracing::debug!("service worker registered");

    Ok(())
}

#[allow(unused)]
#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
pub async fn register_service_worker() -> Result<(), AdapterError> {
    Ok(())
}
