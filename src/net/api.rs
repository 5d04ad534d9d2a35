//! REST API helpers for the workbench server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics. None of these calls is
//! retried; widgets log the error and leave their state where it was.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ModuleId, ParamId, RenderResponse, Workflow};
#[cfg(feature = "hydrate")]
use super::types::{InputColumns, ParamValue};

/// Prefix of every REST endpoint.
pub const API_BASE: &str = "/api";

/// Error returned by the REST helpers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

pub(crate) fn render_url(module_id: ModuleId, from_row: usize, to_row: usize) -> String {
    format!("{API_BASE}/wfmodules/{module_id}/render?startrow={from_row}&endrow={to_row}")
}

pub(crate) fn input_columns_url(module_id: ModuleId) -> String {
    format!("{API_BASE}/wfmodules/{module_id}/input/columns")
}

pub(crate) fn param_url(param_id: ParamId) -> String {
    format!("{API_BASE}/parameters/{param_id}")
}

pub(crate) fn workflow_url(workflow_id: i64) -> String {
    format!("{API_BASE}/workflows/{workflow_id}")
}

pub(crate) fn module_url(module_id: ModuleId) -> String {
    format!("{API_BASE}/wfmodules/{module_id}")
}

#[cfg(feature = "hydrate")]
fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

/// Fetch a workflow and its module sequence.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn workflow(workflow_id: i64) -> Result<Workflow, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&workflow_url(workflow_id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp)?;
        resp.json::<Workflow>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = workflow_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch rows `[from_row, to_row)` of a module's output table.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn render(module_id: ModuleId, from_row: usize, to_row: usize) -> Result<RenderResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&render_url(module_id, from_row, to_row))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp)?;
        resp.json::<RenderResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (module_id, from_row, to_row);
        Err(ApiError::Unavailable)
    }
}

/// List the column names flowing into a module.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn input_columns(module_id: ModuleId) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&input_columns_url(module_id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp)?;
        let body: InputColumns = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.columns)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = module_id;
        Err(ApiError::Unavailable)
    }
}

/// Persist a new serialized value for a parameter.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects it.
pub async fn on_param_changed(param_id: ParamId, value: String) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&param_url(param_id))
            .json(&ParamValue { value })
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (param_id, value);
        Err(ApiError::Unavailable)
    }
}

/// Delete a module from its workflow.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects it.
pub async fn delete_module(module_id: ModuleId) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&module_url(module_id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = module_id;
        Err(ApiError::Unavailable)
    }
}
