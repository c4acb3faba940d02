//! REST API helpers for the staff endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed
//! fetch degrades to the view's static failure message without crashing
//! hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Activity, Person, StudentRollState};

#[cfg(any(test, feature = "hydrate"))]
fn students_request_failed_message(status: u16) -> String {
    format!("students request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn activities_request_failed_message(status: u16) -> String {
    format!("activities request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn save_roll_failed_message(status: u16) -> String {
    format!("save roll failed: {status}")
}

/// Envelope for `GET /api/homeboard/students`.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct StudentsResponse {
    students: Vec<Person>,
}

/// Envelope for `GET /api/activities`.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct ActivitiesResponse {
    activity: Vec<Activity>,
}

/// Fetch the home-board roster from `GET /api/homeboard/students`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body cannot be parsed.
pub async fn fetch_homeboard_students() -> Result<Vec<Person>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/homeboard/students")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(students_request_failed_message(resp.status()));
        }
        let body: StudentsResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.students)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch completed-roll history from `GET /api/activities`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body cannot be parsed.
pub async fn fetch_activities() -> Result<Vec<Activity>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/activities")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(activities_request_failed_message(resp.status()));
        }
        let body: ActivitiesResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.activity)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Submit the active roll via `POST /api/rolls`.
///
/// The payload is a flat JSON array with one `{student_id, roll_state}`
/// record per roster student. Any 2xx response counts as success.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn save_active_roll(records: &[StudentRollState]) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/rolls")
            .json(&records)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(save_roll_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = records;
        Err("not available on server".to_owned())
    }
}
