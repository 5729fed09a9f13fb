//! HTTP API Client
//!
//! Functions for communicating with the campaign REST API.

use gloo_net::http::{Request, Response};

use crate::state::global::{Donation, Rotarian, Stats};

/// Fixed API base URL. The backend contract has no environment override.
pub const API_BASE: &str = "http://localhost:5000/api";

// ============ Request / Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct NewDonationRequest {
    pub donor_name: String,
    pub donor_email: String,
    pub amount: f64,
    pub rotarian_name: String,
    pub notes: String,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct NewRotarianRequest {
    pub name: String,
    pub email: String,
    pub target_amount: f64,
}

/// Extract an error message from a non-2xx response
async fn response_error(response: Response) -> String {
    let status = response.status();
    let error: ApiError = response.json().await.unwrap_or(ApiError {
        error: format!("HTTP {}", status),
        code: None,
    });
    error.error
}

// ============ API Functions ============

/// Fetch the aggregate campaign statistics
pub async fn fetch_stats() -> Result<Stats, String> {
    let response = Request::get(&format!("{}/stats", API_BASE))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch all donations
pub async fn fetch_donations() -> Result<Vec<Donation>, String> {
    let response = Request::get(&format!("{}/donations", API_BASE))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch all Rotarians
pub async fn fetch_rotarians() -> Result<Vec<Rotarian>, String> {
    let response = Request::get(&format!("{}/rotarians", API_BASE))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Record a new donation. Any 2xx response counts as success.
pub async fn create_donation(
    donor_name: &str,
    donor_email: &str,
    amount: f64,
    rotarian_name: &str,
    notes: &str,
) -> Result<(), String> {
    let response = Request::post(&format!("{}/donations", API_BASE))
        .json(&NewDonationRequest {
            donor_name: donor_name.to_string(),
            donor_email: donor_email.to_string(),
            amount,
            rotarian_name: rotarian_name.to_string(),
            notes: notes.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    Ok(())
}

/// Register a new Rotarian. Any 2xx response counts as success.
pub async fn create_rotarian(name: &str, email: &str, target_amount: f64) -> Result<(), String> {
    let response = Request::post(&format!("{}/rotarians", API_BASE))
        .json(&NewRotarianRequest {
            name: name.to_string(),
            email: email.to_string(),
            target_amount,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_donation_request_shape() {
        let body = serde_json::to_value(NewDonationRequest {
            donor_name: "Awa Ndiaye".to_string(),
            donor_email: "".to_string(),
            amount: 15000.0,
            rotarian_name: "Jean Dupont".to_string(),
            notes: "".to_string(),
        })
        .unwrap();

        assert_eq!(body["donor_name"], "Awa Ndiaye");
        assert_eq!(body["amount"], 15000.0);
        assert_eq!(body["rotarian_name"], "Jean Dupont");
        // Optional fields are posted as empty strings, mirroring the form draft
        assert_eq!(body["donor_email"], "");
        assert_eq!(body["notes"], "");
    }

    #[test]
    fn test_new_rotarian_request_shape() {
        let body = serde_json::to_value(NewRotarianRequest {
            name: "Jean Dupont".to_string(),
            email: "jean@example.org".to_string(),
            target_amount: 500000.0,
        })
        .unwrap();

        assert_eq!(body["name"], "Jean Dupont");
        assert_eq!(body["email"], "jean@example.org");
        assert_eq!(body["target_amount"], 500000.0);
    }
}
