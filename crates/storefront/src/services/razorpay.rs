//! Razorpay API client.
//!
//! Two concerns only: creating a gateway order matching an internal order,
//! and verifying the signature the popup flow hands back. The client never
//! inspects gateway state beyond that contract.

use std::time::Duration;

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

use crate::config::RazorpayConfig;

/// Razorpay REST API base URL.
const BASE_URL: &str = "https://api.razorpay.com/v1";

/// Per-request timeout. The gateway call sits on the checkout request path,
/// so a hung connection must not hang the customer.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

type HmacSha256 = Hmac<Sha256>;

/// Errors that can occur when interacting with the Razorpay API.
#[derive(Debug, Error)]
pub enum RazorpayError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A gateway-side order, as returned by order creation.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayOrder {
    /// Gateway order id (`order_...`).
    pub id: String,
    /// Amount in the smallest currency subunit (paise).
    pub amount: i64,
    /// ISO currency code.
    pub currency: String,
}

/// Request body for gateway order creation.
#[derive(Debug, Serialize)]
struct CreateOrderBody<'a> {
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
    notes: serde_json::Value,
}

/// Razorpay API client.
#[derive(Clone)]
pub struct RazorpayClient {
    client: reqwest::Client,
    key_id: String,
    key_secret: SecretString,
}

impl RazorpayClient {
    /// Create a new Razorpay client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &RazorpayConfig) -> Result<Self, RazorpayError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            key_id: config.key_id.clone(),
            key_secret: config.key_secret.clone(),
        })
    }

    /// The public key id, safe to hand to the browser popup flow.
    #[must_use]
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Create a gateway order for `amount_subunits` (paise), tagged with
    /// reconciliation notes.
    ///
    /// Retries once on a transport-level failure (timeout, connect); an API
    /// error response is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns `RazorpayError` if both attempts fail or the gateway rejects
    /// the order.
    pub async fn create_order(
        &self,
        amount_subunits: i64,
        currency: &str,
        receipt: &str,
        notes: serde_json::Value,
    ) -> Result<GatewayOrder, RazorpayError> {
        let body = CreateOrderBody {
            amount: amount_subunits,
            currency,
            receipt,
            notes,
        };

        match self.post_order(&body).await {
            Err(RazorpayError::Http(e)) if e.is_timeout() || e.is_connect() => {
                tracing::warn!("Gateway order creation failed ({e}), retrying once");
                self.post_order(&body).await
            }
            other => other,
        }
    }

    async fn post_order(&self, body: &CreateOrderBody<'_>) -> Result<GatewayOrder, RazorpayError> {
        let response = self
            .client
            .post(format!("{BASE_URL}/orders"))
            .basic_auth(&self.key_id, Some(self.key_secret.expose_secret()))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RazorpayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| RazorpayError::Parse(e.to_string()))
    }

    /// Verify a payment signature from the popup flow.
    ///
    /// Recomputes HMAC-SHA256 over `"{gateway_order_id}|{payment_id}"` with
    /// the key secret and compares against the hex signature in constant
    /// time. Any malformed signature is simply invalid.
    #[must_use]
    pub fn verify_signature(
        &self,
        gateway_order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> bool {
        verify_hmac_hex(
            self.key_secret.expose_secret().as_bytes(),
            &format!("{gateway_order_id}|{payment_id}"),
            signature,
        )
    }
}

impl std::fmt::Debug for RazorpayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RazorpayClient")
            .field("key_id", &self.key_id)
            .field("key_secret", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// Constant-time HMAC-SHA256 check of a hex-encoded signature.
fn verify_hmac_hex(secret: &[u8], message: &str, signature_hex: &str) -> bool {
    let Ok(signature) = hex::decode(signature_hex) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret) else {
        return false;
    };
    mac.update(message.as_bytes());
    mac.verify_slice(&signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"9kQ2xLp7vTzW4mNcRfUgYhB3jD6aEsPo";

    fn sign(message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(SECRET).expect("hmac accepts any key length");
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_valid_signature_verifies() {
        let message = "order_N9x7sK2pQ|pay_M3fT8wLzR";
        assert!(verify_hmac_hex(SECRET, message, &sign(message)));
    }

    #[test]
    fn test_single_bit_flip_fails() {
        let message = "order_N9x7sK2pQ|pay_M3fT8wLzR";
        let mut signature = sign(message).into_bytes();
        // Flip one bit of the first hex digit.
        signature[0] ^= 0x01;
        let tampered = String::from_utf8(signature).expect("still ascii");
        assert!(!verify_hmac_hex(SECRET, message, &tampered));
    }

    #[test]
    fn test_wrong_message_fails() {
        let signature = sign("order_A|pay_A");
        assert!(!verify_hmac_hex(SECRET, "order_A|pay_B", &signature));
    }

    #[test]
    fn test_non_hex_signature_fails() {
        assert!(!verify_hmac_hex(SECRET, "order_A|pay_A", "not-hex!"));
        assert!(!verify_hmac_hex(SECRET, "order_A|pay_A", ""));
    }
}
