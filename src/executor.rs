//! Batch execution and response shaping.
//!
//! Items are processed strictly sequentially, each request fully awaited
//! before the next begins. The only state shared across items is the
//! read-only credentials object, so output order matches input order by
//! construction.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::{instrument, warn};

use crate::{
    credentials::SellerCredentials,
    error::Result,
    request::{ItemConfig, build_request},
    transport::HttpTransport,
};

/// How the batch loop treats a per-item failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// The first error aborts the whole batch, discarding prior output.
    #[default]
    Abort,
    /// A failing item is captured as `{"error": message}` and processing
    /// continues with the next item.
    ContinueOnFailure,
}

/// One output record per input item, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct OutputRecord {
    /// Shaped response body, or `{"error": message}` for a captured
    /// failure.
    pub json: Value,
    /// Position of the originating input item.
    #[serde(rename = "correlatesToInputIndex")]
    pub index: usize,
}

/// Adapter entry point: credentials plus a transport.
///
/// # Examples
///
/// ```rust,no_run
/// use teepublic_bridge::{
///     SellerBridge,
///     credentials::SellerCredentials,
///     executor::FailurePolicy,
///     request::{ItemConfig, Operation, Resource},
/// };
///
/// # async fn example() -> teepublic_bridge::error::Result<()> {
/// let bridge = SellerBridge::new(SellerCredentials::default());
/// let items = vec![ItemConfig::new(Resource::Orders, Operation::List)];
///
/// let records = bridge.execute_batch(&items, FailurePolicy::ContinueOnFailure).await?;
/// for record in &records {
///     println!("[{}] {}", record.index, record.json);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SellerBridge {
    credentials: SellerCredentials,
    transport: HttpTransport,
}

impl SellerBridge {
    /// Creates a bridge with the default pooled transport.
    #[must_use]
    pub fn new(credentials: SellerCredentials) -> Self {
        Self { credentials, transport: HttpTransport::new() }
    }

    /// Creates a bridge with an explicit transport.
    #[must_use]
    pub fn with_transport(credentials: SellerCredentials, transport: HttpTransport) -> Self {
        Self { credentials, transport }
    }

    /// Returns the credentials this bridge was built with.
    #[must_use]
    pub fn credentials(&self) -> &SellerCredentials {
        &self.credentials
    }

    /// Executes a batch of items, index 0..N-1, strictly in order.
    ///
    /// Under [`FailurePolicy::ContinueOnFailure`] the output length always
    /// equals the input length; under [`FailurePolicy::Abort`] the first
    /// error propagates and no partial output is returned.
    ///
    /// # Errors
    ///
    /// Returns the first item's error under [`FailurePolicy::Abort`].
    #[instrument(skip(self, items), fields(items = items.len(), ?policy))]
    pub async fn execute_batch(
        &self,
        items: &[ItemConfig],
        policy: FailurePolicy,
    ) -> Result<Vec<OutputRecord>> {
        let mut output = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            match self.execute_item(item).await {
                Ok(json) => output.push(OutputRecord { json, index }),
                Err(err) => match policy {
                    FailurePolicy::ContinueOnFailure => {
                        warn!(index, error = %err, "item failed, continuing");
                        output.push(OutputRecord {
                            json: json!({ "error": err.to_string() }),
                            index,
                        });
                    }
                    FailurePolicy::Abort => return Err(err),
                },
            }
        }

        Ok(output)
    }

    async fn execute_item(&self, item: &ItemConfig) -> Result<Value> {
        let descriptor = build_request(&self.credentials, item)?;
        let response = self.transport.send(&descriptor).await?;
        Ok(shape_response(response, item.raw_output))
    }
}

/// Shapes the raw response body into the output JSON.
///
/// Non-raw output prefers the `data` field; an array at the top level is
/// wrapped as `{"items": [...]}` in both modes.
#[must_use]
pub fn shape_response(response: Value, raw_output: bool) -> Value {
    let unwrapped = if raw_output { response } else { unwrap_data(response) };

    match unwrapped {
        Value::Array(items) => json!({ "items": items }),
        other => other,
    }
}

/// Prefers a non-empty `data` field, else the whole body, else a synthesized
/// success object for an empty body.
///
/// The empty-body fallback mirrors the upstream API contract: some seller
/// endpoints answer 200 with no body, or with a bare `false`/`0`/`""`.
fn unwrap_data(response: Value) -> Value {
    if is_empty_body(&response) {
        return json!({ "success": true, "message": "No response body" });
    }

    match response.get("data") {
        Some(data) if !is_empty_body(data) => data.clone(),
        _ => response,
    }
}

/// Values the upstream treats as an absent body: `null`, `false`, `0`, `""`.
fn is_empty_body(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
