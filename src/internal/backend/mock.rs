use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::{BackendError, LogBackend, LogRequest, LogResponse};

/// Mock backend for testing - scripts issuance and captures submissions
#[derive(Clone)]
pub struct MockBackend {
    /// Fixed id to issue; fresh UUIDs are issued when unset
    pub issued_id: Arc<Mutex<Option<String>>>,
    /// Reject every issuance call when set
    pub fail_issuance: bool,
    /// Reject every log submission when set
    pub fail_log: bool,
    /// Delay applied to issuance, to widen race windows
    pub issuance_delay: Option<Duration>,
    /// Response returned for every submission
    pub response: Arc<Mutex<LogResponse>>,
    /// Number of issuance calls received
    pub issuance_calls: Arc<AtomicUsize>,
    /// Captured submissions
    pub requests: Arc<Mutex<Vec<LogRequest>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            issued_id: Arc::new(Mutex::new(None)),
            fail_issuance: false,
            fail_log: false,
            issuance_delay: None,
            response: Arc::new(Mutex::new(LogResponse {
                is_web_console_debug_enabled: false,
                web_console_log: String::new(),
            })),
            issuance_calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_issued_id(self, id: &str) -> Self {
        *self.issued_id.lock().unwrap() = Some(id.to_string());
        self
    }

    pub fn failing_issuance(mut self) -> Self {
        self.fail_issuance = true;
        self
    }

    pub fn failing_log(mut self) -> Self {
        self.fail_log = true;
        self
    }

    pub fn with_issuance_delay(mut self, delay: Duration) -> Self {
        self.issuance_delay = Some(delay);
        self
    }

    /// Ask for console mirroring of `message` on every submission
    pub fn mirroring(self, message: &str) -> Self {
        *self.response.lock().unwrap() = LogResponse {
            is_web_console_debug_enabled: true,
            web_console_log: message.to_string(),
        };
        self
    }

    pub fn issuance_count(&self) -> usize {
        self.issuance_calls.load(Ordering::SeqCst)
    }

    pub fn get_requests(&self) -> Vec<LogRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Captured submissions parsed back into JSON
    pub fn get_payloads(&self) -> Vec<serde_json::Value> {
        self.get_requests()
            .iter()
            .filter_map(|request| serde_json::from_str(&request.data).ok())
            .collect()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogBackend for MockBackend {
    async fn create_transaction_id(&self) -> Result<String, BackendError> {
        self.issuance_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.issuance_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_issuance {
            return Err(BackendError::Rejected("transaction service unavailable".to_string()));
        }
        let issued = self.issued_id.lock().unwrap().clone();
        Ok(issued.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()))
    }

    async fn log(&self, request: LogRequest) -> Result<LogResponse, BackendError> {
        if self.fail_log {
            return Err(BackendError::Rejected("log submission failed".to_string()));
        }
        self.requests.lock().unwrap().push(request);
        Ok(self.response.lock().unwrap().clone())
    }
}
