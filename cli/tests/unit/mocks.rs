//! Shared mock transports for unit tests.
//!
//! Each mock answers only the operations a test scripts; anything else comes
//! back as a protocol error naming the operation, so unexpected calls
//! surface immediately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use berth_admin::application::ports::AdminTransport;
use berth_admin::domain::TransportError;
use serde_json::Value;

// ── Mock: every call fails ───────────────────────────────────────────────────

/// Transport whose every call fails with the same error.
pub struct FailingTransport(pub TransportError);

impl FailingTransport {
    pub fn refused() -> Self {
        Self(TransportError::Connect("connection refused".to_string()))
    }
}

impl AdminTransport for FailingTransport {
    fn invoke(&self, _: &str, _: &[Value]) -> Result<Value, TransportError> {
        Err(self.0.clone())
    }
}

// ── Mock: scripted replies ───────────────────────────────────────────────────

/// Transport with one canned reply per operation that records each call.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: HashMap<&'static str, Value>,
    calls: RefCell<Vec<(String, Vec<Value>)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, operation: &'static str, value: Value) -> Self {
        self.replies.insert(operation, value);
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.borrow().clone()
    }

    pub fn operations(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(op, _)| op.clone()).collect()
    }
}

impl AdminTransport for ScriptedTransport {
    fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value, TransportError> {
        self.calls
            .borrow_mut()
            .push((operation.to_string(), args.to_vec()));
        self.replies
            .get(operation)
            .cloned()
            .ok_or_else(|| TransportError::Protocol(format!("{operation} not expected in this test")))
    }
}

// ── Mock: replies in sequence ────────────────────────────────────────────────

/// Transport that hands out queued results in order, one per call.
pub struct SequenceTransport {
    replies: RefCell<Vec<Result<Value, TransportError>>>,
}

impl SequenceTransport {
    pub fn new(mut replies: Vec<Result<Value, TransportError>>) -> Self {
        replies.reverse();
        Self {
            replies: RefCell::new(replies),
        }
    }
}

impl AdminTransport for SequenceTransport {
    fn invoke(&self, operation: &str, _: &[Value]) -> Result<Value, TransportError> {
        self.replies
            .borrow_mut()
            .pop()
            .unwrap_or_else(|| Err(TransportError::Protocol(format!("{operation} not expected in this test"))))
    }
}
