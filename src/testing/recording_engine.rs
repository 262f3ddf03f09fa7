use std::sync::Mutex;

use minijinja::Value;

use crate::domain::RenderParameters;
use crate::ports::TemplateEngine;

/// Error produced by a [`RecordingEngine`] configured to fail.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct EngineFailure(pub String);

/// A render call as the engine saw it.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub template: String,
    pub parameters: Value,
}

/// Template engine fake that records every dispatch and returns a canned result.
#[derive(Debug)]
pub struct RecordingEngine {
    calls: Mutex<Vec<RecordedCall>>,
    response: Result<String, String>,
}

impl Default for RecordingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::returning("")
    }

    pub fn returning(output: &str) -> Self {
        Self { calls: Mutex::new(Vec::new()), response: Ok(output.to_string()) }
    }

    pub fn failing(message: &str) -> Self {
        Self { calls: Mutex::new(Vec::new()), response: Err(message.to_string()) }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The only recorded call; panics unless exactly one render happened.
    pub fn single_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one render call, got {:?}", calls);
        calls[0].clone()
    }
}

impl TemplateEngine for RecordingEngine {
    type Error = EngineFailure;

    fn render(
        &self,
        template: &str,
        parameters: &RenderParameters<'_>,
    ) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(RecordedCall {
            template: template.to_string(),
            parameters: Value::from_serialize(parameters),
        });
        self.response.clone().map_err(EngineFailure)
    }
}
