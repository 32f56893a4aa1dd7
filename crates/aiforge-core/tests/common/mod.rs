#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use aiforge_core::analysis::{FitAnalyzer, FitRequest};
use aiforge_core::error::{ForgeError, Result};

/// Analyzer that always answers with a fixed reply and records the prompts it
/// was given.
pub struct CannedAnalyzer {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl CannedAnalyzer {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl FitAnalyzer for CannedAnalyzer {
    fn name(&self) -> &str {
        "canned"
    }

    fn generate(&self, request: &FitRequest) -> Result<String> {
        self.prompts.lock().unwrap().push(request.prompt());
        Ok(self.reply.clone())
    }
}

/// Analyzer that fails every call with a transport error.
#[derive(Default)]
pub struct FailingAnalyzer {
    calls: AtomicUsize,
}

impl FailingAnalyzer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FitAnalyzer for FailingAnalyzer {
    fn name(&self) -> &str {
        "failing"
    }

    fn generate(&self, _request: &FitRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ForgeError::Transport("connection refused".into()))
    }
}
