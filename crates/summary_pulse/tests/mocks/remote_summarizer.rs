use std::sync::{Arc, Mutex};

use summary_pulse::{RemoteFailure, RemoteSummarizer, RemoteSummary};

#[derive(Clone)]
pub struct MockRemoteSummarizer {
    pub text: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<RemoteFailure>,
}

impl MockRemoteSummarizer {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(failure: RemoteFailure) -> Self {
        Self {
            text: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(failure),
        }
    }
}

impl RemoteSummarizer for MockRemoteSummarizer {
    const MODEL: &'static str = "mock-model";

    type Error = RemoteFailure;

    async fn summarize(&self, prompt: &str) -> Result<RemoteSummary, Self::Error> {
        self.calls.lock().unwrap().push(prompt.to_string());
        if let Some(ref failure) = self.fail_with {
            return Err(failure.clone());
        }
        Ok(RemoteSummary {
            text: self.text.clone(),
        })
    }
}

/// Remote stub whose context window is too small for any real prompt,
/// exercising the pre-flight budget check.
#[derive(Clone, Default)]
pub struct TinyWindowSummarizer {
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl RemoteSummarizer for TinyWindowSummarizer {
    const MODEL: &'static str = "tiny-window";
    const CONTEXT_WINDOW_LIMIT: usize = 8;

    type Error = RemoteFailure;

    async fn summarize(&self, prompt: &str) -> Result<RemoteSummary, Self::Error> {
        self.calls.lock().unwrap().push(prompt.to_string());
        Ok(RemoteSummary {
            text: "should never be reached".into(),
        })
    }
}
