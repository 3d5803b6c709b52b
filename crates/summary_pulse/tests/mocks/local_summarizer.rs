use std::sync::{Arc, Mutex};

use summary_pulse::LocalSummarizer;

#[derive(Clone)]
pub struct MockLocalSummarizer {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<(String, f32)>>>,
    pub fail_with: Option<String>,
}

impl MockLocalSummarizer {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            summary: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl LocalSummarizer for MockLocalSummarizer {
    type Error = anyhow::Error;

    fn summarize(&self, text: &str, ratio: f32) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push((text.to_string(), ratio));
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.summary.clone())
    }
}
