use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub max_redirects: u32,
    pub max_content_size: usize,
    pub worker_count: usize,
    pub channel_capacity: usize,
    pub headers: Vec<(String, String)>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (compatible; PdfScout/1.0)".to_string(),
            timeout: Duration::from_secs(30),
            max_redirects: 5,
            max_content_size: 50 * 1024 * 1024, // 50MB
            worker_count: 10,
            channel_capacity: 100,
            headers: vec![(
                "Accept".to_string(),
                "text/html,application/pdf;q=0.9,*/*;q=0.8".to_string(),
            )],
        }
    }
}

impl ScoutConfig {
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count.max(1);
        self
    }

    pub fn with_max_content_size(mut self, max_content_size: usize) -> Self {
        self.max_content_size = max_content_size;
        self
    }

    pub fn with_header(mut self, key: String, value: String) -> Self {
        self.headers.push((key, value));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_count_never_zero() {
        let config = ScoutConfig::default().with_worker_count(0);
        assert_eq!(config.worker_count, 1);
    }

    #[test]
    fn test_defaults() {
        let config = ScoutConfig::default();
        assert_eq!(config.worker_count, 10);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
