//! Configuration validation

use super::Config;

/// Validation for configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid server configuration: {0}")]
    Server(String),

    #[error("Invalid LLM configuration: {0}")]
    Llm(String),

    #[error("Invalid agent configuration: {0}")]
    Agent(String),

    #[error("Invalid queue configuration: {0}")]
    Queue(String),
}

impl ValidationError {
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }

    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    pub fn agent(message: impl Into<String>) -> Self {
        Self::Agent(message.into())
    }

    pub fn queue(message: impl Into<String>) -> Self {
        Self::Queue(message.into())
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.server.port == 0 {
            return Err(ValidationError::server("port must be > 0"));
        }
        if self.server.request_timeout_seconds == 0 {
            return Err(ValidationError::server("request_timeout_seconds must be > 0"));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ValidationError::llm("temperature must be within 0.0..=2.0"));
        }
        if self.llm.max_tokens == 0 {
            return Err(ValidationError::llm("max_tokens must be > 0"));
        }
        if self.llm.base_url.trim().is_empty() {
            return Err(ValidationError::llm("base_url must not be empty"));
        }
        if self.llm.model.trim().is_empty() {
            return Err(ValidationError::llm("model must not be empty"));
        }
        if self.agent.base_url.trim().is_empty() {
            return Err(ValidationError::agent("base_url must not be empty"));
        }
        if self.agent.max_steps == 0 {
            return Err(ValidationError::agent("max_steps must be > 0"));
        }
        if self.queue.max_workers == 0 {
            return Err(ValidationError::queue("max_workers must be > 0"));
        }
        if self.queue.max_attempts == 0 {
            return Err(ValidationError::queue("max_attempts must be > 0"));
        }
        if self.queue.backoff_multiplier < 1.0 {
            return Err(ValidationError::queue("backoff_multiplier must be >= 1.0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::Server(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_temperature() {
        let mut config = Config::default();
        config.llm.temperature = 3.5;
        assert!(matches!(config.validate(), Err(ValidationError::Llm(_))));
    }

    #[test]
    fn test_rejects_empty_agent_url() {
        let mut config = Config::default();
        config.agent.base_url = String::new();
        assert!(matches!(config.validate(), Err(ValidationError::Agent(_))));
    }

    #[test]
    fn test_rejects_zero_queue_attempts() {
        let mut config = Config::default();
        config.queue.max_attempts = 0;
        assert!(matches!(config.validate(), Err(ValidationError::Queue(_))));
    }
}
