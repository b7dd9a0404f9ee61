use std::collections::HashMap;

/// Trait for providing environment variable access
///
/// Settings are read through this seam so tests can inject values without
/// touching process-global environment state.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production environment provider that reads from system environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Test environment provider with configurable variables
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

impl MockEnvironment {
    pub fn empty() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_environment_returns_configured_values() {
        let provider = MockEnvironment::empty()
            .with_var("SESSION_SECRET", "s3cret")
            .with_var("STORAGE_BUCKET", "uploads");

        assert_eq!(provider.get_var("SESSION_SECRET"), Some("s3cret".to_string()));
        assert_eq!(provider.get_var("STORAGE_BUCKET"), Some("uploads".to_string()));
        assert_eq!(provider.get_var("DATABASE_URL"), None);
    }
}
