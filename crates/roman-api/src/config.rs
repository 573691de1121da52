#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Largest integer accepted by `/roman` (default: 100 000).
    ///
    /// Numerals grow by one `M` per thousand, so this bounds the response size.
    pub max_input: i64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { max_input: 100_000 }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_input < 1 {
            return Err(format!("max_input must be positive, got {}", self.max_input));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_bounds() {
        assert!(ApiConfig::default().validate().is_ok());
        assert!(ApiConfig { max_input: 1 }.validate().is_ok());
        assert!(ApiConfig { max_input: 0 }.validate().is_err());
    }
}
