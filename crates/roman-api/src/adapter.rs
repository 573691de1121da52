use async_trait::async_trait;
use roman_model::{RomanInput, RomanNumeral};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::handler::ApiHandler;

/// Handler that converts in-process with the greedy table from `roman-model`.
#[derive(Debug, Clone, Default)]
pub struct ConverterAdapter {
    cfg: ApiConfig,
}

impl ConverterAdapter {
    pub fn new(cfg: ApiConfig) -> Self {
        Self { cfg }
    }
}

#[async_trait]
impl ApiHandler for ConverterAdapter {
    async fn to_roman(&self, input: RomanInput) -> Result<RomanNumeral, ApiError> {
        let input = input.check_max(self.cfg.max_input)?;
        Ok(input.to_roman())
    }
}
