use async_trait::async_trait;
use roman_model::{RomanInput, RomanNumeral};

use crate::error::ApiError;

/// Conversion API handler.
///
/// This trait abstracts the backend implementation, allowing users to:
/// - Use the provided `ConverterAdapter`
/// - Implement custom handlers with additional logic (auth, caching, etc.)
#[async_trait]
pub trait ApiHandler: Send + Sync + 'static {
    /// Convert a parsed request value to its Roman numeral.
    async fn to_roman(&self, input: RomanInput) -> Result<RomanNumeral, ApiError>;
}
