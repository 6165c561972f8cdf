//! Unique-token generation
//!
//! Every lock request is identified by an opaque token. Tokens must have
//! negligible collision probability across the process's lifetime and
//! across concurrently running processes.

use uuid::Uuid;

/// Produces opaque unique identifiers for lock requests
///
/// Abstracted behind a trait so tests can substitute deterministic tokens.
pub trait TokenGenerator: Send + Sync {
    /// Generate a fresh token
    fn generate(&self) -> String;
}

/// Default token generator backed by UUID v4
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidTokenGenerator;

impl TokenGenerator for UuidTokenGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        let generator = UuidTokenGenerator;
        let tokens: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();
        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_token_format() {
        let token = UuidTokenGenerator.generate();
        assert!(!token.is_empty());
        assert!(Uuid::parse_str(&token).is_ok());
    }
}
