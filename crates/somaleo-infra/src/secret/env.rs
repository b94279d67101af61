//! Environment variable credential reader.
//!
//! The variable must be present, valid Unicode, and non-empty. Anything
//! else is reported as [`LlmError::MissingCredential`] naming the variable.

use secrecy::SecretString;

use somaleo_types::llm::LlmError;

/// Read the API key from the environment variable `var`.
pub fn read_api_key(var: &str) -> Result<SecretString, LlmError> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(SecretString::from(value)),
        Ok(_) => Err(LlmError::MissingCredential(var.to_string())),
        Err(std::env::VarError::NotPresent) => Err(LlmError::MissingCredential(var.to_string())),
        Err(std::env::VarError::NotUnicode(_)) => {
            // A key that is not valid Unicode cannot be sent as a header.
            Err(LlmError::MissingCredential(var.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_read_existing_key() {
        // SAFETY: The variable name is unique to this test.
        unsafe { std::env::set_var("SOMALEO_TEST_KEY_PRESENT", "sk-or-test-123") };

        let key = read_api_key("SOMALEO_TEST_KEY_PRESENT").unwrap();
        assert_eq!(key.expose_secret(), "sk-or-test-123");

        // SAFETY: The variable was set above by this test only.
        unsafe { std::env::remove_var("SOMALEO_TEST_KEY_PRESENT") };
    }

    #[test]
    fn test_missing_key_names_the_variable() {
        let err = read_api_key("SOMALEO_TEST_KEY_NEVER_SET").unwrap_err();
        assert!(matches!(err, LlmError::MissingCredential(_)));
        assert_eq!(err.to_string(), "SOMALEO_TEST_KEY_NEVER_SET not set");
    }

    #[test]
    fn test_empty_key_is_missing() {
        // SAFETY: The variable name is unique to this test.
        unsafe { std::env::set_var("SOMALEO_TEST_KEY_EMPTY", "") };

        let err = read_api_key("SOMALEO_TEST_KEY_EMPTY").unwrap_err();
        assert!(matches!(err, LlmError::MissingCredential(_)));

        // SAFETY: The variable was set above by this test only.
        unsafe { std::env::remove_var("SOMALEO_TEST_KEY_EMPTY") };
    }
}
