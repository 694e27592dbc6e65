//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Map any error to a logged internal server error.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn errors_become_500() {
        let result: Result<(), &str> = Err("boom");

        let mapped = result.or_500("doing something");

        assert!(
            matches!(mapped, Err(ref e) if e.code == StatusCode::INTERNAL_SERVER_ERROR),
            "expected 500, got {mapped:?}"
        );
    }

    #[test]
    fn ok_values_pass_through() {
        let result: Result<u8, &str> = Ok(7);

        assert_eq!(result.or_500("doing something").ok(), Some(7));
    }
}
