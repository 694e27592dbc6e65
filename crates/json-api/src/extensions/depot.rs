//! Depot helper extensions.

use std::any::{Any, type_name};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Typed depot lookups that fail as HTTP errors.
pub(crate) trait DepotExt {
    /// Injected value of type `T`, or a logged 500 when nothing was injected.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            error!("depot has no {}", type_name::<T>());

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_value_is_internal_error() {
        let depot = Depot::new();

        let result = depot.obtain_or_500::<String>();

        assert!(
            matches!(result, Err(ref e) if e.code == StatusCode::INTERNAL_SERVER_ERROR),
            "expected 500, got {result:?}"
        );
    }

    #[test]
    fn injected_value_is_returned() {
        let mut depot = Depot::new();
        depot.inject(String::from("widgets"));

        assert_eq!(depot.obtain_or_500::<String>().ok(), Some(&String::from("widgets")));
    }
}
