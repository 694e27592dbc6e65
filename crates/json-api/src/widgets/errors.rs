//! Widget Errors

use salvo::{
    http::StatusError,
    oapi::{Components, EndpointOutRegister, Operation},
    prelude::*,
    writing::Scribe,
};
use tracing::{error, info};

use widgets_app::domain::widgets::{WidgetsServiceError, validation::Violations};

/// Failure of a widgets endpoint, rendered as a JSON body.
#[derive(Debug)]
pub(crate) enum WidgetsError {
    /// Payload failed field validation.
    Invalid(Violations),

    /// No widget with the requested name.
    NotFound(String),

    /// Create target already present.
    AlreadyExists(String),

    /// Anything else, rendered as a bare status.
    Status(StatusError),
}

impl From<StatusError> for WidgetsError {
    fn from(error: StatusError) -> Self {
        Self::Status(error)
    }
}

impl From<Violations> for WidgetsError {
    fn from(violations: Violations) -> Self {
        Self::Invalid(violations)
    }
}

impl Scribe for WidgetsError {
    fn render(self, res: &mut Response) {
        match self {
            Self::Invalid(violations) => {
                res.status_code(StatusCode::BAD_REQUEST);
                res.render(Json(violations.messages()));
            }
            Self::NotFound(name) => {
                res.status_code(StatusCode::NOT_FOUND);
                res.render(Json(format!("Widget with name={name} not found")));
            }
            Self::AlreadyExists(name) => {
                res.status_code(StatusCode::BAD_REQUEST);
                res.render(Json(format!("Widget with name={name} already exists")));
            }
            Self::Status(error) => res.render(error),
        }
    }
}

impl EndpointOutRegister for WidgetsError {
    fn register(components: &mut Components, operation: &mut Operation) {
        StatusError::register(components, operation);
    }
}

/// Map a service failure for the widget named `name` in the request.
pub(crate) fn into_widgets_error(error: WidgetsServiceError, name: &str) -> WidgetsError {
    match error {
        WidgetsServiceError::NotFound => {
            info!(widget_name = %name, "widget not found");

            WidgetsError::NotFound(name.to_owned())
        }
        WidgetsServiceError::AlreadyExists => {
            info!(widget_name = %name, "widget already exists");

            WidgetsError::AlreadyExists(name.to_owned())
        }
        WidgetsServiceError::MissingRequiredData | WidgetsServiceError::InvalidData => {
            StatusError::bad_request()
                .brief("Invalid widget payload")
                .into()
        }
        WidgetsServiceError::Sql(source) => {
            error!(widget_name = %name, "widget storage failure: {source}");

            StatusError::internal_server_error().into()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn fail_with_storage_error(res: &mut Response) {
        into_widgets_error(WidgetsServiceError::Sql(sqlx::Error::PoolClosed), "Widget A").render(res);
    }

    #[handler]
    async fn fail_with_not_found(res: &mut Response) {
        into_widgets_error(WidgetsServiceError::NotFound, "Widget A").render(res);
    }

    #[handler]
    async fn fail_with_check_violation(res: &mut Response) {
        into_widgets_error(WidgetsServiceError::InvalidData, "Widget A").render(res);
    }

    #[tokio::test]
    async fn storage_errors_render_500() {
        let service = Service::new(Router::new().get(fail_with_storage_error));

        let res = TestClient::get("http://example.com/").send(&service).await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn storage_constraint_errors_render_400() {
        let service = Service::new(Router::new().get(fail_with_check_violation));

        let res = TestClient::get("http://example.com/").send(&service).await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn not_found_renders_json_string() -> TestResult {
        let service = Service::new(Router::new().get(fail_with_not_found));

        let mut res = TestClient::get("http://example.com/").send(&service).await;
        let body: String = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body, "Widget with name=Widget A not found");

        Ok(())
    }
}
