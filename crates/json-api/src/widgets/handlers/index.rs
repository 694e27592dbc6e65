//! List Widgets Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{
    extensions::*,
    state::State,
    widgets::{errors::WidgetsError, responses::WidgetResponse},
};

/// List Widgets Handler
///
/// Returns every widget, ordered by name.
#[endpoint(
    tags("widgets"),
    summary = "List Widgets",
    responses(
        (status_code = StatusCode::OK, description = "All widgets"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<WidgetResponse>>, WidgetsError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    info!("listing widgets");

    let widgets = state
        .app
        .widgets
        .list_widgets()
        .await
        .or_500("failed to list widgets")?;

    Ok(Json(widgets.into_iter().map(WidgetResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use widgets_app::domain::widgets::{MockWidgetsService, WidgetsServiceError};

    use crate::test_helpers::{has_json_content_type, widgets_service};

    use super::{super::tests::*, *};

    fn make_service(widgets: MockWidgetsService) -> Service {
        widgets_service(widgets, Router::with_path("v1/widgets").get(handler))
    }

    #[tokio::test]
    async fn test_list_widgets_returns_all_widgets() -> TestResult {
        let mut widgets = MockWidgetsService::new();

        widgets.expect_list_widgets().once().return_once(|| {
            Ok(vec![
                make_widget("Widget A", Decimal::new(2000, 2)),
                make_widget("Widget B", Decimal::new(125, 1)),
            ])
        });

        let mut res = TestClient::get("http://example.com/v1/widgets")
            .send(&make_service(widgets))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!([
                { "name": "Widget A", "description": "a sample widget", "price": 20.00 },
                { "name": "Widget B", "description": "a sample widget", "price": 12.50 },
            ])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_list_widgets_empty() -> TestResult {
        let mut widgets = MockWidgetsService::new();

        widgets
            .expect_list_widgets()
            .once()
            .return_once(|| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/v1/widgets")
            .send(&make_service(widgets))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, "[]");

        Ok(())
    }

    #[tokio::test]
    async fn test_list_widgets_storage_failure_returns_json_500() -> TestResult {
        let mut widgets = MockWidgetsService::new();

        widgets
            .expect_list_widgets()
            .once()
            .return_once(|| Err(WidgetsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let mut res = TestClient::get("http://example.com/v1/widgets")
            .send(&make_service(widgets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(has_json_content_type(&res), "expected a JSON error body");

        let _body: String = res.take_json().await?;

        Ok(())
    }
}
