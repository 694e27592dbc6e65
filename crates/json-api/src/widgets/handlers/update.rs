//! Update Widget Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use tracing::info;

use widgets_app::domain::widgets::validation::WidgetDraft;

use crate::{
    extensions::*,
    state::State,
    widgets::{
        errors::{WidgetsError, into_widgets_error},
        requests::WidgetRequest,
        responses::WidgetResponse,
    },
};

/// Update Widget Handler
///
/// Replaces description and price of the widget named in the body. The name
/// itself is never changed.
#[endpoint(
    tags("widgets"),
    summary = "Update Widget",
    responses(
        (status_code = StatusCode::OK, description = "Widget updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid payload"),
        (status_code = StatusCode::NOT_FOUND, description = "Widget not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<WidgetRequest>,
    depot: &mut Depot,
) -> Result<Json<WidgetResponse>, WidgetsError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let update = WidgetDraft::from(json.into_inner()).into_update()?;
    let name = update.name.clone();

    info!(widget_name = %name, "updating widget");

    let updated = state
        .app
        .widgets
        .update_widget(update)
        .await
        .map_err(|error| into_widgets_error(error, &name))?;

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use widgets_app::domain::widgets::{
        MockWidgetsService, WidgetsServiceError, data::WidgetUpdate, records::WidgetRecord,
    };

    use crate::test_helpers::widgets_service;

    use super::*;

    fn make_service(widgets: MockWidgetsService) -> Service {
        widgets_service(widgets, Router::with_path("v1/widgets").put(handler))
    }

    #[tokio::test]
    async fn test_update_widget_keeps_stored_name() -> TestResult {
        let mut widgets = MockWidgetsService::new();

        widgets
            .expect_update_widget()
            .once()
            .withf(|update| {
                *update
                    == WidgetUpdate {
                        name: "widget a".to_owned(),
                        description: "an updated widget".to_owned(),
                        price: Decimal::new(3050, 2),
                    }
            })
            .return_once(|_| {
                Ok(WidgetRecord {
                    name: "Widget A".to_owned(),
                    description: "an updated widget".to_owned(),
                    price: Decimal::new(3050, 2),
                })
            });

        let mut res = TestClient::put("http://example.com/v1/widgets")
            .json(&json!({ "name": "widget a", "description": "an updated widget", "price": 30.5 }))
            .send(&make_service(widgets))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            r#"{"name":"Widget A","description":"an updated widget","price":30.50}"#
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_widget_not_found_returns_404() -> TestResult {
        let mut widgets = MockWidgetsService::new();

        widgets
            .expect_update_widget()
            .once()
            .return_once(|_| Err(WidgetsServiceError::NotFound));

        let mut res = TestClient::put("http://example.com/v1/widgets")
            .json(&json!({ "name": "Widget Z", "description": "an updated widget", "price": 30 }))
            .send(&make_service(widgets))
            .await;

        let body: String = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body, "Widget with name=Widget Z not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_widget_invalid_payload_returns_400() -> TestResult {
        let mut widgets = MockWidgetsService::new();

        widgets.expect_update_widget().never();

        let mut res = TestClient::put("http://example.com/v1/widgets")
            .json(&json!({ "name": "Widget A", "description": "a sample widget", "price": 0.99 }))
            .send(&make_service(widgets))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body, json!(["price: must be greater than or equal to 1.00"]));

        Ok(())
    }
}
