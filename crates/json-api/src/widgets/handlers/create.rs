//! Create Widget Handler

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

/// Create Widget Handler
#[endpoint(
    tags("widgets"),
    summary = "Create Widget",
    responses(
        (status_code = StatusCode::OK, description = "Widget created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid payload or widget already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<WidgetRequest>,
    depot: &mut Depot,
) -> Result<Json<WidgetResponse>, WidgetsError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let widget = WidgetDraft::from(json.into_inner()).into_new_widget()?;
    let name = widget.name.clone();

    info!(widget_name = %name, "creating widget");

    let created = state
        .app
        .widgets
        .create_widget(widget)
        .await
        .map_err(|error| into_widgets_error(error, &name))?;

    Ok(Json(created.into()))
}
