//! Delete Widget Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use tracing::info;

use crate::{
    extensions::*,
    state::State,
    widgets::{
        errors::{WidgetsError, into_widgets_error},
        responses::WidgetResponse,
    },
};

/// Delete Widget Handler
///
/// Deletes the widget matching `name`, ignoring case, and returns it.
#[endpoint(
    tags("widgets"),
    summary = "Delete Widget",
    responses(
        (status_code = StatusCode::OK, description = "Widget deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing name"),
        (status_code = StatusCode::NOT_FOUND, description = "Widget not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    name: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<WidgetResponse>, WidgetsError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let name = name.into_inner();

    info!(widget_name = %name, "deleting widget");

    let deleted = state
        .app
        .widgets
        .delete_widget(name.clone())
        .await
        .map_err(|error| into_widgets_error(error, &name))?;

    Ok(Json(deleted.into()))
}
