//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, http::header, prelude::*};

use widgets_app::{context::AppContext, domain::widgets::MockWidgetsService};

use crate::{catcher::json_catcher, state::State};

pub(crate) fn state_with_widgets(widgets: MockWidgetsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(widgets)))
}

pub(crate) fn widgets_service(widgets: MockWidgetsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_widgets(widgets)))
            .push(route),
    )
    .catcher(json_catcher())
}

pub(crate) fn has_json_content_type(res: &Response) -> bool {
    res.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}
