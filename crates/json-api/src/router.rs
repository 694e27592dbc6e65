//! App Router

use salvo::{Request, Router, routing::PathState};

use crate::widgets;

pub(crate) fn app_router() -> Router {
    Router::with_path("v1/widgets")
        .push(
            Router::new()
                .filter_fn(has_name_query)
                .get(widgets::get::handler),
        )
        .get(widgets::index::handler)
        .post(widgets::create::handler)
        .put(widgets::update::handler)
        .delete(widgets::delete::handler)
}

/// `GET /v1/widgets?name=..` looks up one widget, without `name` it lists them all.
fn has_name_query(req: &mut Request, _path: &mut PathState) -> bool {
    req.query::<String>("name").is_some()
}
