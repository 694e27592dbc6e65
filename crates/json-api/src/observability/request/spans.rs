//! Route labels for request spans and metrics.

/// Routes served by this process. Anything else is reported as `/{unmatched}`.
const KNOWN_ROUTES: [&str; 5] = [
    "/",
    "/healthcheck",
    "/metrics",
    "/v1/widgets",
    "/api-doc/openapi.json",
];

const DOCS_PREFIX: &str = "/docs";

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) route: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = route_label(path).to_owned();
    let otel_span_name = format!("{method} {route}");

    RequestSpanName {
        route,
        otel_span_name,
    }
}

/// Bounded route label for a raw request path.
///
/// Widget names travel in the query string, so paths never carry identifiers.
fn route_label(path: &str) -> &str {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    if let Some(route) = KNOWN_ROUTES.iter().copied().find(|route| *route == trimmed) {
        return route;
    }

    if trimmed == DOCS_PREFIX || trimmed.starts_with("/docs/") {
        return DOCS_PREFIX;
    }

    "/{unmatched}"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_routes_are_kept() {
        assert_eq!(route_label("/v1/widgets"), "/v1/widgets");
        assert_eq!(route_label("/v1/widgets/"), "/v1/widgets");
        assert_eq!(route_label("/healthcheck"), "/healthcheck");
        assert_eq!(route_label("/"), "/");
    }

    #[test]
    fn docs_assets_share_one_label() {
        assert_eq!(route_label("/docs"), "/docs");
        assert_eq!(route_label("/docs/swagger-ui.css"), "/docs");
    }

    #[test]
    fn unknown_paths_are_collapsed() {
        assert_eq!(route_label("/v1/widgets/Widget%20A"), "/{unmatched}");
        assert_eq!(route_label("/wp-admin"), "/{unmatched}");
    }

    #[test]
    fn span_name_combines_method_and_route() {
        let names = request_span_name("GET", "/v1/widgets");

        assert_eq!(names.route, "/v1/widgets");
        assert_eq!(names.otel_span_name, "GET /v1/widgets");
    }
}
