//! JSON Error Catcher

use salvo::{catcher::Catcher, http::ResBody, prelude::*};

/// Catcher that renders status-only error responses as a JSON string.
pub(crate) fn json_catcher() -> Catcher {
    Catcher::default().hoop(render_json_error)
}

#[handler]
async fn render_json_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let code = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    let brief = match res.take_body() {
        ResBody::Error(error) => error.brief,
        _ => code.canonical_reason().unwrap_or("Error").to_owned(),
    };

    res.status_code(code);
    res.render(Json(brief));

    ctrl.skip_rest();
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::has_json_content_type;

    use super::*;

    #[handler]
    async fn fail_with_status(res: &mut Response) {
        res.render(StatusError::internal_server_error().brief("storage unavailable"));
    }

    #[tokio::test]
    async fn status_errors_render_as_json_without_accept_header() -> TestResult {
        let service =
            Service::new(Router::with_path("boom").get(fail_with_status)).catcher(json_catcher());

        let mut res = TestClient::get("http://example.com/boom").send(&service).await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(has_json_content_type(&res), "expected a JSON error body");

        let body: String = res.take_json().await?;

        assert_eq!(body, "storage unavailable");

        Ok(())
    }

    #[tokio::test]
    async fn unmatched_routes_render_as_json() -> TestResult {
        let service =
            Service::new(Router::with_path("boom").get(fail_with_status)).catcher(json_catcher());

        let mut res = TestClient::get("http://example.com/nowhere").send(&service).await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(has_json_content_type(&res), "expected a JSON error body");

        let _body: String = res.take_json().await?;

        Ok(())
    }
}
