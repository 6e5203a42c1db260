mod health_check;
mod root;

use axum::Router;

pub fn router() -> Router {
    Router::new()
        .merge(root::router())
        .merge(health_check::router())
}

#[cfg(test)]
pub(crate) mod test_util {
    use axum::body::Body;
    use axum::http::{Method, Request, Response};
    use tower::ServiceExt;

    pub async fn call(method: Method, uri: &str) -> (Response<()>, String) {
        let response = crate::http::app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let (parts, body) = response.into_parts();
        let bytes = hyper::body::to_bytes(body).await.unwrap();

        (
            Response::from_parts(parts, ()),
            String::from_utf8(bytes.to_vec()).unwrap(),
        )
    }
}
