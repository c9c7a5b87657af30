use crate::handler::{AppContext, ProxyRequest, ProxyResponse, handle};
use axum::{
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use tracing::{info, warn};
use uuid::Uuid;

/// Feeds the raw HTTP body through the proxy handler, the way API Gateway
/// would, and replays the proxy response as HTTP.
pub async fn inference(State(ctx): State<AppContext>, body: String) -> Response {
    let request_id = Uuid::new_v4().to_string();
    info!("Received HTTP inference request {}", request_id);

    let request = ProxyRequest::from_body(body).with_request_id(request_id);
    let response = handle(&ctx, request).await;

    into_http_response(response)
}

pub fn into_http_response(response: ProxyResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in response.headers {
        match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => warn!("Dropping header that is not valid HTTP"),
        }
    }

    (status, headers, response.body).into_response()
}
