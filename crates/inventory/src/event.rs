//! Translation between Lambda HTTP requests and platform-neutral events.

use std::collections::HashMap;

use lambda_http::{http::StatusCode, Body, Request, RequestExt, Response};

use inventory_core::inventory::{ApiResponse, InboundEvent};

/// Builds a platform-neutral event from a Lambda HTTP request.
pub fn event_from_request(request: Request) -> InboundEvent {
    // API Gateway reports the resource path without the stage prefix.
    let path = match request.raw_http_path() {
        "" => request.uri().path().to_string(),
        raw => raw.to_string(),
    };

    let mut query_parameters = HashMap::new();
    for (key, value) in request.query_string_parameters().iter() {
        query_parameters
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }

    let body = match request.body() {
        Body::Empty => None,
        Body::Text(text) => Some(text.clone().into_bytes()),
        Body::Binary(bytes) => Some(bytes.clone()),
    };

    InboundEvent {
        method: request.method().as_str().to_string(),
        path,
        query_parameters,
        body,
    }
}

/// Converts a response envelope into a Lambda HTTP response.
pub fn into_http_response(response: ApiResponse) -> Result<Response<Body>, lambda_http::Error> {
    let status = StatusCode::from_u16(response.status_code)?;
    let mut builder = Response::builder().status(status);

    for (name, value) in &response.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let body = match response.body {
        Some(text) => Body::Text(text),
        None => Body::Empty,
    };

    Ok(builder.body(body)?)
}
