use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Reuses a well-formed incoming `x-request-id`, otherwise generates a UUID.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeRequestUuidOrHeader;

impl MakeRequestId for MakeRequestUuidOrHeader {
    fn make_request_id<B>(&mut self, request: &Request<B>) -> Option<RequestId> {
        if let Some(existing) = request.headers().get(REQUEST_ID_HEADER).filter(|v| !v.is_empty()) {
            return Some(RequestId::new(existing.clone()));
        }

        HeaderValue::from_str(&Uuid::new_v4().to_string()).ok().map(RequestId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_uuid_when_header_missing() {
        let request = Request::builder().body(()).unwrap();
        let id = MakeRequestUuidOrHeader.make_request_id(&request).unwrap();

        let value = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(value).is_ok());
    }

    #[test]
    fn test_keeps_incoming_header() {
        let request = Request::builder().header(REQUEST_ID_HEADER, "abc-123").body(()).unwrap();
        let id = MakeRequestUuidOrHeader.make_request_id(&request).unwrap();

        assert_eq!(id.header_value(), "abc-123");
    }
}
