//! Caller identification via the `X-Sharer-User-Id` header.
//!
//! The gateway in front of this service authenticates callers and forwards
//! their identity in a header. A request reaching a guarded endpoint without
//! the header means the gateway is misconfigured, so the absence is reported
//! as an internal error rather than a client fault. A header that is present
//! but not an integer is the client's problem.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};

use crate::domain::{Error, UserId};

/// Name of the forwarded-identity header.
pub const SHARER_HEADER: &str = "X-Sharer-User-Id";

/// The authenticated caller, extracted from `X-Sharer-User-Id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerId(pub UserId);

impl SharerId {
    /// The caller as a domain user id.
    #[must_use]
    pub const fn user_id(self) -> UserId {
        self.0
    }
}

fn extract(req: &HttpRequest) -> Result<SharerId, Error> {
    let value = req
        .headers()
        .get(SHARER_HEADER)
        .ok_or_else(|| Error::internal("X-Sharer-User-Id header is missing"))?;
    let raw = value
        .to_str()
        .map_err(|_| Error::invalid_request("X-Sharer-User-Id must be ASCII"))?;
    let id = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::invalid_request("X-Sharer-User-Id must be an integer"))?;
    Ok(SharerId(UserId(id)))
}

impl FromRequest for SharerId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;
    use crate::domain::ErrorCode;

    #[test]
    fn a_numeric_header_identifies_the_caller() {
        let req = TestRequest::default()
            .insert_header((SHARER_HEADER, "42"))
            .to_http_request();

        let sharer = extract(&req).expect("caller identified");
        assert_eq!(sharer.user_id(), UserId(42));
    }

    #[test]
    fn a_missing_header_is_an_internal_error() {
        let req = TestRequest::default().to_http_request();

        let error = extract(&req).expect_err("header required");
        assert_eq!(error.code(), ErrorCode::InternalError);
    }

    #[test]
    fn a_non_numeric_header_is_a_client_error() {
        let req = TestRequest::default()
            .insert_header((SHARER_HEADER, "forty-two"))
            .to_http_request();

        let error = extract(&req).expect_err("integer required");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }
}
