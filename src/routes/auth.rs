use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};

use super::error::ApiError;

/// Token that admin writes must present as `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct AdminToken(pub String);

/// Extracting this guards a handler behind the admin token.
pub struct Authenticated;

impl FromRequest for Authenticated {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(expected) = req.app_data::<web::Data<AdminToken>>() else {
            log::error!("No admin token configured, rejecting write");
            return ready(Err(ApiError::Unauthorized));
        };

        let presented = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|v| v.trim());

        ready(match presented {
            Some(token) if !expected.0.is_empty() && token == expected.0 => Ok(Authenticated),
            _ => Err(ApiError::Unauthorized),
        })
    }
}
