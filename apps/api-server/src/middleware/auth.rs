//! Authentication gate.
//!
//! Wraps the protected scope and rejects any request that does not
//! carry a valid `Authorization: Bearer <token>` header with a 401
//! before the handler runs. Requests that pass proceed unmodified.

use std::future::{Ready, ready};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header;
use actix_web::{Error, ResponseError, web};
use futures::future::LocalBoxFuture;

use userstore_core::error::AuthError;

use crate::middleware::error::AppError;
use crate::state::AppState;

pub struct AuthGate;

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateService { service }))
    }
}

pub struct AuthGateService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match check_bearer(&req) {
            Ok(()) => {
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Err(auth_err) => {
                let (req, _payload) = req.into_parts();
                let response = AppError::from(auth_err)
                    .error_response()
                    .map_into_right_body();
                Box::pin(ready(Ok(ServiceResponse::new(req, response))))
            }
        }
    }
}

/// Extract and validate the bearer token without touching the request.
fn check_bearer(req: &ServiceRequest) -> Result<(), AuthError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;

    let header_str = header_value
        .to_str()
        .map_err(|_| AuthError::InvalidScheme)?;

    let token = match header_str.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() => token,
        _ => return Err(AuthError::InvalidScheme),
    };

    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AuthError::InvalidToken("token service unavailable".to_string()))?;

    state.tokens.validate_token(token).map(|_| ())
}
