use crate::error::{AppError, AppResult};
use crate::models::SessionUser;
use crate::services::SessionService;
use actix_web::http::{Method, header};
use actix_web::{
    Error, HttpMessage, HttpRequest, ResponseError,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};

/// Routes under the API prefix that work without a session
const PUBLIC_API_PATHS: [&str; 1] = ["/api/mbl/login"];

const PROTECTED_PREFIX: &str = "/api/mbl/";

fn requires_session(path: &str) -> bool {
    path.starts_with(PROTECTED_PREFIX) && !PUBLIC_API_PATHS.contains(&path)
}

/// Resolves the session cookie (or a bearer token) into a [`SessionUser`]
/// stored in the request extensions.
///
/// API routes answer 401 without a valid session. Everything else passes
/// through, so HTML pages can decide to redirect on their own.
pub struct SessionMiddleware {
    session_service: SessionService,
}

impl SessionMiddleware {
    pub fn new(session_service: SessionService) -> Self {
        Self { session_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service,
            session_service: self.session_service.clone(),
        }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: S,
    session_service: SessionService,
}

impl<S> SessionMiddlewareService<S> {
    fn token_from(&self, req: &ServiceRequest) -> Option<String> {
        if let Some(cookie) = req.cookie(self.session_service.cookie_name())
            && !cookie.value().is_empty()
        {
            return Some(cookie.value().to_string());
        }

        req.headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string)
    }
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
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
        // CORS preflight
        if req.method() == Method::OPTIONS {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) });
        }

        let session = match self.token_from(&req) {
            Some(token) => match self.session_service.authenticate(&token) {
                Ok(session) => Some(session),
                Err(e) => {
                    log::debug!("Rejected session token on {}: {e}", req.path());
                    None
                }
            },
            None => None,
        };

        match session {
            Some(session) => {
                req.extensions_mut().insert(session);
            }
            None if requires_session(req.path()) => {
                let response = AppError::AuthError("Sesión inválida o expirada".to_string())
                    .error_response();
                return Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) });
            }
            None => {}
        }

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
    }
}

/// The session attached by [`SessionMiddleware`], or 401.
pub fn current_user(req: &HttpRequest) -> AppResult<SessionUser> {
    req.extensions()
        .get::<SessionUser>()
        .cloned()
        .ok_or_else(|| AppError::AuthError("Sesión inválida o expirada".to_string()))
}
