use super::{dto::JwtClaims, User};
use anyhow::anyhow;
use axum::{
    body::Body,
    http::{header::AUTHORIZATION, HeaderValue, Request, Response, StatusCode},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tower_http::validate_request::ValidateRequest;

///
/// Middleware that validates JWT in Authorization header.
/// If Authorization is correct [User] is added to request extensions.
///
#[derive(Clone)]
pub struct JwtAuthorizationValidator {
    inner: Arc<JwtAuthorizationValidatorInner>,
}

struct JwtAuthorizationValidatorInner {
    key: DecodingKey,
    validation: Validation,
}

impl JwtAuthorizationValidator {
    pub fn new(key: DecodingKey, algorithms: Vec<Algorithm>) -> Self {
        let mut validation = Validation::default();
        validation.algorithms = algorithms;

        let inner = JwtAuthorizationValidatorInner { key, validation };

        Self {
            inner: Arc::new(inner),
        }
    }

    fn try_parse_authorization_header(
        &self,
        authorization_header: Option<&HeaderValue>,
    ) -> anyhow::Result<User> {
        let Some(authorization_header) = authorization_header else {
            return Err(anyhow!("missing Authorization header"));
        };
        let Ok(authorization_value) = authorization_header.to_str() else {
            return Err(anyhow!("illegal character in Authorization header"));
        };
        if !authorization_value.starts_with("Bearer") {
            return Err(anyhow!("unsupported authorization type"));
        }
        let Some(token) = authorization_value.get("Bearer ".len()..) else {
            return Err(anyhow!("invalid jwt"));
        };
        let token_data =
            jsonwebtoken::decode::<JwtClaims>(token, &self.inner.key, &self.inner.validation)?;

        Ok(User::new(token_data.claims.sub, token_data.claims.role))
    }
}

impl<B> ValidateRequest<B> for JwtAuthorizationValidator {
    type ResponseBody = Body;

    fn validate(&mut self, request: &mut Request<B>) -> Result<(), Response<Self::ResponseBody>> {
        let authorization_header = request.headers().get(AUTHORIZATION);

        let user = self
            .try_parse_authorization_header(authorization_header)
            .map_err(|err| {
                tracing::warn!(%err, "auth error");
                Response::builder()
                    .status(StatusCode::UNAUTHORIZED)
                    .body(Body::empty())
                    .unwrap()
            })?;

        request.extensions_mut().insert(user);

        Ok(())
    }
}
