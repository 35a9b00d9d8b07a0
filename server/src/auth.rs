use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use error_stack::Report;

use application::service::AuthenticateService;
use application::transfer::AuthenticateDto;
use kernel::KernelError;

use crate::error::ErrorStatus;
use crate::handler::AppModule;

/// User owning the bearer token of the request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct AuthorizedUser(pub i32);

#[async_trait]
impl FromRequestParts<AppModule> for AuthorizedUser {
    type Rejection = ErrorStatus;

    async fn from_request_parts(
        parts: &mut Parts,
        module: &AppModule,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, module)
                .await
                .map_err(|rejection| {
                    Report::new(KernelError::Unauthorized).attach_printable(rejection.to_string())
                })?;
        let user = module
            .pgpool()
            .authenticate(AuthenticateDto {
                token: bearer.token().to_string(),
            })
            .await?;
        Ok(Self(user.user_id))
    }
}
