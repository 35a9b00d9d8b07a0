use error_stack::Report;
use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{DependOnSessionQuery, SessionQuery};
use kernel::prelude::entity::SessionToken;
use kernel::KernelError;

use crate::transfer::{AuthenticateDto, AuthenticatedUserDto};

#[async_trait::async_trait]
pub trait AuthenticateService: 'static + Sync + Send + DependOnSessionQuery {
    #[tracing::instrument(skip(self))]
    async fn authenticate(
        &self,
        dto: AuthenticateDto,
    ) -> error_stack::Result<AuthenticatedUserDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let token = SessionToken::new(dto.token);
        let session = self
            .session_query()
            .find_by_token(&mut connection, &token)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::Unauthorized).attach_printable("No session for token")
            })?;

        Ok(AuthenticatedUserDto {
            user_id: (*session.user_id()).into(),
        })
    }
}

impl<T> AuthenticateService for T where T: DependOnSessionQuery {}
