use sqlx::PgConnection;

use kernel::interface::query::SessionQuery;
use kernel::prelude::entity::{Session, SessionToken, UserId};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresSessionRepository;

#[async_trait::async_trait]
impl SessionQuery for PostgresSessionRepository {
    type Transaction = PostgresTransaction;
    async fn find_by_token(
        &self,
        con: &mut PostgresTransaction,
        token: &SessionToken,
    ) -> error_stack::Result<Option<Session>, KernelError> {
        PgSessionInternal::find_by_token(con, token).await
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    token: String,
    user_id: i32,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Session::new(SessionToken::new(row.token), UserId::new(row.user_id))
    }
}

pub(in crate::database) struct PgSessionInternal;

impl PgSessionInternal {
    async fn find_by_token(
        con: &mut PgConnection,
        token: &SessionToken,
    ) -> error_stack::Result<Option<Session>, KernelError> {
        let row = sqlx::query_as::<_, SessionRow>(
            // language=postgresql
            r#"
            SELECT token, user_id
            FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Session::from))
    }
}
