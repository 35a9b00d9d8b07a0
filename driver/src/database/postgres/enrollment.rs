use sqlx::PgConnection;

use kernel::interface::query::EnrollmentQuery;
use kernel::prelude::entity::{Enrollment, EnrollmentId, EnrollmentName, UserId};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresEnrollmentRepository;

#[async_trait::async_trait]
impl EnrollmentQuery for PostgresEnrollmentRepository {
    type Transaction = PostgresTransaction;
    async fn find_by_user_id(
        &self,
        con: &mut PostgresTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Enrollment>, KernelError> {
        PgEnrollmentInternal::find_by_user_id(con, user_id).await
    }
}

#[derive(sqlx::FromRow)]
struct EnrollmentRow {
    id: i32,
    name: String,
    user_id: i32,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Enrollment::new(
            EnrollmentId::new(row.id),
            EnrollmentName::new(row.name),
            UserId::new(row.user_id),
        )
    }
}

pub(in crate::database) struct PgEnrollmentInternal;

impl PgEnrollmentInternal {
    async fn find_by_user_id(
        con: &mut PgConnection,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Enrollment>, KernelError> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            // language=postgresql
            r#"
            SELECT id, name, user_id
            FROM enrollments
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Enrollment::from))
    }
}
