use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, DeleteUser, UpdateUser},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        // Email uniqueness is a hard constraint; report it as a conflict
        // rather than a bare database error.
        if self.find_by_email(&event.email).await?.is_some() {
            return Err(AppError::DuplicateEmail(event.email));
        }

        let user_id = UserId::new();
        sqlx::query(
            r#"
                INSERT INTO users (user_id, user_name, email)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(user_id)
        .bind(&event.user_name)
        .bind(&event.email)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(User {
            user_id,
            user_name: event.user_name,
            email: event.email,
        })
    }

    async fn update(&self, event: UpdateUser) -> AppResult<()> {
        if let Some(email) = &event.email {
            if let Some(existing) = self.find_by_email(email).await? {
                if existing.user_id != event.user_id {
                    return Err(AppError::DuplicateEmail(email.clone()));
                }
            }
        }

        let res = sqlx::query(
            r#"
                UPDATE users
                SET user_name = COALESCE($2, user_name),
                    email = COALESCE($3, email)
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .bind(event.user_name)
        .bind(event.email)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "user {} not found",
                event.user_id
            )));
        }
        Ok(())
    }

    async fn delete(&self, event: DeleteUser) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(event.user_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "user {} not found",
                event.user_id
            )));
        }
        Ok(())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email
                FROM users
                ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
