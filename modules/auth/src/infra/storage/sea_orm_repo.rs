//! SeaORM-backed implementation of the `AuthRepository` port.
//!
//! Generic over `C: ConnectionTrait` so it can run against a pooled
//! `DatabaseConnection` or a transaction.

use anyhow::Context;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, Set, SqlErr,
};

use crate::contract::model::User;
use crate::domain::repo::{AuthRepository, EmailTaken, NewUserRecord, StoredUser};
use crate::infra::storage::entity::{token, user};

pub struct SeaOrmAuthRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmAuthRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> AuthRepository for SeaOrmAuthRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn email_exists(&self, email: &str) -> anyhow::Result<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .count(&self.conn)
            .await
            .context("email_exists failed")?;
        Ok(count > 0)
    }

    async fn insert_user(&self, record: NewUserRecord) -> anyhow::Result<User> {
        let am = user::ActiveModel {
            id: NotSet,
            name: Set(record.name),
            email: Set(record.email),
            password_hash: Set(record.password_hash),
            created_at: Set(record.created_at),
            updated_at: Set(record.created_at),
        };
        match am.insert(&self.conn).await {
            Ok(model) => Ok(model.into()),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(EmailTaken.into())
            }
            Err(e) => Err(anyhow::Error::new(e).context("insert_user failed")),
        }
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<StoredUser>> {
        let found = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("find_by_email failed")?;
        Ok(found.map(|m| StoredUser {
            password_hash: m.password_hash.clone(),
            user: m.into(),
        }))
    }

    async fn insert_token(
        &self,
        user_id: i32,
        token_hash: &str,
        at: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        let am = token::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            token_hash: Set(token_hash.to_string()),
            created_at: Set(at),
            last_used_at: Set(None),
        };
        am.insert(&self.conn).await.context("insert_token failed")?;
        Ok(())
    }

    async fn user_for_token(
        &self,
        token_hash: &str,
        at: DateTime<Utc>,
    ) -> anyhow::Result<Option<User>> {
        let found = token::Entity::find()
            .filter(token::Column::TokenHash.eq(token_hash))
            .find_also_related(user::Entity)
            .one(&self.conn)
            .await
            .context("user_for_token failed")?;

        let Some((tok, Some(owner))) = found else {
            return Ok(None);
        };

        let mut am: token::ActiveModel = tok.into();
        am.last_used_at = Set(Some(at));
        am.update(&self.conn)
            .await
            .context("touch token failed")?;

        Ok(Some(owner.into()))
    }

    async fn delete_token(&self, token_hash: &str) -> anyhow::Result<bool> {
        let res = token::Entity::delete_many()
            .filter(token::Column::TokenHash.eq(token_hash))
            .exec(&self.conn)
            .await
            .context("delete_token failed")?;
        Ok(res.rows_affected > 0)
    }
}
