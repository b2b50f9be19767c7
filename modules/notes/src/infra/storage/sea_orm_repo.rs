//! SeaORM-backed repository implementation for the notes port.

use anyhow::Context;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::contract::model::Note;
use crate::domain::repo::{NewNoteRecord, NotesRepository};
use crate::infra::storage::entity::{ActiveModel as NoteAM, Column, Entity as NoteEntity};

pub struct SeaOrmNotesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmNotesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> NotesRepository for SeaOrmNotesRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_owner(&self, user_id: i32) -> anyhow::Result<Vec<Note>> {
        let rows = NoteEntity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.conn)
            .await
            .context("find_by_owner failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Note>> {
        let found = NoteEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn insert(&self, record: NewNoteRecord) -> anyhow::Result<Note> {
        let m = NoteAM {
            id: NotSet,
            user_id: Set(record.user_id),
            title: Set(record.title),
            content: Set(record.content),
            created_at: Set(record.created_at),
            updated_at: Set(record.created_at),
        };
        let model = m.insert(&self.conn).await.context("insert failed")?;
        Ok(model.into())
    }

    async fn update(&self, note: Note) -> anyhow::Result<Note> {
        let m = NoteAM {
            id: Set(note.id),
            user_id: Set(note.user_id),
            title: Set(note.title),
            content: Set(note.content),
            created_at: Set(note.created_at),
            updated_at: Set(note.updated_at),
        };
        let model = m.update(&self.conn).await.context("update failed")?;
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let res = NoteEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }
}
