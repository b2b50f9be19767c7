use sea_orm::sea_query::{Alias, DynIden, IntoIden};
use sea_orm_migration::prelude::*;

mod m001_create_notes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m001_create_notes::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("notes_migrations").into_iden()
    }
}
