use sea_orm::sea_query::{Alias, DynIden, IntoIden};
use sea_orm_migration::prelude::*;

mod m001_create_users_and_tokens;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m001_create_users_and_tokens::Migration)]
    }

    // Each module keeps its own history table so migrators can share one database.
    fn migration_table_name() -> DynIden {
        Alias::new("auth_migrations").into_iden()
    }
}
