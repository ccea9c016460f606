use models::prelude::*;
use sea_orm::*;

/// Creates any missing tables, parents before children.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statements = vec![
        schema.create_table_from_entity(Users),
        schema.create_table_from_entity(Categories),
        schema.create_table_from_entity(Locations),
        schema.create_table_from_entity(Posts),
        schema.create_table_from_entity(Comments),
    ];

    for statement in statements.iter_mut() {
        statement.if_not_exists();
        db.execute(backend.build(&*statement)).await?;
    }

    tracing::info!("database schema ready");
    Ok(())
}
