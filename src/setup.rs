use sea_orm::*;

use crate::config::Config;

pub(super) async fn set_up_db(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(config.database_url.clone());
    opts.sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    let db = Database::connect(opts).await?;
    tracing::info!("DB connected");

    if config.auto_migrate {
        repositories::schema::create_schema(&db).await?;
    }
    Ok(db)
}
