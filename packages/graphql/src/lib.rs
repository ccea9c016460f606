use async_graphql::{EmptySubscription, Schema};
use chrono_tz::Tz;
use sea_orm::DatabaseConnection;
use services::TokenConfig;

pub mod types;
pub mod queries;
pub mod mutations;
pub mod utilities;
pub mod errors;

#[cfg(test)]
pub mod test_helpers;

pub type BlogSchema = Schema<queries::Queries, mutations::Mutations, EmptySubscription>;

/// Schema with the shared context every resolver expects. The per-request
/// bearer token and evaluation time are attached to each request.
pub fn build_schema(db: DatabaseConnection, token_config: TokenConfig, time_zone: Tz) -> BlogSchema {
    Schema::build(queries::Queries::default(), mutations::Mutations::default(), EmptySubscription)
        .data(db)
        .data(token_config)
        .data(time_zone)
        .finish()
}
