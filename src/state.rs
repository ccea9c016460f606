use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use graphql::BlogSchema;
use sea_orm::DatabaseConnection;
use services::TokenConfig;

/// Source of the evaluation time handed to handlers.
#[derive(Clone, Copy, Debug)]
pub enum Clock {
    System,
    Fixed(NaiveDateTime),
}

impl Clock {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => Utc::now().naive_utc(),
            Clock::Fixed(at) => *at,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub token_config: TokenConfig,
    pub time_zone: Tz,
    pub clock: Clock,
    pub schema: BlogSchema,
}

impl AppState {
    pub fn new(db: DatabaseConnection, token_config: TokenConfig, time_zone: Tz, clock: Clock) -> Self {
        let schema = graphql::build_schema(db.clone(), token_config.clone(), time_zone);
        AppState {
            db,
            token_config,
            time_zone,
            clock,
            schema,
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }
}
