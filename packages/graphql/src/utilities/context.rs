use async_graphql::Context;
use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Evaluation time for one request. Without it resolvers use the clock.
#[derive(Clone, Copy, Debug)]
pub struct Now(pub NaiveDateTime);

pub fn now(ctx: &Context<'_>) -> NaiveDateTime {
    ctx.data_opt::<Now>()
        .map(|n| n.0)
        .unwrap_or_else(|| Utc::now().naive_utc())
}

pub fn time_zone(ctx: &Context<'_>) -> Tz {
    ctx.data_opt::<Tz>().copied().unwrap_or(Tz::UTC)
}
