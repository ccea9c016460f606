use actix_web::{web, HttpRequest, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use graphql::utilities::context::Now;

use crate::extractors::bearer_token;
use crate::state::AppState;

pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub async fn graphql_request(
    state: web::Data<AppState>,
    http: HttpRequest,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner().data(Now(state.now()));
    if let Some(token) = bearer_token(&http) {
        request = request.data(token);
    }
    state.schema.execute(request).await.into()
}
