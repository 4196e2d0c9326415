//! App Router

use salvo::Router;

use crate::charges;

pub(crate) fn charge_router() -> Router {
    Router::with_path("charge")
        .push(
            Router::with_path("search")
                .get(charges::handlers::search::show_condition)
                .post(charges::handlers::search::search),
        )
        .push(Router::with_path("add").get(charges::handlers::add::handler))
        .push(Router::with_path("edit/{id}").get(charges::handlers::edit::handler))
        .push(Router::with_path("save").post(charges::handlers::save::handler))
        .push(Router::with_path("delete/{id}").get(charges::handlers::delete::handler))
}
