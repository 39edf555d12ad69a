//! App Router

use salvo::Router;

use crate::{cart, checkout, healthcheck, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api")
                .push(Router::with_path("products").get(products::index::handler))
                .push(
                    Router::with_path("cart")
                        .get(cart::get::handler)
                        .post(cart::create::handler)
                        .push(Router::with_path("{id}").delete(cart::delete::handler)),
                )
                .push(Router::with_path("checkout").post(checkout::create::handler)),
        )
}
