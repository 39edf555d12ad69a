//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use shopfront_app::{
    context::AppContext,
    domain::{
        cart::{MockCartService, models::CartLine},
        catalog::MockCatalogService,
        checkout::MockCheckoutService,
    },
};

use crate::state::State;

pub(crate) fn make_line(id: u64, product_id: u64, price: u32, qty: u32) -> CartLine {
    CartLine {
        id,
        product_id,
        name: format!("Product {product_id}"),
        price: Decimal::from(price),
        image: format!("https://example.com/{product_id}.jpg"),
        qty,
    }
}

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list_products().never();
    catalog.expect_get_product().never();

    catalog
}

fn strict_cart_mock() -> MockCartService {
    let mut cart = MockCartService::new();

    cart.expect_add_item().never();
    cart.expect_get_cart().never();
    cart.expect_remove_item().never();
    cart.expect_clear().never();

    cart
}

fn strict_checkout_mock() -> MockCheckoutService {
    let mut checkout = MockCheckoutService::new();

    checkout.expect_checkout().never();

    checkout
}

fn make_state(
    catalog: MockCatalogService,
    cart: MockCartService,
    checkout: MockCheckoutService,
) -> Arc<State> {
    Arc::new(State::new(AppContext {
        catalog: Arc::new(catalog),
        cart: Arc::new(cart),
        checkout: Arc::new(checkout),
    }))
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(make_state(
                catalog,
                strict_cart_mock(),
                strict_checkout_mock(),
            )))
            .push(route),
    )
}

pub(crate) fn cart_service(cart: MockCartService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(make_state(
                strict_catalog_mock(),
                cart,
                strict_checkout_mock(),
            )))
            .push(route),
    )
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(make_state(
                strict_catalog_mock(),
                strict_cart_mock(),
                checkout,
            )))
            .push(route),
    )
}
