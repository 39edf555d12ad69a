//! Seed product list.

use rust_decimal::Decimal;

use crate::domain::catalog::models::Product;

/// The fixed product list the catalog is built from at process start.
pub(crate) fn products() -> Vec<Product> {
    let seed: [(u64, &str, u32, &str); 8] = [
        (1, "Wireless Headphones", 2499, "photo-1505740420928-5e560c06d30e"),
        (2, "Smart Watch", 8999, "photo-1523275335684-37898b6baf30"),
        (3, "Laptop Stand", 1499, "photo-1527864550417-7fd91fc51a46"),
        (4, "Mechanical Keyboard", 4999, "photo-1587829741301-dc798b83add3"),
        (5, "USB-C Hub", 1299, "photo-1625948515291-69613efd103f"),
        (6, "Wireless Mouse", 999, "photo-1527814050087-3793815479db"),
        (7, "Phone Case", 599, "photo-1585789575166-c6e8f1875c7d"),
        (8, "Portable Charger", 1799, "photo-1609091839311-d5365f9ff1c5"),
    ];

    seed.into_iter()
        .map(|(id, name, price, photo)| Product {
            id,
            name: name.to_string(),
            price: Decimal::from(price),
            image: format!("https://images.unsplash.com/{photo}?w=400&h=400&fit=crop"),
        })
        .collect()
}
