//! Plain-text rendering of the catalog page.

use std::fmt::Write;

use crate::storefront::View;

/// Render `view` for a terminal.
pub fn render(view: &View<'_>) -> String {
    let mut out = String::new();
    match view {
        View::Loading => out.push_str("Loading products...\n"),
        View::Failed(message) => {
            let _ = writeln!(out, "{message}");
        }
        View::Catalog {
            state,
            derived,
            fetched_at,
        } => {
            let _ = writeln!(
                out,
                "Get Yourself the Best from Our Top {} Products.",
                derived.category_count
            );
            if let Some(highest) = derived.highest_price {
                let _ = writeln!(out, "The highest price is ${highest:.2}");
            }
            let _ = writeln!(
                out,
                "Category: {} | Sort: {} | Showing {}",
                state.category().label(),
                state.sort(),
                derived.len()
            );

            if derived.is_empty() {
                out.push_str("No products match the current filters.\n");
            }
            for product in &derived.products {
                let _ = writeln!(
                    out,
                    "{:>4}  ${:>8.2}  {:.1} ({:>4})  {}  [{}]",
                    product.id,
                    product.price,
                    product.rating.rate,
                    product.rating.count,
                    product.title,
                    product.category
                );
            }
            let _ = writeln!(
                out,
                "Fetched at {} UTC",
                fetched_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
    }
    out
}
