//! One-shot cart command.
//!
//! Each invocation is its own session: products named with `--add` go into
//! a fresh cart, which is then summarized.

use anyhow::{Context as _, Result};
use storefront_commerce::session::Session;

use super::CartArgs;
use crate::context::Context;
use crate::render;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut session = Session::new();
    let logger = ctx.logger(&session)?;

    for id in args.add {
        let quantity = session
            .add_to_cart(&catalog, id)
            .with_context(|| format!("Cannot add product #{} to cart", id))?;
        logger
            .info_builder("added to cart")
            .field_u64("product_id", id.get())
            .field_u64("quantity", quantity.get())
            .emit();
    }

    if args.clear {
        session.clear_cart();
        logger.info("cart cleared");
    }

    let summary = session.summary(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header("🛍️ Cart");
    for line in render::cart_summary(&summary, &catalog) {
        ctx.output.line(&line);
    }

    Ok(())
}
