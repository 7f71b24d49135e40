//! Product listing command.

use anyhow::Result;
use storefront_commerce::session::Session;

use super::ProductsArgs;
use crate::context::Context;
use crate::render;

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    let mut session = Session::new();
    session.spec = args.query.to_spec();
    let logger = ctx.logger(&session)?;

    let results = session.listing(&catalog);
    logger
        .debug_builder("listing products")
        .field("category", session.spec.category.label())
        .field("search", session.spec.search_text.as_str())
        .field("sort", session.spec.sort.as_str())
        .field_u64("matches", results.len() as u64)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&results.items);
        return Ok(());
    }

    ctx.print_header();
    ctx.output.caption(&format!(
        "Category: {}  |  Sort: {}",
        session.spec.category,
        session.spec.sort.display_name()
    ));
    ctx.output.line("");
    for line in render::product_grid(&results, &catalog, ctx.grid_layout()) {
        ctx.output.line(&line);
    }
    ctx.output.line("");
    ctx.print_footer();

    Ok(())
}
