//! Category listing command.

use anyhow::Result;

use super::CategoriesArgs;
use crate::context::Context;
use crate::render;

/// Run the categories command.
pub fn run(_args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let options = render::category_list(&catalog.category_options());

    if ctx.output.is_json() {
        ctx.output.json(&options);
        return Ok(());
    }

    ctx.output.header("Categories");
    for option in &options {
        ctx.output.list_item(option);
    }

    Ok(())
}
