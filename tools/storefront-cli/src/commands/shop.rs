//! Interactive shopping loop.
//!
//! One run of `storefront shop` is one session: the selection and the cart
//! live until the user quits.

use anyhow::{bail, Result};
use dialoguer::{Input, Select};
use storefront_commerce::catalog::{Catalog, Product};
use storefront_commerce::search::SortKey;
use storefront_commerce::session::Session;
use storefront_observability::StructuredLogger;

use super::ShopArgs;
use crate::context::Context;
use crate::render;

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Category,
    Search,
    Sort,
    AddToCart,
    ViewCart,
    ClearCart,
    Quit,
}

impl Action {
    const ALL: [Action; 7] = [
        Action::Category,
        Action::Search,
        Action::Sort,
        Action::AddToCart,
        Action::ViewCart,
        Action::ClearCart,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::Category => "Choose category",
            Action::Search => "Search products",
            Action::Sort => "Sort by",
            Action::AddToCart => "Add to cart",
            Action::ViewCart => "View cart",
            Action::ClearCart => "Clear cart",
            Action::Quit => "Quit",
        }
    }
}

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shop command is interactive and does not support --json");
    }

    let catalog = ctx.catalog()?;
    let mut session = Session::new();
    session.spec = args.query.to_spec();
    let logger = ctx.logger(&session)?;
    logger.info("shop session started");

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    loop {
        show_listing(&session, &catalog, ctx);

        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[choice] {
            Action::Category => choose_category(&mut session, &catalog)?,
            Action::Search => {
                let text: String = Input::new()
                    .with_prompt("Search products")
                    .with_initial_text(session.spec.search_text.clone())
                    .allow_empty(true)
                    .interact_text()?;
                session.spec.search_text = text;
            }
            Action::Sort => {
                let names: Vec<&str> = SortKey::ALL.iter().map(SortKey::display_name).collect();
                let current = SortKey::ALL
                    .iter()
                    .position(|key| *key == session.spec.sort)
                    .unwrap_or(0);
                let picked = Select::new()
                    .with_prompt("Sort by")
                    .items(&names)
                    .default(current)
                    .interact()?;
                session.spec.sort = SortKey::ALL[picked];
            }
            Action::AddToCart => add_to_cart(&mut session, &catalog, ctx, &logger)?,
            Action::ViewCart => show_cart(&session, &catalog, ctx),
            Action::ClearCart => {
                session.clear_cart();
                logger.info("cart cleared");
                ctx.output.success("Cart cleared");
            }
            Action::Quit => break,
        }
    }

    let summary = session.summary(&catalog);
    logger
        .info_builder("shop session finished")
        .field_u64("items", summary.item_count)
        .field_u64("total", summary.total.amount)
        .emit();
    show_cart(&session, &catalog, ctx);
    ctx.print_footer();

    Ok(())
}

fn show_listing(session: &Session, catalog: &Catalog, ctx: &Context) {
    ctx.print_header();
    ctx.output.caption(&format!(
        "Category: {}  |  Search: \"{}\"  |  Sort: {}",
        session.spec.category,
        session.spec.search_text,
        session.spec.sort.display_name()
    ));
    ctx.output.line("");

    let results = session.listing(catalog);
    for line in render::product_grid(&results, catalog, ctx.grid_layout()) {
        ctx.output.line(&line);
    }
    ctx.output.line("");
}

fn choose_category(session: &mut Session, catalog: &Catalog) -> Result<()> {
    let options = catalog.category_options();
    let labels = render::category_list(&options);
    let current = options
        .iter()
        .position(|option| *option == session.spec.category)
        .unwrap_or(0);

    let picked = Select::new()
        .with_prompt("Choose category")
        .items(&labels)
        .default(current)
        .interact()?;
    session.spec.category = options[picked].clone();
    Ok(())
}

fn add_to_cart(
    session: &mut Session,
    catalog: &Catalog,
    ctx: &Context,
    logger: &StructuredLogger,
) -> Result<()> {
    let listed: Vec<&Product> = session.listing(catalog).iter().collect();
    if listed.is_empty() {
        ctx.output.warn(render::NO_PRODUCTS);
        return Ok(());
    }

    let items: Vec<String> = listed
        .iter()
        .map(|product| format!("{} ({})", product.name, catalog.money(product.price)))
        .collect();
    let picked = Select::new()
        .with_prompt("Add which product?")
        .items(&items)
        .default(0)
        .interact()?;

    let product_id = listed[picked].id;
    let quantity = session.add_to_cart(catalog, product_id)?;
    logger
        .info_builder("added to cart")
        .field_u64("product_id", product_id.get())
        .field_u64("quantity", quantity.get())
        .emit();
    ctx.output.success("Added to cart!");
    Ok(())
}

fn show_cart(session: &Session, catalog: &Catalog, ctx: &Context) {
    ctx.output.header("🛍️ Cart");
    for line in render::cart_summary(&session.summary(catalog), catalog) {
        ctx.output.line(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels_unique() {
        let mut labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Action::ALL.len());
    }

    #[test]
    fn test_quit_is_last() {
        assert_eq!(Action::ALL.last(), Some(&Action::Quit));
    }
}
