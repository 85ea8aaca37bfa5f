use anyhow::Context;
use chrono::Local;
use rust_decimal::Decimal;
use shared::models::{
    Category, CategoryCreate, MenuItem, MenuItemCreate, PricingRule, PricingRuleCreate, TimeWindow,
};
use std::sync::Arc;
use storefront::menu::render_board;
use storefront::{
    Config, MemoryStore, MenuCatalog, Repository, init_logger_with_file, print_banner,
};

const OFFLINE_FLAG: &str = "--offline";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    print_banner();
    tracing::info!(environment = %config.environment, "Storefront starting");

    // 2. Data store
    let offline = std::env::args().any(|arg| arg == OFFLINE_FLAG);
    let repo = if offline {
        let repo = Repository::new(Arc::new(MemoryStore::new()));
        seed_demo_menu(&repo)
            .await
            .context("Failed to seed the offline demo menu")?;
        tracing::info!("Using the in-memory demo store");
        repo
    } else {
        // Public menu reads need no user session
        let repo = config
            .backend_repository(None)
            .with_context(|| format!("Invalid backend URL: {}", config.backend_url))?;
        tracing::info!(backend = %config.backend_url, "Using the hosted backend");
        repo
    };

    // 3. Menu board at the current local time
    let catalog = MenuCatalog::load(&repo)
        .await
        .context("Failed to load the menu")?;
    println!("{}", render_board(&catalog, &Local::now()));

    Ok(())
}

/// Small sample menu for running without a backend
async fn seed_demo_menu(repo: &Repository) -> anyhow::Result<()> {
    let snacks: Category = repo
        .insert(&CategoryCreate {
            name: "Snacks".into(),
            description: Some("Quick bites".into()),
            display_order: 1,
            is_active: true,
        })
        .await?;
    let drinks: Category = repo
        .insert(&CategoryCreate {
            name: "Drinks".into(),
            description: None,
            display_order: 2,
            is_active: true,
        })
        .await?;

    let items = [
        ("Masala Maggi", Decimal::from(40), snacks.id),
        ("Veg Sandwich", Decimal::from(35), snacks.id),
        ("Chai", Decimal::from(10), drinks.id),
        ("Cold Coffee", Decimal::from(50), drinks.id),
    ];
    let mut created: Vec<MenuItem> = Vec::with_capacity(items.len());
    for (name, base_price, category_id) in items {
        created.push(
            repo.insert(&MenuItemCreate {
                name: name.into(),
                description: None,
                base_price,
                category_id,
                image_url: None,
                is_available: true,
            })
            .await?,
        );
    }

    let rules = [
        PricingRuleCreate {
            menu_item_id: created[0].id,
            time_of_day: TimeWindow::Night,
            price_multiplier: Decimal::new(12, 1),
            fixed_price: None,
        },
        PricingRuleCreate {
            menu_item_id: created[2].id,
            time_of_day: TimeWindow::Morning,
            price_multiplier: Decimal::ONE,
            fixed_price: Some(Decimal::from(8)),
        },
        PricingRuleCreate {
            menu_item_id: created[3].id,
            time_of_day: TimeWindow::Afternoon,
            price_multiplier: Decimal::new(9, 1),
            fixed_price: None,
        },
    ];
    let _: Vec<PricingRule> = repo.insert_many(&rules).await?;
    Ok(())
}
