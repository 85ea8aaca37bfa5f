#![allow(dead_code)]

use rust_decimal::Decimal;
use shared::models::{
    Category, CategoryCreate, MenuItem, MenuItemCreate, PricingRule, PricingRuleCreate, Profile,
    Role, TimeWindow, UserRole, UserRoleCreate,
};
use std::sync::Arc;
use storefront::{MemoryStore, Repository, Session};
use uuid::Uuid;

pub struct Fixture {
    pub store: MemoryStore,
    pub repo: Repository,
    pub snacks: Category,
    pub maggi: MenuItem,
    pub chai: MenuItem,
    /// Unavailable, never on the public menu
    pub biryani: MenuItem,
    /// Evening: Maggi at a fixed 30
    pub maggi_evening: PricingRule,
}

pub async fn fixture() -> Fixture {
    let store = MemoryStore::new();
    let repo = Repository::new(Arc::new(store.clone()));

    let snacks: Category = repo
        .insert(&CategoryCreate {
            name: "Snacks".into(),
            description: None,
            display_order: 1,
            is_active: true,
        })
        .await
        .unwrap();
    let _hidden: Category = repo
        .insert(&CategoryCreate {
            name: "Seasonal".into(),
            description: None,
            display_order: 0,
            is_active: false,
        })
        .await
        .unwrap();

    let maggi = add_item(&repo, "Maggi", 40, snacks.id).await;
    let chai = add_item(&repo, "Chai", 10, snacks.id).await;
    let biryani = add_item(&repo, "Biryani", 120, snacks.id).await;
    let _: MenuItem = repo
        .update(
            biryani.id,
            &shared::models::MenuItemUpdate {
                is_available: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let maggi_evening: PricingRule = repo
        .insert(&PricingRuleCreate {
            menu_item_id: maggi.id,
            time_of_day: TimeWindow::Evening,
            price_multiplier: Decimal::ONE,
            fixed_price: Some(Decimal::from(30)),
        })
        .await
        .unwrap();

    Fixture {
        store,
        repo,
        snacks,
        maggi,
        chai,
        biryani,
        maggi_evening,
    }
}

pub async fn add_item(repo: &Repository, name: &str, price: i64, category_id: Uuid) -> MenuItem {
    repo.insert(&MenuItemCreate {
        name: name.into(),
        description: None,
        base_price: Decimal::from(price),
        category_id,
        image_url: None,
        is_available: true,
    })
    .await
    .unwrap()
}

/// Customer with a profile
pub async fn customer(repo: &Repository, name: &str, phone: Option<&str>) -> Session {
    let user_id = Uuid::new_v4();
    let email = format!("{}@campus.edu", name.to_lowercase());
    let _: Profile = repo
        .insert(&Profile {
            id: user_id,
            email: Some(email.clone()),
            full_name: Some(name.into()),
            phone: phone.map(Into::into),
        })
        .await
        .unwrap();
    Session::new(user_id).with_email(email)
}

pub async fn admin(repo: &Repository) -> Session {
    let session = customer(repo, "Warden", None).await;
    let _: UserRole = repo
        .insert(&UserRoleCreate {
            user_id: session.user_id,
            role: Role::Admin,
        })
        .await
        .unwrap();
    session
}
