//! Seed the menu with the default catalog.
//!
//! Seeding is idempotent: items already present (matched by name) are
//! skipped, so the command is safe to re-run.

use rust_decimal::Decimal;
use tracing::info;

use foodcourt_server::db::FoodRepository;
use foodcourt_server::models::NewFood;

use super::CommandError;

/// The default menu, one entry per item: name, price in cents, image, category.
const DEFAULT_MENU: &[(&str, i64, &str, &str)] = &[
    ("Cheeseburger", 699, "/static/images/cheese-burger.jpg", "Burgers"),
    ("Veggie Pizza", 849, "/static/images/veggie-pizza.jpg", "Pizza"),
    ("Chicken Wrap", 599, "/static/images/chicken-wrap.jpg", "Wraps"),
    ("Pasta Alfredo", 799, "/static/images/pasta-alfreddo.jpg", "Pasta"),
    ("French Fries", 349, "/static/images/french-fries.jpg", "Sides"),
    ("Chicken Biryani", 700, "/static/images/chicken-biryani.jpg", "Biryani"),
    ("Beef Burger", 400, "/static/images/burger.jpg", "Fast Food"),
    ("Double Beef Burger", 1000, "/static/images/burger.jpg", "Burger"),
    ("Beef Wrap", 700, "/static/images/wrap.jpg", "Wrap"),
];

/// Insert the default menu items, skipping any that already exist.
pub async fn menu() -> Result<(), CommandError> {
    let pool = super::connect().await?;
    let foods = FoodRepository::new(&pool);

    let mut inserted = 0usize;
    let mut skipped = 0usize;

    for &(name, cents, image, category) in DEFAULT_MENU {
        if foods.get_by_name(name).await?.is_some() {
            skipped += 1;
            continue;
        }

        let new_food = NewFood {
            name: name.to_owned(),
            price: Decimal::new(cents, 2),
            image: Some(image.to_owned()),
            category: Some(category.to_owned()),
        };
        let food = foods.create(&new_food).await?;
        info!(id = %food.id, name, "Seeded menu item");
        inserted += 1;
    }

    info!("Seeding complete! Inserted: {inserted}, skipped: {skipped}");
    Ok(())
}
