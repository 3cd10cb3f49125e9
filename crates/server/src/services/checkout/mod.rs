//! Checkout workflow.
//!
//! The structurally interesting part of the service: three checkout variants
//! (guest, registered, login) sharing one shape - validate, resolve identity,
//! resolve cart lines against the menu, persist the order and its lines as
//! one atomic unit.
//!
//! A request moves through `Received -> Validated -> (Identity resolved or
//! created) -> Committed`; any validation or identity failure rejects the
//! request before anything is written. Cart lines that resolve to no menu
//! item are dropped with a warning rather than failing the checkout - the
//! same policy on all three variants.

mod error;
pub mod validate;

pub use error::CheckoutError;

use rust_decimal::Decimal;
use serde::Deserialize;

use foodcourt_core::{FoodId, OrderId, UserRole};

use crate::db::{Catalog, Identity, OrderLedger, RepositoryError};
use crate::models::{Food, NewOrder, NewOrderLine, NewUser};
use crate::services::auth;

/// Guest or registration checkout payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    /// Only used by the registration variant.
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub cart_items: Vec<CartLine>,
    /// Total as computed by the client. Persisted as-is; see DESIGN.md.
    #[serde(default)]
    pub total: Decimal,
}

/// Login checkout payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub cart_items: Vec<CartLine>,
    #[serde(default)]
    pub total: Decimal,
}

/// One entry of the submitted cart.
///
/// The `id` is kept loose on purpose: clients send it as a number or a
/// string, and a value that does not coerce to an integer simply means "no
/// identifier" (the name lookup is the fallback).
#[derive(Debug, Clone, Deserialize)]
pub struct CartLine {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_quantity", deserialize_with = "lenient_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub price: Decimal,
}

const fn default_quantity() -> i32 {
    1
}

/// Quantities arrive as numbers or digit strings; anything unusable falls
/// back to the default of 1, mirroring the coercion applied to `id`.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let quantity = match &value {
        serde_json::Value::Number(n) => n.as_i64().and_then(|i| i32::try_from(i).ok()),
        serde_json::Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };
    Ok(quantity.unwrap_or_else(default_quantity))
}

/// What a successful checkout tells the client to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Order created; respond with its ID (guest and registration variants).
    Placed { order_id: OrderId },
    /// Order created for a logged-in client; client navigates to the
    /// confirmation page.
    Confirmation { order_id: OrderId },
    /// Admin credentials: no order, client navigates to the dashboard.
    AdminRedirect,
}

/// The checkout orchestrator.
///
/// Generic over the three store traits so the workflow can run against the
/// Postgres repositories in production and in-memory stores in tests.
pub struct CheckoutService<C, I, L> {
    catalog: C,
    identity: I,
    ledger: L,
}

impl<C, I, L> CheckoutService<C, I, L>
where
    C: Catalog,
    I: Identity,
    L: OrderLedger,
{
    /// Create a checkout service over the given stores.
    pub const fn new(catalog: C, identity: I, ledger: L) -> Self {
        Self {
            catalog,
            identity,
            ledger,
        }
    }

    /// Guest checkout: no account involved.
    ///
    /// # Errors
    ///
    /// Returns a validation [`CheckoutError`] before anything is persisted,
    /// or [`CheckoutError::Repository`] if the order cannot be committed.
    pub async fn guest(&self, request: &CheckoutRequest) -> Result<CheckoutOutcome, CheckoutError> {
        let contact = validate::contact(request, false)?;

        let lines = self.resolve_lines(&request.cart_items).await?;
        let order = NewOrder {
            user_id: None,
            customer_name: contact.full_name(),
            email: contact.email,
            phone: contact.phone,
            address: contact.address,
            total_amount: request.total,
            is_guest: true,
        };
        let order_id = self.ledger.create_order(&order, &lines).await?;

        tracing::info!(%order_id, lines = lines.len(), "guest order placed");
        Ok(CheckoutOutcome::Placed { order_id })
    }

    /// Registration checkout: create the account, then the order it owns.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmailTaken`] when the email already has an
    /// account, validation errors before any persistence, or
    /// [`CheckoutError::Repository`] on store failure.
    pub async fn register(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        let contact = validate::contact(request, true)?;

        if self
            .identity
            .find_by_email(contact.email.as_str())
            .await?
            .is_some()
        {
            return Err(CheckoutError::EmailTaken);
        }

        let password = request.password.as_deref().unwrap_or("");
        let password_hash = auth::hash_password(password)?;

        let new_user = NewUser {
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            address: contact.address.clone(),
            password_hash,
            role: UserRole::Client,
        };

        // A concurrent registration can still win the race between the
        // lookup above and this insert; the unique constraint decides.
        let user = self.identity.create(&new_user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => CheckoutError::EmailTaken,
            other => CheckoutError::Repository(other),
        })?;

        let lines = self.resolve_lines(&request.cart_items).await?;
        let order = NewOrder {
            user_id: Some(user.id),
            customer_name: contact.full_name(),
            email: contact.email,
            phone: contact.phone,
            address: contact.address,
            total_amount: request.total,
            is_guest: false,
        };
        let order_id = self.ledger.create_order(&order, &lines).await?;

        tracing::info!(user_id = %user.id, %order_id, "new account registered and order placed");
        Ok(CheckoutOutcome::Placed { order_id })
    }

    /// Login checkout: verify credentials, then place the order for the
    /// account. Admin accounts are redirected to the dashboard and never
    /// create an order.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidCredentials`] for an unknown email or
    /// wrong password, presence-validation errors, or
    /// [`CheckoutError::Repository`] on store failure.
    pub async fn login(&self, request: &LoginRequest) -> Result<CheckoutOutcome, CheckoutError> {
        validate::login(request)?;

        let Some((user, password_hash)) = self
            .identity
            .find_with_password_hash(&request.email)
            .await?
        else {
            return Err(CheckoutError::InvalidCredentials);
        };

        if !auth::verify_password(&request.password, &password_hash) {
            return Err(CheckoutError::InvalidCredentials);
        }

        if user.role.is_admin() {
            tracing::info!(user_id = %user.id, "admin logged in, skipping order");
            return Ok(CheckoutOutcome::AdminRedirect);
        }

        // Contact snapshot comes from the stored account, not the payload.
        let lines = self.resolve_lines(&request.cart_items).await?;
        let order = NewOrder {
            user_id: Some(user.id),
            customer_name: user.full_name(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            total_amount: request.total,
            is_guest: false,
        };
        let order_id = self.ledger.create_order(&order, &lines).await?;

        tracing::info!(user_id = %user.id, %order_id, "order placed by returning customer");
        Ok(CheckoutOutcome::Confirmation { order_id })
    }

    /// Resolve cart lines against the menu.
    ///
    /// Lookup by coerced ID first, exact name as the fallback when no usable
    /// ID was sent. Lines that resolve to nothing, or carry a non-positive
    /// quantity, are dropped with a warning; one bad cart entry must not
    /// abort the whole checkout.
    async fn resolve_lines(
        &self,
        cart_items: &[CartLine],
    ) -> Result<Vec<NewOrderLine>, CheckoutError> {
        let mut lines = Vec::with_capacity(cart_items.len());

        for item in cart_items {
            let food = self.resolve_line(item).await?;
            let Some(food) = food else {
                tracing::warn!(?item, "cart line did not resolve to a menu item, skipping");
                continue;
            };

            if item.quantity < 1 {
                tracing::warn!(
                    food_id = %food.id,
                    quantity = item.quantity,
                    "cart line has non-positive quantity, skipping"
                );
                continue;
            }

            lines.push(NewOrderLine {
                food_id: food.id,
                quantity: item.quantity,
                price: item.price,
            });
        }

        Ok(lines)
    }

    async fn resolve_line(&self, item: &CartLine) -> Result<Option<Food>, CheckoutError> {
        if let Some(id) = item.id.as_ref().and_then(coerce_food_id) {
            return Ok(self.catalog.food_by_id(id).await?);
        }

        match item.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(self.catalog.food_by_name(name).await?),
            _ => Ok(None),
        }
    }
}

/// Coerce a loose JSON value into a menu-item ID.
///
/// Accepts positive integer numbers and strings of digits; anything else,
/// including `0` and negatives, means the line carried no usable identifier
/// and the name fallback applies.
fn coerce_food_id(value: &serde_json::Value) -> Option<FoodId> {
    let id = match value {
        serde_json::Value::Number(n) => n.as_i64().and_then(|i| i32::try_from(i).ok()),
        serde_json::Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };
    id.filter(|&i| i > 0).map(FoodId::new)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI32, Ordering};

    use chrono::Utc;
    use rust_decimal::Decimal;
    use serde_json::json;

    use foodcourt_core::{Email, Phone, UserId};

    use super::*;
    use crate::models::{Order, OrderLine, User};

    // =========================================================================
    // In-memory stores
    // =========================================================================

    struct MemCatalog {
        foods: Vec<Food>,
    }

    impl MemCatalog {
        fn with_menu() -> Self {
            let food = |id: i32, name: &str, cents: i64| Food {
                id: FoodId::new(id),
                name: name.to_owned(),
                price: Decimal::new(cents, 2),
                image: None,
                category: None,
            };
            Self {
                foods: vec![
                    food(1, "Cheeseburger", 699),
                    food(2, "Veggie Pizza", 849),
                    food(3, "Chicken Wrap", 599),
                ],
            }
        }
    }

    impl Catalog for &MemCatalog {
        async fn food_by_id(&self, id: FoodId) -> Result<Option<Food>, RepositoryError> {
            Ok(self.foods.iter().find(|f| f.id == id).cloned())
        }

        async fn food_by_name(&self, name: &str) -> Result<Option<Food>, RepositoryError> {
            Ok(self.foods.iter().find(|f| f.name == name).cloned())
        }
    }

    #[derive(Default)]
    struct MemIdentity {
        users: Mutex<Vec<(User, String)>>,
        next_id: AtomicI32,
    }

    impl MemIdentity {
        fn with_user(first: &str, last: &str, email: &str, password: &str, role: UserRole) -> Self {
            let store = Self::default();
            let id = store.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let user = User {
                id: UserId::new(id),
                first_name: first.to_owned(),
                last_name: last.to_owned(),
                email: Email::parse(email).unwrap(),
                phone: Phone::parse("12345678901").unwrap(),
                address: "Birmingham".to_owned(),
                role,
                created_at: Utc::now(),
            };
            let hash = auth::hash_password(password).unwrap();
            store.users.lock().unwrap().push((user, hash));
            store
        }
    }

    impl Identity for &MemIdentity {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
            let users = self.users.lock().unwrap();
            Ok(users
                .iter()
                .find(|(u, _)| u.email.as_str() == email)
                .map(|(u, _)| u.clone()))
        }

        async fn find_with_password_hash(
            &self,
            email: &str,
        ) -> Result<Option<(User, String)>, RepositoryError> {
            let users = self.users.lock().unwrap();
            Ok(users
                .iter()
                .find(|(u, _)| u.email.as_str() == email)
                .cloned())
        }

        async fn create(&self, new_user: &NewUser) -> Result<User, RepositoryError> {
            let mut users = self.users.lock().unwrap();
            if users
                .iter()
                .any(|(u, _)| u.email == new_user.email)
            {
                return Err(RepositoryError::Conflict("email already exists".to_owned()));
            }

            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let user = User {
                id: UserId::new(id),
                first_name: new_user.first_name.clone(),
                last_name: new_user.last_name.clone(),
                email: new_user.email.clone(),
                phone: new_user.phone.clone(),
                address: new_user.address.clone(),
                role: new_user.role,
                created_at: Utc::now(),
            };
            users.push((user.clone(), new_user.password_hash.clone()));
            Ok(user)
        }
    }

    #[derive(Default)]
    struct MemLedger {
        orders: Mutex<Vec<(Order, Vec<OrderLine>)>>,
        next_id: AtomicI32,
    }

    impl MemLedger {
        fn order_count(&self) -> usize {
            self.orders.lock().unwrap().len()
        }

        fn order(&self, id: OrderId) -> (Order, Vec<OrderLine>) {
            self.orders
                .lock()
                .unwrap()
                .iter()
                .find(|(o, _)| o.id == id)
                .cloned()
                .expect("order not in ledger")
        }
    }

    impl OrderLedger for &MemLedger {
        async fn create_order(
            &self,
            order: &NewOrder,
            lines: &[NewOrderLine],
        ) -> Result<OrderId, RepositoryError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let order_id = OrderId::new(id);
            let stored = Order {
                id: order_id,
                user_id: order.user_id,
                customer_name: order.customer_name.clone(),
                email: order.email.clone(),
                phone: order.phone.clone(),
                address: order.address.clone(),
                total_amount: order.total_amount,
                created_at: Utc::now(),
                is_guest: order.is_guest,
                status: foodcourt_core::OrderStatus::Pending,
            };
            let stored_lines = lines
                .iter()
                .enumerate()
                .map(|(i, l)| OrderLine {
                    id: foodcourt_core::OrderLineId::new(i32::try_from(i).unwrap() + 1),
                    order_id,
                    food_id: l.food_id,
                    quantity: l.quantity,
                    price: l.price,
                })
                .collect();
            self.orders.lock().unwrap().push((stored, stored_lines));
            Ok(order_id)
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn service<'a>(
        catalog: &'a MemCatalog,
        identity: &'a MemIdentity,
        ledger: &'a MemLedger,
    ) -> CheckoutService<&'a MemCatalog, &'a MemIdentity, &'a MemLedger> {
        CheckoutService::new(catalog, identity, ledger)
    }

    fn guest_request() -> CheckoutRequest {
        CheckoutRequest {
            first_name: "Sam".to_owned(),
            last_name: "Carter".to_owned(),
            email: "sam@example.com".to_owned(),
            phone: "12345678901".to_owned(),
            address: "1 High Street".to_owned(),
            password: None,
            cart_items: vec![CartLine {
                id: Some(json!(1)),
                name: None,
                quantity: 2,
                price: Decimal::new(699, 2),
            }],
            total: Decimal::new(1398, 2),
        }
    }

    fn register_request() -> CheckoutRequest {
        let mut req = guest_request();
        req.password = Some("open sesame".to_owned());
        req
    }

    // =========================================================================
    // Guest checkout
    // =========================================================================

    #[tokio::test]
    async fn test_guest_checkout_end_to_end() {
        let catalog = MemCatalog::with_menu();
        let identity = MemIdentity::default();
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        let outcome = svc.guest(&guest_request()).await.unwrap();
        let CheckoutOutcome::Placed { order_id } = outcome else {
            panic!("expected Placed, got {outcome:?}");
        };

        let (order, lines) = ledger.order(order_id);
        assert!(order.is_guest);
        assert_eq!(order.user_id, None);
        assert_eq!(order.customer_name, "Sam Carter");
        assert_eq!(order.total_amount, Decimal::new(1398, 2));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].food_id, FoodId::new(1));
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].price, Decimal::new(699, 2));
    }

    #[tokio::test]
    async fn test_guest_invalid_email_creates_nothing() {
        let catalog = MemCatalog::with_menu();
        let identity = MemIdentity::default();
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        let mut req = guest_request();
        req.email = "sam@example.org".to_owned();

        let err = svc.guest(&req).await.unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidEmail));
        assert_eq!(ledger.order_count(), 0);
    }

    #[tokio::test]
    async fn test_validation_failure_is_idempotent() {
        let catalog = MemCatalog::with_menu();
        let identity = MemIdentity::default();
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        let mut req = guest_request();
        req.phone = "1234567890".to_owned(); // 10 digits

        for _ in 0..2 {
            let err = svc.guest(&req).await.unwrap_err();
            assert!(matches!(err, CheckoutError::InvalidPhone));
        }
        assert_eq!(ledger.order_count(), 0);
    }

    #[tokio::test]
    async fn test_guest_checkout_applies_skip_policy() {
        // The skip-on-unresolved policy holds for guests as well; a
        // fabricated id must not reach the ledger.
        let catalog = MemCatalog::with_menu();
        let identity = MemIdentity::default();
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        let mut req = guest_request();
        req.cart_items.push(CartLine {
            id: Some(json!(999)),
            name: None,
            quantity: 1,
            price: Decimal::new(100, 2),
        });

        let outcome = svc.guest(&req).await.unwrap();
        let CheckoutOutcome::Placed { order_id } = outcome else {
            panic!("expected Placed");
        };
        let (order, lines) = ledger.order(order_id);
        assert_eq!(lines.len(), 1);
        // Total stays what the client sent, dropped lines or not.
        assert_eq!(order.total_amount, Decimal::new(1398, 2));
    }

    // =========================================================================
    // Registration checkout
    // =========================================================================

    #[tokio::test]
    async fn test_register_creates_client_account_and_order() {
        let catalog = MemCatalog::with_menu();
        let identity = MemIdentity::default();
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        let outcome = svc.register(&register_request()).await.unwrap();
        let CheckoutOutcome::Placed { order_id } = outcome else {
            panic!("expected Placed");
        };

        let user = (&identity)
            .find_by_email("sam@example.com")
            .await
            .unwrap()
            .expect("account created");
        assert_eq!(user.role, UserRole::Client);

        let (order, _) = ledger.order(order_id);
        assert_eq!(order.user_id, Some(user.id));
        assert!(!order.is_guest);
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let catalog = MemCatalog::with_menu();
        let identity = MemIdentity::default();
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        svc.register(&register_request()).await.unwrap();

        let (_, stored) = (&identity)
            .find_with_password_hash("sam@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(stored, "open sesame");
        assert!(auth::verify_password("open sesame", &stored));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_rejected() {
        let catalog = MemCatalog::with_menu();
        let identity = MemIdentity::default();
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        svc.register(&register_request()).await.unwrap();
        let err = svc.register(&register_request()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::EmailTaken));
        // Only the first registration reached the ledger.
        assert_eq!(ledger.order_count(), 1);
    }

    #[tokio::test]
    async fn test_register_requires_password() {
        let catalog = MemCatalog::with_menu();
        let identity = MemIdentity::default();
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        let mut req = register_request();
        req.password = None;
        let err = svc.register(&req).await.unwrap_err();
        assert!(matches!(err, CheckoutError::MissingField("password")));
        assert_eq!(ledger.order_count(), 0);
    }

    // =========================================================================
    // Login checkout
    // =========================================================================

    #[tokio::test]
    async fn test_login_wrong_password_rejected() {
        let catalog = MemCatalog::with_menu();
        let identity =
            MemIdentity::with_user("Dana", "Hughes", "dana@example.com", "right", UserRole::Client);
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        let req = LoginRequest {
            email: "dana@example.com".to_owned(),
            password: "wrong".to_owned(),
            cart_items: vec![],
            total: Decimal::ZERO,
        };
        let err = svc.login(&req).await.unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidCredentials));
        assert_eq!(ledger.order_count(), 0);
    }

    #[tokio::test]
    async fn test_login_unknown_email_rejected() {
        let catalog = MemCatalog::with_menu();
        let identity = MemIdentity::default();
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        let req = LoginRequest {
            email: "nobody@example.com".to_owned(),
            password: "whatever".to_owned(),
            cart_items: vec![],
            total: Decimal::ZERO,
        };
        let err = svc.login(&req).await.unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_admin_redirects_without_order() {
        let catalog = MemCatalog::with_menu();
        let identity =
            MemIdentity::with_user("Danish", "Muzzafar", "boss@example.com", "admin-pw", UserRole::Admin);
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        let req = LoginRequest {
            email: "boss@example.com".to_owned(),
            password: "admin-pw".to_owned(),
            cart_items: vec![CartLine {
                id: Some(json!(1)),
                name: None,
                quantity: 1,
                price: Decimal::new(699, 2),
            }],
            total: Decimal::new(699, 2),
        };
        let outcome = svc.login(&req).await.unwrap();
        assert_eq!(outcome, CheckoutOutcome::AdminRedirect);
        assert_eq!(ledger.order_count(), 0);
    }

    #[tokio::test]
    async fn test_login_client_places_order_with_account_snapshot() {
        let catalog = MemCatalog::with_menu();
        let identity =
            MemIdentity::with_user("Dana", "Hughes", "dana@example.com", "right", UserRole::Client);
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        let req = LoginRequest {
            email: "dana@example.com".to_owned(),
            password: "right".to_owned(),
            cart_items: vec![CartLine {
                id: None,
                name: Some("Veggie Pizza".to_owned()),
                quantity: 1,
                price: Decimal::new(849, 2),
            }],
            total: Decimal::new(849, 2),
        };
        let outcome = svc.login(&req).await.unwrap();
        let CheckoutOutcome::Confirmation { order_id } = outcome else {
            panic!("expected Confirmation, got {outcome:?}");
        };

        let (order, lines) = ledger.order(order_id);
        assert_eq!(order.customer_name, "Dana Hughes");
        assert_eq!(order.email.as_str(), "dana@example.com");
        assert!(!order.is_guest);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].food_id, FoodId::new(2));
    }

    // =========================================================================
    // Line resolution
    // =========================================================================

    #[tokio::test]
    async fn test_unresolvable_line_dropped_order_still_created() {
        let catalog = MemCatalog::with_menu();
        let identity = MemIdentity::default();
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        let mut req = register_request();
        req.cart_items = vec![
            CartLine {
                id: Some(json!("not-a-number")),
                name: Some("No Such Dish".to_owned()),
                quantity: 1,
                price: Decimal::new(500, 2),
            },
            CartLine {
                id: Some(json!("3")),
                name: None,
                quantity: 1,
                price: Decimal::new(599, 2),
            },
        ];
        req.total = Decimal::new(1099, 2);

        let outcome = svc.register(&req).await.unwrap();
        let CheckoutOutcome::Placed { order_id } = outcome else {
            panic!("expected Placed");
        };
        let (order, lines) = ledger.order(order_id);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].food_id, FoodId::new(3));
        // The persisted total is the client's, even with a dropped line.
        assert_eq!(order.total_amount, Decimal::new(1099, 2));
    }

    #[tokio::test]
    async fn test_name_fallback_when_id_absent_or_unparseable() {
        let catalog = MemCatalog::with_menu();
        let identity = MemIdentity::default();
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        let mut req = guest_request();
        req.cart_items = vec![
            CartLine {
                id: None,
                name: Some("Cheeseburger".to_owned()),
                quantity: 1,
                price: Decimal::new(699, 2),
            },
            CartLine {
                id: Some(json!("abc")),
                name: Some("Chicken Wrap".to_owned()),
                quantity: 1,
                price: Decimal::new(599, 2),
            },
        ];

        let CheckoutOutcome::Placed { order_id } = svc.guest(&req).await.unwrap() else {
            panic!("expected Placed");
        };
        let (_, lines) = ledger.order(order_id);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].food_id, FoodId::new(1));
        assert_eq!(lines[1].food_id, FoodId::new(3));
    }

    #[tokio::test]
    async fn test_non_positive_quantity_dropped() {
        let catalog = MemCatalog::with_menu();
        let identity = MemIdentity::default();
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        let mut req = guest_request();
        req.cart_items = vec![CartLine {
            id: Some(json!(1)),
            name: None,
            quantity: 0,
            price: Decimal::new(699, 2),
        }];

        let CheckoutOutcome::Placed { order_id } = svc.guest(&req).await.unwrap() else {
            panic!("expected Placed");
        };
        let (_, lines) = ledger.order(order_id);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_coerce_food_id() {
        assert_eq!(coerce_food_id(&json!(3)), Some(FoodId::new(3)));
        assert_eq!(coerce_food_id(&json!("7")), Some(FoodId::new(7)));
        assert_eq!(coerce_food_id(&json!(" 7 ")), Some(FoodId::new(7)));
        assert_eq!(coerce_food_id(&json!("seven")), None);
        assert_eq!(coerce_food_id(&json!(2.5)), None);
        assert_eq!(coerce_food_id(&json!(null)), None);
        assert_eq!(coerce_food_id(&json!([1])), None);
        // Zero and negatives are "no identifier", not a real lookup.
        assert_eq!(coerce_food_id(&json!(0)), None);
        assert_eq!(coerce_food_id(&json!("0")), None);
        assert_eq!(coerce_food_id(&json!(-2)), None);
    }

    #[tokio::test]
    async fn test_zero_id_falls_back_to_name() {
        let catalog = MemCatalog::with_menu();
        let identity = MemIdentity::default();
        let ledger = MemLedger::default();
        let svc = service(&catalog, &identity, &ledger);

        let mut req = guest_request();
        req.cart_items = vec![CartLine {
            id: Some(json!(0)),
            name: Some("Veggie Pizza".to_owned()),
            quantity: 1,
            price: Decimal::new(849, 2),
        }];

        let CheckoutOutcome::Placed { order_id } = svc.guest(&req).await.unwrap() else {
            panic!("expected Placed");
        };
        let (_, lines) = ledger.order(order_id);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].food_id, FoodId::new(2));
    }

    #[test]
    fn test_cart_line_defaults() {
        // Sparse payloads fill in quantity 1 and price 0 like the endpoints
        // have always tolerated.
        let line: CartLine = serde_json::from_str("{}").unwrap();
        assert!(line.id.is_none());
        assert_eq!(line.quantity, 1);
        assert_eq!(line.price, Decimal::ZERO);
    }

    #[test]
    fn test_cart_line_quantity_coercion() {
        // Clients send quantities as numbers or strings interchangeably.
        let line: CartLine = serde_json::from_value(json!({"quantity": 3})).unwrap();
        assert_eq!(line.quantity, 3);

        let line: CartLine = serde_json::from_value(json!({"quantity": "2"})).unwrap();
        assert_eq!(line.quantity, 2);

        let line: CartLine = serde_json::from_value(json!({"quantity": " 4 "})).unwrap();
        assert_eq!(line.quantity, 4);

        // Unusable values fall back to the default instead of rejecting the
        // whole payload.
        let line: CartLine = serde_json::from_value(json!({"quantity": "lots"})).unwrap();
        assert_eq!(line.quantity, 1);

        let line: CartLine = serde_json::from_value(json!({"quantity": null})).unwrap();
        assert_eq!(line.quantity, 1);
    }
}
