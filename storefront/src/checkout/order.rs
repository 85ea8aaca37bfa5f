//! Order placement

use super::{CheckoutForm, upi_payment_link};
use crate::auth::{Session, require_session};
use crate::cart::Cart;
use crate::core::UpiConfig;
use crate::store::Repository;
use crate::utils::validate_form;
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Order, OrderCreate, OrderItem, OrderItemCreate, OrderStatus, PAYMENT_STATUS_PENDING,
    PaymentMethod,
};

/// Result of a successful checkout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedOrder {
    pub order: Order,
    pub items: Vec<OrderItem>,
    /// UPI deep link, present for UPI orders
    pub payment_link: Option<String>,
}

/// Persist the cart as an order and its lines, then empty the cart
///
/// Each line keeps the price captured in the cart. If the lines cannot be
/// written the order row is removed again and the cart is left untouched.
pub async fn place_order(
    repo: &Repository,
    session: Option<&Session>,
    cart: &mut Cart,
    form: &CheckoutForm,
    upi: &UpiConfig,
) -> AppResult<PlacedOrder> {
    let session = require_session(session)?;
    if cart.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }
    let form = form.normalized();
    validate_form(&form)?;

    let payload = OrderCreate {
        user_id: session.user_id,
        total_amount: cart.total(),
        status: OrderStatus::Pending,
        payment_method: form.payment_method,
        payment_status: PAYMENT_STATUS_PENDING.to_string(),
        phone: form.phone,
        hostel_name: form.hostel_name,
        room_number: form.room_number,
        special_instructions: form.instructions,
    };
    let order: Order = repo.insert(&payload).await?;

    let lines: Vec<OrderItemCreate> = cart
        .items()
        .iter()
        .map(|line| OrderItemCreate {
            order_id: order.id,
            menu_item_id: line.menu_item_id,
            quantity: line.quantity,
            price_at_order: line.price,
        })
        .collect();

    let items = match repo.insert_many::<OrderItem, _>(&lines).await {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(order_id = %order.id, error = %e, "Failed to save order items");
            if let Err(cleanup) = repo.delete::<Order>(order.id).await {
                tracing::warn!(
                    order_id = %order.id,
                    error = %cleanup,
                    "Failed to remove incomplete order"
                );
            }
            return Err(e);
        }
    };

    let payment_link = match order.payment_method {
        PaymentMethod::Upi => Some(upi_payment_link(upi, order.total_amount)?),
        PaymentMethod::Cod => None,
    };

    tracing::info!(
        order_id = %order.id,
        user_id = %session.user_id,
        total = %order.total_amount,
        items = items.len(),
        payment_method = %order.payment_method,
        "Order placed"
    );
    cart.clear();

    Ok(PlacedOrder {
        order,
        items,
        payment_link,
    })
}
