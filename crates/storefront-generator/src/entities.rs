//! Entity builders.
//!
//! Each builder draws from the random source it is handed, in a fixed
//! order, so the same seed always yields the same records.

use crate::generator::GeneratorError;
use crate::generators::numeric::{generate_currency_range, generate_int_range};
use crate::generators::pick;
use crate::generators::timestamp::{epoch, generate_date_after, generate_timestamp, WINDOW_DAYS};
use crate::weighted::WeightedChoice;
use chrono::Duration;
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;
use storefront_core::{
    Carrier, Category, Customer, LoyaltyTier, Order, OrderStatus, Payment, PaymentMethod,
    PaymentStatus, Product, Shipment, UsState,
};

pub const FIRST_NAMES: &[&str] = &[
    "Avery", "Jordan", "Taylor", "Riley", "Quinn", "Morgan", "Casey", "Kai", "Emery", "Hayden",
];

pub const LAST_NAMES: &[&str] = &[
    "Reed", "Patel", "Nguyen", "Garcia", "Kim", "Thompson", "Lewis", "Singh", "Wright", "Lopez",
];

/// Order status policy. Must sum to 1.
pub const ORDER_STATUS_WEIGHTS: [(OrderStatus, f64); 4] = [
    (OrderStatus::Processing, 0.6),
    (OrderStatus::Fulfilled, 0.25),
    (OrderStatus::Cancelled, 0.1),
    (OrderStatus::Returned, 0.05),
];

/// Payment status policy. Must sum to 1.
pub const PAYMENT_STATUS_WEIGHTS: [(PaymentStatus, f64); 3] = [
    (PaymentStatus::Captured, 0.7),
    (PaymentStatus::Pending, 0.1),
    (PaymentStatus::Refunded, 0.2),
];

/// Active flag drawn from this pool, giving a 2:1 true:false bias.
const ACTIVE_POOL: [bool; 3] = [true, true, false];

pub const MAX_ITEMS_PER_ORDER: i64 = 4;
pub const MAX_QUANTITY_PER_ITEM: i64 = 3;
pub const PAYMENT_DELAY_HOURS: i64 = 2;
pub const CURRENCY: &str = "USD";

/// Orders with their 1:1 payments and shipments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderLedger {
    pub orders: Vec<Order>,
    pub payments: Vec<Payment>,
    pub shipments: Vec<Shipment>,
}

/// Generate `count` customers with IDs `1..=count`.
pub fn generate_customers<R: Rng>(rng: &mut R, count: usize) -> Vec<Customer> {
    (1..=count as i64)
        .map(|customer_id| {
            let first = pick(rng, FIRST_NAMES);
            let last = pick(rng, LAST_NAMES);
            let created_at = generate_timestamp(rng, epoch(), WINDOW_DAYS);
            let phone = format!(
                "+1-555-{:03}-{:04}",
                generate_int_range(rng, 100, 999),
                generate_int_range(rng, 1000, 9999)
            );
            Customer {
                customer_id,
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: format!(
                    "{}.{}{}@example.com",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    customer_id
                ),
                phone,
                loyalty_tier: pick(rng, LoyaltyTier::ALL),
                created_at,
            }
        })
        .collect()
}

/// Generate `count` products with IDs `1..=count`.
pub fn generate_products<R: Rng>(rng: &mut R, count: usize) -> Vec<Product> {
    (1..=count as i64)
        .map(|product_id| {
            let category = pick(rng, Category::ALL);
            Product {
                product_id,
                product_name: format!("{category} Item {product_id}"),
                category,
                unit_price: generate_currency_range(rng, 10.0, 300.0),
                stock_qty: generate_int_range(rng, 15, 300),
                active: pick(rng, &ACTIVE_POOL),
            }
        })
        .collect()
}

/// Generate `count` orders over the given customers and products, each with
/// exactly one payment and one shipment sharing the order's ID.
///
/// Items per order are sampled without replacement; when fewer products
/// exist than the drawn item count, every product is used.
pub fn generate_orders<R: Rng>(
    rng: &mut R,
    count: usize,
    customers: &[Customer],
    products: &[Product],
) -> Result<OrderLedger, GeneratorError> {
    let mut ledger = OrderLedger::default();
    if count == 0 {
        return Ok(ledger);
    }
    if customers.is_empty() {
        return Err(GeneratorError::EmptyPool("customers"));
    }
    if products.is_empty() {
        return Err(GeneratorError::EmptyPool("products"));
    }

    let order_status = WeightedChoice::new(ORDER_STATUS_WEIGHTS)?;
    let payment_status = WeightedChoice::new(PAYMENT_STATUS_WEIGHTS)?;

    for order_id in 1..=count as i64 {
        let customer = &customers[rng.gen_range(0..customers.len() as u32) as usize];
        let order_date = generate_timestamp(rng, epoch(), WINDOW_DAYS);

        let num_items = generate_int_range(rng, 1, MAX_ITEMS_PER_ORDER) as usize;
        let items: Vec<&Product> = products
            .choose_multiple(rng, num_items.min(products.len()))
            .collect();
        let subtotal: Decimal = items
            .iter()
            .map(|p| {
                let quantity = generate_int_range(rng, 1, MAX_QUANTITY_PER_ITEM);
                p.unit_price * Decimal::from(quantity)
            })
            .sum::<Decimal>()
            .round_dp(2);
        let primary_product_id = items[0].product_id;

        ledger.orders.push(Order {
            order_id,
            customer_id: customer.customer_id,
            order_date,
            order_status: order_status.sample(rng),
            total_amount: subtotal,
            primary_product_id,
        });

        let status = payment_status.sample(rng);
        ledger.payments.push(Payment {
            payment_id: order_id,
            order_id,
            payment_date: order_date + Duration::hours(PAYMENT_DELAY_HOURS),
            payment_method: pick(rng, PaymentMethod::ALL),
            amount: subtotal,
            currency: CURRENCY.to_string(),
            payment_status: status,
        });

        let shipped_date = generate_date_after(rng, order_date.date(), 0, 3);
        let delivery_date = generate_date_after(rng, shipped_date, 2, 7);
        ledger.shipments.push(Shipment {
            shipment_id: order_id,
            order_id,
            shipped_date,
            delivery_date,
            carrier: pick(rng, Carrier::ALL),
            tracking_number: format!("TRK{order_id:05}{}", generate_int_range(rng, 100, 999)),
            shipping_cost: generate_currency_range(rng, 4.99, 19.99),
            destination_state: pick(rng, UsState::ALL),
        });
    }

    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn fixtures(rng: &mut StdRng) -> (Vec<Customer>, Vec<Product>) {
        (generate_customers(rng, 15), generate_products(rng, 12))
    }

    #[test]
    fn test_policy_weights_are_valid() {
        assert!(WeightedChoice::new(ORDER_STATUS_WEIGHTS).is_ok());
        assert!(WeightedChoice::new(PAYMENT_STATUS_WEIGHTS).is_ok());
    }

    #[test]
    fn test_customers_sequential_and_unique_email() {
        let mut rng = StdRng::seed_from_u64(42);
        let customers = generate_customers(&mut rng, 15);

        assert_eq!(customers.len(), 15);
        for (i, c) in customers.iter().enumerate() {
            assert_eq!(c.customer_id, i as i64 + 1);
            assert!(c.email.ends_with(&format!("{}@example.com", c.customer_id)));
            assert!(c.email.starts_with(&c.first_name.to_lowercase()));
            assert!(c.phone.starts_with("+1-555-"));
            assert_eq!(c.phone.len(), "+1-555-123-4567".len());
        }
        let emails: HashSet<_> = customers.iter().map(|c| &c.email).collect();
        assert_eq!(emails.len(), 15);
    }

    #[test]
    fn test_products_prices_and_names() {
        let mut rng = StdRng::seed_from_u64(42);
        let products = generate_products(&mut rng, 50);

        for p in &products {
            assert!(p.unit_price >= Decimal::from(10) && p.unit_price <= Decimal::from(300));
            assert!(p.unit_price.scale() <= 2);
            assert!((15..=300).contains(&p.stock_qty));
            assert_eq!(p.product_name, format!("{} Item {}", p.category, p.product_id));
        }
        assert!(products.iter().any(|p| p.active));
    }

    #[test]
    fn test_orders_reference_existing_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let (customers, products) = fixtures(&mut rng);
        let ledger = generate_orders(&mut rng, 30, &customers, &products).unwrap();

        let customer_ids: HashSet<_> = customers.iter().map(|c| c.customer_id).collect();
        let product_ids: HashSet<_> = products.iter().map(|p| p.product_id).collect();

        assert_eq!(ledger.orders.len(), 30);
        for order in &ledger.orders {
            assert!(customer_ids.contains(&order.customer_id));
            assert!(product_ids.contains(&order.primary_product_id));
            assert!(order.total_amount > Decimal::ZERO);
            assert!(order.total_amount.scale() <= 2);
        }
    }

    #[test]
    fn test_payments_and_shipments_align_with_orders() {
        let mut rng = StdRng::seed_from_u64(42);
        let (customers, products) = fixtures(&mut rng);
        let ledger = generate_orders(&mut rng, 30, &customers, &products).unwrap();

        assert_eq!(ledger.payments.len(), 30);
        assert_eq!(ledger.shipments.len(), 30);

        for ((order, payment), shipment) in ledger
            .orders
            .iter()
            .zip(&ledger.payments)
            .zip(&ledger.shipments)
        {
            assert_eq!(payment.payment_id, order.order_id);
            assert_eq!(payment.order_id, order.order_id);
            assert_eq!(shipment.shipment_id, order.order_id);
            assert_eq!(shipment.order_id, order.order_id);

            assert_eq!(payment.amount, order.total_amount);
            assert_eq!(payment.payment_date - order.order_date, Duration::hours(2));
            assert_eq!(payment.currency, "USD");

            assert!(order.order_date.date() <= shipment.shipped_date);
            assert!(shipment.shipped_date <= shipment.delivery_date);
            assert!(shipment.tracking_number.starts_with(&format!("TRK{:05}", order.order_id)));
            assert!(shipment.shipping_cost.scale() <= 2);
        }
    }

    #[test]
    fn test_order_amount_bounded_by_item_prices() {
        let mut rng = StdRng::seed_from_u64(3);
        let (customers, products) = fixtures(&mut rng);
        let ledger = generate_orders(&mut rng, 100, &customers, &products).unwrap();

        let max_unit = products.iter().map(|p| p.unit_price).max().unwrap();
        let ceiling = max_unit * Decimal::from(MAX_ITEMS_PER_ORDER * MAX_QUANTITY_PER_ITEM);
        for order in &ledger.orders {
            assert!(order.total_amount <= ceiling);
        }
    }

    #[test]
    fn test_fewer_products_than_items() {
        let mut rng = StdRng::seed_from_u64(42);
        let customers = generate_customers(&mut rng, 2);
        let products = generate_products(&mut rng, 1);
        let ledger = generate_orders(&mut rng, 20, &customers, &products).unwrap();

        assert!(ledger.orders.iter().all(|o| o.primary_product_id == 1));
    }

    #[test]
    fn test_empty_pools() {
        let mut rng = StdRng::seed_from_u64(42);
        let products = generate_products(&mut rng, 3);

        assert!(matches!(
            generate_orders(&mut rng, 5, &[], &products),
            Err(GeneratorError::EmptyPool("customers"))
        ));
        assert_eq!(generate_orders(&mut rng, 0, &[], &[]).unwrap(), OrderLedger::default());
    }
}
