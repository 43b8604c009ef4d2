//! The five storefront entities and their fixed vocabularies.

use crate::schema::{TableDefinition, CUSTOMERS, ORDERS, PAYMENTS, PRODUCTS, SHIPPING};
use crate::values::{Record, Value};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::fmt;

/// Interchange format for timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Interchange format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Declares a closed text enumeration with its wire spelling.
macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire spelling.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Customer segmentation tier.
    LoyaltyTier {
        Bronze => "Bronze",
        Silver => "Silver",
        Gold => "Gold",
        Platinum => "Platinum",
    }
}

vocabulary! {
    /// Product category.
    Category {
        Electronics => "Electronics",
        Home => "Home",
        Outdoors => "Outdoors",
        Beauty => "Beauty",
        Fitness => "Fitness",
        Toys => "Toys",
    }
}

vocabulary! {
    /// Order lifecycle status.
    OrderStatus {
        Processing => "processing",
        Fulfilled => "fulfilled",
        Cancelled => "cancelled",
        Returned => "returned",
    }
}

vocabulary! {
    PaymentMethod {
        CreditCard => "credit_card",
        Paypal => "paypal",
        ApplePay => "apple_pay",
        GooglePay => "google_pay",
    }
}

vocabulary! {
    /// Payment status. `Captured` means funds were collected.
    PaymentStatus {
        Captured => "captured",
        Refunded => "refunded",
        Pending => "pending",
    }
}

vocabulary! {
    Carrier {
        Ups => "UPS",
        FedEx => "FedEx",
        Usps => "USPS",
        Dhl => "DHL",
    }
}

vocabulary! {
    /// Shipment destination.
    UsState {
        Ca => "CA",
        Ny => "NY",
        Tx => "TX",
        Wa => "WA",
        Il => "IL",
        Fl => "FL",
        Ma => "MA",
        Ga => "GA",
    }
}

fn timestamp(value: &NaiveDateTime) -> Value {
    Value::Text(value.format(TIMESTAMP_FORMAT).to_string())
}

fn date(value: &NaiveDate) -> Value {
    Value::Text(value.format(DATE_FORMAT).to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub loyalty_tier: LoyaltyTier,
    pub created_at: NaiveDateTime,
}

impl Record for Customer {
    const TABLE: &'static TableDefinition = &CUSTOMERS;

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.customer_id),
            Value::text(&self.first_name),
            Value::text(&self.last_name),
            Value::text(&self.email),
            Value::text(&self.phone),
            Value::text(self.loyalty_tier.as_str()),
            timestamp(&self.created_at),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub category: Category,
    pub unit_price: Decimal,
    pub stock_qty: i64,
    /// Written as the text `true` / `false`.
    pub active: bool,
}

impl Record for Product {
    const TABLE: &'static TableDefinition = &PRODUCTS;

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.product_id),
            Value::text(&self.product_name),
            Value::text(self.category.as_str()),
            Value::Real(self.unit_price),
            Value::Integer(self.stock_qty),
            Value::text(if self.active { "true" } else { "false" }),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: i64,
    pub customer_id: i64,
    pub order_date: NaiveDateTime,
    pub order_status: OrderStatus,
    pub total_amount: Decimal,
    /// First product sampled for the order.
    pub primary_product_id: i64,
}

impl Record for Order {
    const TABLE: &'static TableDefinition = &ORDERS;

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.order_id),
            Value::Integer(self.customer_id),
            timestamp(&self.order_date),
            Value::text(self.order_status.as_str()),
            Value::Real(self.total_amount),
            Value::Integer(self.primary_product_id),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub payment_id: i64,
    pub order_id: i64,
    pub payment_date: NaiveDateTime,
    pub payment_method: PaymentMethod,
    pub amount: Decimal,
    pub currency: String,
    pub payment_status: PaymentStatus,
}

impl Record for Payment {
    const TABLE: &'static TableDefinition = &PAYMENTS;

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.payment_id),
            Value::Integer(self.order_id),
            timestamp(&self.payment_date),
            Value::text(self.payment_method.as_str()),
            Value::Real(self.amount),
            Value::text(&self.currency),
            Value::text(self.payment_status.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    pub shipment_id: i64,
    pub order_id: i64,
    pub shipped_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub carrier: Carrier,
    pub tracking_number: String,
    pub shipping_cost: Decimal,
    pub destination_state: UsState,
}

impl Record for Shipment {
    const TABLE: &'static TableDefinition = &SHIPPING;

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.shipment_id),
            Value::Integer(self.order_id),
            date(&self.shipped_date),
            date(&self.delivery_date),
            Value::text(self.carrier.as_str()),
            Value::text(&self.tracking_number),
            Value::Real(self.shipping_cost),
            Value::text(self.destination_state.as_str()),
        ]
    }
}
