//! Sample revenue report over a loaded store.

use crate::error::LoaderError;
use rusqlite::{params, Connection};
use serde::Serialize;

/// Products ranked by captured revenue, attributed by primary product.
pub const TOP_PRODUCTS_SQL: &str = "
SELECT
    pr.product_id,
    pr.product_name,
    pr.category,
    COUNT(o.order_id) AS orders_with_product,
    ROUND(SUM(p.amount), 2) AS revenue_contribution
FROM products pr
JOIN orders o ON o.primary_product_id = pr.product_id
JOIN payments p ON p.order_id = o.order_id AND p.payment_status = 'captured'
GROUP BY pr.product_id, pr.product_name, pr.category
ORDER BY revenue_contribution DESC, pr.product_id ASC
LIMIT ?1";

/// One row of the revenue report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRevenue {
    pub product_id: i64,
    pub product_name: String,
    pub category: String,
    pub orders_with_product: i64,
    pub revenue_contribution: f64,
}

/// Top `limit` products by captured revenue.
pub fn top_products_by_revenue(
    conn: &Connection,
    limit: u32,
) -> Result<Vec<ProductRevenue>, LoaderError> {
    let mut stmt = conn.prepare(TOP_PRODUCTS_SQL)?;
    let rows = stmt
        .query_map(params![limit], |row| {
            Ok(ProductRevenue {
                product_id: row.get(0)?,
                product_name: row.get(1)?,
                category: row.get(2)?,
                orders_with_product: row.get(3)?,
                revenue_contribution: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA_SQL: &str = include_str!("../../../sql/schema.sql");

    fn store() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA_SQL).unwrap();
        conn.execute_batch(
            "INSERT INTO customers VALUES (1, 'Avery', 'Reed', 'a@example.com', '+1-555-100-1000', 'Gold', '2024-01-01 00:00:00');
             INSERT INTO products VALUES (1, 'Home Item 1', 'Home', 10.0, 20, 'true');
             INSERT INTO products VALUES (2, 'Toys Item 2', 'Toys', 50.0, 20, 'true');
             INSERT INTO products VALUES (3, 'Beauty Item 3', 'Beauty', 5.0, 20, 'false');
             INSERT INTO orders VALUES (1, 1, '2024-01-02 00:00:00', 'fulfilled', 20.0, 1);
             INSERT INTO orders VALUES (2, 1, '2024-01-03 00:00:00', 'fulfilled', 50.0, 2);
             INSERT INTO orders VALUES (3, 1, '2024-01-04 00:00:00', 'fulfilled', 30.0, 1);
             INSERT INTO orders VALUES (4, 1, '2024-01-05 00:00:00', 'processing', 99.0, 3);
             INSERT INTO payments VALUES (1, 1, '2024-01-02 02:00:00', 'paypal', 20.0, 'USD', 'captured');
             INSERT INTO payments VALUES (2, 2, '2024-01-03 02:00:00', 'paypal', 50.0, 'USD', 'captured');
             INSERT INTO payments VALUES (3, 3, '2024-01-04 02:00:00', 'paypal', 25.0, 'USD', 'captured');
             INSERT INTO payments VALUES (4, 4, '2024-01-05 02:00:00', 'paypal', 99.0, 'USD', 'pending');",
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_ranks_by_captured_revenue() {
        let conn = store();
        let rows = top_products_by_revenue(&conn, 5).unwrap();

        // Product 3 only has a pending payment and is excluded.
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].product_id, 2);
        assert_eq!(rows[0].revenue_contribution, 50.0);
        assert_eq!(rows[1].product_id, 1);
        assert_eq!(rows[1].orders_with_product, 2);
        assert_eq!(rows[1].revenue_contribution, 45.0);
        assert_eq!(rows[1].product_name, "Home Item 1");
    }

    #[test]
    fn test_limit() {
        let conn = store();
        let rows = top_products_by_revenue(&conn, 1).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_serializes_to_json() {
        let conn = store();
        let rows = top_products_by_revenue(&conn, 1).unwrap();
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["category"], "Toys");
        assert_eq!(json[0]["orders_with_product"], 1);
    }
}
