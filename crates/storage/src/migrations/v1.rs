//! Migration v1: customers collection

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS customers (
    mobile_no TEXT PRIMARY KEY,
    customer_name TEXT NOT NULL
);
";
