//! Migration v2: descriptions and remarks collections

/// Column names used by the earliest customer layout, mapped to current names.
pub(super) const LEGACY_CUSTOMER_COLUMNS: [(&str, &str); 2] =
    [("phone", "mobile_no"), ("name", "customer_name")];

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS descriptions (
    value TEXT PRIMARY KEY
);

CREATE TABLE IF NOT EXISTS remarks (
    value TEXT PRIMARY KEY
);
";
