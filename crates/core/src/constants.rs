//! Shared constants for pms-suggest.

use crate::MatchPolicy;

/// Schema version the store migrates to.
pub const SCHEMA_VERSION: i32 = 2;

/// Mobile numbers are digit strings; users type them from the start.
pub const MOBILE_MATCH: MatchPolicy = MatchPolicy::Prefix;

/// Names are free text and users may recall any fragment.
pub const NAME_MATCH: MatchPolicy = MatchPolicy::ContainsIgnoreCase;

pub const DESCRIPTION_MATCH: MatchPolicy = MatchPolicy::PrefixIgnoreCase;

pub const REMARK_MATCH: MatchPolicy = MatchPolicy::PrefixIgnoreCase;

/// File name used for the JSON export artifact.
pub const EXPORT_FILE_NAME: &str = "pms-idb-data.json";

/// Default `SQLite` pool size.
pub const DEFAULT_POOL_SIZE: u32 = 8;

/// Minimum typed length before mobile suggestions are offered.
pub const DEFAULT_MIN_MOBILE_QUERY_LEN: usize = 3;

/// Minimum typed length before name/description/remark suggestions are offered.
pub const DEFAULT_MIN_TEXT_QUERY_LEN: usize = 1;
