use serde::de::DeserializeOwned;
use tox_engine::query::CategoryFilter;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a category filter: a category label in any spelling, or `all`.
pub fn parse_category(raw: &str) -> anyhow::Result<CategoryFilter> {
    CategoryFilter::parse(raw).ok_or_else(|| anyhow::anyhow!("invalid category '{raw}'"))
}
