/// Prefix marking an attribute as custom data carried by the host markup.
pub const DATA_ATTRIBUTE_PREFIX: &str = "data-";

/// Strips [`DATA_ATTRIBUTE_PREFIX`] when present, otherwise returns `name` unchanged.
#[must_use]
pub fn strip_data_prefix(name: &str) -> &str {
    name.strip_prefix(DATA_ATTRIBUTE_PREFIX).unwrap_or(name)
}
