//! ID prefix constants.
//!
//! Every persisted entity gets an ID of the form `<prefix>-<8 hex chars>`,
//! generated by the database (see `happy_db::JournalDb::generate_id`).

pub const PREFIX_USER: &str = "usr";
pub const PREFIX_TAG: &str = "tag";
pub const PREFIX_ENTRY: &str = "ent";

pub const ALL_PREFIXES: &[&str] = &[PREFIX_USER, PREFIX_TAG, PREFIX_ENTRY];

/// Check whether `id` has the expected `<prefix>-<hex>` shape.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|hex| !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_distinct() {
        let mut seen = ALL_PREFIXES.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), ALL_PREFIXES.len());
    }

    #[test]
    fn has_prefix_accepts_generated_shape() {
        assert!(has_prefix("ent-a3f8b2c1", PREFIX_ENTRY));
        assert!(!has_prefix("ent-", PREFIX_ENTRY));
        assert!(!has_prefix("tag-a3f8b2c1", PREFIX_ENTRY));
        assert!(!has_prefix("ent-zzzz", PREFIX_ENTRY));
    }
}
