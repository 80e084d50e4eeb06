use serde::de::DeserializeOwned;

/// Parse a journal enum from user input using serde-deserialization.
///
/// Input is case-insensitive and accepts `-` for `_`.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_").to_ascii_uppercase();
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Reject IDs that cannot belong to the expected entity.
pub fn require_id(id: &str, prefix: &str, entity: &str) -> anyhow::Result<()> {
    if happy_core::ids::has_prefix(id, prefix) {
        Ok(())
    } else {
        anyhow::bail!("invalid {entity} id '{id}': expected {prefix}-<hex>")
    }
}

#[cfg(test)]
mod tests {
    use happy_core::enums::{EntryType, Mood};

    use super::{parse_enum, require_id};

    #[test]
    fn parses_lowercase_values() {
        let entry_type: EntryType = parse_enum("challenge", "type").expect("type should parse");
        assert_eq!(entry_type, EntryType::Challenge);
        let mood: Mood = parse_enum(" Stressed ", "mood").expect("mood should parse");
        assert_eq!(mood, Mood::Stressed);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<EntryType>("rant", "type").expect_err("should fail");
        assert!(err.to_string().contains("invalid type 'rant'"));
    }

    #[test]
    fn id_prefix_is_checked() {
        assert!(require_id("ent-a3f8b2c1", "ent", "entry").is_ok());
        let err = require_id("tag-a3f8b2c1", "ent", "entry").expect_err("wrong prefix");
        assert!(err.to_string().contains("expected ent-<hex>"));
    }
}
