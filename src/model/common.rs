//! Types shared across service areas.

dto! {
    /// Instance selection criteria: either concrete instance ids
    /// (`Key: InstanceIds`) or a tag lookup (`Key: tag:<name>`).
    pub struct Target {
        key: scalar String => "Key",
        values: list String => "Values",
    }
}

dto! {
    /// One resource tag.
    pub struct Tag {
        key: scalar String => "Key",
        value: scalar String => "Value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_values_append_across_with_calls() {
        let target = Target::new()
            .with_key("InstanceIds".to_string())
            .with_values("i-0123".to_string())
            .with_values("i-4567".to_string());
        assert_eq!(
            target.values(),
            Some(&["i-0123".to_string(), "i-4567".to_string()][..])
        );
    }

    #[test]
    fn untouched_list_stays_absent() {
        let target = Target::new().with_key("InstanceIds".to_string());
        assert_eq!(target.values(), None);
        assert_eq!(format!("{:?}", target), "{Key: InstanceIds}");
    }

    #[test]
    fn equality_is_structural() {
        let a = Tag::new()
            .with_key("env".to_string())
            .with_value("prod".to_string());
        let b = Tag::new()
            .with_key("env".to_string())
            .with_value("prod".to_string());
        assert_eq!(a, b);

        let c = b.clone().with_value("staging".to_string());
        assert_ne!(a, c);
    }

    #[test]
    fn hashes_match_for_equal_records() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |tag: &Tag| {
            let mut hasher = DefaultHasher::new();
            tag.hash(&mut hasher);
            hasher.finish()
        };

        let a = Tag::new().with_key("env".to_string());
        let b = Tag::new().with_key("env".to_string());
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn serializes_with_wire_names_and_skips_absent() {
        let target = Target::new()
            .with_key("tag:env".to_string())
            .with_values("prod".to_string());
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "Key": "tag:env", "Values": ["prod"] })
        );

        let empty = serde_json::to_value(&Target::new()).unwrap();
        assert_eq!(empty, serde_json::json!({}));
    }
}
