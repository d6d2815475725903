#[cfg(test)]
mod tests {
    use super::super::settings::{next_updated_at, SettingsPatch, UserArrayConfiguration};
    use chrono::{DateTime, Duration, Utc};

    fn epoch() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default()
    }

    fn settings() -> UserArrayConfiguration {
        UserArrayConfiguration {
            id: 1,
            user_id: 7,
            array_size: 100,
            speed: 1,
            updated_at: epoch(),
        }
    }

    #[test]
    fn test_apply_speed_only_keeps_array_size() {
        let mut current = settings();
        let patch = SettingsPatch {
            array_size: None,
            speed: Some(5),
        };

        patch.apply(&mut current, epoch() + Duration::seconds(3));

        assert_eq!(current.array_size, 100);
        assert_eq!(current.speed, 5);
        assert_eq!(current.updated_at, epoch() + Duration::seconds(3));
    }

    #[test]
    fn test_apply_both_fields() {
        let mut current = settings();
        let patch = SettingsPatch {
            array_size: Some(250),
            speed: Some(3),
        };

        patch.apply(&mut current, epoch() + Duration::seconds(1));

        assert_eq!(current.array_size, 250);
        assert_eq!(current.speed, 3);
    }

    #[test]
    fn test_apply_zero_leaves_field_unchanged() {
        let mut current = settings();
        let patch = SettingsPatch {
            array_size: Some(0),
            speed: Some(0),
        };
        assert!(patch.is_empty());

        patch.apply(&mut current, epoch() + Duration::seconds(1));

        assert_eq!(current.array_size, 100);
        assert_eq!(current.speed, 1);
        // Still counts as a mutation
        assert!(current.updated_at > epoch());
    }

    #[test]
    fn test_negative_values_are_applied() {
        let mut current = settings();
        let patch = SettingsPatch {
            array_size: Some(-4),
            speed: None,
        };
        assert!(!patch.is_empty());

        patch.apply(&mut current, epoch() + Duration::seconds(1));

        assert_eq!(current.array_size, -4);
    }

    #[test]
    fn test_next_updated_at_is_strictly_later() {
        let previous = epoch();

        assert_eq!(
            next_updated_at(previous, previous + Duration::seconds(2)),
            previous + Duration::seconds(2)
        );
        assert!(next_updated_at(previous, previous) > previous);
        assert!(next_updated_at(previous, previous - Duration::seconds(30)) > previous);
    }

    #[test]
    fn test_patch_deserializes_missing_fields_as_none() {
        let patch: SettingsPatch = serde_json::from_str(r#"{"speed": 4}"#).unwrap();
        assert_eq!(
            patch,
            SettingsPatch {
                array_size: None,
                speed: Some(4),
            }
        );

        let patch: SettingsPatch = serde_json::from_str(r#"{"array_size": null}"#).unwrap();
        assert_eq!(patch, SettingsPatch::default());
    }
}
