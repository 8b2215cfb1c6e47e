//! Tests for configuration defaults, file loading, validation and color parsing

#[cfg(test)]
mod tests {
    use floorwalls::ExtractionConfig;
    use floorwalls::extraction::claims::ClaimPolicy;
    use floorwalls::io::configuration::{
        DEFAULT_MIN_WALL_LENGTH, DEFAULT_MIN_WALL_THICKNESS, DEFAULT_TARGET_COLOR,
        DEFAULT_TOLERANCE, parse_color,
    };
    use floorwalls::io::error::ExtractionError;
    use std::fs;

    // Tests defaults match the constants
    // Verified by swapping tolerance and thickness defaults
    #[test]
    fn test_defaults() {
        let config = ExtractionConfig::default();
        assert_eq!(config.target_color, DEFAULT_TARGET_COLOR);
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(config.min_wall_length, DEFAULT_MIN_WALL_LENGTH);
        assert_eq!(config.min_wall_thickness, DEFAULT_MIN_WALL_THICKNESS);
        assert_eq!(config.claim_policy, ClaimPolicy::Scanned);
        assert!(config.validate().is_ok());
    }

    // Tests zero thresholds are rejected and zero tolerance is accepted
    // Verified by removing the length check
    #[test]
    fn test_validate_thresholds() {
        let zero_length = ExtractionConfig {
            min_wall_length: 0,
            ..ExtractionConfig::default()
        };
        assert!(matches!(
            zero_length.validate(),
            Err(ExtractionError::InvalidParameter {
                parameter: "min_wall_length",
                ..
            })
        ));

        let zero_thickness = ExtractionConfig {
            min_wall_thickness: 0,
            ..ExtractionConfig::default()
        };
        assert!(zero_thickness.validate().is_err());

        let exact = ExtractionConfig {
            tolerance: 0,
            ..ExtractionConfig::default()
        };
        assert!(exact.validate().is_ok());
    }

    // Tests a partial config file keeps defaults for missing keys
    // Verified by removing the serde default attribute
    #[test]
    fn test_partial_config_file() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be creatable");
        };
        let path = dir.path().join("walls.json");
        assert!(fs::write(&path, r#"{"tolerance": 4, "claim_policy": "emitted"}"#).is_ok());

        let Ok(config) = ExtractionConfig::from_json_file(&path) else {
            unreachable!("partial config should load");
        };
        assert_eq!(config.tolerance, 4);
        assert_eq!(config.claim_policy, ClaimPolicy::Emitted);
        assert_eq!(config.min_wall_length, DEFAULT_MIN_WALL_LENGTH);
        assert_eq!(config.target_color, DEFAULT_TARGET_COLOR);
    }

    // Tests malformed and missing config files report their path
    // Verified by mapping parse errors to a generic file system error
    #[test]
    fn test_bad_config_file() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be creatable");
        };
        let path = dir.path().join("broken.json");
        assert!(fs::write(&path, "{ tolerance: ").is_ok());

        let result = ExtractionConfig::from_json_file(&path);
        assert!(matches!(result, Err(ExtractionError::ConfigLoad { .. })));

        let missing = dir.path().join("missing.json");
        let Err(error) = ExtractionConfig::from_json_file(&missing) else {
            unreachable!("missing config should fail");
        };
        assert_eq!(error.path(), Some(missing.as_path()));
    }

    // Tests both color notations
    // Verified by parsing hex digits as decimal
    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("37,54,68"), Ok([37, 54, 68]));
        assert_eq!(parse_color(" 37, 54 ,68 "), Ok([37, 54, 68]));
        assert_eq!(parse_color("#253644"), Ok([37, 54, 68]));
        assert_eq!(parse_color("#FFffFF"), Ok([255, 255, 255]));
    }

    // Tests malformed colors are rejected
    // Verified by accepting any channel count
    #[test]
    fn test_parse_color_errors() {
        assert!(parse_color("37,54").is_err());
        assert!(parse_color("37,54,68,1").is_err());
        assert!(parse_color("37,54,300").is_err());
        assert!(parse_color("#25364").is_err());
        assert!(parse_color("#25364G").is_err());
        assert!(parse_color("#2536é").is_err());
    }
}
