//! Tests for error formatting, classification and path attachment

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::{Path, PathBuf};

    use artgrid::ArtGridError;
    use artgrid::io::error::{WithPath, Warning, invalid_parameter};

    // Tests invalid parameter errors name the parameter and value
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_parameter_display() {
        let error = invalid_parameter("rows", &0, &"must be between 1 and 512");
        let message = error.to_string();
        assert!(message.contains("'rows'"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be between 1 and 512"));
    }

    // Tests configuration errors are classified as such
    // Verified by classifying every error as configuration
    #[test]
    fn test_configuration_classification() {
        assert!(ArtGridError::EmptyStyleSet.is_configuration());
        assert!(
            ArtGridError::PaletteIndexOutOfRange {
                index: 9,
                table_size: 8
            }
            .is_configuration()
        );
        assert!(
            !ArtGridError::IncompleteScene {
                row: 0,
                col: 0,
                coverage: 2
            }
            .is_configuration()
        );
        assert!(
            !ArtGridError::PaletteFormat {
                reason: "bad".to_string()
            }
            .is_configuration()
        );
    }

    // Tests I/O errors keep their source and gain the path
    // Verified by returning None from source
    #[test]
    fn test_io_error_source_and_path() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let error = result.with_path(Path::new("out/art.svg")).unwrap_err();

        assert!(error.source().is_some());
        match &error {
            ArtGridError::FileSystem { path, .. } => {
                assert_eq!(path, &PathBuf::from("out/art.svg"));
            }
            other => unreachable!("Expected FileSystem, got {other:?}"),
        }
        assert!(error.to_string().contains("out/art.svg"));
    }

    // Tests image errors gain the path they were loading
    // Verified by matching only FileSystem in with_path
    #[test]
    fn test_image_error_with_path() {
        let missing = image::open("/nowhere/at/all.png").map(|_| ());
        match missing.with_path(Path::new("/nowhere/at/all.png")) {
            Err(ArtGridError::ImageLoad { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nowhere/at/all.png"));
            }
            other => unreachable!("Expected ImageLoad, got {other:?}"),
        }
    }

    // Tests JSON errors convert to serialization errors
    // Verified by mapping them to PaletteFormat
    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<u32, serde_json::Error> = serde_json::from_str("{");
        let error: ArtGridError = parse.unwrap_err().into();
        assert!(matches!(error, ArtGridError::Serialization { .. }));
        assert!(error.source().is_none());
    }

    // Tests incomplete scene messages report the coverage count
    // Verified by dropping the count from the message
    #[test]
    fn test_incomplete_scene_display() {
        let error = ArtGridError::IncompleteScene {
            row: 3,
            col: 4,
            coverage: 2,
        };
        assert_eq!(
            error.to_string(),
            "Scene covers position (3, 4) 2 times instead of exactly once"
        );
    }

    // Tests warnings describe the recovery taken
    // Verified by formatting coverage as a raw fraction
    #[test]
    fn test_warning_display() {
        let dominates = Warning::BigBlockDominates {
            coverage: 0.75,
            limit: 0.5,
        };
        assert_eq!(
            dominates.to_string(),
            "Big block covers 75% of the grid (limit 50%)"
        );

        let abandoned = Warning::BigBlockAbandoned {
            size: 3,
            attempts: 64,
        };
        assert!(abandoned.to_string().contains("3x3"));
        assert!(abandoned.to_string().contains("64 attempts"));

        let palette = Warning::PaletteFallback {
            reason: "empty".to_string(),
        };
        assert!(palette.to_string().contains("embedded palettes"));
    }
}
