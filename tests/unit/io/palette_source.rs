//! Tests for palette table sources

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use artgrid::ArtGridError;
    use artgrid::io::palette_source::PaletteSource;
    use artgrid::math::Rgb;

    // Tests the default source is the embedded table
    // Verified by defaulting to an empty table
    #[test]
    fn test_embedded_default() {
        let table = PaletteSource::default().load().unwrap();
        assert_eq!(table.len(), 8);
    }

    // Tests palette files are read and parsed
    // Verified by ignoring the file contents
    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"[["#010203", "#040506", "#070809", "#0a0b0c", "#0d0e0f"]]"##
        )
        .unwrap();

        let table = PaletteSource::File(file.path().to_path_buf()).load().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get(0).and_then(|p| p.get(4)),
            Some(Rgb::new(13, 14, 15))
        );
    }

    // Tests missing files report the path and operation
    // Verified by converting through the placeholder path
    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("/missing/palettes.json");
        match PaletteSource::File(path.clone()).load() {
            Err(ArtGridError::FileSystem {
                path: reported,
                operation,
                ..
            }) => {
                assert_eq!(reported, path);
                assert_eq!(operation, "read palette file");
            }
            other => unreachable!("Expected FileSystem, got {other:?}"),
        }
    }

    // Tests malformed JSON is a palette format error
    // Verified by treating malformed JSON as an empty table
    #[test]
    fn test_malformed_json() {
        let result = PaletteSource::Json("[1, 2, 3]".to_string()).load();
        assert!(matches!(result, Err(ArtGridError::PaletteFormat { .. })));
    }
}
