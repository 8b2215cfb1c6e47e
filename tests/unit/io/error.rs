//! Tests for error display, sources and path context

#[cfg(test)]
mod tests {
    use floorwalls::io::error::{ExtractionError, WithPath, invalid_parameter};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests path context is attached to I/O failures
    // Verified by discarding the path in with_path
    #[test]
    fn test_with_path_attaches_context() {
        let result: std::io::Result<()> = Err(std::io::Error::other("disk full"));
        let Err(error) = result.with_path(Path::new("result/kitchen.json"), "write file") else {
            unreachable!("error should propagate");
        };

        assert_eq!(error.path(), Some(Path::new("result/kitchen.json")));
        let message = error.to_string();
        assert!(message.contains("write file"));
        assert!(message.contains("result/kitchen.json"));
        assert!(message.contains("disk full"));
        assert!(error.source().is_some());
        assert!(!error.is_configuration());
    }

    // Tests invalid parameters carry no path and count as configuration errors
    // Verified by classifying parameter errors as file errors
    #[test]
    fn test_invalid_parameter() {
        let error = invalid_parameter("min_wall_length", &0, &"must be at least 1");
        assert_eq!(error.path(), None);
        assert!(error.is_configuration());
        assert!(error.source().is_none());
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'min_wall_length' = '0': must be at least 1"
        );
    }

    // Tests image load failures name the offending file
    // Verified by omitting the path from the display message
    #[test]
    fn test_image_load_names_file() {
        let path = PathBuf::from("rooms/broken.png");
        let Err(source) = image::load_from_memory(b"not an image") else {
            unreachable!("garbage bytes should not decode");
        };
        let error = ExtractionError::ImageLoad {
            path: path.clone(),
            source,
        };
        assert_eq!(error.path(), Some(path.as_path()));
        assert!(error.to_string().contains("rooms/broken.png"));
        assert!(error.source().is_some());
    }
}
