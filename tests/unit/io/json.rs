//! Tests for JSON output formatting and directory handling

#[cfg(test)]
mod tests {
    use floorwalls::io::json::write_json;
    use floorwalls::model::room::RoomRecord;
    use std::fs;

    // Tests output uses four-space indentation and no trailing newline
    // Verified by switching to the default pretty printer
    #[test]
    fn test_four_space_indent() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be creatable");
        };
        let path = dir.path().join("attic.json");
        let room = RoomRecord::new("attic", 4, 4, Vec::new());

        assert!(write_json(&room, &path).is_ok());
        let text = fs::read_to_string(&path).unwrap_or_default();
        assert!(text.starts_with("{\n    \"id\": \"attic\",\n    \"name\": \"attic\",\n"));
        assert!(text.contains("\n    \"center\": {\n        \"X\": 2,\n        \"Y\": 2\n    },"));
        assert!(text.contains("\"walls\": [],"));
        assert!(text.ends_with("\"doors\": []\n}"));
    }

    // Tests missing parent directories are created
    // Verified by removing the directory creation
    #[test]
    fn test_creates_parent_directory() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be creatable");
        };
        let path = dir.path().join("nested").join("out").join("world.json");
        assert!(write_json(&[1, 2, 3], &path).is_ok());
        assert!(path.exists());
    }

    // Tests write failures report the target path
    // Verified by mapping the error without its path
    #[test]
    fn test_unwritable_target() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be creatable");
        };
        let Err(error) = write_json(&1, dir.path()) else {
            unreachable!("a directory cannot be opened as a file");
        };
        assert_eq!(error.path(), Some(dir.path()));
    }
}
