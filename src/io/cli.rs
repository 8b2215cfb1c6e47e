//! Command-line interface for batch wall extraction over a directory of room images

use crate::extraction::claims::ClaimPolicy;
use crate::extraction::pipeline::build_room;
use crate::io::configuration::{
    DEBUG_SUFFIX, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIR, ExtractionConfig, WORLD_FILE_NAME,
    parse_color,
};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::image::{is_supported_image, load_room_image, render_debug_image, save_debug_image};
use crate::io::json::write_json;
use crate::io::progress::ProgressManager;
use crate::model::room::RoomRecord;
use crate::model::world::WorldRecord;
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "floorwalls")]
#[command(
    author,
    version,
    about = "Extract wall rectangles from color-coded floor plan images"
)]
/// Command-line arguments for the wall extraction tool
pub struct Cli {
    /// Room image or directory of room images to process
    #[arg(value_name = "SOURCE", default_value = DEFAULT_SOURCE_DIR)]
    pub source: PathBuf,

    /// Directory receiving room JSON, debug images and world.json
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// JSON file with extraction parameters; flags below override it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Wall color as R,G,B or #RRGGBB
    #[arg(long, value_name = "COLOR", value_parser = parse_color)]
    pub target_color: Option<[u8; 3]>,

    /// Maximum per-channel deviation from the wall color
    #[arg(short, long)]
    pub tolerance: Option<u8>,

    /// Minimum wall length in pixels
    #[arg(short = 'l', long)]
    pub min_length: Option<usize>,

    /// Minimum wall thickness in pixels
    #[arg(short = 'w', long)]
    pub min_thickness: Option<usize>,

    /// Pixels consumed by the first scan pass: scanned (default) or emitted
    #[arg(long, value_name = "POLICY")]
    pub claim_policy: Option<ClaimPolicy>,

    /// Skip unreadable rooms with a warning instead of aborting the batch
    #[arg(short, long)]
    pub keep_going: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolve defaults, the optional config file and flag overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or the result fails validation
    pub fn extraction_config(&self) -> Result<ExtractionConfig> {
        let mut config = match &self.config {
            Some(path) => ExtractionConfig::from_json_file(path)?,
            None => ExtractionConfig::default(),
        };

        if let Some(color) = self.target_color {
            config.target_color = color;
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        if let Some(min_length) = self.min_length {
            config.min_wall_length = min_length;
        }
        if let Some(min_thickness) = self.min_thickness {
            config.min_wall_thickness = min_thickness;
        }
        if let Some(policy) = self.claim_policy {
            config.claim_policy = policy;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Outcome of a completed batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Room ids written, in processing order
    pub processed: Vec<String>,
    /// Files skipped under `--keep-going`, with the reason
    pub skipped: Vec<(PathBuf, String)>,
    /// Location of the aggregate world file
    pub world_path: PathBuf,
}

/// Orchestrates batch processing of room images with progress tracking
pub struct FileProcessor {
    cli: Cli,
    config: ExtractionConfig,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a processor, validating configuration before any file is touched
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(cli: Cli) -> Result<Self> {
        let config = cli.extraction_config()?;
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            config,
            progress_manager,
        })
    }

    /// Effective extraction parameters
    pub const fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Process every room and write the world file
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be listed, the output directory
    /// cannot be created, the world file cannot be written, or, without
    /// `--keep-going`, any single room fails
    pub fn process(&self) -> Result<BatchReport> {
        let files = self.collect_files()?;
        std::fs::create_dir_all(&self.cli.output)
            .with_path(&self.cli.output, "create directory")?;

        if let Some(ref pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut rooms = Vec::with_capacity(files.len());
        let mut skipped = Vec::new();

        for file in &files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }

            match self.process_file(file) {
                Ok(room) => {
                    info!("Processed {} ({} walls)", file.display(), room.walls.len());
                    if let Some(ref pm) = self.progress_manager {
                        pm.complete_file(file, room.walls.len());
                    }
                    rooms.push(room);
                }
                Err(error) if self.cli.keep_going => {
                    warn!("Skipping {}: {error}", file.display());
                    if let Some(ref pm) = self.progress_manager {
                        pm.skip_file(file);
                    }
                    skipped.push((file.clone(), error.to_string()));
                }
                Err(error) => return Err(error),
            }
        }

        let processed = rooms.iter().map(|room| room.id.clone()).collect();
        let world = WorldRecord::from_rooms(rooms);
        let world_path = self.cli.output.join(WORLD_FILE_NAME);
        write_json(&world, &world_path)?;

        info!(
            "Wrote {} rooms with {} walls to {}",
            world.rooms.len(),
            world.wall_count(),
            world_path.display()
        );
        if let Some(ref pm) = self.progress_manager {
            pm.finish(&world_path);
        }

        Ok(BatchReport {
            processed,
            skipped,
            world_path,
        })
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let source = &self.cli.source;
        if source.is_file() {
            if is_supported_image(source) {
                Ok(vec![source.clone()])
            } else {
                Err(invalid_parameter(
                    "source",
                    &source.display(),
                    &"file is not a supported image format",
                ))
            }
        } else if source.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(source).with_path(source, "read directory")? {
                let path = entry.with_path(source, "read directory")?.path();
                if path.is_file() && is_supported_image(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "source",
                &source.display(),
                &"must be an image file or a directory",
            ))
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<RoomRecord> {
        let room_id = Self::room_id(input_path)?;
        let image = load_room_image(input_path)?;
        let room = build_room(&room_id, &image, &self.config);

        write_json(&room, &self.room_json_path(&room_id))?;

        let debug = render_debug_image(
            &room.walls,
            image.width(),
            image.height(),
            self.config.target_color,
        );
        save_debug_image(&debug, &self.debug_image_path(&room_id))?;

        Ok(room)
    }

    fn room_id(input_path: &Path) -> Result<String> {
        input_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| {
                invalid_parameter(
                    "source",
                    &input_path.display(),
                    &"file name has no stem to use as room id",
                )
            })
    }

    fn room_json_path(&self, room_id: &str) -> PathBuf {
        self.cli.output.join(format!("{room_id}.json"))
    }

    fn debug_image_path(&self, room_id: &str) -> PathBuf {
        self.cli.output.join(format!("{room_id}{DEBUG_SUFFIX}.png"))
    }
}
