//! Command-line interface for generating and persisting terrain boards

use crate::algorithm::executor::{BoardGenerator, GeneratorConfig};
use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::{DEFAULT_DEPTH, DEFAULT_SEED, DEFAULT_WIDTH, PREVIEW_SUFFIX};
use crate::io::error::Result;
use crate::io::preview::export_board_as_png;
use crate::io::progress::ProgressTracker;
use crate::io::snapshot::LevelSnapshot;
use crate::spatial::grid::BoardGrid;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "boardgen")]
#[command(
    author,
    version,
    about = "Generate terrain boards under local density constraints"
)]
/// Command-line arguments for the board generation tool
pub struct Cli {
    /// Output path for the board snapshot (JSON)
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Board width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,

    /// Board depth in cells
    #[arg(short = 'D', long, default_value_t = DEFAULT_DEPTH)]
    pub depth: i32,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Existing snapshot to restore before filling the remaining cells
    #[arg(short, long)]
    pub from: Option<PathBuf>,

    /// Also export a PNG preview next to the snapshot
    #[arg(short, long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite the target snapshot if it already exists
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Check if an existing output file should be left alone
    pub const fn skip_existing(&self) -> bool {
        !self.force
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one board run: restore, generate, persist, preview
pub struct BoardProcessor {
    cli: Cli,
}

impl BoardProcessor {
    /// Create a processor from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the board pipeline described by the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation, snapshot restore,
    /// generation, or any output step fails.
    // Allow print for user feedback on skip and completion
    #[allow(clippy::print_stderr)]
    pub fn process(&self) -> Result<()> {
        if self.cli.skip_existing() && self.cli.target.exists() {
            if !self.cli.quiet {
                eprintln!(
                    "Skipping: {} (output exists, pass --force to overwrite)",
                    self.cli.target.display()
                );
            }
            return Ok(());
        }

        let config = GeneratorConfig::new(self.cli.width, self.cli.depth);
        let generator = BoardGenerator::new(config)?;

        let mut board = BoardGrid::new();
        if let Some(ref from) = self.cli.from {
            let snapshot = LevelSnapshot::load(from)?;
            BoardGenerator::load_from_snapshot(&mut board, &snapshot)?;
        }

        let mut selector = RandomSelector::from_seed(self.cli.seed);
        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressTracker::new(self.cli.depth as u64));

        for row in 0..self.cli.depth {
            generator.generate_row(&mut board, row, &mut selector)?;
            if let Some(ref bar) = progress {
                bar.row_completed();
            }
        }

        if let Some(ref bar) = progress {
            bar.finish("board complete");
        }

        let snapshot = BoardGenerator::save_to_snapshot(&board);
        snapshot.save(&self.cli.target)?;

        if self.cli.preview {
            export_board_as_png(&board, &Self::get_preview_path(&self.cli.target))?;
        }

        if !self.cli.quiet {
            eprintln!(
                "Wrote {} tiles to {}",
                snapshot.len(),
                self.cli.target.display()
            );
        }

        Ok(())
    }

    fn get_preview_path(target: &Path) -> PathBuf {
        let stem = target.file_stem().unwrap_or_default();
        let preview_name = format!("{}{PREVIEW_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = target.parent() {
            parent.join(preview_name)
        } else {
            PathBuf::from(preview_name)
        }
    }
}
