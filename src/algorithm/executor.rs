//! Board fill driver: configuration, row-major generation, snapshot bridges

use crate::algorithm::placement::{CategoryRule, PlacementConstraint, legal_categories};
use crate::algorithm::selection::{UniformSource, choose_category};
use crate::io::configuration::{
    FOREST_DENSITY_CAP, FOREST_PROXIMITY_RANGE, MAX_BOARD_DIMENSION, WATER_DENSITY_CAP,
    WATER_PROXIMITY_RANGE,
};
use crate::io::error::{BoardError, Result, invalid_parameter};
use crate::io::snapshot::LevelSnapshot;
use crate::spatial::grid::BoardGrid;
use crate::spatial::tiles::{Category, Coordinate, TileRecord};

/// Parameters bounding one generation pass
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Number of columns; cells span `x ∈ [0, width)`
    pub width: i32,
    /// Number of rows; cells span `y ∈ [0, depth)`
    pub depth: i32,
    /// Placement rules for the constrained categories
    pub rules: Vec<CategoryRule>,
}

impl GeneratorConfig {
    /// Create a configuration with the standard category rules
    pub fn new(width: i32, depth: i32) -> Self {
        Self {
            width,
            depth,
            rules: Self::default_rules(),
        }
    }

    /// The standard constrained-category rules
    ///
    /// Forest clusters tightly (range 2, cap 7); water pools wider before its
    /// cap bites (range 3, cap 16).
    pub fn default_rules() -> Vec<CategoryRule> {
        vec![
            CategoryRule {
                category: Category::Forest,
                constraint: PlacementConstraint {
                    range: FOREST_PROXIMITY_RANGE,
                    max_density: FOREST_DENSITY_CAP,
                },
            },
            CategoryRule {
                category: Category::Water,
                constraint: PlacementConstraint {
                    range: WATER_PROXIMITY_RANGE,
                    max_density: WATER_DENSITY_CAP,
                },
            },
        ]
    }
}

/// Fills a board region cell by cell under the configured placement rules
///
/// The driver is stateless between calls: all board state lives in the
/// [`BoardGrid`] passed in, so a partially filled board can be handed back
/// later and generation continues from wherever records are missing.
#[derive(Clone, Debug)]
pub struct BoardGenerator {
    config: GeneratorConfig,
}

impl BoardGenerator {
    /// Validate a configuration and build a generator from it
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidParameter`] if a dimension is
    /// non-positive or exceeds the maximum board dimension, if a rule targets
    /// the default category, or if a rule carries a negative range or a zero
    /// density cap.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        if config.width < 1 {
            return Err(invalid_parameter(
                "width",
                &config.width,
                &"board dimensions must be positive",
            ));
        }
        if config.depth < 1 {
            return Err(invalid_parameter(
                "depth",
                &config.depth,
                &"board dimensions must be positive",
            ));
        }
        if config.width as usize > MAX_BOARD_DIMENSION || config.depth as usize > MAX_BOARD_DIMENSION
        {
            return Err(invalid_parameter(
                "width/depth",
                &format!("{}x{}", config.width, config.depth),
                &format!("board dimensions are limited to {MAX_BOARD_DIMENSION}"),
            ));
        }

        for rule in &config.rules {
            if rule.category.is_default() {
                return Err(invalid_parameter(
                    "rules",
                    &rule.category,
                    &"the default category carries no placement constraint",
                ));
            }
            if rule.constraint.range < 0 {
                return Err(invalid_parameter(
                    "rules",
                    &rule.constraint.range,
                    &"scan range must be non-negative",
                ));
            }
            if rule.constraint.max_density == 0 {
                return Err(invalid_parameter(
                    "rules",
                    &rule.constraint.max_density,
                    &"density cap must be at least 1",
                ));
            }
        }

        Ok(Self { config })
    }

    /// The validated configuration driving this generator
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Fill every vacant cell of the region in row-major order
    ///
    /// Cells already present in the board are skipped untouched, so a board
    /// restored from a snapshot or abandoned mid-run is completed rather than
    /// regenerated. Deterministic for a deterministic source and equal
    /// starting contents.
    ///
    /// # Errors
    ///
    /// Propagates any failure from [`Self::place_tile`].
    pub fn generate<R>(&self, board: &mut BoardGrid, source: &mut R) -> Result<()>
    where
        R: UniformSource + ?Sized,
    {
        for row in 0..self.config.depth {
            self.generate_row(board, row, source)?;
        }
        Ok(())
    }

    /// Fill the vacant cells of a single row
    ///
    /// Exposed so a caller can report progress or pause at the row boundary;
    /// the board is always in a valid partially filled state between rows.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidParameter`] if `row` lies outside
    /// `[0, depth)`; otherwise propagates any failure from
    /// [`Self::place_tile`].
    pub fn generate_row<R>(&self, board: &mut BoardGrid, row: i32, source: &mut R) -> Result<()>
    where
        R: UniformSource + ?Sized,
    {
        if row < 0 || row >= self.config.depth {
            return Err(invalid_parameter(
                "row",
                &row,
                &format!("rows span 0..{}", self.config.depth),
            ));
        }

        for x in 0..self.config.width {
            let coordinate = Coordinate::new(x, row);
            if board.contains(coordinate) {
                continue;
            }
            self.place_tile(board, coordinate, source)?;
        }
        Ok(())
    }

    /// Decide and commit one cell
    ///
    /// Builds the legal-category set from the board's current contents, draws
    /// uniformly over it, and inserts the resulting height-1 record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoLegalCategory`] if the legal set is empty.
    /// The default category is inserted unconditionally, so this signals a
    /// broken internal invariant, not a recoverable condition. Returns
    /// [`BoardError::DuplicateCoordinate`] if the coordinate is already
    /// occupied.
    pub fn place_tile<R>(
        &self,
        board: &mut BoardGrid,
        coordinate: Coordinate,
        source: &mut R,
    ) -> Result<TileRecord>
    where
        R: UniformSource + ?Sized,
    {
        let legal = legal_categories(board, coordinate, &self.config.rules);
        let category =
            choose_category(&legal, source).ok_or(BoardError::NoLegalCategory { coordinate })?;

        let record = TileRecord::new(coordinate, category);
        board.insert(record)?;
        Ok(record)
    }

    /// Restore a board from a snapshot without regenerating anything
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateSnapshotKey`] if the snapshot holds two
    /// cells with the same coordinate; the board is left empty in that case.
    pub fn load_from_snapshot(board: &mut BoardGrid, snapshot: &LevelSnapshot) -> Result<()> {
        snapshot.restore(board)
    }

    /// Capture a board into its persisted snapshot form
    pub fn save_to_snapshot(board: &BoardGrid) -> LevelSnapshot {
        LevelSnapshot::capture(board)
    }
}
