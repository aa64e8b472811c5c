//! Debug preview PNG export with automatic cropping and transparency

use crate::io::configuration::PREVIEW_CELL_SIZE;
use crate::io::error::{BoardError, Result};
use crate::spatial::grid::BoardGrid;
use crate::spatial::tiles::Category;
use image::{ImageBuffer, Rgba};
use std::path::Path;

#[derive(Debug)]
struct BoundingBox {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

// Finds the minimal rectangle containing all placed tiles
fn calculate_bounding_box(board: &BoardGrid) -> Option<BoundingBox> {
    let mut min_x = i32::MAX;
    let mut max_x = i32::MIN;
    let mut min_y = i32::MAX;
    let mut max_y = i32::MIN;
    let mut found_tiles = false;

    for record in board.records() {
        found_tiles = true;
        min_x = min_x.min(record.coordinate.x);
        max_x = max_x.max(record.coordinate.x);
        min_y = min_y.min(record.coordinate.y);
        max_y = max_y.max(record.coordinate.y);
    }

    found_tiles.then_some(BoundingBox {
        min_x,
        max_x,
        min_y,
        max_y,
    })
}

/// RGBA color a category renders as in preview output
pub const fn category_color(category: Category) -> [u8; 4] {
    match category {
        Category::Plain => [156, 186, 100, 255],
        Category::Forest => [52, 110, 61, 255],
        Category::Water => [64, 120, 200, 255],
    }
}

/// Export a board as a PNG preview with transparent background
///
/// Each placed cell renders as a [`PREVIEW_CELL_SIZE`]-pixel square in its
/// category color; unplaced cells inside the bounding box stay transparent.
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if:
/// - No tiles have been placed on the board
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(board: &BoardGrid, output_path: &Path) -> Result<()> {
    let bbox = calculate_bounding_box(board).ok_or(BoardError::EmptyBoard {
        operation: "export a preview",
    })?;

    let cell = PREVIEW_CELL_SIZE;
    let width = (bbox.max_x - bbox.min_x + 1) as u32 * cell;
    let height = (bbox.max_y - bbox.min_y + 1) as u32 * cell;

    let mut img = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    for record in board.records() {
        let rgba = category_color(record.category);
        let base_x = (record.coordinate.x - bbox.min_x) as u32 * cell;
        let base_y = (record.coordinate.y - bbox.min_y) as u32 * cell;

        for dy in 0..cell {
            for dx in 0..cell {
                img.put_pixel(base_x + dx, base_y + dy, Rgba(rgba));
            }
        }
    }

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| BoardError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| BoardError::PreviewExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
