//! Command-line interface for inspecting tile map files

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::field::collision::Body;
use crate::field::coords::{TileCoord, Topology};
use crate::field::direction::{Arity, Direction, classify_angle, classify_displacement};
use crate::field::grid::TileGrid;
use crate::field::neighbors::neighbors;
use crate::io::configuration::{
    DEFAULT_EMPTY_TILE, DEFAULT_LOG_FILTER, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
    OUT_OF_BOUNDS_TILE, QUIET_LOG_FILTER, VERBOSE_LOG_FILTER,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{default_palette, export_grid_as_png};

#[derive(Parser, Debug)]
#[command(name = "tilefield")]
#[command(
    author,
    version,
    about = "Query tile maps: cell types, coordinate conversion and swept collision"
)]
/// Command-line arguments for the tile map inspector
pub struct Cli {
    /// Map file: one row per line, tile codes separated by commas or spaces
    #[arg(value_name = "MAP")]
    pub map: PathBuf,

    /// Tile width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: i32,

    /// Tile height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: i32,

    /// Comma-separated tile codes that block movement
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    pub blocking: Vec<i32>,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Query to run against the map
    #[command(subcommand)]
    pub command: Command,
}

/// Queries supported by the CLI
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print dimensions, tile size and blocking statistics
    Info,

    /// Print the tile code at a cell and whether it blocks
    Tile {
        /// Column
        #[arg(allow_negative_numbers = true)]
        x: i32,
        /// Row
        #[arg(allow_negative_numbers = true)]
        y: i32,
    },

    /// Convert a pixel position to a cell
    Convert {
        /// Pixel x
        #[arg(allow_negative_numbers = true)]
        px: f32,
        /// Pixel y
        #[arg(allow_negative_numbers = true)]
        py: f32,
        /// Tile layout used for the conversion
        #[arg(short, long, value_enum, default_value_t = TopologyArg::Orthogonal)]
        topology: TopologyArg,
    },

    /// List the neighbors of a cell with their tile codes
    Neighbors {
        /// Column
        #[arg(allow_negative_numbers = true)]
        x: i32,
        /// Row
        #[arg(allow_negative_numbers = true)]
        y: i32,
        /// Include the four diagonal neighbors
        #[arg(short, long)]
        diagonal: bool,
    },

    /// Sweep a rectangle to a target position and report the first hit
    Sweep {
        /// Body left edge in pixels
        #[arg(allow_negative_numbers = true)]
        x: f32,
        /// Body top edge in pixels
        #[arg(allow_negative_numbers = true)]
        y: f32,
        /// Body width in pixels
        #[arg(allow_negative_numbers = true)]
        width: f32,
        /// Body height in pixels
        #[arg(allow_negative_numbers = true)]
        height: f32,
        /// Target left edge in pixels
        #[arg(allow_negative_numbers = true)]
        target_x: f32,
        /// Target top edge in pixels
        #[arg(allow_negative_numbers = true)]
        target_y: f32,
    },

    /// Classify a displacement or an angle as a logical direction
    Direction {
        /// Horizontal displacement
        #[arg(requires = "dy", allow_negative_numbers = true)]
        dx: Option<f32>,
        /// Vertical displacement
        #[arg(allow_negative_numbers = true)]
        dy: Option<f32>,
        /// Angle in degrees, used instead of a displacement
        #[arg(short, long, conflicts_with = "dx", allow_negative_numbers = true)]
        angle: Option<f32>,
        /// Number of direction buckets for --angle (4, 6 or 8)
        #[arg(short = 'n', long, default_value_t = 8)]
        arity: u8,
    },

    /// Write a PNG snapshot with one pixel per cell
    Export {
        /// Output PNG path
        output: PathBuf,
    },
}

/// Tile layout names accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyArg {
    /// Axis-aligned rectangular tiles
    Orthogonal,
    /// Diamond tiles
    Isometric,
    /// Flat-top hexagons
    Hexagonal,
}

impl From<TopologyArg> for Topology {
    fn from(arg: TopologyArg) -> Self {
        match arg {
            TopologyArg::Orthogonal => Self::Orthogonal,
            TopologyArg::Isometric => Self::Isometric,
            TopologyArg::Hexagonal => Self::Hexagonal,
        }
    }
}

impl Cli {
    /// Log filter implied by the verbosity flags
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_FILTER
        } else if self.quiet {
            QUIET_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}

/// Loads the map named on the command line and runs the requested query
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Arguments this runner was created with
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Load the map file with the configured tile size and blocking types
    ///
    /// # Errors
    ///
    /// Returns an error if the map cannot be read or parsed, or the tile
    /// size is out of range
    pub fn load_grid(&self) -> Result<TileGrid> {
        let mut grid =
            TileGrid::from_map_file(&self.cli.map, self.cli.tile_width, self.cli.tile_height)?;
        grid.set_blocking_types(self.cli.blocking.clone());
        Ok(grid)
    }

    /// Run the query and return its report
    ///
    /// # Errors
    ///
    /// Returns an error if loading the map or running the query fails
    pub fn run(&self) -> Result<String> {
        let grid = self.load_grid()?;
        execute(&grid, &self.cli.command)
    }
}

fn blocking_label(grid: &TileGrid, x: i32, y: i32) -> &'static str {
    if grid.is_blocking(x, y) {
        "blocking"
    } else {
        "passable"
    }
}

fn direction_label(direction: Option<Direction>) -> String {
    direction.map_or_else(|| "none".to_string(), |d| format!("{d:?}"))
}

/// Run one query against a loaded grid
///
/// # Errors
///
/// Returns an error for an invalid direction arity, a direction query with
/// neither a displacement nor an angle, a tile code too large for the
/// snapshot palette, or a failed PNG export
pub fn execute(grid: &TileGrid, command: &Command) -> Result<String> {
    let report = match command {
        Command::Info => {
            let blocking_cells = grid
                .tiles()
                .iter()
                .filter(|&kind| grid.blocking_types().contains(kind))
                .count();
            [
                format!("name: {}", grid.name()),
                format!(
                    "size: {}x{} tiles ({}x{} px)",
                    grid.width(),
                    grid.height(),
                    grid.draw_width(),
                    grid.draw_height()
                ),
                format!("tile: {}x{} px", grid.tile_width(), grid.tile_height()),
                format!("blocking types: {:?}", grid.blocking_types()),
                format!("blocking cells: {blocking_cells}"),
            ]
            .join("\n")
        }
        Command::Tile { x, y } => format!(
            "{} type {} {}",
            TileCoord::new(*x, *y),
            grid.tile_type(*x, *y),
            blocking_label(grid, *x, *y)
        ),
        Command::Convert { px, py, topology } => {
            let topology = Topology::from(*topology);
            format!(
                "{topology} ({px}, {py}) -> {}",
                grid.pixel_to_tile(topology, *px, *py)
            )
        }
        Command::Neighbors { x, y, diagonal } => neighbors(TileCoord::new(*x, *y), *diagonal)
            .into_iter()
            .map(|cell| {
                format!(
                    "{cell} type {} {}",
                    grid.tile_type(cell.x, cell.y),
                    blocking_label(grid, cell.x, cell.y)
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Command::Sweep {
            x,
            y,
            width,
            height,
            target_x,
            target_y,
        } => {
            let body = Body::new(*x, *y, *width, *height);
            grid.swept_collision(&body, *target_x, *target_y)
                .map_or_else(|| "clear".to_string(), |cell| format!("collision at {cell}"))
        }
        Command::Direction {
            dx,
            dy,
            angle,
            arity,
        } => {
            let direction = match (angle, dx, dy) {
                (Some(angle), _, _) => Some(classify_angle(*angle, Arity::try_from(*arity)?)),
                (None, Some(dx), Some(dy)) => classify_displacement(*dx, *dy),
                _ => {
                    return Err(invalid_parameter(
                        "direction",
                        &"",
                        &"pass DX DY or --angle",
                    ));
                }
            };
            direction_label(direction)
        }
        Command::Export { output } => {
            let populated = grid
                .tiles()
                .iter()
                .any(|&kind| kind != DEFAULT_EMPTY_TILE && kind != OUT_OF_BOUNDS_TILE);
            if !populated {
                log::warn!("{} has no non-empty cells; snapshot will be blank", grid.name());
            }
            export_grid_as_png(grid, &default_palette(grid)?, output)?;
            format!("wrote {}", output.display())
        }
    };
    Ok(report)
}
