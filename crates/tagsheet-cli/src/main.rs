//! Printable marker sheet generator.
//!
//! Example:
//!
//! ```text
//! tagsheet -o april_pdp24x24.png -i 0 -t DICT_APRILTAG_36h11 -d 72 \
//!     -s 6 -m 1 --no-write-id -x 24 -y 24 -p pdp8
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use tagsheet_aruco::DictionaryKind;
use tagsheet_core::{init_with_level, LayoutConfig, PatternKind, Resolution};
use tagsheet_print::{save_png, SheetSpec};

#[derive(Parser, Debug)]
#[command(name = "tagsheet", version, about = "Generate a printable page of fiducial markers, optionally blanked by a textile tiling pattern")]
struct Cli {
    /// Path of the output PNG.
    #[arg(short, long)]
    output: PathBuf,

    /// Id of the first marker on the sheet.
    #[arg(short = 'i', long = "id", default_value_t = 0)]
    first_id: u32,

    /// Marker dictionary to draw from.
    #[arg(short = 't', long = "type", default_value = "DICT_APRILTAG_36h11")]
    dictionary: DictionaryKind,

    /// Print resolution in dpi (72, 96, 150, 300).
    #[arg(short = 'd', long, default_value = "72")]
    dpi: Resolution,

    /// Marker size in mm.
    #[arg(short = 's', long = "size", default_value_t = 50.0)]
    tag_size: f64,

    /// Margin between markers in mm.
    #[arg(short, long, default_value_t = 5.0)]
    margin: f64,

    /// Number of markers in the x direction.
    #[arg(short = 'x', long = "x", default_value_t = 3)]
    grid_x: u32,

    /// Number of markers in the y direction.
    #[arg(short = 'y', long = "y", default_value_t = 4)]
    grid_y: u32,

    /// Height reserved for the id label row, in mm.
    #[arg(long, default_value_t = 8.0)]
    label_height: f64,

    /// Skip the id caption above each marker.
    #[arg(long)]
    no_write_id: bool,

    /// Tiling pattern (ful, chk, pt4, pdp8, hb4, bt4, ge).
    #[arg(short = 'p', long, default_value = "ful")]
    pattern: PatternKind,

    /// Load the sheet spec from a JSON file; explicit flags are ignored.
    #[arg(long, conflicts_with_all = [
        "first_id", "dictionary", "dpi", "tag_size", "margin",
        "grid_x", "grid_y", "label_height", "no_write_id", "pattern",
    ])]
    config: Option<PathBuf>,

    /// Print per-cell layout decisions.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn sheet_spec(&self) -> Result<SheetSpec, Box<dyn std::error::Error>> {
        if let Some(path) = &self.config {
            return Ok(SheetSpec::load_json(path)?);
        }
        Ok(SheetSpec {
            dictionary: self.dictionary,
            resolution: self.dpi,
            layout: LayoutConfig {
                grid_x: self.grid_x,
                grid_y: self.grid_y,
                tag_size_mm: self.tag_size,
                margin_mm: self.margin,
                label_height_mm: self.label_height,
                first_id: self.first_id,
                pattern: self.pattern,
                write_label: !self.no_write_id,
            },
            ..SheetSpec::default()
        })
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let spec = cli.sheet_spec()?;
    let page = spec.generate()?;
    save_png(&page, &cli.output)?;
    log::info!("saved {} to {}", spec.dictionary, cli.output.display());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = init_with_level(level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
