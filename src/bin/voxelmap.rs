use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use voxel_map::tools::{grid_stats, load_image, render_preview};
use voxel_map::utils::format::group_thousands;
use voxel_map::{convert_image, image_to_grid};

#[derive(Parser)]
#[command(name = "voxelmap", version, about = "Voxel map converter tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an image and write the map data file
    Convert {
        #[arg(long)]
        image: PathBuf,
        /// Upper bound on either output dimension
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(20..=300))]
        map_size: u32,
        /// Output path for the generated map data
        #[arg(long, default_value = "mapData.txt")]
        output: PathBuf,
    },
    /// Print an ASCII preview of the converted grid
    Preview {
        #[arg(long)]
        image: PathBuf,
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(20..=300))]
        map_size: u32,
        /// Limit the number of preview rows printed
        #[arg(long)]
        max_rows: Option<usize>,
    },
    /// Print land/water statistics for the converted grid
    Stats {
        #[arg(long)]
        image: PathBuf,
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(20..=300))]
        map_size: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            image,
            map_size,
            output,
        } => convert_cmd(&image, map_size, &output),
        Command::Preview {
            image,
            map_size,
            max_rows,
        } => preview_cmd(&image, map_size, max_rows),
        Command::Stats { image, map_size } => stats_cmd(&image, map_size),
    }
}

fn convert_cmd(image: &Path, map_size: u32, output: &Path) -> ExitCode {
    let img = match load_image(image) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("Failed to load image {}: {}", image.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let result = match convert_image(&img, map_size) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Conversion failed for {}: {}", image.display(), err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = std::fs::write(output, &result.map_data) {
        eprintln!("Failed to write {}: {}", output.display(), err);
        return ExitCode::FAILURE;
    }

    println!(
        "Conversion complete! Map size: {}x{} | Voxels: {}",
        result.grid.width(),
        result.grid.height(),
        group_thousands(result.voxel_count)
    );
    println!("Wrote {}", output.display());
    ExitCode::SUCCESS
}

fn preview_cmd(image: &Path, map_size: u32, max_rows: Option<usize>) -> ExitCode {
    let img = match load_image(image) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("Failed to load image {}: {}", image.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let grid = match image_to_grid(&img, map_size) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Conversion failed for {}: {}", image.display(), err);
            return ExitCode::FAILURE;
        }
    };

    println!("Grid: {}x{}", grid.width(), grid.height());
    print!("{}", render_preview(&grid, max_rows));
    ExitCode::SUCCESS
}

fn stats_cmd(image: &Path, map_size: u32) -> ExitCode {
    let img = match load_image(image) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("Failed to load image {}: {}", image.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let grid = match image_to_grid(&img, map_size) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Conversion failed for {}: {}", image.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let stats = grid_stats(&grid);
    println!("Grid: {}x{}", grid.width(), grid.height());
    println!(
        "Land: {} | Water: {} | Total: {} | Land ratio: {:.2}%",
        group_thousands(stats.land_cells),
        group_thousands(stats.water_cells),
        group_thousands(stats.total_cells),
        stats.land_ratio * 100.0
    );
    ExitCode::SUCCESS
}
