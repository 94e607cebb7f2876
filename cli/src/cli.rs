use std::path::PathBuf;

/// Country resolution CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "georesolve", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Resolve a coordinate against a boundary dataset
    Locate(LocateArgs),
}

#[derive(clap::Args, Debug)]
pub struct LocateArgs {
    /// Boundary dataset (GeoJSON FeatureCollection)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub dataset: PathBuf,

    /// Latitude in degrees, -90 to 90
    #[arg(allow_hyphen_values = true)]
    pub latitude: f64,

    /// Longitude in degrees, -180 to 180
    #[arg(allow_hyphen_values = true)]
    pub longitude: f64,

    /// Feature property holding the country code, defaults to "code"
    #[arg(long)]
    pub code_property: Option<String>,

    /// Feature property holding the display name, defaults to "name"
    #[arg(long)]
    pub name_property: Option<String>,
}
