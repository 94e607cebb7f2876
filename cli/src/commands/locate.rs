use anyhow::Result;
use georesolve::io::geojson::{load_countries, GeoJsonOptions};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::LocateArgs) -> Result<()> {
    let mut options = GeoJsonOptions::default();
    if let Some(key) = &args.code_property {
        options.code_property = key.clone();
    }
    if let Some(key) = &args.name_property {
        options.name_property = key.clone();
    }

    let countries = load_countries(&args.dataset, &options)?;
    if cli.verbose > 0 {
        eprintln!("[locate] loaded {} countries from {}", countries.len(), args.dataset.display());
    }

    let index = georesolve::build_index(countries)?;
    if cli.verbose > 1 {
        let point = georesolve::Point::new(args.latitude, args.longitude)?;
        eprintln!("[locate] {} bounding-box candidates", index.candidates_for(point).count());
    }

    match index.locate(args.latitude, args.longitude)? {
        Some(country) => {
            println!("Country code: {}", country.code());
            println!("Country name: {}", country.name());
        }
        None => println!("Country not found for the given coordinates."),
    }

    Ok(())
}
