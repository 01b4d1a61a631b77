use clap::Parser;
use prismgrav_core::{Evaluator, FieldComponent, ObservationPoint, PointLocation, Prism};

use prismgrav_cli::config::create_example_config;
use prismgrav_cli::error::{CliError, CliResult};
use prismgrav_cli::{CliConfig, OutputFormat, Report};

#[derive(Parser, Debug)]
#[command(name = "prismgrav")]
#[command(about = "Gravity and gravity gradients of a right rectangular prism (Nagy, 2000)")]
struct Args {
    /// Prism borders as x1,x2,y1,y2,z1,z2 in meters (z points down)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    prism: Vec<f64>,

    /// Observation point as xp,yp,zp in meters
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    point: Vec<f64>,

    /// Prism density in kg/m^3
    #[arg(short, long, default_value = "2670", allow_hyphen_values = true)]
    density: f64,

    /// Component to evaluate: gz, gxx, gxy, gxz, gyy, gyz, gzz or all
    #[arg(short = 'C', long, default_value = "all")]
    component: String,

    /// Path to configuration file
    #[arg(short, long, default_value = "prismgrav.toml")]
    config: String,

    /// Print JSON regardless of the configured format
    #[arg(long)]
    json: bool,

    /// Write an example configuration file to this path and exit
    #[arg(long)]
    init_config: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .init();

    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> CliResult<()> {
    if let Some(path) = &args.init_config {
        create_example_config(path)?;
        log::info!("Wrote example configuration to {}", path);
        return Ok(());
    }

    let mut config = CliConfig::load_or_default(&args.config)?;
    if args.json {
        config.output.format = OutputFormat::Json;
    }

    let prism = parse_prism(&args.prism, args.density)?;
    let point = parse_point(&args.point)?;
    let components = parse_components(&args.component)?;

    log::debug!("Prism: {:?}", prism);
    log::debug!("Observation point: {:?}", point);
    log::debug!(
        "gz unit: {}, summation: {}",
        config.evaluator.gz_unit,
        config.evaluator.summation
    );

    if prism.is_degenerate() {
        log::warn!("Prism has zero volume, every component is 0");
    }
    match prism.locate(&point) {
        PointLocation::Surface => log::warn!(
            "Observation point lies on the prism surface; diagonal components are averaged across the face and values on edges or vertices are not meaningful"
        ),
        PointLocation::Inside => log::info!("Observation point lies inside the prism"),
        PointLocation::Outside => {}
    }

    let evaluator = Evaluator::new(config.evaluator);
    let report = Report::compute(&evaluator, &prism, &point, &components);
    println!("{}", report.render(&config.output)?);

    Ok(())
}

fn parse_prism(borders: &[f64], density: f64) -> CliResult<Prism> {
    let borders: [f64; 6] = borders.try_into().map_err(|_| {
        CliError::InvalidArgument(format!(
            "--prism expects 6 values x1,x2,y1,y2,z1,z2, got {}",
            borders.len()
        ))
    })?;
    Ok(Prism::from_array(borders, density)?)
}

fn parse_point(coords: &[f64]) -> CliResult<ObservationPoint> {
    match coords {
        [x, y, z] => Ok(ObservationPoint::new(*x, *y, *z)?),
        _ => Err(CliError::InvalidArgument(format!(
            "--point expects 3 values xp,yp,zp, got {}",
            coords.len()
        ))),
    }
}

fn parse_components(selector: &str) -> CliResult<Vec<FieldComponent>> {
    if selector.trim().eq_ignore_ascii_case("all") {
        return Ok(FieldComponent::ALL.to_vec());
    }
    selector
        .split(',')
        .map(|name| name.parse::<FieldComponent>().map_err(CliError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prism() {
        let prism = parse_prism(&[-0.5, 0.5, -0.5, 0.5, 0.0, 1.0], 1000.0).unwrap();
        assert_eq!(prism.volume(), 1.0);
        assert!(parse_prism(&[0.0, 1.0, 0.0, 1.0, 0.0], 1000.0).is_err());
        assert!(parse_prism(&[1.0, 0.0, 0.0, 1.0, 0.0, 1.0], 1000.0).is_err());
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(
            parse_point(&[0.0, 0.0, -10.0]).unwrap(),
            ObservationPoint::new_unchecked(0.0, 0.0, -10.0)
        );
        assert!(parse_point(&[0.0, 0.0]).is_err());
    }

    #[test]
    fn test_parse_components() {
        assert_eq!(parse_components("all").unwrap().len(), 7);
        assert_eq!(
            parse_components("gz,GZZ").unwrap(),
            vec![FieldComponent::Gz, FieldComponent::Gzz]
        );
        assert!(parse_components("gz,gq").is_err());
    }

    #[test]
    fn test_args_accept_negative_coordinates() {
        let args = Args::try_parse_from([
            "prismgrav",
            "--prism",
            "-0.5,0.5,-0.5,0.5,0,1",
            "--point",
            "0,0,-10",
            "--density",
            "-300",
            "-C",
            "gz",
        ])
        .unwrap();
        assert_eq!(args.prism, vec![-0.5, 0.5, -0.5, 0.5, 0.0, 1.0]);
        assert_eq!(args.point, vec![0.0, 0.0, -10.0]);
        assert_eq!(args.density, -300.0);
        assert_eq!(args.component, "gz");
    }
}
