use std::{error::Error, fs, path::PathBuf, process::ExitCode};

use chrono::Local;
use clap::Parser;
use gtfs::GtfsFeed;
use shape_validator::{
    config::{
        ConfigError, DEFAULT_MAX_SEGMENT_KM, DEFAULT_MIN_SEGMENT_KM, DEFAULT_PRECISION,
        DEFAULT_VARIANCE_THRESHOLD_PERCENT, MAX_PRECISION,
    },
    run_validation,
    summary::RunSummary,
    ValidationConfig,
};
use utility::geo::SphericalModel;

#[derive(Parser)]
#[command(name = "shape-validator")]
#[command(about = "Validate the shape geometry of a GTFS feed", long_about = None)]
struct Cli {
    /// GTFS feed, either a zip archive or an extracted directory
    feed: PathBuf,

    /// Directory the report files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Decimals of reported percentages
    #[arg(
        long,
        env = "SHAPE_PRECISION",
        default_value_t = DEFAULT_PRECISION,
        value_parser = clap::value_parser!(u32).range(0..=MAX_PRECISION as i64)
    )]
    precision: u32,

    /// Shortest plausible declared segment in kilometres
    #[arg(long, env = "SHAPE_MIN_SEGMENT_KM", default_value_t = DEFAULT_MIN_SEGMENT_KM)]
    min_segment_km: f64,

    /// Longest plausible declared segment in kilometres
    #[arg(long, env = "SHAPE_MAX_SEGMENT_KM", default_value_t = DEFAULT_MAX_SEGMENT_KM)]
    max_segment_km: f64,

    /// Percentage two estimators must both exceed to report a variance
    #[arg(long, env = "SHAPE_VARIANCE_THRESHOLD", default_value_t = DEFAULT_VARIANCE_THRESHOLD_PERCENT)]
    variance_threshold: f64,

    /// equirectangular or law-of-cosines
    #[arg(long, env = "SHAPE_SPHERICAL_MODEL", default_value_t = SphericalModel::default())]
    spherical_model: SphericalModel,
}

impl Cli {
    fn config(&self) -> Result<ValidationConfig, ConfigError> {
        ValidationConfig {
            precision: self.precision,
            min_segment_km: self.min_segment_km,
            max_segment_km: self.max_segment_km,
            variance_threshold_percent: self.variance_threshold,
            spherical_model: self.spherical_model,
        }
        .validate()
    }
}

fn run(cli: &Cli) -> Result<RunSummary, Box<dyn Error>> {
    let config = cli.config()?;
    let feed = GtfsFeed::open(&cli.feed)?;
    log::info!("done, parsed: {}", feed.summary());

    fs::create_dir_all(&cli.output_dir)?;
    Ok(run_validation(
        &feed,
        &cli.feed.display().to_string(),
        &cli.output_dir,
        config,
        Local::now().date_naive(),
    ))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(summary) => {
            summary.log();
            if summary.passed() {
                ExitCode::SUCCESS
            } else {
                log::warn!("Fail");
                ExitCode::FAILURE
            }
        }
        Err(why) => {
            log::error!("{why}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_is_bounded() {
        assert!(Cli::try_parse_from(["shape-validator", "feed.zip", "--precision", "400"]).is_err());
        let cli = Cli::try_parse_from(["shape-validator", "feed.zip", "--precision", "12"]).unwrap();
        assert_eq!(cli.precision, 12);
    }

    #[test]
    fn inverted_segment_bounds_are_rejected() {
        let cli = Cli::try_parse_from([
            "shape-validator",
            "feed.zip",
            "--min-segment-km",
            "2",
            "--max-segment-km",
            "1",
        ])
        .unwrap();
        assert!(matches!(cli.config(), Err(ConfigError::SegmentBounds { .. })));
    }
}
