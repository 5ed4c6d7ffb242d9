use std::{collections::BTreeMap, fmt, path::Path};

use gtfs::GtfsFeed;
use serde::Serialize;

use crate::{
    config::ValidationConfig,
    report::{ReportError, ShapeReportWriter},
    validate_shapes,
};

/// GTFS entity tables with a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Agencies,
    Routes,
    Stops,
    Trips,
    StopTimes,
    Shapes,
}

impl EntityKind {
    pub fn report_file(&self) -> &'static str {
        match self {
            Self::Agencies => "agency.csv",
            Self::Routes => "routes.csv",
            Self::Stops => "stops.csv",
            Self::Trips => "trips.csv",
            Self::StopTimes => "stoptimes.csv",
            Self::Shapes => "shapes.csv",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Agencies => write!(f, "agencies"),
            Self::Routes => write!(f, "routes"),
            Self::Stops => write!(f, "stops"),
            Self::Trips => write!(f, "trips"),
            Self::StopTimes => write!(f, "stop times"),
            Self::Shapes => write!(f, "shapes"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid,
    Invalid { findings: usize },
    NotImplemented,
}

impl ValidationOutcome {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatorReport {
    pub kind: EntityKind,
    #[serde(flatten)]
    pub outcome: ValidationOutcome,
    /// Findings per finding code.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub finding_counts: BTreeMap<&'static str, usize>,
}

impl ValidatorReport {
    fn not_implemented(kind: EntityKind) -> Self {
        Self {
            kind,
            outcome: ValidationOutcome::NotImplemented,
            finding_counts: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validator {
    Agencies,
    Routes,
    Stops,
    Trips,
    StopTimes,
    Shapes(ValidationConfig),
}

impl Validator {
    /// All validators in the order they run.
    pub fn suite(config: ValidationConfig) -> [Validator; 6] {
        [
            Self::Agencies,
            Self::Routes,
            Self::Stops,
            Self::Trips,
            Self::StopTimes,
            Self::Shapes(config),
        ]
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Agencies => EntityKind::Agencies,
            Self::Routes => EntityKind::Routes,
            Self::Stops => EntityKind::Stops,
            Self::Trips => EntityKind::Trips,
            Self::StopTimes => EntityKind::StopTimes,
            Self::Shapes(_) => EntityKind::Shapes,
        }
    }

    /// Validates the entities of `feed`, writing the report file into
    /// `report_dir`.
    pub fn run(&self, feed: &GtfsFeed, report_dir: &Path) -> Result<ValidatorReport, ReportError> {
        let config = match self {
            Self::Shapes(config) => config,
            _ => {
                log::debug!("{} validation is not implemented", self.kind());
                return Ok(ValidatorReport::not_implemented(self.kind()));
            }
        };

        log::info!("validating {} shapes...", feed.shapes.len());
        let reports = validate_shapes(&feed.shapes, config);

        let path = report_dir.join(self.kind().report_file());
        let mut writer = ShapeReportWriter::create(&path)?;
        let mut finding_counts = BTreeMap::new();
        for report in &reports {
            for finding in report.findings() {
                *finding_counts.entry(finding.kind.code()).or_insert(0) += 1;
            }
            writer.write_report(report)?;
        }
        writer.finish()?;
        log::info!("wrote {}", path.display());

        let findings: usize = finding_counts.values().sum();
        let outcome = if findings == 0 {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid { findings }
        };
        Ok(ValidatorReport {
            kind: self.kind(),
            outcome,
            finding_counts,
        })
    }
}
