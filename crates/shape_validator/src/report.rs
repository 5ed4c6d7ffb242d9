use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::shape::{ReportEntry, ShapeReport};

pub const SHAPES_TITLE: &str = "ValidateShapes:";

pub const SHAPE_COLUMNS: [&str; 18] = [
    "shape_id",
    "shape_pt_lat",
    "shape_pt_lon",
    "shape_pt_sequence",
    "shape_dist_traveled",
    "shape_segment_length",
    "shape_location_east",
    "shape_location_north",
    "calc_dist_traveled",
    "calc_dist_variance",
    "calc_segment_length",
    "calc_segment_variance",
    "sphere_dist_traveled",
    "sphere_dist_variance",
    "sphere_segment_length",
    "sphere_segment_variance",
    "haversine_segment_length",
    "haversine_segment_variance",
];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not create report {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },
    #[error("could not write report: {0}")]
    Io(#[from] io::Error),
    #[error("could not write report record: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes shape reports as `shapes.csv`: diagnostic lines interleaved with
/// csv records.
pub struct ShapeReportWriter<W: Write> {
    inner: W,
}

impl ShapeReportWriter<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| ReportError::Create {
            path: path.to_owned(),
            source,
        })?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> ShapeReportWriter<W> {
    /// Starts the report with its title and header lines.
    pub fn new(inner: W) -> Result<Self, ReportError> {
        let mut writer = Self { inner };
        writeln!(writer.inner, "{SHAPES_TITLE}")?;
        let mut csv_writer = writer.csv_writer();
        csv_writer.write_record(SHAPE_COLUMNS)?;
        csv_writer.flush()?;
        drop(csv_writer);
        Ok(writer)
    }

    /// A csv writer over the inner writer. It must be flushed before anything
    /// else is written to `inner`.
    fn csv_writer(&mut self) -> csv::Writer<&mut W> {
        csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut self.inner)
    }

    pub fn write_report(&mut self, report: &ShapeReport) -> Result<(), ReportError> {
        for entry in &report.entries {
            match entry {
                ReportEntry::Finding(finding) => writeln!(self.inner, "{finding}")?,
                ReportEntry::Record(record) => {
                    let mut csv_writer = self.csv_writer();
                    csv_writer.serialize(record)?;
                    csv_writer.flush()?;
                }
            }
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<W, ReportError> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
