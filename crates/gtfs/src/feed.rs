use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use zip::{result::ZipError, ZipArchive};

use crate::{
    data_model::{
        agency::Agency, feed_info::FeedInfo, routes::Route, shapes::ShapesRow,
        stop_times::StopTime, stops::Stop, trips::Trip,
    },
    domain_model::shape::{Shape, ShapeId},
    error::FeedError,
};

pub const FEED_INFO_FILE: &str = "feed_info.txt";
pub const AGENCY_FILE: &str = "agency.txt";
pub const ROUTES_FILE: &str = "routes.txt";
pub const STOPS_FILE: &str = "stops.txt";
pub const TRIPS_FILE: &str = "trips.txt";
pub const STOP_TIMES_FILE: &str = "stop_times.txt";
pub const SHAPES_FILE: &str = "shapes.txt";

/// Where the tables of a feed are read from: an extracted directory or the
/// published zip archive.
enum FeedSource {
    Directory(PathBuf),
    Archive(ZipArchive<File>),
}

impl FeedSource {
    fn open(path: &Path) -> Result<Self, FeedError> {
        if path.is_dir() {
            return Ok(Self::Directory(path.to_owned()));
        }
        let file = File::open(path).map_err(|source| FeedError::Open {
            path: path.to_owned(),
            source,
        })?;
        Ok(Self::Archive(ZipArchive::new(file)?))
    }

    /// Reads all rows of `file`. A table missing from the feed reads as empty.
    fn read_table<T: DeserializeOwned>(&mut self, file: &'static str) -> Result<Vec<T>, FeedError> {
        match self {
            Self::Directory(directory) => match File::open(directory.join(file)) {
                Ok(reader) => read_rows(reader, file),
                Err(why) if why.kind() == io::ErrorKind::NotFound => {
                    log::warn!("{file} not found in feed, treating it as empty");
                    Ok(Vec::new())
                }
                Err(source) => Err(FeedError::Open {
                    path: directory.join(file),
                    source,
                }),
            },
            Self::Archive(archive) => match archive.by_name(file) {
                Ok(reader) => read_rows(reader, file),
                Err(ZipError::FileNotFound) => {
                    log::warn!("{file} not found in archive, treating it as empty");
                    Ok(Vec::new())
                }
                Err(why) => Err(why.into()),
            },
        }
    }
}

/// Deserializes every row of a GTFS table.
pub fn read_rows<T, R>(reader: R, file: &'static str) -> Result<Vec<T>, FeedError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    csv_reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| FeedError::Csv { file, source })
}

/// The entity collections of a parsed GTFS feed.
#[derive(Debug, Default)]
pub struct GtfsFeed {
    pub feed_infos: Vec<FeedInfo>,
    pub agencies: Vec<Agency>,
    pub routes: Vec<Route>,
    pub stops: Vec<Stop>,
    pub trips: Vec<Trip>,
    pub stop_times: Vec<StopTime>,
    /// Shapes in order of their first row in shapes.txt.
    pub shapes: IndexMap<ShapeId, Shape>,
}

impl GtfsFeed {
    /// Opens a feed from a directory of `.txt` files or from a zip archive.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FeedError> {
        let path = path.as_ref();
        log::info!("reading gtfs feed from {}", path.display());
        let mut source = FeedSource::open(path)?;
        let shape_rows: Vec<ShapesRow> = source.read_table(SHAPES_FILE)?;
        Ok(Self {
            feed_infos: source.read_table(FEED_INFO_FILE)?,
            agencies: source.read_table(AGENCY_FILE)?,
            routes: source.read_table(ROUTES_FILE)?,
            stops: source.read_table(STOPS_FILE)?,
            trips: source.read_table(TRIPS_FILE)?,
            stop_times: source.read_table(STOP_TIMES_FILE)?,
            shapes: Shape::group_rows(shape_rows),
        })
    }

    /// A feed that only carries shapes.
    pub fn from_shape_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = ShapesRow>,
    {
        Self {
            shapes: Shape::group_rows(rows),
            ..Default::default()
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} feeds, {} agencies, {} stops, {} routes, {} trips, {} shapes",
            self.feed_infos.len(),
            self.agencies.len(),
            self.stops.len(),
            self.routes.len(),
            self.trips.len(),
            self.shapes.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPES: &str = "shape_id,shape_pt_lat,shape_pt_lon,shape_pt_sequence,shape_dist_traveled\n\
                          A_shp, 37.61956,-122.48161,1,0\n\
                          A_shp,37.64430,-122.41070,2,\n\
                          B_shp,37.65863,-122.30839,1,0.0\n";

    #[test]
    fn reads_shape_rows_with_optional_distance() {
        let rows: Vec<ShapesRow> = read_rows(SHAPES.as_bytes(), SHAPES_FILE).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].shape_id.to_string(), "A_shp");
        assert_eq!(rows[0].point_latitude, 37.61956);
        assert_eq!(rows[0].distance_traveled, Some(0.0));
        assert_eq!(rows[1].distance_traveled, None);
    }

    #[test]
    fn reports_malformed_table() {
        let data = "shape_id,shape_pt_lat,shape_pt_lon,shape_pt_sequence\nA,north,10.0,1\n";
        let result = read_rows::<ShapesRow, _>(data.as_bytes(), SHAPES_FILE);
        assert!(matches!(
            result,
            Err(FeedError::Csv {
                file: SHAPES_FILE,
                ..
            })
        ));
    }

    #[test]
    fn builds_feed_from_shape_rows() {
        let rows: Vec<ShapesRow> = read_rows(SHAPES.as_bytes(), SHAPES_FILE).unwrap();
        let feed = GtfsFeed::from_shape_rows(rows);
        assert_eq!(feed.shapes.len(), 2);
        assert_eq!(feed.shapes[0].points.len(), 2);
        assert!(feed.summary().ends_with("2 shapes"));
    }

    #[test]
    fn reads_zip_archive_and_missing_tables_as_empty() {
        use std::io::Write;
        use zip::{write::SimpleFileOptions, ZipWriter};

        let path = std::env::temp_dir().join(format!("gtfs-feed-{}.zip", std::process::id()));
        let mut archive = ZipWriter::new(File::create(&path).unwrap());
        archive.start_file(SHAPES_FILE, SimpleFileOptions::default()).unwrap();
        archive.write_all(SHAPES.as_bytes()).unwrap();
        archive.start_file(FEED_INFO_FILE, SimpleFileOptions::default()).unwrap();
        archive
            .write_all(
                b"feed_publisher_name,feed_publisher_url,feed_lang,feed_start_date,feed_end_date\n\
                  Kiel,https://example.org,de,20240101,\n",
            )
            .unwrap();
        archive.finish().unwrap();

        let feed = GtfsFeed::open(&path).unwrap();
        assert_eq!(feed.shapes.len(), 2);
        assert_eq!(feed.shapes[0].points.len(), 2);
        assert_eq!(feed.feed_infos.len(), 1);
        assert_eq!(feed.feed_infos[0].end_date, None);
        assert!(feed.stops.is_empty());
        assert!(feed.agencies.is_empty());
        assert!(feed.stop_times.is_empty());

        let _ = std::fs::remove_file(path);
    }
}
