//! Rows of the GTFS schedule tables, one struct per `.txt` file.
//!
//! Only the columns the validators look at are modelled. Unknown columns are
//! ignored by the csv deserializer.

pub mod agency;
pub mod feed_info;
pub mod routes;
pub mod shapes;
pub mod stop_times;
pub mod stops;
pub mod trips;

/// An internal ID, not intended to be shown to riders. A sequence of any UTF-8
/// characters.
pub type IdString = String;

/// An IETF BCP 47 language code, e.g. `en`, `en-US` or `de`.
pub type LanguageCode = String;

/// WGS84 latitude in decimal degrees. Must lie in `[-90.0, 90.0]`, which is
/// checked by the shape validation rather than on parse.
pub type Latitude = f64;

/// WGS84 longitude in decimal degrees. Must lie in `[-180.0, 180.0]`.
pub type Longitude = f64;

/// Time in the `HH:MM:SS` format, measured from "noon minus 12h" of the service
/// day. May exceed `24:00:00` for trips running past midnight.
pub type Time = String;

/// TZ timezone from <https://www.iana.org/time-zones>, e.g. `Europe/Berlin`.
pub type Timezone = String;

/// A fully qualified URL including `http://` or `https://`.
pub type Url = String;
