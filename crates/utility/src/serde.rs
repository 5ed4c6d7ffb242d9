/// Serializes floats as strings with a fixed number of decimals, for report
/// columns that must line up regardless of the value.
pub mod fixed {
    use serde::Serializer;

    fn serialize_decimals<S>(value: f64, decimals: usize, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // `+ 0.0` turns a negative zero into a positive one.
        serializer.serialize_str(&format!("{:.*}", decimals, value + 0.0))
    }

    pub fn one<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_decimals(*value, 1, serializer)
    }

    pub fn four<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_decimals(*value, 4, serializer)
    }

    pub fn six<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_decimals(*value, 6, serializer)
    }

    pub mod option {
        use serde::Serializer;

        pub fn one<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => super::one(value, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn four<S: Serializer>(
            value: &Option<f64>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => super::four(value, serializer),
                None => serializer.serialize_none(),
            }
        }
    }
}

/// GTFS service dates in the `YYYYMMDD` format.
pub mod date {
    use core::fmt;

    use chrono::NaiveDate;
    use serde::{
        de::{self, IntoDeserializer, Unexpected, Visitor},
        Deserialize as _, Deserializer,
    };

    pub const FORMAT: &str = "%Y%m%d";

    pub fn deserialize_yyyymmdd<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DateVisitor;

        impl<'de> Visitor<'de> for DateVisitor {
            type Value = NaiveDate;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string in the format YYYYMMDD")
            }

            fn visit_str<E>(self, value: &str) -> Result<NaiveDate, E>
            where
                E: de::Error,
            {
                NaiveDate::parse_from_str(value.trim(), FORMAT)
                    .map_err(|_| de::Error::invalid_value(Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_str(DateVisitor)
    }

    pub fn deserialize_yyyymmdd_option<'de, D>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        match s {
            Some(s) if !s.trim().is_empty() => {
                let deserializer: de::value::StrDeserializer<'_, D::Error> =
                    s.as_str().into_deserializer();
                deserialize_yyyymmdd(deserializer).map(Some)
            }
            _ => Ok(None),
        }
    }
}
