pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)
    }
}

// same format for timestamps that are only set once a book changes hands
pub mod optional {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        time.map(|t| t.format(DATE_FMT).to_string()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let str_time: Option<String> = Deserialize::deserialize(deserializer)?;
        str_time
            .map(|s| NaiveDateTime::parse_from_str(&s, DATE_FMT).map_err(D::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "crate::utils::date::serializer")]
        at: NaiveDateTime,
        #[serde(with = "crate::utils::date::optional")]
        maybe: Option<NaiveDateTime>,
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1).and_then(|d| d.and_hms_milli_opt(12, 0, 0, 250)).unwrap()
    }

    #[test]
    fn test_should_write_date_fmt() {
        let stamped = Stamped { at: noon(), maybe: None };
        let json = serde_json::to_string(&stamped).unwrap();
        assert_eq!(r#"{"at":"2024-03-01T12:00:00.250","maybe":null}"#, json);
    }

    #[test]
    fn test_should_parse_optional() {
        let parsed: Stamped = serde_json::from_str(
            r#"{"at":"2024-03-01T12:00:00.250","maybe":"2024-03-01T12:00:00.250"}"#).unwrap();
        assert_eq!(Some(noon()), parsed.maybe);
    }

    #[test]
    fn test_should_reject_bad_date() {
        let parsed = serde_json::from_str::<Stamped>(r#"{"at":"yesterday","maybe":null}"#);
        assert!(parsed.is_err());
    }
}
