use serde::{Deserialize, Deserializer, Serializer};
use time::Date;

use crate::time::DATE_FORMAT;

/// 日付を`YYYY-MM-DD`形式の文字列にシリアライズする。
pub fn serialize_date<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = date
        .format(&DATE_FORMAT)
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&value)
}

/// `YYYY-MM-DD`形式の文字列から日付をデシリアライズする。
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Date::parse(&value, &DATE_FORMAT).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use time::macros::date;

    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(serialize_with = "serialize_date")]
        #[serde(deserialize_with = "deserialize_date")]
        date: Date,
    }

    #[test]
    fn serialize_date_as_calendar_date() {
        let wrapper = Wrapper {
            date: date!(2024 - 03 - 15),
        };
        let value = serde_json::to_value(&wrapper).unwrap();
        assert_eq!(value["date"], "2024-03-15");
    }

    #[rstest::rstest]
    #[case(r#"{"date": "2024-03-15"}"#, true)]
    #[case(r#"{"date": "2024-3-15"}"#, false)]
    #[case(r#"{"date": "20240315"}"#, false)]
    #[case(r#"{"date": "not-a-date"}"#, false)]
    fn deserialize_date_from_calendar_date(#[case] json: &str, #[case] expected: bool) {
        let wrapper: Result<Wrapper, _> = serde_json::from_str(json);
        assert_eq!(wrapper.is_ok(), expected);
    }
}
