use crate::customer::record::{CustomerRecord, RawCustomer};
use crate::prelude::{FinderError, FinderResult};
use crate::telemetry::log::LogManager;

/// Parses a customer file: one JSON object per `\n`-separated line.
///
/// Every piece produced by the split must decode, so a trailing newline
/// (which leaves an empty last line) is rejected like any other malformed
/// line. Coordinates are coerced with
/// [`parse_float_prefix`](crate::customer::coerce::parse_float_prefix);
/// records whose coordinates end up `NaN` are kept.
pub fn parse(raw: &str) -> FinderResult<Vec<CustomerRecord>> {
    let logger = LogManager::new("parser");

    let records = raw
        .split('\n')
        .map(|line| {
            serde_json::from_str::<RawCustomer>(line)
                .map(CustomerRecord::from)
                .map_err(FinderError::DataFormat)
        })
        .collect::<FinderResult<Vec<_>>>()?;

    for record in records.iter().filter(|r| !r.has_valid_coordinates()) {
        logger.warn(&format!(
            "customer {} has non-numeric coordinates",
            record.user_id
        ));
    }
    logger.detail(&format!("parsed {} customer records", records.len()));

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOMER_DATA: &str = concat!(
        r#"{"latitude": "52.986375", "user_id": 12, "name": "Christina McArdle", "longitude": "-6.043701"}"#,
        "\n",
        r#"{"latitude": "51.92893", "user_id": 1, "name": "Alice Cahill", "longitude": "-10.27699"}"#,
        "\n",
        r#"{"latitude": "51.8856167", "user_id": 2, "name": "Ian McArdle", "longitude": "-10.4240951"}"#,
    );

    #[test]
    fn parses_valid_customer_data() {
        let customers = parse(CUSTOMER_DATA).unwrap();

        assert_eq!(customers.len(), 3);
        assert_eq!(customers[0].name, "Christina McArdle");
        assert_eq!(customers[0].user_id, 12);
        assert_eq!(customers[0].latitude, 52.986375);
        assert_eq!(customers[0].longitude, -6.043701);
        assert_eq!(customers[2].user_id, 2);
    }

    #[test]
    fn invalid_data_is_rejected() {
        let err = parse("{{a").unwrap_err();
        assert!(matches!(err, FinderError::DataFormat(_)));
        assert!(err
            .to_string()
            .to_lowercase()
            .contains("unable to parse customer data"));
    }

    #[test]
    fn trailing_blank_line_is_rejected() {
        let input = format!("{}\n", CUSTOMER_DATA);
        assert!(matches!(
            parse(&input).unwrap_err(),
            FinderError::DataFormat(_)
        ));
        assert!(parse("").is_err());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = parse(r#"{"latitude": "52.0", "name": "No Id", "longitude": "-6.0"}"#).unwrap_err();
        assert!(matches!(err, FinderError::DataFormat(_)));
    }

    #[test]
    fn non_integer_user_ids_are_rejected() {
        for id in [r#""12""#, "12.5", "null"] {
            let line = format!(
                r#"{{"latitude": "52.0", "user_id": {}, "name": "Typed Id", "longitude": "-6.0"}}"#,
                id
            );
            assert!(
                matches!(parse(&line).unwrap_err(), FinderError::DataFormat(_)),
                "{}",
                id
            );
        }
    }

    #[test]
    fn crlf_line_endings_still_decode() {
        let input = concat!(
            r#"{"latitude": "52.0", "user_id": 5, "name": "A", "longitude": "-6.0"}"#,
            "\r\n",
            r#"{"latitude": "53.0", "user_id": 6, "name": "B", "longitude": "-7.0"}"#,
        );
        let customers = parse(input).unwrap();
        assert_eq!(customers.len(), 2);
    }

    #[test]
    fn lenient_coordinates_pass_through() {
        let input = r#"{"latitude": "51.92893abc", "user_id": 1, "name": "Alice Cahill", "longitude": "n/a"}"#;
        let customers = parse(input).unwrap();
        assert_eq!(customers[0].latitude, 51.92893);
        assert!(customers[0].longitude.is_nan());
    }

    #[test]
    fn duplicate_ids_are_kept() {
        let line = r#"{"latitude": "52.0", "user_id": 9, "name": "Twin", "longitude": "-6.0"}"#;
        let customers = parse(&format!("{}\n{}", line, line)).unwrap();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0], customers[1]);
    }
}
