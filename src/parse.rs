//! Relaxed payload parsing.
//!
//! Both parsers drop individual bad entries and keep going: a weapon that
//! fails the validity invariant, or a CSV line that won't parse, skips only
//! itself. Only a JSON document that is malformed as a whole is an error,
//! and the loader demotes that to zero records at the tier boundary.

use crate::error::ConfigError;
use crate::weapon::{WeaponRecord, WeaponSet};
use tracing::debug;

/// Parse a JSON payload of the form `{"weapons": [...]}`.
///
/// Records failing the validity invariant are dropped, order preserved.
pub fn parse_json(raw: &str) -> Result<Vec<WeaponRecord>, ConfigError> {
    let set: WeaponSet = serde_json::from_str(raw)?;
    let total = set.weapons.len();
    let weapons: Vec<WeaponRecord> = set.weapons.into_iter().filter(|w| w.is_valid()).collect();
    if weapons.len() < total {
        debug!(
            "Dropped {} invalid weapon record(s) from JSON payload",
            total - weapons.len()
        );
    }
    Ok(weapons)
}

/// Parse a CSV payload.
///
/// The first non-empty line is a header and is skipped. Each remaining
/// non-empty line must have at least three comma-separated fields parseable
/// as `id,damage,cooldown`; trailing extra fields are ignored.
pub fn parse_csv(raw: &str) -> Vec<WeaponRecord> {
    let mut weapons = Vec::new();
    let mut rows = raw
        .lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    if rows.next().is_none() {
        return weapons; // empty payload, not even a header
    }

    for (lineno, line) in rows {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 3 {
            debug!("Skipping CSV line {}: only {} field(s)", lineno, fields.len());
            continue;
        }
        let parsed = (
            fields[0].trim().parse::<i32>(),
            fields[1].trim().parse::<f32>(),
            fields[2].trim().parse::<f32>(),
        );
        let (Ok(id), Ok(damage), Ok(cooldown)) = parsed else {
            debug!("Skipping CSV line {}: unparseable fields", lineno);
            continue;
        };
        let record = WeaponRecord::new(id, damage, cooldown);
        if record.is_valid() {
            weapons.push(record);
        } else {
            debug!("Skipping CSV line {}: invalid weapon record", lineno);
        }
    }
    weapons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_filters_invalid_preserving_order() {
        let json = r#"{"weapons":[
            {"id":1,"damage":5.0,"cooldown":1.0},
            {"id":2,"damage":-1.0,"cooldown":1.0},
            {"id":3,"damage":0.0,"cooldown":0.5},
            {"id":4,"damage":2.0,"cooldown":0.0}
        ]}"#;
        let weapons = parse_json(json).unwrap();
        assert_eq!(
            weapons,
            vec![
                WeaponRecord::new(1, 5.0, 1.0),
                WeaponRecord::new(3, 0.0, 0.5),
            ]
        );
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(parse_json("not json").is_err());
        assert!(parse_json(r#"{"weapons": "nope"}"#).is_err());
    }

    #[test]
    fn test_csv_skips_header() {
        let weapons = parse_csv("id,damage,cooldown\n1,5,1\n");
        assert_eq!(weapons, vec![WeaponRecord::new(1, 5.0, 1.0)]);
    }

    #[test]
    fn test_csv_short_line_skips_only_itself() {
        let weapons = parse_csv("id,damage,cooldown\n3,7.5,2\nbad,line\n4,0,1");
        assert_eq!(
            weapons,
            vec![
                WeaponRecord::new(3, 7.5, 2.0),
                WeaponRecord::new(4, 0.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_csv_extra_fields_ignored() {
        let weapons = parse_csv("id,damage,cooldown,notes\n7,1.5,0.25,ignore me\n");
        assert_eq!(weapons, vec![WeaponRecord::new(7, 1.5, 0.25)]);
    }

    #[test]
    fn test_csv_unparseable_numbers_skip_the_line() {
        let weapons = parse_csv("id,damage,cooldown\nseven,1,1\n8,high,1\n9,1,slow\n10,1,1");
        assert_eq!(weapons, vec![WeaponRecord::new(10, 1.0, 1.0)]);
    }

    #[test]
    fn test_csv_validity_filter_applies() {
        let weapons = parse_csv("id,damage,cooldown\n1,-5,1\n2,5,0\n3,5,1");
        assert_eq!(weapons, vec![WeaponRecord::new(3, 5.0, 1.0)]);
    }

    #[test]
    fn test_csv_blank_lines_and_crlf() {
        let weapons = parse_csv("id,damage,cooldown\r\n\r\n1,5,1\r\n\r\n2,10,0.8\r\n");
        assert_eq!(
            weapons,
            vec![
                WeaponRecord::new(1, 5.0, 1.0),
                WeaponRecord::new(2, 10.0, 0.8),
            ]
        );
    }

    #[test]
    fn test_csv_empty_payload() {
        assert!(parse_csv("").is_empty());
        assert!(parse_csv("id,damage,cooldown\n").is_empty());
    }
}
