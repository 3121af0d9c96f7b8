//! The columnar codec of the series API.
//!
//! Points are sparse maps, but the wire format is dense and columnar: every
//! series carries one ordered column list and each point becomes a row of
//! exactly that length. [`encode_series`] builds that shape for writes and
//! [`decode_response`] reverses it for query results.

use serde::{Deserialize, Serialize};

use crate::model::{Point, QueryResult, Series, Value};

/// One series in the dense columnar shape the server exchanges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireSeries {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub columns: Vec<String>,

    #[serde(default)]
    pub points: Vec<Vec<Value>>,
}

/// Encode series of sparse points into their wire form, preserving series
/// order. Pure transformation, values pass through untouched.
pub fn encode_series(series: &[Series]) -> Vec<WireSeries> {
    series.iter().map(encode_one).collect()
}

fn encode_one(series: &Series) -> WireSeries {
    // Extract all column names so every point uses the same positions.
    // First-seen order; the column list is fixed before any row is built.
    let mut columns: Vec<String> = Vec::new();
    for point in &series.points {
        for (name, _) in point.iter() {
            if !columns.iter().any(|c| c == name) {
                columns.push(name.to_string());
            }
        }
    }

    // Fill the points into dense rows, null for the slots a point does not set
    let points = series
        .points
        .iter()
        .map(|point| columns.iter().map(|col| point.get(col).cloned().unwrap_or(Value::Null)).collect())
        .collect();

    WireSeries {
        name: series.name.clone(),
        columns,
        points,
    }
}

/// Decode a query response into sparse points.
///
/// An empty entry list is a valid empty result. The server returns at most
/// one series per query; should more than one entry arrive, only the first is
/// used and the rest are ignored.
///
/// The error value is only the reason text; the caller attaches the query and
/// the raw body it kept (see
/// [`QuerySeriesOperation`](`crate::series::QuerySeriesOperation`)).
pub fn decode_response(entries: Vec<WireSeries>) -> Result<QueryResult, String> {
    let entry = match entries.into_iter().next() {
        Some(entry) => entry,
        None => return Ok(QueryResult::default()),
    };

    let mut points = Vec::with_capacity(entry.points.len());
    for row in entry.points {
        if row.len() != entry.columns.len() {
            return Err(format!(
                "row of series `{}` has {} values but the response declares {} columns",
                entry.name,
                row.len(),
                entry.columns.len()
            ));
        }

        let mut point = Point::new();
        for (col, value) in entry.columns.iter().zip(row) {
            point = point.field(col, value);
        }

        points.push(point);
    }

    Ok(QueryResult { name: entry.name, points })
}

#[cfg(test)]
mod test_codec {
    use crate::model::{Point, QueryResult, Series, Value};
    use crate::test_util::setup;

    use super::{decode_response, encode_series, WireSeries};

    #[test]
    fn test_encode_builds_columns_in_first_seen_order() {
        setup();

        let series = Series::new("m")
            .point(Point::new().field_integer("a", 1).field_integer("b", 2))
            .point(Point::new().field_integer("b", 3).field_integer("c", 4));

        let wire = encode_series(&[series]);
        assert_eq!(1, wire.len());
        assert_eq!("m", wire[0].name);
        assert_eq!(vec!["a", "b", "c"], wire[0].columns);
        assert_eq!(
            vec![
                vec![Value::Integer(1), Value::Integer(2), Value::Null],
                vec![Value::Null, Value::Integer(3), Value::Integer(4)],
            ],
            wire[0].points
        );
    }

    #[test]
    fn test_encode_preserves_series_order() {
        setup();

        let wire = encode_series(&[Series::new("s2"), Series::new("s1"), Series::new("s3")]);
        let names = wire.iter().map(|w| w.name.as_str()).collect::<Vec<_>>();
        assert_eq!(vec!["s2", "s1", "s3"], names);
    }

    #[test]
    fn test_encode_empty_series_is_valid_json() {
        setup();

        let wire = encode_series(&[Series::new("empty")]);
        assert!(wire[0].columns.is_empty());
        assert!(wire[0].points.is_empty());

        let json = serde_json::to_string(&wire).unwrap();
        assert_eq!(r#"[{"name":"empty","columns":[],"points":[]}]"#, json);
    }

    #[test]
    fn test_encode_is_type_agnostic() {
        setup();

        let series = Series::new("m").point(
            Point::new()
                .field_string("s", "text")
                .field_integer("i", -3)
                .field_double("d", 0.25)
                .field_bool("b", true),
        );

        let json = serde_json::to_string(&encode_series(&[series])).unwrap();
        assert_eq!(r#"[{"name":"m","columns":["s","i","d","b"],"points":[["text",-3,0.25,true]]}]"#, json);
    }

    #[test]
    fn test_decode_empty_response_is_empty_result() {
        setup();

        let result = decode_response(vec![]).unwrap();
        assert_eq!(QueryResult::default(), result);
        assert_eq!("", result.name);
        assert!(result.points.is_empty());
    }

    #[test]
    fn test_decode_zips_columns_with_rows() {
        setup();

        let entry = WireSeries {
            name: "m".to_string(),
            columns: vec!["x".to_string(), "y".to_string()],
            points: vec![
                vec![Value::Integer(10), Value::Integer(20)],
                vec![Value::Integer(30), Value::Integer(40)],
            ],
        };

        let result = decode_response(vec![entry]).unwrap();
        assert_eq!("m", result.name);
        assert_eq!(
            vec![
                Point::new().field_integer("x", 10).field_integer("y", 20),
                Point::new().field_integer("x", 30).field_integer("y", 40),
            ],
            result.points
        );
    }

    #[test]
    fn test_decode_uses_first_entry_only() {
        setup();

        let first = WireSeries {
            name: "first".to_string(),
            columns: vec!["a".to_string()],
            points: vec![vec![Value::Integer(1)]],
        };
        let second = WireSeries {
            name: "second".to_string(),
            columns: vec!["b".to_string()],
            points: vec![vec![Value::Integer(2)]],
        };

        let result = decode_response(vec![first, second]).unwrap();
        assert_eq!("first", result.name);
        assert_eq!(1, result.points.len());
        assert_eq!(None, result.points[0].get("b"));
    }

    #[test]
    fn test_decode_rejects_row_length_mismatch() {
        setup();

        let entry = WireSeries {
            name: "m".to_string(),
            columns: vec!["x".to_string(), "y".to_string()],
            points: vec![vec![Value::Integer(10)]],
        };

        let message = decode_response(vec![entry]).unwrap_err();
        assert!(message.contains("1 values"));
        assert!(message.contains("2 columns"));
    }

    #[test]
    fn test_wire_series_parses_with_missing_fields() {
        setup();

        // Older servers may omit empty arrays entirely
        let entry: WireSeries = serde_json::from_str(r#"{"name":"m"}"#).unwrap();
        assert!(entry.columns.is_empty());
        assert!(entry.points.is_empty());
    }

    #[test]
    fn test_round_trip_restores_sparse_points() {
        setup();

        let points = vec![
            Point::new().field_string("host", "web-1").field_double("load", 0.92),
            Point::new().field_double("load", 1.07).field_integer("cores", 8),
            Point::new(),
        ];
        let series = Series::new("cpu").points(points.clone());

        let result = decode_response(encode_series(&[series])).unwrap();

        assert_eq!("cpu", result.name);
        assert_eq!(points.len(), result.points.len());
        for (original, decoded) in points.iter().zip(&result.points) {
            // Every original key survives with its value; extra slots are null
            for (name, value) in original.iter() {
                assert_eq!(Some(value), decoded.get(name));
            }
            for (name, value) in decoded.iter() {
                if original.get(name).is_none() {
                    assert!(value.is_null());
                }
            }
        }
    }
}
