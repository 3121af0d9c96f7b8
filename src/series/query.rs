use reqwest::Method;

use crate::{
    add_per_request_options, codec,
    codec::WireSeries,
    error::InfluxError,
    model::QueryResult,
    InfluxClient, InfluxOp, InfluxRequest, InfluxResult,
};

/// Timestamps in query results are requested in milliseconds.
const TIME_PRECISION: &str = "ms";

/// Runs one query and decodes the columnar response into sparse points.
#[derive(Debug, Clone, Default)]
pub struct QuerySeriesOperation {
    client: InfluxClient,
    query: String,
}

add_per_request_options!(QuerySeriesOperation);

impl QuerySeriesOperation {
    pub(crate) fn new(client: InfluxClient, query: &str) -> Self {
        Self {
            client,
            query: query.to_string(),
        }
    }

    pub async fn send(self) -> InfluxResult<QueryResult> {
        let Self { client, query } = self;

        let req = InfluxRequest {
            method: Method::GET,
            operation: InfluxOp::QuerySeries,
            query: vec![
                ("q".to_string(), query.clone()),
                ("time_precision".to_string(), TIME_PRECISION.to_string()),
            ],
            ..Default::default()
        };

        let resp = client.send(req).await?;
        let body = resp.text().await?;

        let entries: Vec<WireSeries> = match serde_json::from_str(&body) {
            Ok(entries) => entries,
            Err(e) => {
                return Err(InfluxError::DecodeError {
                    query,
                    message: e.to_string(),
                    body,
                });
            }
        };

        codec::decode_response(entries).map_err(|message| InfluxError::DecodeError { query, message, body })
    }
}
