use std::collections::HashMap;

use reqwest::Method;

use crate::{add_per_request_options, codec, error::InfluxError, model::Series, InfluxClient, InfluxOp, InfluxRequest, InfluxResult};

/// Sends the points of one or more series to the server.
///
/// A successful write has a zero length response body. Any non-empty body is
/// the server's error message, surfaced verbatim as
/// [`InfluxError::ApiError`].
#[derive(Debug, Clone, Default)]
pub struct WriteSeriesOperation {
    client: InfluxClient,
    pub(crate) series: Vec<Series>,
}

add_per_request_options!(WriteSeriesOperation);

impl WriteSeriesOperation {
    pub(crate) fn new(client: InfluxClient, series: Vec<Series>) -> Self {
        Self { client, series }
    }

    pub async fn send(self) -> InfluxResult<()> {
        let Self { client, series } = self;

        let body = encode_write_body(&series)?;

        let req = InfluxRequest {
            method: Method::POST,
            operation: InfluxOp::WriteSeries,
            headers: HashMap::from([("Content-Type".to_string(), "application/json".to_string())]),
            body,
            ..Default::default()
        };

        let resp = client.send(req).await?;

        // Error responses from the server are written to the body; a
        // successful write returns nothing.
        let text = resp.text().await?;
        if !text.is_empty() {
            return Err(InfluxError::ApiError(text));
        }

        Ok(())
    }
}

/// The JSON request body of a write: the dense wire form of `series`.
pub(crate) fn encode_write_body(series: &[Series]) -> InfluxResult<Vec<u8>> {
    let send = codec::encode_series(series);

    Ok(serde_json::to_vec(&send)?)
}
