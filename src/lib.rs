//! Minimal async client for the InfluxDB 0.x HTTP series API.
//!
//! The client writes named series of sparse data points to a remote server and
//! queries them back. Points are sparse key/value records; on the wire they are
//! shaped into the dense columnar JSON the server expects (see [`codec`]).
//!
//! # Examples
//!
//! ```no_run
//! use influxdb_client_rs::{model::{Point, Series}, InfluxClient};
//!
//! # async fn demo() -> influxdb_client_rs::InfluxResult<()> {
//! let client = InfluxClient::new("localhost", "metrics", "root", "root");
//!
//! client
//!     .write_one(
//!         Series::new("cpu")
//!             .point(Point::new().field_string("host", "web-1").field_double("load", 0.92))
//!             .point(Point::new().field_string("host", "web-2").field_double("load", 1.07)),
//!     )
//!     .send()
//!     .await?;
//!
//! let result = client.query("select * from cpu limit 10").send().await?;
//! for point in &result.points {
//!     log::debug!("{:?}", point);
//! }
//! # Ok(())
//! # }
//! ```

use std::{collections::HashMap, fmt::Display, time::Duration};

use bytes::Bytes;
use reqwest::{Method, Response};
use url::Url;

use error::InfluxError;
use model::Series;
use series::{QuerySeriesOperation, WriteSeriesOperation};

pub mod codec;
pub mod error;
pub mod macros;
pub mod model;
pub mod series;

#[cfg(test)]
pub mod test_util;

const USER_AGENT: &str = "influxdb-client-rs/0.1.0";

/// The fixed port of the InfluxDB 0.x HTTP API.
const SERVER_PORT: u16 = 8086;

pub type InfluxResult<T> = Result<T, InfluxError>;

/// Operations of the InfluxDB 0.x series API.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfluxOp {
    #[default]
    Undefined,

    WriteSeries,
    QuerySeries,
}

impl From<InfluxOp> for String {
    fn from(value: InfluxOp) -> Self {
        value.to_string()
    }
}

impl Display for InfluxOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InfluxOp::Undefined => "_Undefined_",

            InfluxOp::WriteSeries => "WriteSeries",
            InfluxOp::QuerySeries => "QuerySeries",
        };

        write!(f, "{}", s)
    }
}

/// The request to send to the InfluxDB server.
#[derive(Debug, Clone)]
pub struct InfluxRequest {
    method: Method,
    operation: InfluxOp,
    headers: HashMap<String, String>,
    query: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Default for InfluxRequest {
    fn default() -> Self {
        Self {
            method: Method::POST,
            operation: InfluxOp::Undefined,
            headers: HashMap::new(),
            query: Vec::new(),
            body: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InfluxClientOptions {
    pub timeout_ms: Option<u64>,
}

impl InfluxClientOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// InfluxDB client. Holds the connection parameters of one server/database
/// pair and is immutable after construction, so it can be shared freely
/// across tasks.
#[derive(Clone, Default)]
pub struct InfluxClient {
    host: String,
    database: String,
    username: String,
    password: String,
    http_client: reqwest::Client,
    options: InfluxClientOptions,
}

impl std::fmt::Debug for InfluxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfluxClient")
            .field("host", &self.host)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("http_client", &self.http_client)
            .field("options", &self.options)
            .finish()
    }
}

impl InfluxClient {
    /// Create a client for the given server and database. No request timeout
    /// is applied; requests wait for the server indefinitely.
    pub fn new(host: &str, database: &str, username: &str, password: &str) -> Self {
        Self {
            host: host.to_string(),
            database: database.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            http_client: reqwest::Client::new(),
            options: InfluxClientOptions::new(),
        }
    }

    /// Create a client whose request timeout is the time remaining until
    /// `deadline`, measured once, now.
    ///
    /// The snapshot is not recomputed per request: a client built early and
    /// used after a long delay still carries the timeout captured here, even
    /// though the original deadline may already have passed.
    pub fn with_deadline(host: &str, database: &str, username: &str, password: &str, deadline: std::time::Instant) -> Self {
        let mut client = Self::new(host, database, username, password);
        let remaining = deadline.saturating_duration_since(std::time::Instant::now());
        client.options.timeout_ms = Some(remaining.as_millis() as u64);

        client
    }

    /// Set the request timeout, in milliseconds.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.options.timeout_ms = Some(timeout_ms);

        self
    }

    /// The `/db/{database}/series` endpoint URL with the credential query
    /// parameters and the request's own parameters attached.
    pub(crate) fn build_url(&self, req: &InfluxRequest) -> InfluxResult<Url> {
        let mut url = Url::parse(&format!("http://{}:{}/db/{}/series", self.host, SERVER_PORT, self.database))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("u", &self.username);
            pairs.append_pair("p", &self.password);

            for (k, v) in &req.query {
                pairs.append_pair(k, v);
            }
        }

        Ok(url)
    }

    pub async fn send(&self, req: InfluxRequest) -> InfluxResult<Response> {
        let url = self.build_url(&req)?;

        let InfluxRequest {
            method,
            operation,
            headers,
            query: _,
            body,
        } = req;

        log::debug!(">> {} {} {}", operation, method, url);

        let mut request_builder = self
            .http_client
            .request(method, url)
            .header("User-Agent", USER_AGENT)
            .body(Bytes::from_owner(body));

        for (k, v) in headers {
            request_builder = request_builder.header(k, v);
        }

        if let Some(ms) = self.options.timeout_ms {
            request_builder = request_builder.timeout(Duration::from_millis(ms));
        }

        let response = request_builder.send().await?;

        // This API reports failures through the response body, not the status
        // code, so the status is only logged. Interpreting the body is up to
        // the operation.
        log::debug!("<< {} {}", operation, response.status());

        Ok(response)
    }

    /// Write the points of several series in one request.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use influxdb_client_rs::{model::{Point, Series}, InfluxClient};
    /// # async fn demo(client: InfluxClient) {
    /// let response = client
    ///     .write(vec![
    ///         Series::new("cpu").point(Point::new().field_double("load", 0.92)),
    ///         Series::new("mem").point(Point::new().field_integer("used", 738197504)),
    ///     ])
    ///     .send()
    ///     .await;
    /// # }
    /// ```
    pub fn write(&self, series: Vec<Series>) -> WriteSeriesOperation {
        WriteSeriesOperation::new(self.clone(), series)
    }

    /// Write the points of a single series. Equivalent to calling
    /// [`write`](Self::write) with a one-element list.
    pub fn write_one(&self, series: Series) -> WriteSeriesOperation {
        self.write(vec![series])
    }

    /// Run a query and decode the returned series into sparse points.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use influxdb_client_rs::InfluxClient;
    /// # async fn demo(client: InfluxClient) {
    /// let result = client.query("select * from cpu limit 10").send().await;
    /// # }
    /// ```
    pub fn query(&self, query: &str) -> QuerySeriesOperation {
        QuerySeriesOperation::new(self.clone(), query)
    }
}
