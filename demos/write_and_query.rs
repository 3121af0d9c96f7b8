//! Writes a couple of points and queries them back.
//!
//! Expects an InfluxDB 0.x server on localhost with a `metrics` database:
//!
//! ```text
//! cargo run --example write_and_query
//! ```

use influxdb_client_rs::{
    model::{Point, Series},
    InfluxClient, InfluxResult,
};

#[tokio::main]
async fn main() -> InfluxResult<()> {
    simple_logger::init_with_level(log::Level::Debug).unwrap();

    let client = InfluxClient::new("localhost", "metrics", "root", "root").timeout_ms(5000);

    client
        .write(vec![
            Series::new("cpu")
                .point(Point::new().field_string("host", "web-1").field_double("load", 0.92))
                .point(Point::new().field_string("host", "web-2").field_double("load", 1.07)),
            Series::new("mem").point(Point::new().field_string("host", "web-1").field_integer("used", 738197504)),
        ])
        .send()
        .await?;

    let result = client.query("select * from cpu limit 10").send().await?;

    println!("series: {}", result.name);
    for point in &result.points {
        for (name, value) in point.iter() {
            println!("  {} = {:?}", name, value);
        }
    }

    Ok(())
}
