use super::Point;

/// A named, ordered collection of points to be written together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    /// Series name
    pub name: String,

    /// The points to write, in order
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Set the series name
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();

        self
    }

    /// Add a point
    pub fn point(mut self, point: Point) -> Self {
        self.points.push(point);

        self
    }

    /// Set all points
    pub fn points(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        self.points = points.into_iter().collect();

        self
    }
}

/// The points returned by the server for one query.
///
/// An empty result set decodes to an empty name and no points; that is a
/// valid success outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub name: String,
    pub points: Vec<Point>,
}
