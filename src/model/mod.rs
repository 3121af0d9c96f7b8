mod point;
mod series;
mod value;

pub use point::*;
pub use series::*;
pub use value::*;
