pub mod metric;
pub mod price;
pub mod profile;
pub mod report;

pub use metric::*;
pub use price::*;
pub use profile::*;
pub use report::*;
