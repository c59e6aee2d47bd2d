pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod photo;
pub mod table;

pub use formatting::format_seconds;
pub use formatting::rating_stars;
