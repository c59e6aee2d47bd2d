pub mod bag;
pub mod brew;
pub mod marker;
pub mod roast_level;
