pub mod category;
pub mod footprint;
pub mod grouping;
pub mod matching;
pub mod recommendation;
pub mod resource;
