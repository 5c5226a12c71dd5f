pub mod input;
pub mod price;
pub mod recommendation;
