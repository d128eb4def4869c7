pub mod answer;
pub mod assessment;
pub mod dimension;
pub mod recommendation;
pub mod score;
