pub mod answer;
pub mod token;
