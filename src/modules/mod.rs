pub mod cost;
pub mod finality;
