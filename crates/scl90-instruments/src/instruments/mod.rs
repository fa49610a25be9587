pub mod scl90;
