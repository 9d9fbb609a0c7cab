pub mod steps;
pub mod success;
pub mod tracking;
pub mod wizard;
