pub mod extract;
pub mod features;
