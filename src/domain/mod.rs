pub mod price_plan;
pub mod reading;

pub use price_plan::*;
pub use reading::*;
