pub mod icons;
pub mod mock;
pub mod partition;
pub mod site;
pub mod types;
pub mod weather;
