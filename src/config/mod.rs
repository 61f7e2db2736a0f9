//! Configuration module

mod site;

pub use site::AdjacentLabels;
pub use site::ShareTarget;
pub use site::SiteConfig;
