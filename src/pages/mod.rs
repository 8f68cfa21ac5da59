//! Top-level pages chosen by the navigation shell.

mod dashboard;
mod landing;

pub use dashboard::Dashboard;
pub use landing::Landing;
