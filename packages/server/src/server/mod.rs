// HTTP plumbing: app assembly, routes, entry point

pub mod app;
pub mod routes;

pub use app::{build_app, AppState};
