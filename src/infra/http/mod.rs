pub mod api;
mod files;
mod middleware;
mod public;

pub use api::ApiState;
pub use files::{FilesState, build_files_router};
pub use middleware::RequestContext;
pub use public::build_router;
