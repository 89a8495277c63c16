mod routes;
mod store;

pub use routes::*;
pub use store::*;
