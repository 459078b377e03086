pub mod browser_location;
pub mod hash_router;

pub use browser_location::BrowserLocation;
pub use hash_router::{provide_router, use_router, RouteOutlet, RouterContext};
