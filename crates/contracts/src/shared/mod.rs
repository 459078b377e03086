pub mod location;
pub mod site_config;
pub mod tabs;
