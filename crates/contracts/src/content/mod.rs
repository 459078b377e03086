//! Static site copy and the lookup tables that map selection ids to it.

pub mod blog;
pub mod legal;
pub mod navigation;
pub mod pages;
pub mod pricing;
pub mod services;
pub mod testimonials;
