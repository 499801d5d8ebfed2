pub mod about;
pub mod app;
pub mod blog;
pub mod docs;
pub mod features;
pub mod help;
pub mod landing;
pub mod legal;
pub mod notfound;
pub mod pricing;
