pub mod auth;
pub mod product;
pub mod product_image;
pub mod review;
pub mod user;
