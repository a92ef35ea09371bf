//! sea-orm entities for the catalog tables.
//!
//! Relations are declared for eager loading; the migrations deliberately
//! create no foreign-key constraints between these tables.

pub mod product_images;
pub mod products;
pub mod reviews;
pub mod users;
