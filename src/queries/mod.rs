//! Read-side query handlers over the document session

pub mod get_product_by_id;
