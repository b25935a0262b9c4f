pub mod attribute_queries;
pub mod billboard_queries;
pub mod catalog_queries;
pub mod category_queries;
pub mod discount_queries;
pub mod product_queries;
