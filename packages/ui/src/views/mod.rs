mod catalog;
pub use catalog::ProductCatalogView;

mod home;
pub use home::HomeView;

mod product_detail;
pub use product_detail::ProductDetailView;
