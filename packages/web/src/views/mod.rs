mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod products;
pub use products::{ProductDetail, Products};

mod admin;
pub use admin::{AdminNewProduct, AdminProducts};

mod not_found;
pub use not_found::NotFound;
