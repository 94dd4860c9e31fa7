use dioxus::prelude::*;

use ui::AuthProvider;
use views::{AdminNewProduct, AdminProducts, Home, Login, NotFound, ProductDetail, Products, Shell};

mod views;

#[cfg(feature = "server")]
mod server;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/auth/login")]
        Login {},
        #[route("/products")]
        Products {},
        #[route("/products/:id")]
        ProductDetail { id: String },
        #[route("/admin")]
        AdminProducts {},
        #[route("/admin/ajoutProduit")]
        AdminNewProduct {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        let result = tokio::runtime::Runtime::new()
            .map_err(server::LaunchError::from)
            .and_then(|runtime| runtime.block_on(server::launch_server()));

        if let Err(e) = result {
            eprintln!("storefront failed to start: {e}");
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
