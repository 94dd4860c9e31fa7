use dioxus::prelude::*;

use api::GateDecision;
use ui::{use_auth, Footer, Navbar};

use crate::Route;

/// Page frame around every route. Applies the same gate as the server so
/// client-side navigation cannot reach a page the server would refuse.
#[component]
pub fn Shell() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let path = route.to_string();
    let decision = if auth().loading {
        GateDecision::Allow
    } else {
        api::gate::evaluate(&path, auth().user.as_ref())
    };

    if let GateDecision::Redirect(to) = decision {
        match to.parse::<Route>() {
            Ok(target) => {
                nav.replace(target);
            }
            Err(_) => tracing::error!(to, "redirect target is not a route"),
        }
    }

    rsx! {
        Navbar {}
        main {
            class: "page",
            if decision == GateDecision::Allow {
                Outlet::<Route> {}
            }
        }
        Footer {}
    }
}
