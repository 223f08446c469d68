use dioxus::prelude::*;

/// Login affordance shown when the score API rejects a lookup as
/// unauthorized. The OAuth dance itself lives behind `/api/auth/twitter`.
#[component]
pub fn TwitterLogin() -> Element {
    rsx! {
        a { class: "button button--twitter", href: "/api/auth/twitter",
            "Log in with Twitter"
        }
    }
}
