use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "scoreshare" }
            p { "Open /score/<username> to see a score and share it as an image." }
        }
    }
}
