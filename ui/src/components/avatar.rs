use dioxus::prelude::*;

/// A round profile picture.
#[component]
pub fn Avatar(source: String, #[props(default = 40)] size: u32) -> Element {
    rsx! {
        img {
            src: "{source}",
            alt: "Avatar",
            width: "{size}",
            height: "{size}",
            style: "
                display: block;
                width: {size}px;
                height: {size}px;
                border-radius: 50%;
                object-fit: cover;
            ",
        }
    }
}
