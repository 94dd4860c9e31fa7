//! Wrap-around slide carousel.

use dioxus::prelude::*;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

/// One slide of the carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub image: String,
    pub title: String,
    pub price: String,
}

/// Index arithmetic of the carousel. Every method is a no-op on an empty
/// slide list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// State for a stored index over `len` slides. The index wraps when the
    /// slide list has shrunk since it was stored.
    pub fn at(index: usize, len: usize) -> Self {
        Self {
            index: index.checked_rem(len).unwrap_or(0),
            len,
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// The slides on screen: the current one and the one after it.
    /// A single slide is shown once.
    pub fn visible(&self) -> Vec<usize> {
        match self.len {
            0 => Vec::new(),
            1 => vec![0],
            len => vec![self.index, (self.index + 1) % len],
        }
    }
}

#[component]
pub fn Carousel(slides: Vec<Slide>) -> Element {
    let len = slides.len();
    let mut index = use_signal(|| 0usize);
    let state = CarouselState::at(index(), len);

    rsx! {
        div {
            class: "carousel",
            div {
                class: "carousel__track",
                for i in state.visible() {
                    div {
                        key: "{i}",
                        class: "carousel__slide",
                        img { src: "{slides[i].image}", alt: "{slides[i].title}" }
                        div {
                            class: "carousel__caption",
                            span { class: "carousel__title", "{slides[i].title}" }
                            span { class: "carousel__price", "{slides[i].price}" }
                        }
                    }
                }
            }
            div {
                class: "carousel__controls",
                button {
                    r#type: "button",
                    class: "carousel__arrow",
                    title: "Previous",
                    onclick: move |_| {
                        let mut state = CarouselState::at(index(), len);
                        state.prev();
                        index.set(state.index);
                    },
                    Icon { icon: FaChevronLeft, width: 14, height: 14 }
                }
                button {
                    r#type: "button",
                    class: "carousel__arrow",
                    title: "Next",
                    onclick: move |_| {
                        let mut state = CarouselState::at(index(), len);
                        state.next();
                        index.set(state.index);
                    },
                    Icon { icon: FaChevronRight, width: 14, height: 14 }
                }
            }
        }
    }
}
