use dominator::{html, Dom};
use futures_signals::signal::Signal;

pub struct Spinner;

impl Spinner {
    /// Loading indicator, shown while `active` is true
    pub fn render(active: impl Signal<Item = bool> + 'static) -> Dom {
        html!("div", {
            .class("spinner")
            .visible_signal(active)
            .children(&mut [
                html!("div", {
                    .class("loader")
                })
            ])
        })
    }
}
