use dominator::{events, html, with_node, Dom};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use gutenshelf_lib::genre::GenreOption;
use web_sys::HtmlSelectElement;

pub struct GenreSelect;

impl GenreSelect {
    /// Genre dropdown over `options`; `on_change` receives the chosen value, empty for "all".
    pub fn render<F>(options: &MutableVec<GenreOption>, on_change: F) -> Dom
    where
        F: Fn(String) + 'static,
    {
        html!("select" => HtmlSelectElement, {
            .class("genre-select")
            .children_signal_vec(options.signal_vec_cloned().map(|option| html!("option", {
                .attr("value", &option.value)
                .prop("selected", option.is_selected)
                .text(&option.label)
            })))
            .with_node!(select => {
                .event(move |_: events::Change| {
                    on_change(select.value());
                })
            })
        })
    }
}
