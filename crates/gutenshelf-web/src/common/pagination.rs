use std::rc::Rc;

use dominator::{clone, events, html, Dom};
use gutenshelf_lib::pagination::{PageDescriptor, PageItem};

use super::icons;

pub struct Pagination;

impl Pagination {
    fn page_button(page: u32, active: bool, on_select: Rc<dyn Fn(u32)>) -> Dom {
        html!("button", {
            .class("page-btn")
            .apply_if(active, |dom| dom.class("active"))
            .text(&page.to_string())
            .event(move |_: events::Click| {
                if !active {
                    on_select(page);
                }
            })
        })
    }

    fn step_button(icon: Dom, target: Option<u32>, on_select: Rc<dyn Fn(u32)>) -> Dom {
        html!("button", {
            .class("page-btn")
            .prop("disabled", target.is_none())
            .children(&mut [icon])
            .event(move |_: events::Click| {
                if let Some(page) = target {
                    on_select(page);
                }
            })
        })
    }

    /// Pagination strip for `descriptor`; clicking a page calls `on_select` with its number.
    pub fn render(descriptor: PageDescriptor, on_select: Rc<dyn Fn(u32)>) -> Dom {
        let current = descriptor.clamped_page();
        let total = descriptor.total_pages();
        let items = descriptor.visible_pages();

        let prev = (current > 1).then(|| current - 1);
        let next = (current < total).then(|| current + 1);

        html!("div", {
            .class("pagination")
            .visible(!items.is_empty())
            .child(Self::step_button(icons::chevron_left(), prev, on_select.clone()))
            .children(items.into_iter().map(clone!(on_select => move |item| match item {
                PageItem::Page(page) => Self::page_button(page, page == current, on_select.clone()),
                PageItem::Ellipsis => html!("span", {
                    .class("ellipsis")
                    .text("…")
                }),
            })))
            .child(Self::step_button(icons::chevron_right(), next, on_select))
        })
    }
}
