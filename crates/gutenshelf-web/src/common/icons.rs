use dominator::{svg, Dom};

pub fn chevron_left() -> Dom {
    svg!("svg", {
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("fill", "none")
        .attr("viewBox", "0 0 24 24")
        .attr("stroke", "currentColor")
        .class("icon")
        .children(&mut [
            svg!("path", {
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round")
                .attr("stroke-width", "2")
                .attr("d", "M15 19l-7-7 7-7")
            })
        ])
    })
}

pub fn chevron_right() -> Dom {
    svg!("svg", {
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("fill", "none")
        .attr("viewBox", "0 0 24 24")
        .attr("stroke", "currentColor")
        .class("icon")
        .children(&mut [
            svg!("path", {
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round")
                .attr("stroke-width", "2")
                .attr("d", "M9 5l7 7-7 7")
            })
        ])
    })
}

/// Outlined heart; the stylesheet fills it for cards with the `favorite` class
pub fn heart() -> Dom {
    svg!("svg", {
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("fill", "none")
        .attr("viewBox", "0 0 24 24")
        .attr("stroke", "currentColor")
        .class("icon")
        .class("heart")
        .children(&mut [
            svg!("path", {
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round")
                .attr("stroke-width", "2")
                .attr("d", "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z")
            })
        ])
    })
}

pub fn book_open() -> Dom {
    svg!("svg", {
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("fill", "none")
        .attr("viewBox", "0 0 24 24")
        .attr("stroke", "currentColor")
        .class("icon")
        .children(&mut [
            svg!("path", {
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round")
                .attr("stroke-width", "1")
                .attr("d", "M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 5c1.747 0 3.332.477 4.5 1.253v13C19.832 18.477 18.247 18 16.5 18c-1.746 0-3.332.477-4.5 1.253")
            })
        ])
    })
}
