//! Inline SVG glyphs used by the separator and ellipsis primitives.

use crate::page::PageElement;

fn svg_root(class: Option<&'static str>) -> PageElement {
	let svg = PageElement::new("svg")
		.attr("xmlns", "http://www.w3.org/2000/svg")
		.attr("width", "24")
		.attr("height", "24")
		.attr("viewBox", "0 0 24 24")
		.attr("fill", "none")
		.attr("stroke", "currentColor")
		.attr("stroke-width", "2")
		.attr("stroke-linecap", "round")
		.attr("stroke-linejoin", "round");
	match class {
		Some(class) => svg.attr("class", class),
		None => svg,
	}
}

/// Right-pointing chevron, the default separator content.
pub fn chevron_right() -> PageElement {
	svg_root(None).child(PageElement::new("path").attr("d", "m9 18 6-6-6-6"))
}

/// Three horizontal dots.
pub fn more_horizontal(class: &'static str) -> PageElement {
	let dot = |cx: &'static str| {
		PageElement::new("circle")
			.attr("cx", cx)
			.attr("cy", "12")
			.attr("r", "1")
	};
	svg_root(Some(class))
		.child(dot("12"))
		.child(dot("19"))
		.child(dot("5"))
}
