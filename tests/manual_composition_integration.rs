//! Integration tests for hand-composed trails
//!
//! Callers build custom trails from the primitives, including collapsed
//! trails with an ellipsis and links rendered through their own elements.

use reinhardt_breadcrumb::prelude::*;
use rstest::rstest;

#[rstest]
fn test_collapsed_trail_with_ellipsis() {
	let items = vec![
		BreadcrumbItem::new()
			.child(BreadcrumbLink::new("/").child("Home").render().unwrap())
			.render()
			.unwrap(),
		BreadcrumbSeparator::new().render().unwrap(),
		BreadcrumbItem::new()
			.child(BreadcrumbEllipsis::new().render().unwrap())
			.render()
			.unwrap(),
		BreadcrumbSeparator::new().render().unwrap(),
		BreadcrumbItem::new()
			.child(BreadcrumbPage::new().child("Breadcrumb").render().unwrap())
			.render()
			.unwrap(),
	];
	let list = BreadcrumbList::new().children(items).render().unwrap();
	let page = Breadcrumb::new().child(list).render().unwrap();

	assert_eq!(page.text_content(), "HomeMoreBreadcrumb");
	assert_eq!(page.find_elements(|el| el.tag_name() == "svg").len(), 3);
	assert_eq!(
		page.find_elements(|el| el.get_attr("aria-hidden") == Some("true")).len(),
		3
	);
}

#[rstest]
fn test_node_refs_point_at_rendered_elements() {
	let nav_ref = NodeRef::new();
	let link_ref = NodeRef::new();

	let link = BreadcrumbLink::new("/docs")
		.node_ref(&link_ref)
		.child("Docs")
		.render()
		.unwrap();
	let item = BreadcrumbItem::new().child(link).render().unwrap();
	let list = BreadcrumbList::new().child(item).render().unwrap();
	let page = Breadcrumb::new()
		.node_ref(&nav_ref)
		.child(list)
		.render()
		.unwrap();

	page.render_to_string();
	assert_eq!(nav_ref.get().unwrap().tag_name(), "nav");
	let link_handle = link_ref.get().unwrap();
	assert_eq!(link_handle.tag_name(), "a");
	assert_eq!(link_handle.get_attr("href"), Some("/docs"));
}

#[rstest]
fn test_slot_link_inside_item_has_no_anchor_wrapper() {
	let link = BreadcrumbLink::new("/components")
		.as_child()
		.child(PageElement::new("button").attr("type", "button").child("Components"))
		.render()
		.unwrap();
	let item = BreadcrumbItem::new().child(link).render().unwrap();

	assert!(item.find_elements(|el| el.tag_name() == "a").is_empty());
	let buttons = item.find_elements(|el| el.tag_name() == "button");
	assert_eq!(buttons.len(), 1);
	assert_eq!(buttons[0].get_attr("href"), Some("/components"));
	assert_eq!(buttons[0].get_attr("type"), Some("button"));
}

#[rstest]
fn test_slot_errors_are_detectable() {
	let empty = BreadcrumbLink::new("/x").as_child().render();
	assert_eq!(empty.unwrap_err(), ComponentError::SlotChildCount { found: 0 });

	let many = BreadcrumbLink::new("/x")
		.as_child()
		.child(PageElement::new("span"))
		.child(PageElement::new("span"))
		.render();
	assert_eq!(
		many.unwrap_err().to_string(),
		"Slot expects exactly one child element, found 2"
	);
}

#[rstest]
fn test_render_with_custom_element() {
	let link = BreadcrumbLink::new("/settings")
		.child("Settings")
		.mode(LinkMode::RenderWith(std::rc::Rc::new(|props: LinkProps| {
			PageElement::new("router-link")
				.attr("to", props.href.unwrap_or_default())
				.children(props.children)
				.into_page()
		})))
		.render()
		.unwrap();
	assert_eq!(
		link.render_to_string(),
		"<router-link to=\"/settings\">Settings</router-link>"
	);
}

#[rstest]
fn test_caller_classes_override_defaults() {
	let page = BreadcrumbItem::new()
		.class("gap-3 text-xs")
		.render()
		.unwrap();
	assert_eq!(
		page.as_element().and_then(|el| el.get_attr("class")),
		Some("inline-flex items-center gap-3 text-xs")
	);
	assert_eq!(cn!("px-2", None::<&str>, "px-4"), "px-4");
}
