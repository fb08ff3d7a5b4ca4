//! Component trait definition.

use crate::error::Result;
use crate::page::Page;

/// Trait for breadcrumb components.
///
/// Rendering is fallible so that contract violations (such as a slot link
/// without exactly one child element) surface as a [`ComponentError`]
/// instead of broken markup.
///
/// [`ComponentError`]: crate::error::ComponentError
///
/// # Example
///
/// ```
/// use reinhardt_breadcrumb::component::Component;
/// use reinhardt_breadcrumb::error::Result;
/// use reinhardt_breadcrumb::page::{IntoPage, Page, PageElement};
///
/// struct Crumb(&'static str);
///
/// impl Component for Crumb {
///     fn render(&self) -> Result<Page> {
///         Ok(PageElement::new("li").child(self.0).into_page())
///     }
///
///     fn name() -> &'static str {
///         "Crumb"
///     }
/// }
///
/// assert_eq!(Crumb("Home").render().unwrap().render_to_string(), "<li>Home</li>");
/// ```
pub trait Component {
	/// Renders the component to a Page.
	fn render(&self) -> Result<Page>;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}
