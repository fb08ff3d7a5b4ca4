//! Class-list merging for utility-first stylesheets.
//!
//! Primitives carry a fixed default class list and accept a caller class.
//! [`merge_classes`] (and the [`cn!`](crate::cn) macro) join them so that the
//! caller's utilities win over conflicting defaults:
//!
//! ```
//! use reinhardt_breadcrumb::cn;
//!
//! let class = cn!("text-sm text-muted-foreground", Some("text-lg"), None::<&str>);
//! assert_eq!(class, "text-muted-foreground text-lg");
//! ```

use std::borrow::Cow;

/// A value usable as one argument of [`cn!`](crate::cn).
///
/// `None` and empty strings are skipped.
pub trait ClassFragment {
	/// Returns the class text, if any.
	fn as_fragment(&self) -> Option<&str>;
}

impl ClassFragment for str {
	fn as_fragment(&self) -> Option<&str> {
		Some(self)
	}
}

impl ClassFragment for String {
	fn as_fragment(&self) -> Option<&str> {
		Some(self.as_str())
	}
}

impl ClassFragment for Cow<'_, str> {
	fn as_fragment(&self) -> Option<&str> {
		Some(self.as_ref())
	}
}

impl<T: ClassFragment> ClassFragment for Option<T> {
	fn as_fragment(&self) -> Option<&str> {
		self.as_ref().and_then(|v| v.as_fragment())
	}
}

impl<T: ClassFragment + ?Sized> ClassFragment for &T {
	fn as_fragment(&self) -> Option<&str> {
		(**self).as_fragment()
	}
}

/// Merges class fragments into one class string.
///
/// Accepts anything implementing [`ClassFragment`]: `&str`, `String`,
/// `Option<_>` of either, or references to them.
#[macro_export]
macro_rules! cn {
	($($fragment:expr),* $(,)?) => {
		$crate::class::merge_classes([
			$($crate::class::ClassFragment::as_fragment(&$fragment)),*
		])
	};
}

/// Merges whitespace-separated class fragments.
///
/// Missing and blank fragments are skipped. When a class belongs to the same
/// utility group under the same variants as an earlier class (`px-2` then
/// `px-4`, `text-sm` then `text-lg`), the earlier one is dropped. Repeated
/// classes keep their last position.
pub fn merge_classes<'a>(fragments: impl IntoIterator<Item = Option<&'a str>>) -> String {
	let mut kept: Vec<(&'a str, Option<String>)> = Vec::new();

	for class in fragments.into_iter().flatten().flat_map(str::split_whitespace) {
		let key = conflict_key(class);
		kept.retain(|(existing, existing_key)| {
			*existing != class && (key.is_none() || *existing_key != key)
		});
		kept.push((class, key));
	}

	kept.iter()
		.map(|(class, _)| *class)
		.collect::<Vec<_>>()
		.join(" ")
}

/// Splits `class` into its variant prefix and utility.
///
/// Colons inside arbitrary-variant brackets (`[&>svg]:w-3.5`) are not
/// treated as separators.
fn split_variants(class: &str) -> (&str, &str) {
	let mut depth = 0usize;
	let mut split_at = None;
	for (index, ch) in class.char_indices() {
		match ch {
			'[' => depth += 1,
			']' => depth = depth.saturating_sub(1),
			':' if depth == 0 => split_at = Some(index),
			_ => {}
		}
	}
	match split_at {
		Some(index) => (&class[..index], &class[index + 1..]),
		None => ("", class),
	}
}

fn conflict_key(class: &str) -> Option<String> {
	let (variants, utility) = split_variants(class);
	let utility = utility.trim_start_matches('!').trim_start_matches('-');
	utility_group(utility).map(|group| format!("{}:{}", variants, group))
}

const DISPLAY: &[&str] = &[
	"block",
	"inline-block",
	"inline",
	"flex",
	"inline-flex",
	"grid",
	"inline-grid",
	"table",
	"contents",
	"hidden",
];

const FONT_SIZES: &[&str] = &[
	"xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
	"thin",
	"extralight",
	"light",
	"normal",
	"medium",
	"semibold",
	"bold",
	"extrabold",
	"black",
];

// Longer prefixes first: "gap-x-" must be tried before "gap-".
const PREFIX_GROUPS: &[(&str, &str)] = &[
	("gap-x-", "gap-x"),
	("gap-y-", "gap-y"),
	("gap-", "gap"),
	("min-w-", "min-w"),
	("max-w-", "max-w"),
	("min-h-", "min-h"),
	("max-h-", "max-h"),
	("size-", "size"),
	("w-", "w"),
	("h-", "h"),
	("px-", "px"),
	("py-", "py"),
	("pt-", "pt"),
	("pr-", "pr"),
	("pb-", "pb"),
	("pl-", "pl"),
	("p-", "p"),
	("mx-", "mx"),
	("my-", "my"),
	("mt-", "mt"),
	("mr-", "mr"),
	("mb-", "mb"),
	("ml-", "ml"),
	("m-", "m"),
	("items-", "align-items"),
	("justify-", "justify-content"),
	("bg-", "bg"),
	("leading-", "leading"),
	("tracking-", "tracking"),
	("opacity-", "opacity"),
	("z-", "z"),
];

fn utility_group(utility: &str) -> Option<&'static str> {
	if DISPLAY.contains(&utility) {
		return Some("display");
	}
	match utility {
		"flex-wrap" | "flex-wrap-reverse" | "flex-nowrap" => return Some("flex-wrap"),
		"break-normal" | "break-words" | "break-all" | "break-keep" => return Some("word-break"),
		"sr-only" | "not-sr-only" => return Some("sr"),
		"transition" | "transition-none" => return Some("transition"),
		_ => {}
	}
	if utility.starts_with("transition-") {
		return Some("transition");
	}
	if let Some(rest) = utility.strip_prefix("text-") {
		return text_group(rest);
	}
	if let Some(rest) = utility.strip_prefix("font-")
		&& FONT_WEIGHTS.contains(&rest)
	{
		return Some("font-weight");
	}
	PREFIX_GROUPS
		.iter()
		.find(|(prefix, _)| utility.starts_with(prefix))
		.map(|(_, group)| *group)
}

const PALETTE: &[&str] = &[
	"slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
	"green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
	"pink", "rose",
];

const THEME_COLORS: &[&str] = &[
	"background",
	"foreground",
	"primary",
	"secondary",
	"muted",
	"accent",
	"destructive",
	"card",
	"popover",
	"border",
	"input",
	"ring",
];

/// Groups the `text-*` utilities. Unrecognised ones return `None` and only
/// collapse with exact duplicates.
fn text_group(rest: &str) -> Option<&'static str> {
	if FONT_SIZES.contains(&rest) {
		return Some("font-size");
	}
	if TEXT_ALIGN.contains(&rest) {
		return Some("text-align");
	}
	match rest {
		"ellipsis" | "clip" => return Some("text-overflow"),
		"wrap" | "nowrap" | "balance" | "pretty" => return Some("text-wrap"),
		_ => {}
	}
	if let Some(value) = rest.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
		return arbitrary_text_group(value);
	}
	is_color(rest).then_some("text-color")
}

fn arbitrary_text_group(value: &str) -> Option<&'static str> {
	if value.starts_with("length:") || value.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
		return Some("font-size");
	}
	let color_functions = ["color:", "#", "rgb(", "rgba(", "hsl(", "hsla(", "oklch("];
	color_functions
		.iter()
		.any(|prefix| value.starts_with(prefix))
		.then_some("text-color")
}

fn is_color(value: &str) -> bool {
	// Opacity modifier: `text-red-500/50`.
	let value = value.split('/').next().unwrap_or(value);
	if matches!(value, "inherit" | "current" | "transparent" | "black" | "white") {
		return true;
	}
	if let Some((name, shade)) = value.rsplit_once('-')
		&& PALETTE.contains(&name)
		&& !shade.is_empty()
		&& shade.chars().all(|c| c.is_ascii_digit())
	{
		return true;
	}
	let token = value.strip_suffix("-foreground").unwrap_or(value);
	THEME_COLORS.contains(&token)
}
