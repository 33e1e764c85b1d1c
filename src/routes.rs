//! URL table for the posts API: patterns, endpoint names, the integer
//! pk converter and reverse path construction.

pub const POST_LIST: &str = "post_list";
pub const POST_DETAIL: &str = "post_detail";

pub const POST_LIST_PATTERN: &str = "/api/posts/";
pub const POST_DETAIL_PATTERN: &str = "/api/posts/:pk/";

pub struct Route {
	pub pattern: &'static str,
	pub name: &'static str,
}

pub const TABLE: [Route; 2] = [
	Route {
		pattern: POST_LIST_PATTERN,
		name: POST_LIST,
	},
	Route {
		pattern: POST_DETAIL_PATTERN,
		name: POST_DETAIL,
	},
];

// Same rules as a `<int:pk>` segment: one or more ASCII digits, nothing else.
// Anything that fails here falls through to the router's not-found response.
pub fn parse_pk(segment: &str) -> Option<i32> {
	if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	segment.parse().ok()
}

pub struct ResolvedRoute {
	pub name: &'static str,
	pub pk: Option<i32>,
}

pub fn resolve(path: &str) -> Option<ResolvedRoute> {
	if path == POST_LIST_PATTERN {
		return Some(ResolvedRoute {
			name: POST_LIST,
			pk: None,
		});
	}
	let rest = path.strip_prefix(POST_LIST_PATTERN)?;
	let segment = rest.strip_suffix('/')?;
	if segment.contains('/') {
		return None;
	}
	let pk = parse_pk(segment)?;
	Some(ResolvedRoute {
		name: POST_DETAIL,
		pk: Some(pk),
	})
}

pub fn post_list_path() -> &'static str {
	POST_LIST_PATTERN
}

pub fn post_detail_path(pk: i32) -> String {
	format!("/api/posts/{pk}/")
}

pub fn reverse(name: &str, pk: Option<i32>) -> Option<String> {
	match (name, pk) {
		(self::POST_LIST, None) => Some(post_list_path().to_string()),
		(self::POST_DETAIL, Some(pk)) => Some(post_detail_path(pk)),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn integer_pks_resolve_to_post_detail() {
		for pk in [0, 1, 42, 7890, i32::MAX] {
			let resolved = resolve(&format!("/api/posts/{pk}/")).unwrap();
			assert_eq!(resolved.name, POST_DETAIL);
			assert_eq!(resolved.pk, Some(pk));
		}
	}

	#[test]
	fn non_integer_pk_does_not_match() {
		assert!(resolve("/api/posts/abc/").is_none());
		assert!(resolve("/api/posts/42.5/").is_none());
		assert!(resolve("/api/posts/-1/").is_none());
		assert!(resolve("/api/posts/+1/").is_none());
		assert!(resolve("/api/posts//").is_none());
	}

	#[test]
	fn list_path_matches_only_post_list() {
		let resolved = resolve("/api/posts/").unwrap();
		assert_eq!(resolved.name, POST_LIST);
		assert_eq!(resolved.pk, None);
	}

	#[test]
	fn missing_trailing_slash_does_not_match() {
		assert!(resolve("/api/posts").is_none());
		assert!(resolve("/api/posts/42").is_none());
	}

	#[test]
	fn nested_segments_do_not_match() {
		assert!(resolve("/api/posts/42/comments/").is_none());
	}

	#[test]
	fn route_names_are_unique() {
		for (i, a) in TABLE.iter().enumerate() {
			for b in TABLE.iter().skip(i + 1) {
				assert_ne!(a.name, b.name);
				assert_ne!(a.pattern, b.pattern);
			}
		}
	}

	#[test]
	fn reverse_builds_paths_from_names() {
		assert_eq!(reverse(POST_LIST, None).unwrap(), "/api/posts/");
		assert_eq!(reverse(POST_DETAIL, Some(42)).unwrap(), "/api/posts/42/");
		assert!(reverse(POST_DETAIL, None).is_none());
		assert!(reverse("no_such_route", None).is_none());
	}

	#[test]
	fn pk_converter_rejects_non_digits() {
		assert_eq!(parse_pk("42"), Some(42));
		assert_eq!(parse_pk("007"), Some(7));
		assert_eq!(parse_pk(""), None);
		assert_eq!(parse_pk("42.5"), None);
		assert_eq!(parse_pk("abc"), None);
		assert_eq!(parse_pk("4 2"), None);
		// out of range for a serial pk, route falls through to not-found
		assert_eq!(parse_pk("99999999999999999999"), None);
	}
}
