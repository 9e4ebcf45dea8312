/// Joins `fragment` onto `base` so exactly one `/` separates them.
///
/// This is a string-level join; neither side is validated as a URL.
pub fn join_url(base: &str, fragment: &str) -> String {
    match (base.ends_with('/'), fragment.strip_prefix('/')) {
        (true, Some(rest)) => format!("{}{}", base, rest),
        (true, None) | (false, Some(_)) => format!("{}{}", base, fragment),
        (false, None) => format!("{}/{}", base, fragment),
    }
}
