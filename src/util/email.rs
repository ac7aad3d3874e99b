//! Email address helpers used by the school-email predicate.

/// Trims and lower-cases an address or allow-list pattern.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Returns the domain of `address`, or `None` when it is not shaped like an address.
///
/// An address has exactly one `@`, a non-empty local part, no whitespace and a domain
/// with at least one interior dot.
pub fn domain_of(address: &str) -> Option<&str> {
    if address.chars().any(char::is_whitespace) {
        return None;
    }

    let (local, domain) = address.split_once('@')?;
    if local.is_empty() || domain.contains('@') || !is_domain(domain) {
        return None;
    }

    Some(domain)
}

/// Checks that `domain` looks like a dotted host name.
pub fn is_domain(domain: &str) -> bool {
    !domain.is_empty()
        && !domain.chars().any(char::is_whitespace)
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Lists `domain` followed by each of its parent domains.
///
/// `"cs.school.org"` yields `["cs.school.org", "school.org", "org"]`.
pub fn domain_suffixes(domain: &str) -> Vec<String> {
    let mut suffixes = vec![domain.to_string()];
    let mut rest = domain;
    while let Some((_, parent)) = rest.split_once('.') {
        suffixes.push(parent.to_string());
        rest = parent;
    }
    suffixes
}

/// Whether the domain belongs to the `.edu` top-level domain.
pub fn is_edu_domain(domain: &str) -> bool {
    domain.ends_with(".edu")
}
