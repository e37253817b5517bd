//! Name rules for the identifiers that end up on `docker` and `kubectl`
//! command lines.

const MAX_DNS_SUBDOMAIN: usize = 253;

/// `[a-z0-9]+([._-][a-z0-9]+)*`, the registry path-component grammar.
pub(crate) fn is_path_component(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    let mut prev_sep = true;
    for c in s.chars() {
        match c {
            'a'..='z' | '0'..='9' => prev_sep = false,
            '.' | '_' | '-' if !prev_sep => prev_sep = true,
            _ => return false,
        }
    }
    !prev_sep
}

/// One or more path components joined by `/`.
pub(crate) fn is_repository_path(s: &str) -> bool {
    s.split('/').all(is_path_component)
}

/// `host[:port][/path]` with a lowercase host.
pub(crate) fn is_registry(s: &str) -> bool {
    let (authority, path) = match s.split_once('/') {
        Some((authority, path)) => (authority, Some(path)),
        None => (s, None),
    };
    let (host, port) = match authority.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    };

    let host_ok = !host.is_empty()
        && host.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        });
    let port_ok = port.is_none_or(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
    let path_ok = path.is_none_or(is_repository_path);

    host_ok && port_ok && path_ok
}

/// RFC 1123 subdomain, the naming rule for Kubernetes deployments.
pub(crate) fn is_dns_subdomain(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_DNS_SUBDOMAIN {
        return false;
    }
    s.split('.').all(|label| {
        let bytes = label.as_bytes();
        !bytes.is_empty()
            && bytes[0].is_ascii_alphanumeric()
            && bytes[bytes.len() - 1].is_ascii_alphanumeric()
            && bytes
                .iter()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
    })
}

/// `os/arch[/variant]`, e.g. `linux/amd64` or `linux/arm/v7`.
pub(crate) fn is_platform(s: &str) -> bool {
    let parts: Vec<&str> = s.split('/').collect();
    (2..=3).contains(&parts.len())
        && parts.iter().all(|p| {
            !p.is_empty()
                && p.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        })
}
