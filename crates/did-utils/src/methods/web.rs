//! Derivation of `did:web` identifiers from service URLs.

use url::Url;

const LOOPBACK_HOSTS: [&str; 2] = ["127.0.0.1", "localhost"];
const DOCKER_HOST: &str = "host.docker.internal";

/// Derives the `did:web` identifier under which a service at `raw_url` publishes its DID document.
///
/// Only the host (and a non-default port) of the URL is used; its path is ignored.
/// Input that does not parse as a URL with a host is used verbatim as the host.
/// With `docker_aware` set, a loopback host is replaced by `host.docker.internal`,
/// keeping the port, so the identifier can be dereferenced from inside a container.
///
/// The `:` separating host and port is percent-encoded, as did:web requires.
///
/// # Example
///
/// ```
/// use did_utils::methods::to_did_web;
///
/// assert_eq!(to_did_web("https://example.org/path", false), "did:web:example.org");
/// assert_eq!(to_did_web("http://127.0.0.1:8080", true), "did:web:host.docker.internal%3A8080");
/// ```
pub fn to_did_web(raw_url: &str, docker_aware: bool) -> String {
    let mut host = url_host(raw_url).unwrap_or_else(|| raw_url.to_string());

    if docker_aware {
        host = docker_host(&host);
    }

    format!("did:web:{}", host.replace(':', "%3A"))
}

// Host of a parsed URL, with the port only when the input spells one out.
// `Url::port` hides the scheme's default port, so `:80` and `:443` are restored from the raw text.
fn url_host(raw_url: &str) -> Option<String> {
    let url = Url::parse(raw_url).ok()?;
    let host = url.host_str()?;

    let port = if explicit_port(raw_url) {
        url.port_or_known_default()
    } else {
        None
    };

    Some(match port {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

fn explicit_port(raw_url: &str) -> bool {
    let rest = raw_url.split_once("://").map_or(raw_url, |(_, rest)| rest);
    let authority = rest.split(&['/', '?', '#'][..]).next().unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host_port)| host_port);

    split_port(host_port).1.is_some()
}

fn split_port(host: &str) -> (&str, Option<&str>) {
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => (name, Some(port)),
        _ => (host, None),
    }
}

fn docker_host(host: &str) -> String {
    let (name, port) = split_port(host);

    if !LOOPBACK_HOSTS.contains(&name) {
        return host.to_string();
    }

    match port {
        Some(port) => format!("{DOCKER_HOST}:{port}"),
        None => DOCKER_HOST.to_string(),
    }
}
