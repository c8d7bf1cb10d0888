//! The hosts-file renderer.
//!
//! Output structure, top to bottom: the loopback identity line, the fixed
//! localhost line, the fixed IPv6 block, the sentinel marker, then the
//! administrator's extra entries verbatim. Downstream tooling keys on the
//! marker to locate the boundary between machine-managed and
//! administrator-managed content, so its text and position are stable across
//! renders.

use std::fmt::Write as _;

use etcgen_store::NetworkConfig;

use crate::identity::Identity;

/// Sentinel separating the machine-managed header from administrator
/// entries. Emitted exactly once per render, immediately before the extra
/// entries.
pub const CUSTOM_HOSTS_MARKER: &str = "# Custom host entries (do not remove this line)";

/// IPv6 loopback/multicast block, identical on every render.
const IPV6_BLOCK: &[&str] = &[
    "::1 localhost ip6-localhost ip6-loopback",
    "fe00::0 ip6-localnet",
    "ff00::0 ip6-mcastprefix",
    "ff02::1 ip6-allnodes",
    "ff02::2 ip6-allrouters",
];

/// Render the hosts file for the given network configuration and resolved
/// identity. Pure; all lines newline-terminated.
pub fn render_hosts(network: &NetworkConfig, identity: &Identity) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "127.0.0.1\t{} {}",
        identity.fqdn(),
        identity.hostname
    );
    out.push_str("127.0.0.1 localhost\n");

    for line in IPV6_BLOCK {
        out.push_str(line);
        out.push('\n');
    }

    out.push_str(CUSTOM_HOSTS_MARKER);
    out.push('\n');

    // Caller-authoritative ordering: verbatim, no sorting, no de-duplication.
    for entry in &network.hosts {
        out.push_str(entry);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn network(hosts: &[&str]) -> NetworkConfig {
        NetworkConfig {
            hostname_local: "truenas".to_owned(),
            domain: "local".to_owned(),
            hosts: hosts.iter().map(|s| (*s).to_owned()).collect(),
            service_announcement: Default::default(),
        }
    }

    fn identity() -> Identity {
        Identity {
            hostname: "truenas".to_owned(),
            domain: "local".to_owned(),
        }
    }

    #[test]
    fn renders_expected_structure() {
        let rendered = render_hosts(&network(&["10.0.0.5 nas-alt"]), &identity());
        let expected = "\
127.0.0.1\ttruenas.local truenas
127.0.0.1 localhost
::1 localhost ip6-localhost ip6-loopback
fe00::0 ip6-localnet
ff00::0 ip6-mcastprefix
ff02::1 ip6-allnodes
ff02::2 ip6-allrouters
# Custom host entries (do not remove this line)
10.0.0.5 nas-alt
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn empty_hosts_list_ends_at_marker() {
        let rendered = render_hosts(&network(&[]), &identity());
        assert!(rendered.ends_with(&format!("{CUSTOM_HOSTS_MARKER}\n")));
    }

    #[test]
    fn marker_appears_exactly_once_before_extra_entries() {
        let rendered = render_hosts(
            &network(&["10.0.0.5 nas-alt", "10.0.0.6 backup"]),
            &identity(),
        );
        assert_eq!(rendered.matches(CUSTOM_HOSTS_MARKER).count(), 1);

        let lines: Vec<&str> = rendered.lines().collect();
        let marker_at = lines
            .iter()
            .position(|l| *l == CUSTOM_HOSTS_MARKER)
            .unwrap_or(usize::MAX);
        assert_eq!(&lines[marker_at + 1..], &["10.0.0.5 nas-alt", "10.0.0.6 backup"]);
    }

    #[test]
    fn extra_entries_keep_caller_order_and_duplicates() {
        let entries = ["10.0.0.9 z-last", "10.0.0.1 a-first", "10.0.0.9 z-last"];
        let rendered = render_hosts(&network(&entries), &identity());
        let tail: Vec<&str> = rendered
            .lines()
            .skip_while(|l| *l != CUSTOM_HOSTS_MARKER)
            .skip(1)
            .collect();
        assert_eq!(tail, entries);
    }

    #[test]
    fn ad_identity_flows_into_loopback_line() {
        let identity = Identity {
            hostname: "filer".to_owned(),
            domain: "corp.example".to_owned(),
        };
        let rendered = render_hosts(&network(&[]), &identity);
        assert!(rendered.starts_with("127.0.0.1\tfiler.corp.example filer\n"));
    }
}
