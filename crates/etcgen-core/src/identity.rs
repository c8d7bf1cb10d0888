//! Effective hostname/domain resolution.
//!
//! The hosts file names the machine either by its locally configured
//! hostname/domain or, when the host is joined to a directory service, by
//! its SMB NetBIOS name and AD domain — never a mix of the two.

use etcgen_store::{DirectoryServicesConfig, NetworkConfig, SmbConfig};

/// The identity the hosts file maps the loopback address to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub hostname: String,
    pub domain: String,
}

impl Identity {
    /// The locally configured identity, verbatim.
    pub fn local(network: &NetworkConfig) -> Self {
        Self {
            hostname: network.hostname_local.clone(),
            domain: network.domain.clone(),
        }
    }

    /// The directory-service identity: lower-cased NetBIOS name and
    /// lower-cased AD domain name.
    pub fn from_directory(directory: &DirectoryServicesConfig, smb: &SmbConfig) -> Self {
        Self {
            hostname: smb.netbiosname.to_lowercase(),
            domain: directory.ad_domainname.to_lowercase(),
        }
    }

    /// Fully-qualified name, `<hostname>.<domain>`.
    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.hostname, self.domain)
    }
}

/// Resolve the effective identity for a render.
///
/// With the directory service enabled, the AD identity wins regardless of
/// the network configuration's own values. Otherwise the network values are
/// used verbatim. Never a mix.
pub fn resolve_identity(
    network: &NetworkConfig,
    directory: &DirectoryServicesConfig,
    smb: &SmbConfig,
) -> Identity {
    if directory.ad_enable {
        Identity::from_directory(directory, smb)
    } else {
        Identity::local(network)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn network(hostname: &str, domain: &str) -> NetworkConfig {
        NetworkConfig {
            hostname_local: hostname.to_owned(),
            domain: domain.to_owned(),
            hosts: Vec::new(),
            service_announcement: Default::default(),
        }
    }

    fn smb(netbiosname: &str) -> SmbConfig {
        SmbConfig {
            netbiosname: netbiosname.to_owned(),
            workgroup: "WORKGROUP".to_owned(),
            bindip: Vec::new(),
        }
    }

    #[test]
    fn local_identity_used_verbatim_when_ad_disabled() {
        let directory = DirectoryServicesConfig {
            ad_enable: false,
            ad_domainname: "CORP.EXAMPLE".to_owned(),
        };
        let identity = resolve_identity(&network("TrueNAS", "Local"), &directory, &smb("FILER"));
        // No lower-casing, no AD leakage.
        assert_eq!(identity.hostname, "TrueNAS");
        assert_eq!(identity.domain, "Local");
    }

    #[test]
    fn ad_identity_overrides_and_lower_cases() {
        let directory = DirectoryServicesConfig {
            ad_enable: true,
            ad_domainname: "CORP.EXAMPLE".to_owned(),
        };
        let identity = resolve_identity(&network("truenas", "local"), &directory, &smb("FILER"));
        assert_eq!(identity.hostname, "filer");
        assert_eq!(identity.domain, "corp.example");
        assert_eq!(identity.fqdn(), "filer.corp.example");
    }
}
