//! The render facade.
//!
//! Bundles a [`ConfigSource`] with the fetch/resolve/render/write sequence
//! for each artifact. Every operation is a fresh single pass over the
//! configuration; nothing is cached between calls.

use std::path::Path;

use tracing::{debug, info};

use etcgen_store::ConfigSource;

use crate::error::CoreError;
use crate::hosts::render_hosts;
use crate::identity::Identity;
use crate::ownership::ensure_owned_log;
use crate::wsdd::{ServiceDescriptor, build_descriptor};
use crate::write::write_atomic;

/// Renders host-level artifacts from an injected configuration source.
#[derive(Debug)]
pub struct EtcRenderer<S> {
    source: S,
}

impl<S: ConfigSource> EtcRenderer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Render the hosts file to a string.
    ///
    /// Fetches the network and directory-service records (and the SMB record
    /// when the AD identity applies), resolves the effective identity, and
    /// renders. Any retrieval failure aborts with no output.
    pub fn hosts_file(&self) -> Result<String, CoreError> {
        let network = self.source.network_config()?;
        let directory = self.source.directory_services_config()?;

        // SMB data is only consulted when the AD identity overrides.
        let identity = if directory.ad_enable {
            let smb = self.source.smb_config()?;
            Identity::from_directory(&directory, &smb)
        } else {
            Identity::local(&network)
        };
        debug!(fqdn = %identity.fqdn(), "resolved host identity");
        Ok(render_hosts(&network, &identity))
    }

    /// Build the WS-Discovery service descriptor.
    pub fn wsdd_descriptor(&self) -> Result<ServiceDescriptor, CoreError> {
        build_descriptor(&self.source)
    }

    /// Render the hosts file and write it to `path`.
    pub fn write_hosts(&self, path: &Path) -> Result<(), CoreError> {
        let rendered = self.hosts_file()?;
        write_atomic(path, &rendered)?;
        info!(path = %path.display(), "hosts file rendered");
        Ok(())
    }

    /// Build the service descriptor, write it to `path`, and hand the
    /// daemon's log file at `log_path` to `uid`:`gid`.
    ///
    /// The ownership fix-up runs after a successful descriptor build so a
    /// retrieval failure leaves the filesystem untouched.
    pub fn write_wsdd(
        &self,
        path: &Path,
        log_path: &Path,
        uid: u32,
        gid: u32,
    ) -> Result<(), CoreError> {
        let descriptor = self.wsdd_descriptor()?;
        write_atomic(path, &descriptor.to_json()?)?;
        ensure_owned_log(log_path, uid, gid)?;
        info!(path = %path.display(), enabled = descriptor.enabled, "wsdd descriptor rendered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::os::unix::fs::MetadataExt;

    use pretty_assertions::assert_eq;

    use etcgen_store::{Snapshot, SnapshotSource};

    use super::*;

    fn renderer(doc: serde_json::Value) -> EtcRenderer<SnapshotSource> {
        let snapshot: Snapshot = serde_json::from_value(doc).unwrap();
        EtcRenderer::new(SnapshotSource::new(snapshot))
    }

    fn full_snapshot() -> serde_json::Value {
        serde_json::json!({
            "network": {
                "hostname_local": "truenas",
                "domain": "local",
                "hosts": ["10.0.0.5 nas-alt"],
                "service_announcement": {"wsd": true}
            },
            "smb": {
                "netbiosname": "FILER",
                "workgroup": "WORKGROUP",
                "bindip": ["10.1.1.1"]
            },
            "directoryservices": {"ad_enable": false, "ad_domainname": ""},
            "bind_address_choices": ["192.168.0.10"],
            "parameters": {"GLOBAL": {"realm": "corp.example"}}
        })
    }

    #[test]
    fn hosts_file_uses_local_identity_when_ad_disabled() {
        let rendered = renderer(full_snapshot()).hosts_file().unwrap();
        assert!(rendered.starts_with("127.0.0.1\ttruenas.local truenas\n"));
        assert!(rendered.ends_with("10.0.0.5 nas-alt\n"));
    }

    #[test]
    fn hosts_file_uses_ad_identity_when_enabled() {
        let mut doc = full_snapshot();
        doc["directoryservices"] =
            serde_json::json!({"ad_enable": true, "ad_domainname": "CORP.EXAMPLE"});
        let rendered = renderer(doc).hosts_file().unwrap();
        assert!(rendered.starts_with("127.0.0.1\tfiler.corp.example filer\n"));
    }

    #[test]
    fn hosts_render_does_not_need_smb_when_ad_disabled() {
        let mut doc = full_snapshot();
        doc.as_object_mut().unwrap().remove("smb");
        let rendered = renderer(doc).hosts_file().unwrap();
        assert!(rendered.starts_with("127.0.0.1\ttruenas.local truenas\n"));
    }

    #[test]
    fn missing_record_aborts_without_output() {
        let renderer = renderer(serde_json::json!({}));
        assert!(renderer.hosts_file().is_err());
        assert!(renderer.wsdd_descriptor().is_err());
    }

    #[test]
    fn write_hosts_places_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts");

        renderer(full_snapshot()).write_hosts(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("10.0.0.5 nas-alt"));
    }

    #[test]
    fn write_wsdd_places_descriptor_and_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wsdd.json");
        let log = dir.path().join("wsdd.log");

        let probe = dir.path().join("probe");
        std::fs::write(&probe, b"").unwrap();
        let meta = std::fs::metadata(&probe).unwrap();

        renderer(full_snapshot())
            .write_wsdd(&path, &log, meta.uid(), meta.gid())
            .unwrap();

        let descriptor: ServiceDescriptor =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(descriptor.netbios_name, "FILER");
        assert_eq!(descriptor.interfaces, vec!["10.1.1.1"]);
        assert!(descriptor.enabled);
        assert!(log.exists());
    }

    #[test]
    fn write_wsdd_retrieval_failure_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wsdd.json");
        let log = dir.path().join("wsdd.log");

        let result = renderer(serde_json::json!({})).write_wsdd(&path, &log, 0, 0);
        assert!(result.is_err());
        assert!(!path.exists());
        assert!(!log.exists());
    }
}
