// src/volume/spec.rs

use crate::errors::{DockjobError, Result};

/// Suffix that asks for the contents of a directory instead of the directory.
const WILDCARD_SUFFIX: &str = "/*";

/// Parsed `volume:path` or `volume:path/*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeSpec {
    pub volume: String,
    /// Mount point inside the helper container. Always absolute, never `/`,
    /// without a trailing `/` or `.`/`..` components.
    pub mount_path: String,
    /// Set by a trailing `/*`: copy what is *in* `mount_path`.
    pub wildcard: bool,
}

impl VolumeSpec {
    /// Parse the value of parameter `param`.
    ///
    /// Errors name `param`, so the job result tells the user which of the two
    /// specifiers is wrong.
    pub fn parse(param: &'static str, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let Some((volume, path)) = raw.split_once(':') else {
            return Err(DockjobError::malformed(
                param,
                format!("expected 'volume:path', got '{raw}'"),
            ));
        };

        if volume.is_empty() {
            return Err(DockjobError::malformed(param, "volume name is empty"));
        }
        if !is_volume_name(volume) {
            return Err(DockjobError::malformed(
                param,
                format!("'{volume}' is not a volume name (expected [A-Za-z0-9][A-Za-z0-9_.-]*)"),
            ));
        }
        if path.is_empty() {
            return Err(DockjobError::malformed(param, "path is empty"));
        }
        if !path.starts_with('/') {
            return Err(DockjobError::malformed(
                param,
                format!("path '{path}' must be absolute"),
            ));
        }

        // `:` and `,` separate options in the platform's mount syntax.
        if let Some(bad) = path.chars().find(|c| matches!(c, ':' | ',')) {
            return Err(DockjobError::malformed(
                param,
                format!("path '{path}' must not contain '{bad}'"),
            ));
        }

        let (path, wildcard) = match path.strip_suffix(WILDCARD_SUFFIX) {
            Some(stripped) => (stripped, true),
            None => (path, false),
        };

        if path.split('/').any(|part| part == "." || part == "..") {
            return Err(DockjobError::malformed(
                param,
                format!("path '{path}' must not contain '.' or '..' components"),
            ));
        }

        let mount_path = normalize_mount_path(path);
        if mount_path == "/" {
            return Err(DockjobError::malformed(param, "cannot mount a volume at '/'"));
        }

        Ok(Self {
            volume: volume.to_string(),
            mount_path,
            wildcard,
        })
    }

    /// True when one mount point equals or lies inside the other.
    pub fn overlaps(&self, other: &VolumeSpec) -> bool {
        is_within(&self.mount_path, &other.mount_path)
            || is_within(&other.mount_path, &self.mount_path)
    }

    /// What `cp` should copy from: the mount itself, or its contents.
    pub fn copy_from(&self) -> String {
        if self.wildcard {
            format!("{}/.", self.mount_path)
        } else {
            self.mount_path.clone()
        }
    }
}

fn normalize_mount_path(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
    format!("/{}", parts.join("/"))
}

/// Platform rule for named volumes: `[A-Za-z0-9][A-Za-z0-9_.-]*`.
fn is_volume_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        }
        _ => false,
    }
}

/// `inner` is `outer` or a path below it. Both are normalized mount paths.
fn is_within(inner: &str, outer: &str) -> bool {
    inner == outer
        || inner
            .strip_prefix(outer)
            .is_some_and(|rest| rest.starts_with('/'))
}
