use anyhow::{bail, Result};

use crate::config::Config;
use crate::constants::jdk;


/// Environment variable overriding the detected platform label
pub const ARCH_ENV: &str = "LAUNCHTEST_ARCH";

/// CPU architectures the harness can provision a JDK for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    Amd64,
    Aarch64,
}

impl Architecture {
    /// Parse a docker-style platform label. Only "amd64" and "aarch64" are
    /// known; anything else (including the empty string) is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "amd64" => Some(Self::Amd64),
            "aarch64" => Some(Self::Aarch64),
            _ => None,
        }
    }

    /// The docker-style label for this architecture
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Amd64 => "amd64",
            Self::Aarch64 => "aarch64",
        }
    }

    /// The platform label for this process: the `LAUNCHTEST_ARCH`
    /// environment variable when set, otherwise the compile-time
    /// architecture normalized to docker style.
    pub fn current_label() -> String {
        if let Ok(label) = std::env::var(ARCH_ENV) {
            return label;
        }
        normalize_label(std::env::consts::ARCH)
    }

    /// Returns the current architecture, or `None` when the platform label
    /// is unknown. Callers must fail fast on `None` rather than proceeding
    /// with an undefined download URL.
    pub fn current() -> Option<Self> {
        Self::from_label(&Self::current_label())
    }

    /// Resolve the JDK download URL to inject as a build argument.
    ///
    /// A non-empty `java_download_urls` map in the config replaces the
    /// built-in table, so a known architecture can still end up without a
    /// URL; that is reported distinctly from an unknown architecture.
    pub fn java_download_url(&self, config: &Config) -> Result<String> {
        if !config.java_download_urls.is_empty() {
            match config.java_download_urls.get(self.as_label()) {
                Some(url) => return Ok(url.clone()),
                None => bail!(
                    "No JDK download URL configured for architecture {}",
                    self.as_label()
                ),
            }
        }
        Ok(match self {
            Self::Amd64 => jdk::AMD64_URL,
            Self::Aarch64 => jdk::AARCH64_URL,
        }
        .to_string())
    }
}

/// Map Rust's architecture names onto docker-style labels
fn normalize_label(arch: &str) -> String {
    match arch {
        "x86_64" => "amd64".to_string(),
        other => other.to_string(),
    }
}
