//! Which cassette serves which port during replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. Ports without a path are left unconfigured
/// and panic if called during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Cassette for the clock port.
    pub clock: Option<PathBuf>,
    /// Cassette for the HTTP transport port.
    pub http: Option<PathBuf>,
    /// Cassette for the confirmation prompt port.
    pub prompt: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
#[derive(Debug)]
pub struct PortReplayers {
    /// Replayer for the clock port.
    pub clock: Option<CassetteReplayer>,
    /// Replayer for the HTTP transport port.
    pub http: Option<CassetteReplayer>,
    /// Replayer for the prompt port.
    pub prompt: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Serves every port from the same cassette file.
    #[must_use]
    pub fn monolithic(path: &Path) -> Self {
        Self {
            clock: Some(path.to_path_buf()),
            http: Some(path.to_path_buf()),
            prompt: Some(path.to_path_buf()),
        }
    }

    /// Load a single cassette file and create a replayer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_port_cassette(path: &Path) -> Result<CassetteReplayer, String> {
        Cassette::load(path).map(|cassette| CassetteReplayer::new(&cassette))
    }

    /// Load all configured cassette files and create replayers.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            clock: self.clock.as_deref().map(Self::load_port_cassette).transpose()?,
            http: self.http.as_deref().map(Self::load_port_cassette).transpose()?,
            prompt: self.prompt.as_deref().map(Self::load_port_cassette).transpose()?,
        })
    }
}
