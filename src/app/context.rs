use std::time::Duration;

use crate::domain::{Environment, Manifest};
use crate::ports::{HostPort, PackageService, PreferenceStore};

/// Dependencies every provisioning step reads.
pub struct ProvisionContext<P: PackageService, S: PreferenceStore, H: HostPort> {
    env: Environment,
    manifest: Manifest,
    packages: P,
    preferences: S,
    host: H,
    poll_interval: Duration,
}

impl<P: PackageService, S: PreferenceStore, H: HostPort> ProvisionContext<P, S, H> {
    /// Create a new provisioning context.
    pub fn new(env: Environment, manifest: Manifest, packages: P, preferences: S, host: H) -> Self {
        let poll_interval = manifest.toolchain.poll_interval();
        Self { env, manifest, packages, preferences, host, poll_interval }
    }

    /// Override the toolchain polling interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn packages(&self) -> &P {
        &self.packages
    }

    pub fn preferences(&self) -> &S {
        &self.preferences
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}
