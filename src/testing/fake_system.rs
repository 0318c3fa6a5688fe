use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, PackageSpec, Preference, PreferenceValue, ProcessCommand};
use crate::ports::{HostPort, PackageService, PreferenceStore};

/// One observed interaction with the fake host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ToolchainProbe,
    ToolchainInstall,
    InstallSelf,
    Prefix,
    IsPresent(String),
    Install(String),
    Update,
    Upgrade,
    ReadPreference(String),
    WritePreference(String),
    RunScript(String),
    Run(String),
}

#[derive(Debug, Default)]
struct Toolchain {
    installed: bool,
    requested: bool,
    /// Probes answered "missing" after the install request before it flips.
    remaining: u32,
}

/// In-memory package service, preference store and host, recording calls in order.
pub struct FakeSystem {
    calls: Mutex<Vec<Call>>,
    toolchain: Mutex<Toolchain>,
    service_available: Mutex<bool>,
    self_install_fails: Mutex<bool>,
    installed: Mutex<BTreeSet<String>>,
    failing_installs: Mutex<BTreeSet<String>>,
    failing_programs: Mutex<BTreeSet<String>>,
    preferences: Mutex<BTreeMap<(String, String), String>>,
    prefix: PathBuf,
}

impl Default for FakeSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeSystem {
    pub fn new() -> Self {
        Self::with_prefix(PathBuf::from("/nonexistent/homebrew"))
    }

    pub fn with_prefix(prefix: PathBuf) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            toolchain: Mutex::new(Toolchain { installed: true, ..Toolchain::default() }),
            service_available: Mutex::new(true),
            self_install_fails: Mutex::new(false),
            installed: Mutex::new(BTreeSet::new()),
            failing_installs: Mutex::new(BTreeSet::new()),
            failing_programs: Mutex::new(BTreeSet::new()),
            preferences: Mutex::new(BTreeMap::new()),
            prefix,
        }
    }

    /// Toolchain absent; after the install request it reports missing `polls` more times.
    pub fn set_toolchain_missing(&self, polls: u32) {
        *self.toolchain.lock().unwrap() =
            Toolchain { installed: false, requested: false, remaining: polls };
    }

    pub fn set_service_available(&self, available: bool) {
        *self.service_available.lock().unwrap() = available;
    }

    pub fn fail_self_install(&self) {
        *self.self_install_fails.lock().unwrap() = true;
    }

    pub fn mark_installed(&self, name: &str) {
        self.installed.lock().unwrap().insert(name.to_string());
    }

    pub fn fail_install(&self, name: &str) {
        self.failing_installs.lock().unwrap().insert(name.to_string());
    }

    pub fn fail_program(&self, program: &str) {
        self.failing_programs.lock().unwrap().insert(program.to_string());
    }

    pub fn set_preference(&self, domain: &str, key: &str, raw: &str) {
        self.preferences
            .lock()
            .unwrap()
            .insert((domain.to_string(), key.to_string()), raw.to_string());
    }

    pub fn preference(&self, domain: &str, key: &str) -> Option<String> {
        self.preferences.lock().unwrap().get(&(domain.to_string(), key.to_string())).cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Names of attempted installs, in order.
    pub fn installs(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Install(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl PackageService for FakeSystem {
    fn is_available(&self) -> bool {
        *self.service_available.lock().unwrap()
    }

    fn locate(&self) -> Result<PathBuf, AppError> {
        if self.is_available() {
            Ok(PathBuf::from("/opt/homebrew/bin/brew"))
        } else {
            Err(AppError::PackageServiceUnavailable)
        }
    }

    fn install_self(&self) -> Result<PathBuf, AppError> {
        self.record(Call::InstallSelf);
        if *self.self_install_fails.lock().unwrap() {
            return Err(AppError::Download {
                url: "https://example.invalid/install.sh".into(),
                details: "connection refused".into(),
            });
        }
        self.set_service_available(true);
        self.locate()
    }

    fn prefix(&self) -> Result<PathBuf, AppError> {
        self.record(Call::Prefix);
        Ok(self.prefix.clone())
    }

    fn is_present(&self, package: &PackageSpec) -> Result<bool, AppError> {
        let name = package.name.to_string();
        self.record(Call::IsPresent(name.clone()));
        Ok(self.installed.lock().unwrap().contains(&name))
    }

    fn install(&self, package: &PackageSpec) -> Result<(), AppError> {
        let name = package.name.to_string();
        self.record(Call::Install(name.clone()));
        if self.failing_installs.lock().unwrap().contains(&name) {
            return Err(AppError::external(format!("brew install {}", name), "exit status: 1"));
        }
        self.installed.lock().unwrap().insert(name);
        Ok(())
    }

    fn update(&self) -> Result<(), AppError> {
        self.record(Call::Update);
        Ok(())
    }

    fn upgrade(&self) -> Result<(), AppError> {
        self.record(Call::Upgrade);
        Ok(())
    }
}

impl PreferenceStore for FakeSystem {
    fn read(&self, preference: &Preference) -> Result<Option<String>, AppError> {
        self.record(Call::ReadPreference(format!("{} {}", preference.domain, preference.key)));
        Ok(self.preference(&preference.domain, &preference.key))
    }

    fn write(&self, preference: &Preference) -> Result<(), AppError> {
        self.record(Call::WritePreference(preference.to_string()));
        // `defaults read` prints booleans as 1/0.
        let raw = match &preference.value {
            PreferenceValue::Bool(true) => "1".to_string(),
            PreferenceValue::Bool(false) => "0".to_string(),
            other => other.to_arg(),
        };
        self.set_preference(&preference.domain, &preference.key, &raw);
        Ok(())
    }
}

impl HostPort for FakeSystem {
    fn toolchain_installed(&self) -> bool {
        self.record(Call::ToolchainProbe);
        let mut toolchain = self.toolchain.lock().unwrap();
        if toolchain.installed {
            return true;
        }
        if toolchain.requested {
            if toolchain.remaining == 0 {
                toolchain.installed = true;
                return true;
            }
            toolchain.remaining -= 1;
        }
        false
    }

    fn request_toolchain_install(&self) -> Result<(), AppError> {
        self.record(Call::ToolchainInstall);
        self.toolchain.lock().unwrap().requested = true;
        Ok(())
    }

    fn run_script(&self, script: &Path, args: &[String]) -> Result<(), AppError> {
        let mut line = script.display().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.record(Call::RunScript(line));
        Ok(())
    }

    fn run(&self, command: &ProcessCommand) -> Result<(), AppError> {
        self.record(Call::Run(command.to_string()));
        if self.failing_programs.lock().unwrap().contains(&command.program) {
            return Err(AppError::external(command.to_string(), "No matching processes"));
        }
        Ok(())
    }
}
