use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Shell stand-ins for brew, xcode-select, defaults, gpgconf and killall.
///
/// Every invocation is appended to a shared log; installed packages and
/// written preferences live as files under `state/` so they survive
/// between runs of the binary.
pub struct FakeHost {
    pub bin_dir: PathBuf,
    pub state_dir: PathBuf,
    pub prefix: PathBuf,
    pub log_file: PathBuf,
}

impl FakeHost {
    pub fn new(root: &Path) -> Self {
        let bin_dir = root.join("fakebin");
        let state_dir = root.join("state");
        let prefix = root.join("homebrew");
        let log_file = root.join("calls.log");
        let dirs = [
            bin_dir.clone(),
            state_dir.join("installed"),
            state_dir.join("fail"),
            state_dir.join("prefs"),
            prefix.clone(),
        ];
        for dir in dirs {
            fs::create_dir_all(&dir).expect("Failed to create fake host dir");
        }

        let host = Self { bin_dir, state_dir, prefix, log_file };
        host.write_brew();
        host.write_tool(
            "xcode-select",
            r#"case "$1" in
    -p) echo /Library/Developer/CommandLineTools ;;
esac
exit 0"#,
        );
        host.write_defaults();
        host.write_tool("gpgconf", "exit 0");
        host.write_tool(
            "killall",
            &format!(
                r#"if [ -f "{}/fail/killall" ]; then
    echo "No matching processes belonging to you were found" >&2
    exit 1
fi
exit 0"#,
                host.state_dir.display()
            ),
        );
        host
    }

    /// PATH value for the binary under test.
    pub fn path_var(&self) -> String {
        format!("{}:/usr/bin:/bin", self.bin_dir.display())
    }

    pub fn mark_installed(&self, package: &str) {
        fs::write(self.state_dir.join("installed").join(package), "").expect("mark installed");
    }

    pub fn is_installed(&self, package: &str) -> bool {
        self.state_dir.join("installed").join(package).exists()
    }

    pub fn fail_install(&self, package: &str) {
        fs::write(self.state_dir.join("fail").join(package), "").expect("mark failing");
    }

    pub fn fail_finder_restart(&self) {
        fs::write(self.state_dir.join("fail").join("killall"), "").expect("mark failing");
    }

    pub fn set_preference(&self, domain: &str, key: &str, raw: &str) {
        fs::write(self.preference_file(domain, key), format!("{}\n", raw)).expect("write pref");
    }

    pub fn preference(&self, domain: &str, key: &str) -> Option<String> {
        fs::read_to_string(self.preference_file(domain, key)).ok().map(|raw| raw.trim().to_string())
    }

    /// Put a pinentry helper on PATH and return its absolute path.
    pub fn install_pinentry(&self) -> PathBuf {
        self.write_tool("pinentry-mac", "exit 0")
    }

    /// Put a pinentry helper under the brew prefix only, off PATH.
    pub fn install_pinentry_under_prefix(&self) -> PathBuf {
        let bin = self.prefix.join("bin");
        fs::create_dir_all(&bin).expect("create prefix bin");
        let helper = bin.join("pinentry-mac");
        write_executable(&helper, "#!/bin/sh\nexit 0\n");
        helper
    }

    /// Provide fzf's integration installer under the brew prefix.
    pub fn install_fzf_integration(&self) -> PathBuf {
        let dir = self.prefix.join("opt/fzf");
        fs::create_dir_all(&dir).expect("create fzf dir");
        let script = dir.join("install");
        let content =
            format!("#!/bin/sh\necho \"fzf-install $*\" >> \"{}\"\nexit 0\n", self.log_file.display());
        write_executable(&script, &content);
        script
    }

    pub fn get_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    pub fn count(&self, line: &str) -> usize {
        self.get_log().lines().filter(|l| *l == line).count()
    }

    fn preference_file(&self, domain: &str, key: &str) -> PathBuf {
        self.state_dir.join("prefs").join(format!("{}.{}", domain, key))
    }

    fn write_brew(&self) {
        let state = self.state_dir.display();
        self.write_tool(
            "brew",
            &format!(
                r#"case "$1" in
    --prefix)
        echo "{prefix}"
        ;;
    list)
        [ -f "{state}/installed/$3" ] || exit 1
        ;;
    install)
        if [ -f "{state}/fail/$3" ]; then
            echo "Error: $3: download failed" >&2
            exit 1
        fi
        : > "{state}/installed/$3"
        ;;
esac
exit 0"#,
                prefix = self.prefix.display(),
                state = state,
            ),
        );
    }

    fn write_defaults(&self) {
        let prefs = self.state_dir.join("prefs");
        self.write_tool(
            "defaults",
            &format!(
                r#"file="{prefs}/$2.$3"
case "$1" in
    read)
        if [ ! -f "$file" ]; then
            echo "The domain/default pair of ($2, $3) does not exist" >&2
            exit 1
        fi
        while IFS= read -r line; do echo "$line"; done < "$file"
        ;;
    write)
        value="$5"
        if [ "$4" = "-bool" ]; then
            if [ "$value" = "true" ]; then value=1; else value=0; fi
        fi
        echo "$value" > "$file"
        ;;
esac
exit 0"#,
                prefs = prefs.display()
            ),
        );
    }

    fn write_tool(&self, name: &str, body: &str) -> PathBuf {
        let path = self.bin_dir.join(name);
        let script = format!(
            "#!/bin/sh\necho \"{name} $*\" >> \"{log}\"\n{body}\n",
            name = name,
            log = self.log_file.display(),
            body = body
        );
        write_executable(&path, &script);
        path
    }
}

fn write_executable(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to write fake script");
    let mut perms = fs::metadata(path).expect("Failed to get metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}
