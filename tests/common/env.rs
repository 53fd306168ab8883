//! Test environment for isolated playdeploy runs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// PKCS#8 RSA key used to sign assertions in tests
pub const TEST_PRIVATE_KEY: &str = include_str!("../fixtures/test-rsa-private.pem");

/// Result of running the playdeploy binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated working directory and HOME for one test
pub struct TestEnv {
    pub root: TempDir,
    pub home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create project dir"),
            home: tempfile::tempdir().expect("create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_playdeploy")),
        }
    }

    /// Path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file under the working directory, creating parents
    pub fn write_file(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::create_dir_all(&path).expect("create dir");
        path
    }

    /// Write a service account key whose token endpoint is `token_uri`
    pub fn write_service_account(&self, relative: &str, token_uri: &str) -> PathBuf {
        let key = serde_json::json!({
            "type": "service_account",
            "project_id": "acme-ci",
            "private_key_id": "test-key",
            "private_key": TEST_PRIVATE_KEY,
            "client_email": "deployer@acme-ci.iam.gserviceaccount.com",
            "token_uri": token_uri,
        });
        self.write_file(relative, key.to_string().as_bytes())
    }

    /// Run playdeploy from the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run playdeploy with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("PLAYDEPLOY_TRACK")
            .env_remove("PLAYDEPLOY_API_BASE_URL")
            .env_remove("PLAYDEPLOY_TOKEN_URI")
            .env_remove("PLAYDEPLOY_COLOR")
            .env_remove("PLAYDEPLOY_GITHUB_ANNOTATIONS")
            .env("NO_PROXY", "127.0.0.1,localhost");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute playdeploy");
        to_result(output)
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
