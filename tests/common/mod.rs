#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static SEQ: AtomicUsize = AtomicUsize::new(0);

pub struct TempProject {
    pub root: PathBuf,
}

impl TempProject {
    pub fn new(prefix: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        let seq = SEQ.fetch_add(1, Ordering::Relaxed);
        let root = std::env::temp_dir().join(format!(
            "{prefix}-project-{}-{ts}-{seq}",
            std::process::id()
        ));
        fs::create_dir_all(&root).expect("create temp project dir");
        Self { root }
    }

    pub fn with_scripts(prefix: &str, scripts: &[(&str, &str)]) -> Self {
        let me = Self::new(prefix);
        let map: serde_json::Map<String, serde_json::Value> = scripts
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(*v)))
            .collect();
        let doc = serde_json::json!({"name": "demo", "version": "1.0.0", "scripts": map});
        me.write_manifest(&serde_json::to_string_pretty(&doc).expect("manifest json"));
        me
    }

    pub fn write_manifest(&self, body: &str) {
        self.write_file("package.json", body);
    }

    pub fn write_file(&self, rel: &str, body: &str) {
        let p = self.root.join(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&p, body).expect("write file");
    }

    /// Spawns the binary with stdout piped and closes the read end at once,
    /// so every write the child makes fails with a broken pipe.
    pub fn run_with_closed_stdout(&self, args: &[&str]) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_fixhelp"))
            .args(args)
            .current_dir(&self.root)
            .env_remove("FIXHELP_MANIFEST")
            .env_remove("FIXHELP_PREFIX")
            .env_remove("FIXHELP_RUNNER")
            .env_remove("FIXHELP_LOG")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn fixhelp command");
        drop(child.stdout.take());
        child.wait_with_output().expect("wait for fixhelp command")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_fixhelp"));
        cmd.args(args)
            .current_dir(&self.root)
            .env_remove("FIXHELP_MANIFEST")
            .env_remove("FIXHELP_PREFIX")
            .env_remove("FIXHELP_RUNNER")
            .env_remove("FIXHELP_LOG");
        for (k, v) in envs {
            cmd.env(k, v);
        }
        cmd.output().expect("run fixhelp command")
    }
}

impl Drop for TempProject {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

pub fn stdout_str(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

pub fn stderr_str(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

/// Lines of the "Available Commands" section, without the header.
pub fn command_lines(doc: &str) -> Vec<String> {
    doc.split("## Available Commands\n\n")
        .nth(1)
        .and_then(|rest| rest.split("\n\n").next())
        .map(|block| block.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
