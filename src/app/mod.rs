use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::{APP_DESC, APP_NAME, APP_VERSION, AppConfig, app_config, init_app_config};
use crate::error::{HelpError, HelpResult};
use crate::help_data::default_tables;
use crate::help_render::{list_commands, render_help};
use crate::logging::init_tracing;
use crate::manifest::Manifest;

const USAGE_LINES: &[(&str, &str)] = &[
    (
        "render [--manifest PATH] [--out PATH]",
        "Render the fix-command help document (default command)",
    ),
    (
        "list [--manifest PATH] [--json]",
        "List selected fix commands with their descriptions",
    ),
    ("version", "Print tool version"),
    ("help", "Print this help"),
];

fn render_cli_help() -> String {
    let mut out = String::new();
    out.push_str(&format!("{APP_NAME} - {APP_DESC}\n\n"));
    out.push_str("Usage:\n");
    out.push_str(&format!("  {APP_NAME} <command> [args]\n\n"));
    out.push_str("Commands:\n");
    let width = USAGE_LINES.iter().map(|(u, _)| u.len()).max().unwrap_or(24) + 2;
    for (usage, desc) in USAGE_LINES {
        out.push_str(&format!("  {usage:<width$}{desc}\n"));
    }
    out.push_str("\nEnvironment:\n");
    out.push_str("  FIXHELP_MANIFEST  manifest path (default package.json)\n");
    out.push_str("  FIXHELP_PREFIX    command prefix to list (default fix:)\n");
    out.push_str("  FIXHELP_RUNNER    runner shown in examples (default npm run)\n");
    out.push_str("  FIXHELP_LOG       log filter written to stderr (default warn)\n");
    out
}

fn render_version() -> String {
    format!("name: {APP_NAME}\nversion: {APP_VERSION}\n")
}

/// A reader that goes away early (`fixhelp | head`) is not an error.
fn write_stdout(w: &mut impl Write, text: &str) -> HelpResult<()> {
    match w.write_all(text.as_bytes()).and_then(|()| w.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed before output was complete");
            Ok(())
        }
        Err(e) => Err(HelpError::io("write stdout", e)),
    }
}

fn emit(text: &str) -> i32 {
    match write_stdout(&mut io::stdout().lock(), text) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{APP_NAME}: {e}");
            1
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct CmdArgs {
    manifest: Option<PathBuf>,
    out: Option<PathBuf>,
    json: bool,
}

fn flag_value<'a>(
    flag: &str,
    arg: &'a str,
    rest: &mut impl Iterator<Item = &'a String>,
) -> Result<Option<&'a str>, String> {
    if arg == flag {
        return rest
            .next()
            .map(|v| Some(v.as_str()))
            .ok_or_else(|| format!("{flag} requires a value"));
    }
    Ok(arg
        .strip_prefix(flag)
        .and_then(|tail| tail.strip_prefix('=')))
}

fn parse_cmd_args(args: &[String], allow_out: bool, allow_json: bool) -> Result<CmdArgs, String> {
    let mut parsed = CmdArgs::default();
    let mut it = args.iter();
    while let Some(a) = it.next() {
        if let Some(v) = flag_value("--manifest", a, &mut it)? {
            parsed.manifest = Some(PathBuf::from(v));
            continue;
        }
        if allow_out && let Some(v) = flag_value("--out", a, &mut it)? {
            parsed.out = Some(PathBuf::from(v));
            continue;
        }
        if allow_json && a == "--json" {
            parsed.json = true;
            continue;
        }
        return Err(format!("invalid argument: {a}"));
    }
    Ok(parsed)
}

fn manifest_path<'a>(args: &'a CmdArgs, cfg: &'a AppConfig) -> &'a Path {
    args.manifest.as_deref().unwrap_or(&cfg.manifest_path)
}

fn usage_error(cmd: &str, msg: &str) -> i32 {
    eprintln!("{APP_NAME} {cmd}: {msg}");
    eprintln!("Run '{APP_NAME} help' for usage.");
    2
}

fn write_output(path: &Path, text: &str) -> HelpResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|e| HelpError::io(format!("cannot create {}", parent.display()), e))?;
    }
    fs::write(path, text)
        .map_err(|e| HelpError::io(format!("cannot write {}", path.display()), e))
}

fn render_to_string(args: &CmdArgs, cfg: &AppConfig) -> HelpResult<String> {
    let manifest = Manifest::load(manifest_path(args, cfg))?;
    Ok(render_help(
        &manifest,
        &default_tables(),
        &cfg.render_options(),
    ))
}

fn cmd_render(args: &[String]) -> i32 {
    let parsed = match parse_cmd_args(args, true, false) {
        Ok(v) => v,
        Err(e) => return usage_error("render", &e),
    };
    let cfg = app_config();
    let doc = match render_to_string(&parsed, cfg) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{APP_NAME}: {e}");
            return 1;
        }
    };
    match parsed.out.as_deref() {
        Some(out) => match write_output(out, &doc) {
            Ok(()) => {
                tracing::info!(out = %out.display(), bytes = doc.len(), "wrote help document");
                0
            }
            Err(e) => {
                eprintln!("{APP_NAME}: {e}");
                1
            }
        },
        None => emit(&doc),
    }
}

fn cmd_list(args: &[String]) -> i32 {
    let parsed = match parse_cmd_args(args, false, true) {
        Ok(v) => v,
        Err(e) => return usage_error("list", &e),
    };
    let cfg = app_config();
    let manifest = match Manifest::load(manifest_path(&parsed, cfg)) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{APP_NAME}: {e}");
            return 1;
        }
    };
    let listed = list_commands(&manifest, &default_tables(), &cfg.render_options());
    if parsed.json {
        return match serde_json::to_string_pretty(&listed) {
            Ok(s) => emit(&format!("{s}\n")),
            Err(e) => {
                eprintln!("{APP_NAME}: {}", HelpError::json("serialize command list", e));
                1
            }
        };
    }
    let width = listed.iter().map(|c| c.name.len()).max().unwrap_or(0) + 2;
    let mut out = String::new();
    for c in &listed {
        out.push_str(&format!("{:<width$}{}\n", c.name, c.description));
    }
    emit(&out)
}

fn dispatch(args: &[String]) -> i32 {
    let Some(cmd) = args.get(1).map(String::as_str) else {
        return cmd_render(&[]);
    };
    let rest = args.get(2..).unwrap_or(&[]);
    match cmd {
        "render" => cmd_render(rest),
        "list" => cmd_list(rest),
        "version" | "--version" | "-V" => emit(&render_version()),
        "help" | "--help" | "-h" => emit(&render_cli_help()),
        flag if flag.starts_with("--") => cmd_render(&args[1..]),
        other => {
            eprintln!("{APP_NAME}: unknown command '{other}'");
            eprintln!("Run '{APP_NAME} help' for usage.");
            2
        }
    }
}

pub fn run() -> i32 {
    init_app_config();
    if let Err(e) = init_tracing(&app_config().log_filter) {
        eprintln!("{APP_NAME}: {e}");
    }
    let args: Vec<String> = env::args().collect();
    dispatch(&args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_separate_and_inline_flag_values() {
        let parsed = parse_cmd_args(
            &strings(&["--manifest", "a/package.json", "--out=docs/FIX.md"]),
            true,
            false,
        )
        .expect("parse");
        assert_eq!(
            parsed,
            CmdArgs {
                manifest: Some(PathBuf::from("a/package.json")),
                out: Some(PathBuf::from("docs/FIX.md")),
                json: false,
            }
        );
    }

    #[test]
    fn rejects_flags_not_accepted_by_the_command() {
        assert!(parse_cmd_args(&strings(&["--json"]), true, false).is_err());
        assert!(parse_cmd_args(&strings(&["--out", "x.md"]), false, true).is_err());
        assert!(parse_cmd_args(&strings(&["stray"]), true, true).is_err());
    }

    #[test]
    fn missing_flag_value_is_an_error() {
        let err = parse_cmd_args(&strings(&["--manifest"]), true, false).expect_err("no value");
        assert_eq!(err, "--manifest requires a value");
    }

    #[test]
    fn unknown_command_exits_with_usage_status() {
        assert_eq!(dispatch(&strings(&["fixhelp", "frobnicate"])), 2);
    }

    #[test]
    fn cli_manifest_overrides_config() {
        let cfg = AppConfig::default();
        let args = CmdArgs {
            manifest: Some(PathBuf::from("other.json")),
            ..CmdArgs::default()
        };
        assert_eq!(manifest_path(&args, &cfg), Path::new("other.json"));
        assert_eq!(manifest_path(&CmdArgs::default(), &cfg), Path::new("package.json"));
    }

    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_stdout_is_a_clean_exit() {
        let mut w = FailingWriter(io::ErrorKind::BrokenPipe);
        assert!(write_stdout(&mut w, "# doc\n").is_ok());
    }

    #[test]
    fn other_stdout_failures_are_reported() {
        let mut w = FailingWriter(io::ErrorKind::PermissionDenied);
        let err = write_stdout(&mut w, "# doc\n").expect_err("write failure");
        assert!(matches!(err, HelpError::Io { .. }));
        assert!(err.to_string().starts_with("write stdout: "));
    }

    #[test]
    fn write_stdout_passes_text_through() {
        let mut buf = Vec::new();
        write_stdout(&mut buf, &render_version()).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.starts_with("name: fixhelp\nversion: "));
        assert!(render_cli_help().contains("list [--manifest PATH] [--json]"));
    }

    #[test]
    fn write_output_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("docs").join("FIXES.md");
        write_output(&out, "# doc\n").expect("write");
        assert_eq!(fs::read_to_string(&out).expect("read"), "# doc\n");
    }
}
