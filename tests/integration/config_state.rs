// Integration tests for config loading
//
// These go through real files in a temp directory; env var overrides are
// covered by unit tests against the pure resolver.

use amfproxy::config::{Config, LauncherConfig};
use amfproxy::engine::rewrite;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::helpers::*;

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[launcher]
ffmpeg_path = "/opt/ffmpeg/bin/ffmpeg"
log_dir = "/var/log/amfproxy"
write_run_log = false

[translate]
rtbufsize = "1500M"
target_encoder = "h264_amf"
default_pix_fmt = "nv12"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.launcher,
        LauncherConfig {
            ffmpeg_path: PathBuf::from("/opt/ffmpeg/bin/ffmpeg"),
            log_dir: Some(PathBuf::from("/var/log/amfproxy")),
            write_run_log: false,
        }
    );

    let rw = rewrite(&argv("-rtbufsize 64M -c:v libx264 out.mp4"), &config.translate);
    assert_eq!(
        rw.args,
        argv("-rtbufsize 1500M -c:v h264_amf -pix_fmt nv12 out.mp4")
    );
}

#[test]
fn test_malformed_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[launcher\nffmpeg_path = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(
        format!("{:#}", err).contains("Failed to parse config file"),
        "unexpected error: {:#}",
        err
    );
}

#[test]
fn test_saved_defaults_reload_identically() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, toml::to_string_pretty(&Config::default()).unwrap()).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}
