use std::cell::RefCell;
use std::collections::HashMap;

use gdark_common::DarkError;
use tempfile::TempDir;

use super::*;

const LAUNCH: &str = "MAXMEM=2G\nVMARGS=-Djava.awt.headless=false\n";

/// Serves canned bodies and records every requested URL.
#[derive(Default)]
struct MemorySource {
    bodies: HashMap<String, Vec<u8>>,
    requests: RefCell<Vec<String>>,
}

impl MemorySource {
    fn with(mut self, url: impl Into<String>, body: &[u8]) -> Self {
        self.bodies.insert(url.into(), body.to_vec());
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl ArtifactSource for MemorySource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, PlatformError> {
        self.requests.borrow_mut().push(url.to_string());
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| PlatformError::Network(format!("GET {url}: HTTP 404 Not Found")))
    }
}

const JAR: &[u8] = b"PK\x03\x04 not really a jar";

fn install_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("Ghidra").join("patch")).unwrap();
    std::fs::create_dir_all(dir.path().join("support")).unwrap();
    std::fs::write(launch_properties_path(dir.path()), LAUNCH).unwrap();
    dir
}

fn serving_jar(config: &FlatLafConfig) -> MemorySource {
    MemorySource::default()
        .with(config.jar_url(), JAR)
        .with(
            format!("{}.sha256", config.jar_url()),
            format!("{}\n", sha256_hex(JAR)).as_bytes(),
        )
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn install_places_verified_jar_and_vmargs() {
    let dir = install_dir();
    let config = FlatLafConfig::default();

    let report = install(dir.path(), &config, &serving_jar(&config)).unwrap();
    assert!(report.is_empty());

    let jar = jar_path(dir.path(), &config);
    assert!(jar.ends_with("Ghidra/patch/flatlaf-2.5.jar"));
    assert_eq!(std::fs::read(&jar).unwrap(), JAR);
    assert_eq!(
        read(&launch_properties_path(dir.path())),
        format!("{LAUNCH}VMARGS=-Dswing.systemlaf=com.formdev.flatlaf.FlatDarculaLaf\n")
    );
    assert_eq!(read(&backup_path(&launch_properties_path(dir.path()))), LAUNCH);
}

#[test]
fn pinned_digest_skips_sidecar() {
    let dir = install_dir();
    let config = FlatLafConfig {
        sha256: sha256_hex(JAR).to_uppercase(),
        ..Default::default()
    };
    let source = MemorySource::default().with(config.jar_url(), JAR);

    install(dir.path(), &config, &source).unwrap();
    assert_eq!(source.requests(), vec![config.jar_url()]);
}

#[test]
fn digest_mismatch_writes_nothing() {
    let dir = install_dir();
    let config = FlatLafConfig {
        sha256: "0".repeat(64),
        ..Default::default()
    };
    let source = MemorySource::default().with(config.jar_url(), JAR);

    let err = install(dir.path(), &config, &source).unwrap_err();
    assert!(matches!(err, DarkError::Patch(PatchError::Integrity { .. })));
    assert!(!jar_path(dir.path(), &config).exists());
    assert_eq!(read(&launch_properties_path(dir.path())), LAUNCH);
    assert!(!backup_path(&launch_properties_path(dir.path())).exists());
}

#[test]
fn network_failure_is_platform_error() {
    let dir = install_dir();
    let config = FlatLafConfig::default();

    let err = install(dir.path(), &config, &MemorySource::default()).unwrap_err();
    assert!(matches!(err, DarkError::Platform(PlatformError::Network(_))));
    assert!(!jar_path(dir.path(), &config).exists());
}

#[test]
fn malformed_sidecar_is_rejected() {
    let dir = install_dir();
    let config = FlatLafConfig::default();
    let source = MemorySource::default()
        .with(config.jar_url(), JAR)
        .with(format!("{}.sha256", config.jar_url()), b"<html>oops</html>");

    let err = install(dir.path(), &config, &source).unwrap_err();
    assert!(matches!(err, DarkError::Platform(PlatformError::Network(_))));
}

#[test]
fn existing_jar_is_not_downloaded_again() {
    let dir = install_dir();
    let config = FlatLafConfig::default();
    std::fs::write(jar_path(dir.path(), &config), b"already here").unwrap();

    let source = MemorySource::default();
    install(dir.path(), &config, &source).unwrap();
    assert!(source.requests().is_empty());
    assert_eq!(std::fs::read(jar_path(dir.path(), &config)).unwrap(), b"already here");
}

#[test]
fn reinstall_keeps_single_vmargs_line() {
    let dir = install_dir();
    let config = FlatLafConfig::default();
    let source = serving_jar(&config);

    install(dir.path(), &config, &source).unwrap();
    let report = install(dir.path(), &config, &source).unwrap();

    let launch = read(&launch_properties_path(dir.path()));
    assert_eq!(launch.matches("swing.systemlaf").count(), 1);
    assert_eq!(
        report.iter().collect::<Vec<_>>(),
        vec![&Warning::BackupKept(backup_path(&launch_properties_path(dir.path())))]
    );
}

#[test]
fn missing_patch_directory_is_created() {
    let dir = install_dir();
    std::fs::remove_dir(dir.path().join("Ghidra").join("patch")).unwrap();
    let config = FlatLafConfig::default();

    install_jar(dir.path(), &config, &serving_jar(&config)).unwrap();
    assert!(jar_path(dir.path(), &config).exists());
}

#[test]
fn install_then_remove_restores_launch_properties() {
    let dir = install_dir();
    let config = FlatLafConfig::default();

    install(dir.path(), &config, &serving_jar(&config)).unwrap();
    let report = remove(dir.path(), &config).unwrap();

    assert!(report.is_empty());
    assert!(!jar_path(dir.path(), &config).exists());
    assert_eq!(read(&launch_properties_path(dir.path())), LAUNCH);
    assert!(!backup_path(&launch_properties_path(dir.path())).exists());
}

#[test]
fn remove_without_backup_drops_vmargs_line() {
    let dir = install_dir();
    let config = FlatLafConfig::default();
    std::fs::write(
        launch_properties_path(dir.path()),
        format!("{LAUNCH}VMARGS=-Dswing.systemlaf=com.formdev.flatlaf.FlatDarculaLaf\n"),
    )
    .unwrap();

    let report = remove(dir.path(), &config).unwrap();
    assert_eq!(
        report.iter().collect::<Vec<_>>(),
        vec![&Warning::MissingArtifact(jar_path(dir.path(), &config))]
    );
    assert_eq!(read(&launch_properties_path(dir.path())), LAUNCH);
}

#[test]
fn vmargs_line_detection() {
    assert!(is_vmargs_line("VMARGS=-Dswing.systemlaf=com.formdev.flatlaf.FlatDarculaLaf"));
    assert!(is_vmargs_line("VMARGS=-Dswing.systemlaf=com.formdev.flatlaf.FlatLightLaf"));
    assert!(!is_vmargs_line("VMARGS=-Djava.awt.headless=false"));
    assert!(!is_vmargs_line("# flatlaf notes"));
}
