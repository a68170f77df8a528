//! Tests for file-level operations

use std::fs;

use cfgedit_core::{ConfigFile, DEFAULT_HEADER, DecodeMode, Error};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn config_in(temp: &TempDir, content: Option<&str>) -> ConfigFile {
    let path = temp.path().join("app.cfg");
    if let Some(content) = content {
        fs::write(&path, content).unwrap();
    }
    ConfigFile::new(path)
}

#[test]
fn test_create_writes_default_header() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, None);

    config.create().unwrap();

    assert_eq!(fs::read_to_string(config.path()).unwrap(), DEFAULT_HEADER);
    assert!(config.list_names().unwrap().is_empty());
}

#[test]
fn test_create_refuses_existing_file() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, Some("A=\"MQ==\"\n"));

    let err = config.create().unwrap_err();

    assert!(matches!(err, Error::AlreadyExists { .. }));
    assert_eq!(fs::read_to_string(config.path()).unwrap(), "A=\"MQ==\"\n");
}

#[test]
fn test_set_then_get() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, None);
    config.create().unwrap();

    config.set_value("DB_PASS", "s3cr3t/+=").unwrap();

    assert_eq!(config.get_value("DB_PASS").unwrap(), "s3cr3t/+=");
    let content = fs::read_to_string(config.path()).unwrap();
    assert!(content.starts_with(DEFAULT_HEADER));
    assert!(!content.contains("s3cr3t"));
}

#[test]
fn test_set_on_missing_file_creates_it_without_header() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, None);

    config.set_value("A", "1").unwrap();

    assert_eq!(fs::read_to_string(config.path()).unwrap(), "\nA=\"MQ==\"\n");
}

#[test]
fn test_set_preserves_comments_on_disk() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, Some("# about Y\nY=\"NQ==\"\n"));

    config.set_value("Y", "7").unwrap();

    assert_eq!(
        fs::read_to_string(config.path()).unwrap(),
        "\n# about Y\nY=\"Nw==\"\n"
    );
}

#[test]
fn test_invalid_name_performs_no_write() {
    let temp = TempDir::new().unwrap();
    let original = "# untouched\nA=\"MQ==\"\n\n\n";
    let config = config_in(&temp, Some(original));

    let err = config.set_value("lowercase", "x").unwrap_err();

    assert!(matches!(err, Error::InvalidName { .. }));
    assert_eq!(fs::read_to_string(config.path()).unwrap(), original);
}

#[test]
fn test_remove_variable() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, Some("# about Y\nY=\"NQ==\"\nX=\"MQ==\"\n"));

    config.remove_variable("Y").unwrap();

    assert_eq!(fs::read_to_string(config.path()).unwrap(), "\nX=\"MQ==\"\n");
}

#[test]
fn test_remove_missing_variable_leaves_file_alone() {
    let temp = TempDir::new().unwrap();
    let original = "X=\"MQ==\"\n\n";
    let config = config_in(&temp, Some(original));

    let err = config.remove_variable("NOPE").unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(fs::read_to_string(config.path()).unwrap(), original);
}

#[test]
fn test_get_values_in_file_order() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, Some("Z=\"Mg==\"\nZ=\"MQ==\"\nZ=\"Mw==\"\n"));

    assert_eq!(config.get_values("Z").unwrap(), vec!["2", "1", "3"]);
    assert_eq!(config.get_raw_values("Z").unwrap(), vec!["Mg==", "MQ==", "Mw=="]);
}

#[test]
fn test_get_value_returns_earliest_duplicate() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, Some("Z=\"Mg==\"\nA=\"MQ==\"\nZ=\"MQ==\"\n"));

    for _ in 0..3 {
        assert_eq!(config.get_value("Z").unwrap(), "2");
    }
}

#[test]
fn test_missing_variable_is_not_found() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, Some("A=\"MQ==\"\n"));

    assert!(matches!(config.get_values("NOPE"), Err(Error::NotFound { .. })));
    assert!(matches!(config.get_value("NOPE"), Err(Error::NotFound { .. })));
}

#[test]
fn test_queries_on_missing_file_see_empty_document() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, None);

    assert!(config.list_names().unwrap().is_empty());
    assert!(matches!(config.get_values("A"), Err(Error::NotFound { .. })));
    assert!(matches!(config.remove_variable("A"), Err(Error::NotFound { .. })));
    assert!(!config.path().exists());
}

#[test]
fn test_list_names_sorted() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, Some("C=\"\"\nA=\"\"\nB=\"\"\nA=\"\"\n"));

    let names: Vec<String> = config.list_names().unwrap().into_iter().collect();

    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_lenient_decode_passes_raw_value() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, Some("PLAIN=\"not base64!\"\n"));

    assert_eq!(config.get_value("PLAIN").unwrap(), "not base64!");
}

#[test]
fn test_strict_decode_fails() {
    let temp = TempDir::new().unwrap();
    let config =
        config_in(&temp, Some("PLAIN=\"not base64!\"\n")).with_decode_mode(DecodeMode::Strict);

    assert!(matches!(
        config.get_values("PLAIN"),
        Err(Error::MalformedValue { .. })
    ));
}

#[test]
fn test_encode_in_place() {
    let temp = TempDir::new().unwrap();
    let config = config_in(
        &temp,
        Some("##### Header #####\n##\n# user\nUSER=\"admin\"\n"),
    );

    assert_eq!(config.encode_into(None).unwrap(), 1);

    assert_eq!(
        fs::read_to_string(config.path()).unwrap(),
        "##### Header #####\n##\n\n# user\nUSER=\"YWRtaW4=\"\n"
    );
    assert_eq!(config.get_value("USER").unwrap(), "admin");
}

#[test]
fn test_encode_to_other_file() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, Some("USER=\"admin\"\n"));
    let out = temp.path().join("encoded.cfg");

    config.encode_into(Some(&out)).unwrap();

    assert_eq!(fs::read_to_string(config.path()).unwrap(), "USER=\"admin\"\n");
    assert_eq!(fs::read_to_string(&out).unwrap(), "\nUSER=\"YWRtaW4=\"\n");
}

#[test]
fn test_encode_missing_input_fails() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, None);

    let err = config.encode_into(None).unwrap_err();

    assert!(matches!(err, Error::FileNotFound { .. }));
    assert!(!config.path().exists());
}

#[test]
fn test_write_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, None);
    config.create().unwrap();
    config.set_value("A", "1").unwrap();

    let entries: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();

    assert_eq!(entries, vec![std::ffi::OsString::from("app.cfg")]);
}

#[cfg(unix)]
#[test]
fn test_write_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let config = config_in(&temp, Some("A=\"MQ==\"\n"));
    fs::set_permissions(config.path(), fs::Permissions::from_mode(0o600)).unwrap();

    config.set_value("B", "2").unwrap();

    let mode = fs::metadata(config.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[cfg(unix)]
#[test]
fn test_write_follows_symlink() {
    let temp = TempDir::new().unwrap();
    let real = temp.path().join("real.cfg");
    let link = temp.path().join("link.cfg");
    fs::write(&real, "A=\"MQ==\"\n").unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    ConfigFile::new(&link).set_value("B", "2").unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(
        fs::read_to_string(&real).unwrap(),
        "\nA=\"MQ==\"\nB=\"Mg==\"\n"
    );
}

#[test]
fn test_non_utf8_comment_is_readable_and_editable() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("app.cfg");
    fs::write(&path, b"# caf\xe9 password\nA=\"MQ==\"\n").unwrap();
    let config = ConfigFile::new(&path);

    assert_eq!(config.get_value("A").unwrap(), "1");
    assert!(config.list_names().unwrap().contains("A"));

    config.set_value("B", "2").unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "\n# caf\u{FFFD} password\nA=\"MQ==\"\nB=\"Mg==\"\n"
    );
}
