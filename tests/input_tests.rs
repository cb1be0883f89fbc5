use crxmd::input::{InputType, detect_input};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_detect_extension_id() {
    let input = "nkbihfbeogaeaoehlefnkodbefgpgknn";
    assert_eq!(
        detect_input(input).unwrap(),
        InputType::ExtensionId(input.to_string())
    );
}

#[test]
fn test_detect_web_store_url() {
    let input = "https://chromewebstore.google.com/detail/metamask/nkbihfbeogaeaoehlefnkodbefgpgknn";
    assert_eq!(
        detect_input(input).unwrap(),
        InputType::ExtensionId("nkbihfbeogaeaoehlefnkodbefgpgknn".to_string())
    );
}

#[test]
fn test_detect_local_crx_and_zip() {
    let dir = TempDir::new().unwrap();
    for name in ["extension.crx", "bundle.ZIP"] {
        let path = dir.path().join(name);
        fs::write(&path, b"PK").unwrap();
        assert_eq!(
            detect_input(path.to_str().unwrap()).unwrap(),
            InputType::LocalFile(path.clone())
        );
    }
}

#[test]
fn test_missing_local_file() {
    let err = detect_input("/definitely/not/here/extension.crx").unwrap_err();
    assert!(err.to_string().contains("file not found"));
}

#[test]
fn test_unpacked_directory_is_rejected() {
    let dir = TempDir::new().unwrap();
    let err = detect_input(dir.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("not supported"));
}

#[test]
fn test_unrecognized_input() {
    let err = detect_input("ublock-origin").unwrap_err();
    assert!(err.to_string().contains("unrecognized input"));

    // 31 characters
    assert!(detect_input("nkbihfbeogaeaoehlefnkodbefgpgkn").is_err());
    // digits are not part of an extension ID
    assert!(detect_input("nkbihfbeogaeaoehlefnkodbefgpgkn1").is_err());
}
