use fwscaffold::identifier::normalize;
use proptest::prelude::*;

fn names() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,40}",
        "[a-zA-Z0-9 _.\\-\t]{0,40}",
        "[a-zA-Z0-9 éÉ默认固件_!\\-]{0,24}",
        any::<String>(),
    ]
}

proptest! {
    #[test]
    fn normalize_is_idempotent(input in names()) {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_output_is_key_safe(input in names()) {
        let out = normalize(&input);
        prop_assert!(out.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-'));
        prop_assert!(!out.starts_with('_'));
        prop_assert!(!out.ends_with('_'));
        prop_assert!(!out.contains("__"));
    }

    #[test]
    fn normalize_ascii_output_is_lowercase(input in "[ -~]{0,40}") {
        let out = normalize(&input);
        prop_assert!(out
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'));
    }
}

#[test]
fn normalize_examples() {
    assert_eq!(normalize("FNK0001"), "fnk0001");
    assert_eq!(normalize("Default Firmware"), "default_firmware");
    assert_eq!(normalize("  Smart   Speaker\tPro "), "smart_speaker_pro");
}
