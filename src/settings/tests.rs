use super::*;

#[test]
fn test_reads_peak_detection_table() {
    let toml = r#"
        [Settings]
        ignored = true

        [PeakDetectionSettings]
        min_snr = 3
        eic_smoothing = "gaussian"

        [PeakDetectionSettings.grouping]
        max_rt_diff = 0.5
    "#;

    let settings = MethodSettings::from_toml_str(toml).unwrap();
    assert_eq!(settings.len(), 3);
    assert_eq!(settings.get("min_snr"), Some("3"));
    assert_eq!(settings.get("eic_smoothing"), Some("gaussian"));
    assert_eq!(settings.get("grouping.max_rt_diff"), Some("0.5"));
    assert_eq!(settings.get("ignored"), None);
}

#[test]
fn test_falls_back_to_whole_document() {
    let settings = MethodSettings::from_toml_str("ppm = 10\n").unwrap();
    assert_eq!(settings.get("ppm"), Some("10"));
}

#[test]
fn test_identical_settings_have_no_diff() {
    let a = MethodSettings::from_pairs([("ppm", "10"), ("min_snr", "3")]);
    let diff = a.diff(&a.clone());
    assert!(diff.is_empty());
    assert_eq!(diff.to_string().trim(), NO_SETTINGS_DIFFERENCE);
}

#[test]
fn test_diff_lists_changed_and_one_sided_keys() {
    let manual = MethodSettings::from_pairs([("ppm", "10"), ("min_snr", "3"), ("only_manual", "x")]);
    let automated = MethodSettings::from_pairs([("ppm", "20"), ("min_snr", "3"), ("only_auto", "y")]);

    let diff = manual.diff(&automated);
    let keys: Vec<_> = diff.changes.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["only_auto", "only_manual", "ppm"]);
    assert_eq!(diff.changes[0].manual, None);
    assert_eq!(diff.changes[2].automated.as_deref(), Some("20"));
}

#[test]
fn test_invalid_toml() {
    assert!(matches!(
        MethodSettings::from_toml_str("not = [valid"),
        Err(SettingsError::TomlError(_))
    ));
}
