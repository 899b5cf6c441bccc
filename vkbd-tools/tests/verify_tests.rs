use pretty_assertions::assert_eq;
use vkbd_tools::verify_builtin;

#[test]
fn test_every_builtin_layout_is_reported() {
    let reports = verify_builtin().unwrap();
    let codes: Vec<&str> = reports.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["rus", "ukr", "vie", "tha", "spa", "por", "deu", "ara"]);

    for report in &reports {
        assert_eq!(report.shape, vec![14, 12, 13, 12, 3], "layout {}", report.code);
        assert_eq!(report.nfc_composed + report.non_nfc.len(), report.transforms);
    }
}

#[test]
fn test_transform_tables() {
    let reports = verify_builtin().unwrap();
    let with_transforms: Vec<&str> = reports
        .iter()
        .filter(|r| r.transforms > 0)
        .map(|r| r.code.as_str())
        .collect();
    assert_eq!(with_transforms, vec!["vie", "spa", "por", "deu"]);

    let vie = reports.iter().find(|r| r.code == "vie").unwrap();
    assert!(vie.nfc_composed > 0);

    // Spanish dead keys come before the letter, so NFC never reproduces them
    let spa = reports.iter().find(|r| r.code == "spa").unwrap();
    assert!(spa.non_nfc.iter().any(|(key, _)| key == "`A"));
}

#[test]
fn test_report_display() {
    let reports = verify_builtin().unwrap();
    let rus = reports.iter().find(|r| r.code == "rus").unwrap();
    assert!(rus.to_string().starts_with("rus ("));
    assert!(rus.to_string().contains("[14, 12, 13, 12, 3], 54 keys"));
    assert!(!rus.to_string().contains("transforms"));
}
