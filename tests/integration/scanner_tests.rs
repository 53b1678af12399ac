//! Scanner integration tests
//!
//! Build a realistic res/ tree in a temp dir and check what gets collected.

use overlayable::{Config, Resource, ResourceScanner};
use std::fs;
use std::path::Path;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// A small settings app resource tree
fn settings_res(root: &Path) {
    write(
        root,
        "res/values/strings.xml",
        r#"<?xml version="1.0" encoding="utf-8"?>
<resources xmlns:xliff="urn:oasis:names:tc:xliff:document:1.2">
    <string name="settings_label">Settings</string>
    <string name="wifi_settings">Wi-Fi</string>
    <string-array name="screen_timeout_entries">
        <item>15 seconds</item>
    </string-array>
    <plurals name="bluetooth_devices">
        <item quantity="one">%d device</item>
        <item quantity="other">%d devices</item>
    </plurals>
</resources>"#,
    );
    write(
        root,
        "res/values-fr/strings.xml",
        r#"<resources><string name="settings_label">Paramètres</string></resources>"#,
    );
    write(
        root,
        "res/values/dimens.xml",
        r#"<resources>
    <dimen name="top_level_icon_size">44dp</dimen>
    <item name="preference_ratio" format="float" type="dimen">0.4</item>
</resources>"#,
    );
    write(
        root,
        "res/values/attrs.xml",
        r#"<resources>
    <declare-styleable name="MultiActionPreference">
        <attr name="showAction1" format="boolean"/>
        <attr name="android:enabled"/>
    </declare-styleable>
</resources>"#,
    );
    write(
        root,
        "res/values/ids.xml",
        r#"<resources><item type="id" name="toolbar_menu_item_0"/></resources>"#,
    );
    write(
        root,
        "res/layout/top_level_preference.xml",
        r#"<LinearLayout xmlns:android="http://schemas.android.com/apk/res/android"
    android:layout_width="match_parent" android:layout_height="wrap_content">
    <ImageView android:id="@+id/icon" android:src="@drawable/ic_settings"/>
    <TextView android:id="@android:id/title"/>
</LinearLayout>"#,
    );
    write(root, "res/drawable/ic_settings.xml", r#"<vector android:width="24dp"/>"#);
    write(root, "res/drawable-hdpi/ic_wallpaper.9.png", "binary");
    write(root, "res/xml/homepage_fragment.xml", r#"<PreferenceScreen/>"#);
    write(root, "res/raw/notes.txt", "plain text");
}

#[test]
fn test_scan_settings_tree() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    settings_res(temp_dir.path());

    let config = Config::default();
    let scanner = ResourceScanner::new(&config);
    let result = scanner.scan(&temp_dir.path().join("res")).unwrap();

    let found: Vec<String> = result.resources.iter().map(|r| r.to_string()).collect();
    assert_eq!(
        found,
        vec![
            "array/screen_timeout_entries",
            "attr/showAction1",
            "dimen/preference_ratio",
            "dimen/top_level_icon_size",
            "drawable/ic_settings",
            "drawable/ic_wallpaper",
            "id/icon",
            "id/toolbar_menu_item_0",
            "layout/top_level_preference",
            "plurals/bluetooth_devices",
            "raw/notes",
            "string/settings_label",
            "string/wifi_settings",
            "styleable/MultiActionPreference",
            "xml/homepage_fragment",
        ]
    );
}

#[test]
fn test_exclude_patterns_skip_files() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    settings_res(temp_dir.path());

    let config = Config {
        exclude: vec!["*.png".to_string(), "**/raw/**".to_string()],
        ..Config::default()
    };
    let result = ResourceScanner::new(&config)
        .scan(&temp_dir.path().join("res"))
        .unwrap();

    assert!(!result.resources.contains(&Resource::new("drawable", "ic_wallpaper")));
    assert!(!result.resources.contains(&Resource::new("raw", "notes")));
    assert!(result.resources.contains(&Resource::new("drawable", "ic_settings")));
}

#[test]
fn test_scan_ignores_existing_manifest() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write(
        temp_dir.path(),
        "res/values/strings.xml",
        r#"<resources><string name="a">A</string></resources>"#,
    );
    write(
        temp_dir.path(),
        "res/values/overlayable.xml",
        r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
  <overlayable name="CarSettings">
    <policy type="public">
      <item type="string" name="stale"/>
    </policy>
  </overlayable>
</resources>"#,
    );

    let config = Config::default();
    let result = ResourceScanner::new(&config)
        .scan(&temp_dir.path().join("res"))
        .unwrap();

    assert_eq!(result.resources.len(), 1);
    assert!(result.resources.contains(&Resource::new("string", "a")));
}

#[test]
fn test_malformed_file_names_the_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write(
        temp_dir.path(),
        "res/values/broken.xml",
        r#"<resources><string name="a">A</strin></resources>"#,
    );

    let config = Config::default();
    let err = ResourceScanner::new(&config)
        .scan(&temp_dir.path().join("res"))
        .unwrap_err();

    assert!(err.to_string().contains("broken.xml"), "got: {}", err);
}

#[test]
fn test_load_exclusions_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write(
        temp_dir.path(),
        "chassis_overlayable.xml",
        r#"<resources>
  <overlayable name="CarUiLib">
    <policy type="public">
      <item type="string" name="car_ui_toolbar_default_search_hint"/>
      <item type="dimen" name="car_ui_toolbar_height"/>
    </policy>
  </overlayable>
</resources>"#,
    );

    let config = Config::default();
    let exclusions = ResourceScanner::new(&config)
        .load_exclusions(&config.exclusions_path(temp_dir.path()))
        .unwrap();

    assert_eq!(exclusions.len(), 2);
    assert!(exclusions.contains(&Resource::new("dimen", "car_ui_toolbar_height")));
}
