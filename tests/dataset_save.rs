// Saving: validation, stable formatting, and round-trip behavior

use test_helpers::*;

use sprite_manager::config::DatasetConfig;
use sprite_manager::state::{load_dataset, move_origin_point, save_dataset, update_entry};
use sprite_manager::{FrameEdit, SpriteError};

#[test]
fn save_empty_dataset_fails_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = DatasetConfig::default();

    let ds = load_dataset(dir.path(), &cfg).unwrap().dataset;
    let err = save_dataset(&ds, &cfg).unwrap_err();

    assert!(matches!(err, SpriteError::Validation(_)));
    assert!(!dir.path().join("data.json").exists());
}

#[test]
fn save_then_load_keeps_keys_and_values() {
    let dir = folder_with_images(&["sprite.png", "sub/walk.png"]);
    let cfg = DatasetConfig::default();

    let mut ds = load_dataset(dir.path(), &cfg).unwrap().dataset;
    update_entry(&mut ds, "sprite.png", (128, 64), FrameEdit::Counts { x: 4, y: 2 }).unwrap();
    move_origin_point(&mut ds, "sprite.png", 16.0, 16.0).unwrap();
    update_entry(&mut ds, "sub/walk.png", (96, 96), FrameEdit::Sizes { width: 32, height: 32 })
        .unwrap();
    save_dataset(&ds, &cfg).unwrap();

    let reloaded = load_dataset(dir.path(), &cfg).unwrap().dataset;
    assert_eq!(reloaded.entries, ds.entries);
    assert!(read_sidecar_text(dir.path()).contains("\"sub/walk.png\""));
}

#[test]
fn entry_fields_serialize_in_fixed_order() {
    let dir = folder_with_images(&["sprite.png"]);
    let cfg = DatasetConfig::default();

    let mut ds = load_dataset(dir.path(), &cfg).unwrap().dataset;
    update_entry(&mut ds, "sprite.png", (128, 64), FrameEdit::Counts { x: 4, y: 2 }).unwrap();
    move_origin_point(&mut ds, "sprite.png", 3.0, 5.0).unwrap();
    save_dataset(&ds, &cfg).unwrap();

    let text = read_sidecar_text(dir.path());
    let positions: Vec<usize> = [
        "frame_width",
        "frame_height",
        "frame_count_x",
        "frame_count_y",
        "origin_x",
        "origin_y",
    ]
    .iter()
    .map(|field| text.find(field).expect("field present"))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn unset_origin_is_omitted_and_placeholders_stay_empty() {
    let dir = folder_with_images(&["done.png", "todo.png"]);
    let cfg = DatasetConfig::default();

    let mut ds = load_dataset(dir.path(), &cfg).unwrap().dataset;
    update_entry(&mut ds, "done.png", (64, 64), FrameEdit::Counts { x: 2, y: 2 }).unwrap();
    save_dataset(&ds, &cfg).unwrap();

    let text = read_sidecar_text(dir.path());
    assert!(!text.contains("origin_x"));
    assert!(text.contains("\"todo.png\": {}"));
}

#[test]
fn save_replaces_sidecar_without_leftover_tmp() {
    let dir = folder_with_images(&["sprite.png"]);
    let cfg = DatasetConfig::default();

    let mut ds = load_dataset(dir.path(), &cfg).unwrap().dataset;
    update_entry(&mut ds, "sprite.png", (128, 64), FrameEdit::Counts { x: 4, y: 2 }).unwrap();
    save_dataset(&ds, &cfg).unwrap();

    update_entry(&mut ds, "sprite.png", (128, 64), FrameEdit::Counts { x: 2, y: 1 }).unwrap();
    save_dataset(&ds, &cfg).unwrap();

    assert!(read_sidecar_text(dir.path()).contains("\"frame_count_x\": 2"));
    assert!(!dir.path().join("data.json.tmp").exists());
}

#[test]
fn save_drops_pruned_entries_from_the_file() {
    let dir = folder_with_images(&["new.png"]);
    write_sidecar(
        dir.path(),
        r#"{ "old.png": { "frame_count_x": 2, "frame_count_y": 2 } }"#,
    );
    let cfg = DatasetConfig::default();

    let mut ds = load_dataset(dir.path(), &cfg).unwrap().dataset;
    update_entry(&mut ds, "new.png", (64, 64), FrameEdit::Counts { x: 1, y: 1 }).unwrap();
    save_dataset(&ds, &cfg).unwrap();

    let text = read_sidecar_text(dir.path());
    assert!(!text.contains("old.png"));
    assert!(text.contains("new.png"));
}

#[test]
fn custom_sidecar_name_is_used() {
    let dir = folder_with_images(&["sprite.png"]);
    let cfg = DatasetConfig {
        sidecar_name: "frames.json".to_string(),
        ..DatasetConfig::default()
    };

    let mut ds = load_dataset(dir.path(), &cfg).unwrap().dataset;
    update_entry(&mut ds, "sprite.png", (64, 64), FrameEdit::Counts { x: 2, y: 2 }).unwrap();
    let written = save_dataset(&ds, &cfg).unwrap();

    assert_eq!(written, dir.path().join("frames.json"));
    assert!(!dir.path().join("data.json").exists());
}
