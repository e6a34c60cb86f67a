//! ZIP出力の統合テスト

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use photo_rename_ai::export::{encode_image, export_archive};
use photo_rename_ai::{ItemId, ItemStore, RenameError};
use photo_rename_common::naming::LabelStyle;
use photo_rename_common::{ClassificationResult, Gender, Headcount};
use std::io::{Cursor, Read};
use tempfile::tempdir;

/// 半透明ピクセルを含むPNG
fn rgba_png() -> Vec<u8> {
    let img = RgbaImage::from_pixel(8, 8, Rgba([200, 100, 50, 128]));
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut buffer, ImageFormat::Png)
        .unwrap();
    buffer.into_inner()
}

fn person() -> ClassificationResult {
    ClassificationResult {
        gender: Gender::Person,
        headcount: Headcount::Exact(1),
    }
}

fn captioned(store: &mut ItemStore, bytes: Vec<u8>, file_name: &str, action: &str) -> ItemId {
    let id = store.ingest(bytes, file_name).unwrap();
    store
        .classify(id, "someone".into(), person(), "diet", action, LabelStyle::English)
        .unwrap();
    id
}

fn read_entry(archive: &[u8], name: &str) -> Vec<u8> {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive.to_vec())).unwrap();
    let mut file = zip.by_name(name).unwrap();
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).unwrap();
    bytes
}

#[test]
fn test_reencode_by_extension() {
    let mut store = ItemStore::new();
    captioned(&mut store, rgba_png(), "a.jpeg", "walking");
    captioned(&mut store, rgba_png(), "b.png", "running");

    let report = export_archive(&store.snapshot()).unwrap();
    let names: Vec<&str> = report.entries.iter().map(|(_, n)| n.as_str()).collect();
    assert_eq!(names, vec!["diet_person_1_walking.jpg", "diet_person_1_running.png"]);

    // jpeg は JPEG として再エンコード（アルファは除去）
    let jpg = read_entry(&report.archive, "diet_person_1_walking.jpg");
    assert_eq!(image::guess_format(&jpg).unwrap(), ImageFormat::Jpeg);

    let png = read_entry(&report.archive, "diet_person_1_running.png");
    assert_eq!(image::guess_format(&png).unwrap(), ImageFormat::Png);
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!(decoded.to_rgba8().get_pixel(0, 0)[3], 128);
}

#[test]
fn test_encode_failure_skips_single_item() {
    let mut store = ItemStore::new();
    let good = captioned(&mut store, rgba_png(), "good.png", "walking");
    let broken = captioned(&mut store, b"not an image".to_vec(), "broken.jpg", "walking");
    let after = captioned(&mut store, rgba_png(), "after.jpg", "sitting");

    let report = export_archive(&store.snapshot()).unwrap();

    assert_eq!(report.skipped_ids(), vec![broken]);
    assert!(matches!(
        report.skipped[0].1,
        RenameError::EncodeFailure { id, .. } if id == broken
    ));

    let exported: Vec<ItemId> = report.entries.iter().map(|(id, _)| *id).collect();
    assert_eq!(exported, vec![good, after]);

    let zip = zip::ZipArchive::new(Cursor::new(report.archive.clone())).unwrap();
    assert_eq!(zip.len(), 2);
}

#[test]
fn test_pending_items_not_exported() {
    let mut store = ItemStore::new();
    let done = captioned(&mut store, rgba_png(), "a.png", "walking");
    store.ingest(rgba_png(), "pending.png").unwrap();

    let report = export_archive(&store.snapshot()).unwrap();
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].0, done);
}

#[test]
fn test_edited_name_used_in_archive() {
    let mut store = ItemStore::new();
    let id = captioned(&mut store, rgba_png(), "a.png", "walking");
    store.rename(id, "お気に入り").unwrap();

    let report = export_archive(&store.snapshot()).unwrap();
    assert_eq!(report.entries[0].1, "お気に入り.png");
    assert!(!read_entry(&report.archive, "お気に入り.png").is_empty());
}

#[test]
fn test_empty_archive() {
    let store = ItemStore::new();
    let report = export_archive(&store.snapshot()).unwrap();
    assert!(report.entries.is_empty());

    let zip = zip::ZipArchive::new(Cursor::new(report.archive)).unwrap();
    assert_eq!(zip.len(), 0);
}

#[test]
fn test_write_report_to_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("out").join("renamed.zip");

    let mut store = ItemStore::new();
    captioned(&mut store, rgba_png(), "a.png", "walking");
    let report = export_archive(&store.snapshot()).unwrap();
    report.write_to(&output).unwrap();

    let metadata = std::fs::metadata(&output).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "ZIPファイルが空");
}

#[test]
fn test_encode_image_directly() {
    let mut store = ItemStore::new();
    let id = store.ingest(rgba_png(), "x.jpg").unwrap();
    let bytes = encode_image(store.get(id).unwrap()).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
}
