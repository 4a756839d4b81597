use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use posemetric_common::config::FrameGeometry;
use posemetric_label_source::plan_sources;
use posemetric_processing_core::batch::RowCollector;

const TWO_POINT_LINE: &str = "0 0.5 0.5 0.3 0.3 0.5 0.5 0.9 0.5 0.6 0.9";

fn write_labels(dir: &Path, files: &[(&str, &[u8])]) {
    for (name, data) in files {
        std::fs::write(dir.join(name), data).unwrap();
    }
}

fn write_archive(path: &Path, files: &[(&str, &str)]) {
    let file = File::create(path).unwrap();
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
    for (name, text) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(text.len() as u64);
        header.set_mode(0o644);
        header.set_entry_type(tar::EntryType::Regular);
        builder
            .append_data(&mut header, name, text.as_bytes())
            .unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap();
}

fn run(labels_dir: Option<&Path>, archives: &[PathBuf]) -> RowCollector {
    let mut collector = RowCollector::new(FrameGeometry::default());
    for spec in plan_sources(labels_dir, archives) {
        let source = spec.open().expect("source should open");
        collector.collect(source);
    }
    collector
}

#[test]
fn directory_rows_precede_archive_rows_in_name_then_line_order() {
    let tmp = tempfile::tempdir().unwrap();
    let labels = tmp.path().join("labels");
    std::fs::create_dir(&labels).unwrap();
    write_labels(
        &labels,
        &[
            ("video_00002.txt", b"0 0.1 0.1 0.1 0.1\n1 0.2 0.2 0.2 0.2 0.1 0.1 0.1 0.2\n"),
            ("video_00001.txt", TWO_POINT_LINE.as_bytes()),
        ],
    );

    let first = tmp.path().join("chunk_001.tar.gz");
    write_archive(
        &first,
        &[
            ("labels/video_00011.txt", TWO_POINT_LINE),
            ("labels/video_00010.txt", TWO_POINT_LINE),
        ],
    );
    let second = tmp.path().join("chunk_000.tar.gz");
    write_archive(&second, &[("labels/video_00003.txt", TWO_POINT_LINE)]);

    let collector = run(Some(&labels), &[first, second]);
    let order: Vec<(String, Option<u64>)> = collector
        .rows()
        .iter()
        .map(|r| (r.filename.clone(), r.frame))
        .collect();

    assert_eq!(
        order,
        vec![
            ("video_00001.txt".to_string(), Some(1)),
            ("video_00002.txt".to_string(), Some(2)),
            ("video_00002.txt".to_string(), Some(2)),
            ("labels/video_00010.txt".to_string(), Some(10)),
            ("labels/video_00011.txt".to_string(), Some(11)),
            ("labels/video_00003.txt".to_string(), Some(3)),
        ]
    );

    // Line order within video_00002.txt: box-only line first.
    assert!(collector.rows()[1].d_px.is_none());
    assert!(collector.rows()[2].d_px.is_some());
    assert!((collector.rows()[0].d_px.unwrap() - 192.0).abs() < 1e-9);
}

#[test]
fn corrupt_label_file_contributes_no_rows() {
    let tmp = tempfile::tempdir().unwrap();
    write_labels(
        tmp.path(),
        &[
            ("clip_1.txt", TWO_POINT_LINE.as_bytes()),
            ("clip_2.txt", &[0x00, 0xff, 0xfe, 0xc3, 0x28, 0x9f]),
            ("clip_3.txt", TWO_POINT_LINE.as_bytes()),
            ("clip_4.txt", b"0 0.5 0.5 0.1 0.1\n"),
        ],
    );

    let collector = run(Some(tmp.path()), &[]);
    let totals = collector.totals();
    assert_eq!(totals.files_read, 3);
    assert_eq!(totals.files_skipped, 1);
    assert_eq!(totals.rows, 3);

    let names: Vec<&str> = collector
        .rows()
        .iter()
        .map(|r| r.filename.as_str())
        .collect();
    assert_eq!(names, vec!["clip_1.txt", "clip_3.txt", "clip_4.txt"]);
}
