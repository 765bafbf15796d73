use smartkart::{Args, SmartKartApp};
use clap::Parser;
use smartkart_core::StoreGraph;
use std::io::Write;
use tempfile::NamedTempFile;

pub const SAMPLE_LAYOUT: &str = r#"{
    "locations": [
        {"id": "A1", "label": "Entrance"},
        {"id": "A2", "label": "Snacks", "items": [101, 202]},
        {"id": "A3", "label": "Drinks", "items": [303]},
        {"id": "A4", "label": "Dairy", "items": [404, 505]},
        {"id": "A5", "label": "Exit"},
        {"id": "B1", "label": "Stockroom", "items": [999]}
    ],
    "paths": [
        {"from": "A1", "to": "A2", "weight": 2},
        {"from": "A2", "to": "A3", "weight": 3},
        {"from": "A3", "to": "A4", "weight": 3},
        {"from": "A4", "to": "A5", "weight": 2},
        {"from": "A2", "to": "A4", "weight": 7}
    ]
}"#;

pub fn write_layout(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn load_sample_store() -> (NamedTempFile, StoreGraph) {
    let file = write_layout(SAMPLE_LAYOUT);
    let app = SmartKartApp::new(file.path().to_path_buf()).unwrap();
    let store = app.load_store().unwrap();
    (file, store)
}

pub fn parse_args(layout: &NamedTempFile, extra: &[&str]) -> Args {
    let layout_path = layout.path().to_string_lossy().to_string();
    let mut argv = vec!["smartkart".to_string(), layout_path];
    argv.extend(extra.iter().map(|arg| arg.to_string()));
    Args::parse_from(argv)
}
