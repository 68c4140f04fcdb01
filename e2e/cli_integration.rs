//! End-to-end coverage of the `lzend` binary: invokes the built executable
//! as a subprocess against real files, using file-based
//! CLI integration tests.

use std::fs;
use std::io::Write;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lzend"))
}

#[test]
fn compress_then_decompress_round_trips_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.txt");
    let compressed_path = dir.path().join("input.lzend");
    let output_path = dir.path().join("output.txt");

    let mut input_file = fs::File::create(&input_path).unwrap();
    let text = "the quick brown fox jumps over the lazy dog\n".repeat(30);
    input_file.write_all(text.as_bytes()).unwrap();
    drop(input_file);

    let status = bin()
        .args(["-o", compressed_path.to_str().unwrap(), input_path.to_str().unwrap()])
        .status()
        .expect("failed to run lzend");
    assert!(status.success());

    let status = bin()
        .args([
            "-d",
            "-o",
            output_path.to_str().unwrap(),
            compressed_path.to_str().unwrap(),
        ])
        .status()
        .expect("failed to run lzend -d");
    assert!(status.success());

    let result = fs::read_to_string(&output_path).unwrap();
    assert_eq!(result, text);
}

#[test]
fn refuses_to_decode_a_truncated_stream() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.txt");
    let compressed_path = dir.path().join("input.lzend");

    fs::write(&input_path, b"some sample text for compression testing").unwrap();

    let status = bin()
        .args(["-o", compressed_path.to_str().unwrap(), input_path.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());

    let mut bytes = fs::read(&compressed_path).unwrap();
    bytes.truncate(bytes.len().saturating_sub(1));
    fs::write(&compressed_path, &bytes).unwrap();

    let output_path = dir.path().join("output.txt");
    let status = bin()
        .args(["-d", "-o", output_path.to_str().unwrap(), compressed_path.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(!status.success());
}
