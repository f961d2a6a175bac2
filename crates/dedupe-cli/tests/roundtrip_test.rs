//! End-to-end CLI behavior: encode a temp file, decode it back, and check
//! the `.dd` suffix convention and a representative error path.

use std::io::Write;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dedupe"))
}

#[test]
fn encode_then_decode_round_trips_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.bin");
    let mut data = Vec::new();
    let mut seed = 0xA5A5_1234_5678_9ABCu64;
    for _ in 0..20_000 {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        data.push((seed & 0xff) as u8);
    }
    std::fs::write(&input_path, &data).unwrap();

    let status = bin()
        .arg(&input_path)
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(status.success());

    let encoded_path = dir.path().join("input.bin.dd");
    assert!(encoded_path.exists());

    let status = bin()
        .arg("-d")
        .arg(&encoded_path)
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(status.success());

    let decoded_path = dir.path().join("input.bin");
    let decoded = std::fs::read(&decoded_path).unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn decoding_a_file_without_dd_suffix_fails_with_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.bin");
    std::fs::write(&path, b"hello").unwrap();

    let output = bin().arg("-d").arg(&path).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not end in .dd"));
}

#[test]
fn stats_subcommand_reports_json_without_writing_a_dd_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.bin");
    let block = vec![7u8; 4096];
    let mut data = Vec::new();
    for _ in 0..4 {
        data.extend_from_slice(&block);
    }
    std::fs::write(&path, &data).unwrap();

    let output = bin()
        .arg("stats")
        .arg(&path)
        .arg("--window")
        .arg("64")
        .arg("--zerobits")
        .arg("12")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(!dir.path().join("data.bin.dd").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(parsed.get("total_segments").is_some());
}

#[test]
fn signature_emits_one_strong_digest_per_segment() {
    use dedupe_core::{DIGEST_SIZE, Segmenter, SegmenterConfig, strong_digest};

    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("data.bin");
    let sig_path = dir.path().join("data.sig");

    let block = vec![5u8; 3000];
    let mut data = Vec::new();
    for _ in 0..6 {
        data.extend_from_slice(&block);
    }
    std::fs::write(&input_path, &data).unwrap();

    let status = bin()
        .arg("signature")
        .arg(&input_path)
        .arg("--window")
        .arg("64")
        .arg("--zerobits")
        .arg("10")
        .arg("--output")
        .arg(&sig_path)
        .status()
        .unwrap();
    assert!(status.success());

    let sig_bytes = std::fs::read(&sig_path).unwrap();
    assert_eq!(
        sig_bytes.len() % DIGEST_SIZE,
        0,
        "signature stream must be a flat concatenation of fixed-width digests"
    );

    // Independently re-segment the same input and compare digest-for-digest.
    let config = SegmenterConfig::from_zero_bits(64, 10);
    let segmenter = Segmenter::new(config).unwrap();
    let mut expected = Vec::new();
    segmenter
        .run(&mut std::io::Cursor::new(&data), |segment| {
            expected.extend_from_slice(strong_digest(segment).as_bytes());
            Ok(())
        })
        .unwrap();

    assert_eq!(sig_bytes, expected);
}

#[test]
fn patch_and_apply_patch_reconstruct_new_from_old() {
    let dir = tempfile::tempdir().unwrap();
    let old_path = dir.path().join("old.bin");
    let new_path = dir.path().join("new.bin");
    let patch_path = dir.path().join("delta.patch");
    let out_path = dir.path().join("reconstructed.bin");

    let mut old = vec![1u8; 30_000];
    std::fs::File::create(&old_path)
        .unwrap()
        .write_all(&old)
        .unwrap();
    old.extend(vec![2u8; 6_000]);
    std::fs::File::create(&new_path)
        .unwrap()
        .write_all(&old)
        .unwrap();

    let status = bin()
        .args(["patch", "--old"])
        .arg(&old_path)
        .arg("--new")
        .arg(&new_path)
        .arg("--out")
        .arg(&patch_path)
        .status()
        .unwrap();
    assert!(status.success());

    let status = bin()
        .args(["apply-patch", "--old"])
        .arg(&old_path)
        .arg("--patch")
        .arg(&patch_path)
        .arg("--out")
        .arg(&out_path)
        .status()
        .unwrap();
    assert!(status.success());

    let reconstructed = std::fs::read(&out_path).unwrap();
    assert_eq!(reconstructed, old);
}
