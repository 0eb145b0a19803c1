use std::path::PathBuf;
use std::process::{Command, Output};

fn tmp_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name)
}

fn run_morsewave(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_morsewave"))
        .args(args)
        .output()
        .expect("Failed to execute morsewave")
}

fn combined(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string() + &String::from_utf8_lossy(&output.stdout)
}

#[test]
fn test_encode_text() {
    let output = run_morsewave(&["encode-text", "SOS"]);
    assert!(output.status.success(), "encode-text failed: {}", combined(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "... --- ...");
}

#[test]
fn test_decode_text() {
    let output = run_morsewave(&["decode-text", "... --- ..."]);
    assert!(output.status.success(), "decode-text failed: {}", combined(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "SOS");
}

#[test]
fn test_decode_text_unknown_group_fails() {
    let output = run_morsewave(&["decode-text", "... ......"]);
    assert!(!output.status.success());
    assert!(
        combined(&output).contains("Unrecognized Morse symbol: ......"),
        "Expected error naming the group but got: {}",
        combined(&output)
    );
}

#[test]
fn test_translate_detects_direction() {
    let output = run_morsewave(&["translate", "hello world"]);
    assert!(output.status.success());
    assert!(combined(&output).contains("Morse code: .... . .-.. .-.. --- / .-- --- .-. .-.. -.."));

    let output = run_morsewave(&["translate", ".... .. / - .... . .-. ."]);
    assert!(output.status.success());
    assert!(combined(&output).contains("Translated text: HI THERE"));
}

#[test]
fn test_table_lists_letters() {
    let output = run_morsewave(&["table"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(stdout.lines().any(|l| l == "S  ..."));
    assert!(stdout.lines().any(|l| l == "0  -----"));
}

#[test]
fn test_audio_roundtrip() {
    let wav = tmp_path("cli_roundtrip.wav");

    let output = run_morsewave(&["encode", "CQ DE MORSEWAVE", wav.to_str().unwrap()]);
    assert!(output.status.success(), "encode failed: {}", combined(&output));
    assert!(wav.exists(), "Output file was not created");

    let output = run_morsewave(&["decode", wav.to_str().unwrap()]);
    let text = combined(&output);
    assert!(output.status.success(), "decode failed: {}", text);
    assert!(text.contains("Detected Morse: -.-. --.- / -.. . / "), "got: {}", text);
    assert!(text.contains("Decoded text: CQ DE MORSEWAVE"), "got: {}", text);
}

#[test]
fn test_audio_roundtrip_custom_speed() {
    let wav = tmp_path("cli_roundtrip_12wpm.wav");

    let output = run_morsewave(&[
        "encode",
        "PARIS",
        wav.to_str().unwrap(),
        "--wpm",
        "12",
        "--sample-rate",
        "16000",
        "--frequency",
        "600",
    ]);
    assert!(output.status.success(), "encode failed: {}", combined(&output));

    let output = run_morsewave(&["decode", wav.to_str().unwrap(), "--wpm", "12"]);
    assert!(output.status.success(), "decode failed: {}", combined(&output));
    assert!(combined(&output).contains("Decoded text: PARIS"));
}

#[test]
fn test_decode_silent_wav_fails() {
    let wav = tmp_path("cli_silent.wav");
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&wav, spec).expect("create wav");
    for _ in 0..8000 {
        writer.write_sample(0i16).expect("write sample");
    }
    writer.finalize().expect("finalize wav");

    let output = run_morsewave(&["decode", wav.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(
        combined(&output).contains("Signal is empty or silent"),
        "got: {}",
        combined(&output)
    );
}

#[test]
fn test_encode_rejects_unencodable_text() {
    let wav = tmp_path("cli_unencodable.wav");
    let output = run_morsewave(&["encode", "50% off", wav.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(combined(&output).contains("'%'"));
}

#[test]
fn test_encode_rejects_speed_beyond_sample_rate() {
    let wav = tmp_path("cli_too_fast.wav");
    let output = run_morsewave(&["encode", "SOS", wav.to_str().unwrap(), "--wpm", "100000"]);
    assert!(!output.status.success());
    assert!(combined(&output).contains("samples per unit"), "got: {}", combined(&output));
    assert!(!wav.exists());
}

#[test]
fn test_bad_log_level_is_rejected() {
    let output = run_morsewave(&["--log-level", "verbose", "encode-text", "SOS"]);
    assert!(!output.status.success());
    assert!(combined(&output).contains("unknown log level"), "got: {}", combined(&output));

    let output = run_morsewave(&["--log-level", "debug", "encode-text", "SOS"]);
    assert!(output.status.success(), "got: {}", combined(&output));
}
