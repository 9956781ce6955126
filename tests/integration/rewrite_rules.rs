// Integration tests for the argument rewriter
//
// Each rule is exercised through the public `rewrite` entry point the way a
// real ffmpeg invocation would hit it.

use amfproxy::engine::{LOW_LATENCY_USAGE, PRESET_TABLE, TranslateOptions, rewrite};

use crate::common::assertions::*;
use crate::common::helpers::*;

// ============================================================================
// Codec substitution and preset mapping
// ============================================================================

#[test]
fn test_libx264_preset_fast() {
    let rw = rewrite_default(&argv("-i in.mp4 -c:v libx264 -preset fast out.mp4"));

    assert!(rw.substituted);
    assert_has_flag_value(&rw.args, "-c:v", "h264_amf");
    assert_has_flag_value(&rw.args, "-usage", "lowlatency");
    assert_has_flag_value(&rw.args, "-quality", "balanced");
    assert_flag_absent(&rw.args, "-preset");
    assert_flag_absent(&rw.args, "libx264");
}

#[test]
fn test_every_table_preset_is_translated() {
    for entry in PRESET_TABLE {
        let cmd = rewrite_str(&format!(
            "-c:v libx264 -preset {} out.mp4",
            entry.x264_preset.to_uppercase()
        ));
        assert_cmd_contains(
            &cmd,
            &format!("-usage {} -quality {}", entry.amf_usage, entry.amf_quality),
        );
        assert_cmd_not_contains(&cmd, "-preset");
    }
}

#[test]
fn test_unknown_preset_gets_default_pair() {
    let rw = rewrite_default(&argv("-c:v libx264 -preset unknownname out.mp4"));

    assert_has_flag_value(&rw.args, "-usage", "transcoding");
    assert_has_flag_value(&rw.args, "-quality", "balanced");
}

#[test]
fn test_codec_flag_spellings() {
    for flag in ["-c:v", "-codec:v", "-vcodec", "-C:V"] {
        let rw = rewrite_default(&argv(&format!("-i in.mp4 {} libx264 out.mp4", flag)));
        assert!(rw.substituted, "{} should trigger substitution", flag);
        assert_has_flag_value(&rw.args, flag, "h264_amf");
    }
}

#[test]
fn test_preset_v_is_captured() {
    let cmd = rewrite_str("-c:v libx264 -preset:v slow out.mp4");
    assert_cmd_contains(&cmd, "-usage transcoding -quality quality");
    assert_cmd_not_contains(&cmd, "-preset:v");
}

#[test]
fn test_last_preset_wins() {
    let cmd = rewrite_str("-c:v libx264 -preset slow -preset ultrafast out.mp4");
    assert_cmd_contains(&cmd, "-usage lowlatency -quality speed");
}

// ============================================================================
// Unconditional rules
// ============================================================================

#[test]
fn test_rtbufsize_is_overridden() {
    let rw = rewrite_default(&argv("-rtbufsize 64M -f dshow -i video=cam out.mp4"));

    assert_has_flag_value(&rw.args, "-rtbufsize", "2048M");
    assert!(!rw.args.iter().any(|a| a == "64M"));
}

#[test]
fn test_threads_dropped_without_codec() {
    let rw = rewrite_default(&argv("-threads 8 -i in.mp4 -c:v libx265 out.mp4"));

    assert!(!rw.substituted);
    assert_flag_absent(&rw.args, "-threads");
    assert_eq!(rw.args, argv("-i in.mp4 -c:v libx265 out.mp4"));
}

#[test]
fn test_custom_rtbufsize() {
    let opts = TranslateOptions {
        rtbufsize: "1G".to_string(),
        ..TranslateOptions::default()
    };
    let rw = rewrite(&argv("-RTBUFSIZE 10M -i x out.mp4"), &opts);
    assert_has_flag_value(&rw.args, "-RTBUFSIZE", "1G");
}

// ============================================================================
// Tuning and quality inference
// ============================================================================

#[test]
fn test_zerolatency_overrides_preset_usage() {
    let rw = rewrite_default(&vmix_stream_args("medium", Some("zerolatency")));

    // Table says transcoding for medium; tuning wins for usage only
    assert_has_flag_value(&rw.args, "-usage", LOW_LATENCY_USAGE);
    assert_has_flag_value(&rw.args, "-quality", "balanced");
    assert_has_flag_value(&rw.args, "-rc", "cbr");
    assert_flag_absent(&rw.args, "-tune");
}

#[test]
fn test_zerolatency_keeps_table_quality() {
    let rw = rewrite_default(&vmix_stream_args("veryslow", Some("ZeroLatency")));

    assert_has_flag_value(&rw.args, "-usage", LOW_LATENCY_USAGE);
    assert_has_flag_value(&rw.args, "-quality", "quality");
}

#[test]
fn test_zerolatency_without_preset_injects_rc_only() {
    let rw = rewrite_default(&argv("-c:v libx264 -tune zerolatency out.mp4"));

    assert_flag_absent(&rw.args, "-usage");
    assert_flag_absent(&rw.args, "-quality");
    assert_has_flag_value(&rw.args, "-rc", "cbr");
}

#[test]
fn test_crf_boundaries() {
    for (crf, mode) in [
        ("0", "vbr_peak"),
        ("18", "vbr_peak"),
        ("23", "vbr_peak"),
        ("23.5", "vbr_latency"),
        ("24", "vbr_latency"),
        ("51", "vbr_latency"),
    ] {
        let rw = rewrite_default(&argv(&format!("-c:v libx264 -crf {} out.mp4", crf)));
        assert_eq!(get_flag_value(&rw.args, "-rc"), Some(mode), "crf {}", crf);
        assert_flag_absent(&rw.args, "-crf");
    }
}

#[test]
fn test_crf_without_substitution_is_untouched() {
    let args = argv("-c:v libvpx-vp9 -crf 31 out.webm");
    assert_eq!(rewrite_default(&args).args, args);
}

// ============================================================================
// Pixel format detection
// ============================================================================

#[test]
fn test_default_pix_fmt_injected() {
    let rw = rewrite_default(&argv("-i in.mp4 -c:v libx264 out.mp4"));
    assert_has_flag_value(&rw.args, "-pix_fmt", "yuv420p");
}

#[test]
fn test_explicit_pix_fmt_suppresses_default() {
    let rw = rewrite_default(&argv("-i in.mp4 -c:v libx264 -pix_fmt nv12 out.mp4"));

    assert_eq!(rw.args.iter().filter(|a| *a == "-pix_fmt").count(), 1);
    assert_has_flag_value(&rw.args, "-pix_fmt", "nv12");
}

#[test]
fn test_filter_complex_format_suppresses_default() {
    let rw = rewrite_default(&argv(
        "-i in.mp4 -c:v libx264 -filter_complex [0:v]scale=1920:1080,format=yuv420p[v] out.mp4",
    ));
    assert_flag_absent(&rw.args, "-pix_fmt");
}

#[test]
fn test_filter_without_format_still_injects() {
    let rw = rewrite_default(&argv("-i in.mp4 -c:v libx264 -vf scale=1280:720 out.mp4"));
    assert_has_flag_value(&rw.args, "-vf", "scale=1280:720");
    assert_has_flag_value(&rw.args, "-pix_fmt", "yuv420p");
}

#[test]
fn test_pix_fmt_before_codec_still_counts() {
    let rw = rewrite_default(&argv("-pix_fmt nv12 -i in.mp4 -c:v libx264 out.mp4"));

    assert_eq!(rw.args.iter().filter(|a| *a == "-pix_fmt").count(), 1);
    assert_has_flag_value(&rw.args, "-pix_fmt", "nv12");
    assert!(!rw.args.iter().any(|a| a == "yuv420p"));
    assert!(rw.injected.is_empty());
}

#[test]
fn test_format_filter_before_codec_still_counts() {
    let rw = rewrite_default(&argv("-i in.mp4 -vf format=nv12 -c:v libx264 out.mp4"));

    assert_flag_absent(&rw.args, "-pix_fmt");
    assert_eq!(rw.args, argv("-i in.mp4 -vf format=nv12 -c:v h264_amf out.mp4"));
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_empty_list() {
    let rw = rewrite_default(&[]);
    assert!(rw.args.is_empty());
    assert!(rw.injected.is_empty());
}

#[test]
fn test_codec_flag_at_end_passes_through() {
    let args = argv("-i in.mp4 -c:v");
    let rw = rewrite_default(&args);
    assert!(!rw.substituted);
    assert_eq!(rw.args, args);
}

#[test]
fn test_replacement_tokens_are_fresh_values() {
    let args = argv("-c:v libx264 out.mp4");
    let rw = rewrite_default(&args);
    drop(args);
    assert_eq!(rw.args[1], "h264_amf");
}
