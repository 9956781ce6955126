//! ffmpeg flag vocabulary recognised by the rewriter.
//!
//! Matching is always a case-insensitive literal comparison against one of the
//! lists below, never positional.

pub const RTBUFSIZE_FLAGS: &[&str] = &["-rtbufsize"];
pub const CODEC_FLAGS: &[&str] = &["-c:v", "-codec:v", "-vcodec"];
pub const SOFTWARE_ENCODERS: &[&str] = &["libx264"];
pub const PRESET_FLAGS: &[&str] = &["-preset", "-preset:v"];
pub const PROFILE_LEVEL_FLAGS: &[&str] = &["-profile", "-profile:v", "-level", "-level:v"];
pub const THREAD_FLAGS: &[&str] = &["-threads"];
pub const TUNE_FLAGS: &[&str] = &["-tune", "-tune:v"];
pub const CRF_FLAGS: &[&str] = &["-crf"];
pub const PIX_FMT_FLAGS: &[&str] = &["-pix_fmt", "-pix_fmt:v"];
pub const FILTER_FLAGS: &[&str] = &["-vf", "-filter:v", "-filter_complex"];
pub const OUTPUT_FORMAT_FLAGS: &[&str] = &["-f"];

pub const ZERO_LATENCY_TUNE: &str = "zerolatency";

/// Filter directive that pins the pixel format inside a filter graph
pub const FORMAT_DIRECTIVE: &str = "format=";

/// ffmpeg options that take no value, so the token after them is not theirs
pub const SWITCHES: &[&str] = &[
    "-y",
    "-n",
    "-an",
    "-vn",
    "-sn",
    "-dn",
    "-re",
    "-nostdin",
    "-stdin",
    "-hide_banner",
    "-nostats",
    "-stats",
    "-shortest",
    "-copyts",
    "-start_at_zero",
    "-benchmark",
    "-report",
];

/// A flag is a dash followed by a letter. A bare `-` is stdout and `-1` is a number.
pub fn is_flag(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('-') && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
}

pub fn matches_any(token: &str, set: &[&str]) -> bool {
    set.iter().any(|f| token.eq_ignore_ascii_case(f))
}

pub fn is_switch(token: &str) -> bool {
    matches_any(token, SWITCHES)
}

/// Whether `args[i]` is the value of the flag right before it
pub fn is_flag_value(args: &[String], i: usize) -> bool {
    i > 0 && is_flag(&args[i - 1]) && !is_switch(&args[i - 1])
}

/// Filter expression contains a `format=` directive
pub fn filter_sets_format(expr: &str) -> bool {
    expr.to_ascii_lowercase().contains(FORMAT_DIRECTIVE)
}
