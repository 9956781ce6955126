//! x264 preset → AMF usage/quality table.

/// One row of the preset table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetEntry {
    pub x264_preset: &'static str,
    pub amf_usage: &'static str,
    pub amf_quality: &'static str,
}

const fn entry(
    x264_preset: &'static str,
    amf_usage: &'static str,
    amf_quality: &'static str,
) -> PresetEntry {
    PresetEntry {
        x264_preset,
        amf_usage,
        amf_quality,
    }
}

/// Ordered; lookups return the first case-insensitive match
pub const PRESET_TABLE: &[PresetEntry] = &[
    entry("ultrafast", "lowlatency", "speed"),
    entry("superfast", "lowlatency", "speed"),
    entry("veryfast", "lowlatency", "speed"),
    entry("faster", "lowlatency", "balanced"),
    entry("fast", "lowlatency", "balanced"),
    entry("medium", "transcoding", "balanced"),
    entry("slow", "transcoding", "quality"),
    entry("slower", "transcoding", "quality"),
    entry("veryslow", "transcoding", "quality"),
];

/// Used for preset names missing from the table (e.g. "placebo")
pub const DEFAULT_PRESET: PresetEntry = entry("", "transcoding", "balanced");

pub fn find_preset(name: &str) -> Option<&'static PresetEntry> {
    PRESET_TABLE
        .iter()
        .find(|p| p.x264_preset.eq_ignore_ascii_case(name))
}

/// Table entry for `name`, or the default pair when unknown
pub fn preset_or_default(name: &str) -> PresetEntry {
    find_preset(name).copied().unwrap_or(DEFAULT_PRESET)
}
