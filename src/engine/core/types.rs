use serde::{Deserialize, Serialize};

/// Maximum number of arguments carried through a rewrite, injected flags included
pub const MAX_ARGS: usize = 512;

/// Slots kept free for injected flags: usage + quality, rate control, pixel format
pub const INJECT_RESERVE: usize = 8;

pub const DEFAULT_RTBUFSIZE: &str = "2048M";
pub const DEFAULT_TARGET_ENCODER: &str = "h264_amf";
pub const DEFAULT_PIX_FMT: &str = "yuv420p";

/// AMF usage forced by `-tune zerolatency`, overriding the preset table
pub const LOW_LATENCY_USAGE: &str = "ultralowlatency";

/// Highest crf still treated as a quality-first encode
pub const CRF_QUALITY_THRESHOLD: f32 = 23.0;

/// Values substituted into the rewritten command line.
///
/// Stored under `[translate]` in the config file. Every field defaults to the
/// built-in constant so a partial table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateOptions {
    /// Replacement for any `-rtbufsize` value
    #[serde(default = "default_rtbufsize")]
    pub rtbufsize: String,

    /// Hardware encoder substituted for libx264
    #[serde(default = "default_target_encoder")]
    pub target_encoder: String,

    /// Pixel format injected when the invocation never names one
    #[serde(default = "default_pix_fmt")]
    pub default_pix_fmt: String,
}

fn default_rtbufsize() -> String {
    DEFAULT_RTBUFSIZE.to_string()
}

fn default_target_encoder() -> String {
    DEFAULT_TARGET_ENCODER.to_string()
}

fn default_pix_fmt() -> String {
    DEFAULT_PIX_FMT.to_string()
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            rtbufsize: default_rtbufsize(),
            target_encoder: default_target_encoder(),
            default_pix_fmt: default_pix_fmt(),
        }
    }
}

/// AMF rate-control modes the rewriter can infer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateControl {
    Cbr,
    VbrPeak,
    VbrLatency,
}

impl RateControl {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateControl::Cbr => "cbr",
            RateControl::VbrPeak => "vbr_peak",
            RateControl::VbrLatency => "vbr_latency",
        }
    }

    /// Map an x264 crf value onto an AMF rate-control mode
    pub fn from_crf(crf: f32) -> Self {
        if crf <= CRF_QUALITY_THRESHOLD {
            RateControl::VbrPeak
        } else {
            RateControl::VbrLatency
        }
    }
}

/// Result of rewriting one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Final argument list, injected flags included
    pub args: Vec<String>,

    /// Whether libx264 was replaced by the hardware encoder
    pub substituted: bool,

    /// Flags spliced in ahead of the output token
    pub injected: Vec<String>,

    /// Index in `args` where the injected flags start
    pub splice_at: usize,

    /// Input tokens were dropped to stay within `MAX_ARGS`
    pub truncated: bool,
}

impl Rewrite {
    /// True when the rewritten list differs from the input in any way
    pub fn changed(&self, original: &[String]) -> bool {
        self.args.as_slice() != original
    }
}
