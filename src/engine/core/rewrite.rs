use super::flags::{
    CODEC_FLAGS, CRF_FLAGS, FILTER_FLAGS, OUTPUT_FORMAT_FLAGS, PIX_FMT_FLAGS, PRESET_FLAGS,
    PROFILE_LEVEL_FLAGS, RTBUFSIZE_FLAGS, SOFTWARE_ENCODERS, THREAD_FLAGS, TUNE_FLAGS,
    ZERO_LATENCY_TUNE, filter_sets_format, is_flag, is_flag_value, matches_any,
};
use super::preset::preset_or_default;
use super::types::{
    INJECT_RESERVE, LOW_LATENCY_USAGE, MAX_ARGS, RateControl, Rewrite, TranslateOptions,
};
use tracing::debug;

/// Flags accumulated during one scan. Never outlives a `rewrite` call.
#[derive(Debug, Default)]
struct ScanState {
    substituted: bool,
    pix_fmt_specified: bool,
    low_latency: bool,
    crf_rate_control: Option<RateControl>,
    preset: Option<String>,
}

impl ScanState {
    /// Low-latency tuning pins CBR whatever crf asked for
    fn rate_control(&self) -> Option<RateControl> {
        if self.low_latency {
            Some(RateControl::Cbr)
        } else {
            self.crf_rate_control
        }
    }
}

/// What to do with a flag and the token after it
#[derive(Debug, PartialEq, Eq)]
enum Action {
    /// Consume both, emit the flag with a new value
    Replace(String),
    /// Consume both, emit nothing
    Drop,
    /// Consume both, emit both unchanged
    Keep,
    /// Emit the current token only
    PassThrough,
}

/// Rules in priority order; the first one that applies wins.
fn apply_rules(
    flag: &str,
    value: &str,
    state: &mut ScanState,
    opts: &TranslateOptions,
) -> Action {
    if matches_any(flag, RTBUFSIZE_FLAGS) {
        return Action::Replace(opts.rtbufsize.clone());
    }

    if matches_any(flag, CODEC_FLAGS) && matches_any(value, SOFTWARE_ENCODERS) {
        state.substituted = true;
        return Action::Replace(opts.target_encoder.clone());
    }

    if state.substituted && matches_any(flag, PRESET_FLAGS) {
        state.preset = Some(value.to_string());
        return Action::Drop;
    }

    // h264_amf has its own profile/level vocabulary
    if state.substituted && matches_any(flag, PROFILE_LEVEL_FLAGS) {
        return Action::Drop;
    }

    if matches_any(flag, THREAD_FLAGS) {
        return Action::Drop;
    }

    if state.substituted && matches_any(flag, TUNE_FLAGS) {
        if value.eq_ignore_ascii_case(ZERO_LATENCY_TUNE) {
            state.low_latency = true;
        }
        return Action::Drop;
    }

    if state.substituted && matches_any(flag, CRF_FLAGS) {
        // "nan" and "inf" parse as f32 but are not crf values
        if let Some(crf) = value.trim().parse::<f32>().ok().filter(|c| c.is_finite()) {
            state.crf_rate_control = Some(RateControl::from_crf(crf));
        }
        return Action::Drop;
    }

    // Only injection needs the codec gate; a pixel format set anywhere counts
    if matches_any(flag, PIX_FMT_FLAGS) {
        state.pix_fmt_specified = true;
        return Action::Keep;
    }

    if matches_any(flag, FILTER_FLAGS) {
        if filter_sets_format(value) {
            state.pix_fmt_specified = true;
        }
        return Action::Keep;
    }

    Action::PassThrough
}

/// Locate the encoder output destination in a rewritten list.
///
/// Prefers `-f <fmt> <dest>` where `<dest>` is not a flag, then the last
/// token that is neither a flag nor a flag's value. Falls back to the end of
/// the list. A bare `-` (stdout) is a valid destination.
pub fn find_output_index(args: &[String]) -> usize {
    let explicit = args.windows(3).position(|w| {
        matches_any(&w[0], OUTPUT_FORMAT_FLAGS) && !is_flag(&w[1]) && !is_flag(&w[2])
    });
    if let Some(i) = explicit {
        return i + 2;
    }

    (0..args.len())
        .rev()
        .find(|&i| !is_flag(&args[i]) && !is_flag_value(args, i))
        .unwrap_or(args.len())
}

/// Translate an ffmpeg/libx264 argument list into the hardware encoder's dialect.
///
/// Total over all inputs: anything not recognised is passed through unchanged.
/// Input longer than `MAX_ARGS - INJECT_RESERVE` is truncated so the injected
/// flags always fit.
pub fn rewrite(args: &[String], opts: &TranslateOptions) -> Rewrite {
    let limit = MAX_ARGS - INJECT_RESERVE;
    let truncated = args.len() > limit;
    let input = &args[..args.len().min(limit)];

    let mut state = ScanState::default();
    let mut out: Vec<String> = Vec::with_capacity(input.len() + INJECT_RESERVE);

    let mut i = 0;
    while i < input.len() {
        let token = input[i].as_str();

        // A flag with nothing after it never consumes a value
        let Some(value) = input.get(i + 1).map(String::as_str) else {
            out.push(token.to_string());
            break;
        };

        match apply_rules(token, value, &mut state, opts) {
            Action::Replace(new_value) => {
                out.push(token.to_string());
                out.push(new_value);
                i += 2;
            }
            Action::Drop => i += 2,
            Action::Keep => {
                out.push(token.to_string());
                out.push(value.to_string());
                i += 2;
            }
            Action::PassThrough => {
                out.push(token.to_string());
                i += 1;
            }
        }
    }

    let injected = injected_flags(&state, opts);
    let splice_at = find_output_index(&out);
    out.splice(splice_at..splice_at, injected.iter().cloned());

    debug!(
        substituted = state.substituted,
        splice_at,
        injected = injected.len(),
        truncated,
        "rewrote argument list"
    );

    Rewrite {
        args: out,
        substituted: state.substituted,
        injected,
        splice_at,
        truncated,
    }
}

/// Flags appended after the scan, in their fixed order
fn injected_flags(state: &ScanState, opts: &TranslateOptions) -> Vec<String> {
    let mut injected = Vec::with_capacity(INJECT_RESERVE);

    if state.substituted {
        if let Some(preset) = &state.preset {
            let entry = preset_or_default(preset);
            let usage = if state.low_latency {
                LOW_LATENCY_USAGE
            } else {
                entry.amf_usage
            };
            injected.extend([
                "-usage".to_string(),
                usage.to_string(),
                "-quality".to_string(),
                entry.amf_quality.to_string(),
            ]);
        }
    }

    if let Some(rc) = state.rate_control() {
        injected.extend(["-rc".to_string(), rc.as_str().to_string()]);
    }

    if state.substituted && !state.pix_fmt_specified {
        injected.extend(["-pix_fmt".to_string(), opts.default_pix_fmt.clone()]);
    }

    injected
}
