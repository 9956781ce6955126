mod cmdline;
mod flags;
mod invocation;
mod log;
mod preset;
mod rewrite;
mod types;

pub use cmdline::{CommandLine, MAX_CMD, serialize, serialize_with_program, split};
pub use flags::{is_flag, is_switch};
pub use invocation::Invocation;
pub use log::{LOG_ENV, init_tracing, render_run_log, run_log_file_name, write_run_log};
pub use preset::{DEFAULT_PRESET, PRESET_TABLE, PresetEntry, find_preset, preset_or_default};
pub use rewrite::{find_output_index, rewrite};
pub use types::{
    CRF_QUALITY_THRESHOLD, DEFAULT_PIX_FMT, DEFAULT_RTBUFSIZE, DEFAULT_TARGET_ENCODER,
    INJECT_RESERVE, LOW_LATENCY_USAGE, MAX_ARGS, RateControl, Rewrite, TranslateOptions,
};
