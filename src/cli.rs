use clap::Parser;
use std::ffi::OsString;

/// amfproxy stands in for ffmpeg, so it has no options of its own. Every
/// argument, flags included, is captured and handed to the rewriter.
#[derive(Parser, Debug)]
#[command(name = "amfproxy")]
#[command(about = "ffmpeg proxy translating libx264 to h264_amf", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Arguments meant for ffmpeg
    #[arg(
        value_name = "FFMPEG_ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    /// The captured arguments as text. Invalid UTF-8 becomes U+FFFD.
    pub fn ffmpeg_args(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
