use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "titler")]
#[command(about = "Generate a short title for a list of ideas")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// JSON array of {"title": ..., "description": ...} records
    #[arg(allow_hyphen_values = true)]
    pub ideas: String,
}
