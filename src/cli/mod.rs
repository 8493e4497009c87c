use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "launchtest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the (OS, version) pairs found under the configuration root
    Params {
        /// Configuration root holding <OS>/<version>/Dockerfile trees
        #[arg(long)]
        conf_root: Option<PathBuf>,

        /// Only include OS directories whose name contains this substring
        #[arg(long)]
        os: Option<String>,
    },

    /// Build and run one launch-script scenario in a container
    Run {
        /// OS directory name, e.g. Ubuntu
        #[arg(long)]
        os: String,

        /// Version directory name, e.g. jammy-20230624
        #[arg(long)]
        version: String,

        /// Launch script to execute, e.g. test-launch.sh
        #[arg(long)]
        script: String,

        /// Scripts subdirectory holding test-functions.sh and the script
        #[arg(long, default_value = "jar")]
        scripts_dir: String,

        /// Path to the packaged application jar
        #[arg(long, env = "LAUNCHTEST_APP_JAR")]
        app_jar: Option<PathBuf>,
    },

    /// Show version information
    Version,
}
