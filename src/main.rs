use anyhow::Result;
use clap::Parser;
use launchtest::{
    ansi,
    cli::{Cli, Commands},
    config::Config,
    container::LaunchContainer,
    params::parameters,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Params { conf_root, os } => {
            let config = Config::load()?;
            let root = conf_root.unwrap_or(config.conf_root);
            let filter = os.unwrap_or_default();
            for (os, version) in parameters(&root, |name| name.contains(&filter))? {
                println!("{}/{}", os, version);
            }
        }
        Commands::Run {
            os,
            version,
            script,
            scripts_dir,
            app_jar,
        } => {
            let mut config = Config::load()?;
            if let Some(app_jar) = app_jar {
                config.app_jar = app_jar;
            }

            info!("Launching {} {} with {}", os, version, script);
            let mut container =
                LaunchContainer::new(&os, &version, &scripts_dir, &script, &config)?;
            let output = container.run()?;
            print!("{}", output);

            if !ansi::launched(&output) {
                error!("Launch script did not report 'Launched'");
                std::process::exit(1);
            }
            info!("Launch script reported success");
        }
        Commands::Version => {
            println!("launchtest {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
