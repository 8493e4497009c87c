use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use crate::arch::Architecture;
use crate::config::Config;
use crate::constants::{container_path, image, jdk};


/// A one-shot container that executes a launch script and captures its
/// combined console output, ANSI codes preserved.
///
/// Construction validates the environment and fixtures; [`run`] drives the
/// docker CLI through build, create, copy, start, and a bounded poll loop
/// until the script exits. Dropping the harness force-removes the
/// container.
///
/// [`run`]: LaunchContainer::run
#[derive(Debug)]
pub struct LaunchContainer {
    image_tag: String,
    build_context: PathBuf,
    java_download_url: String,
    app_jar: PathBuf,
    test_functions: PathBuf,
    script_path: PathBuf,
    script: String,
    startup_timeout: Duration,
    poll_interval: Duration,
    container_id: Option<String>,
}

impl LaunchContainer {
    /// Assemble a container run for one (os, version, script) triple,
    /// failing before any docker invocation when the environment or the
    /// fixtures are unusable.
    pub fn new(
        os: &str,
        version: &str,
        scripts_dir: &str,
        script: &str,
        config: &Config,
    ) -> Result<Self> {
        let architecture = Architecture::current().with_context(|| {
            format!(
                "Failed to find current architecture. Platform label is: '{}'",
                Architecture::current_label()
            )
        })?;
        let java_download_url = architecture.java_download_url(config)?;

        let app_jar = config.app_jar.clone();
        if !app_jar.is_file() {
            bail!(
                "Could not find application jar at {}. Have you built it?",
                app_jar.display()
            );
        }

        let build_context = config.conf_root.join(os).join(version);
        let dockerfile = build_context.join("Dockerfile");
        if !dockerfile.is_file() {
            bail!(
                "No Dockerfile for {} {} at {}",
                os,
                version,
                dockerfile.display()
            );
        }

        let scripts = config.scripts_root.join(scripts_dir);
        let test_functions = scripts.join("test-functions.sh");
        if !test_functions.is_file() {
            bail!("Missing shell helpers at {}", test_functions.display());
        }
        let script_path = scripts.join(script);
        if !script_path.is_file() {
            bail!("Missing launch script at {}", script_path.display());
        }

        which::which("docker").context("Failed to find docker on PATH")?;

        Ok(Self {
            image_tag: format!(
                "{}/{}-{}",
                image::REPOSITORY_PREFIX,
                os.to_lowercase(),
                version
            ),
            build_context,
            java_download_url,
            app_jar,
            test_functions,
            script_path,
            script: script.to_string(),
            startup_timeout: Duration::from_secs(config.startup_timeout_secs),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            container_id: None,
        })
    }

    /// Build the image, run the launch script, and return everything the
    /// container printed.
    pub fn run(&mut self) -> Result<String> {
        self.build_image()?;
        let id = self.create_container()?;
        self.container_id = Some(id.clone());
        self.copy_fixtures(&id)?;
        self.start_container(&id)?;
        let logs = LogStream::attach(&id)?;
        let exit_code = self.wait_for_exit(&id)?;
        if exit_code != 0 {
            info!("Launch script exited with code {}", exit_code);
        }
        logs.collect()
    }

    fn build_image(&self) -> Result<()> {
        info!(
            "Building image {} from {}",
            self.image_tag,
            self.build_context.display()
        );
        let output = Command::new("docker")
            .arg("build")
            .arg("--tag")
            .arg(&self.image_tag)
            .arg("--build-arg")
            .arg(format!("{}={}", jdk::BUILD_ARG, self.java_download_url))
            .arg(&self.build_context)
            .output()
            .context("Failed to execute docker build")?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("docker build failed!");
            error!("stderr:\n{}", stderr);
            bail!("docker build of {} failed: {}", self.image_tag, stderr);
        }
        Ok(())
    }

    fn create_container(&self) -> Result<String> {
        let command = launch_command(&self.script);
        let output = Command::new("docker")
            .args(["create", &self.image_tag, "/bin/bash", "-c", &command])
            .output()
            .context("Failed to execute docker create")?;
        if !output.status.success() {
            bail!(
                "docker create failed: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!("Created container {}", id);
        Ok(id)
    }

    fn copy_fixtures(&self, id: &str) -> Result<()> {
        copy_in(id, &self.app_jar, container_path::APP_JAR)?;
        copy_in(id, &self.test_functions, container_path::TEST_FUNCTIONS)?;
        copy_in(id, &self.script_path, &format!("/{}", self.script))?;
        Ok(())
    }

    fn start_container(&self, id: &str) -> Result<()> {
        info!("Running {} in container {}", self.script, id);
        let output = Command::new("docker")
            .args(["start", id])
            .output()
            .context("Failed to execute docker start")?;
        if !output.status.success() {
            bail!(
                "docker start failed: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(())
    }

    /// Poll container liveness at a fixed interval until the script exits.
    /// The whole run is bounded by the one-shot startup timeout.
    fn wait_for_exit(&self, id: &str) -> Result<i64> {
        let deadline = Instant::now() + self.startup_timeout;
        loop {
            let state = inspect_state(id)?;
            if !state.running {
                debug!("Container {} exited with code {}", id, state.exit_code);
                return Ok(state.exit_code);
            }
            if Instant::now() >= deadline {
                bail!(
                    "Container {} did not finish within the {}s startup timeout",
                    id,
                    self.startup_timeout.as_secs()
                );
            }
            thread::sleep(self.poll_interval);
        }
    }
}

impl Drop for LaunchContainer {
    fn drop(&mut self) {
        if let Some(id) = self.container_id.take() {
            debug!("Removing container {}", id);
            match Command::new("docker").args(["rm", "--force", &id]).output() {
                Ok(output) if !output.status.success() => {
                    warn!(
                        "Failed to remove container {}: {}",
                        id,
                        String::from_utf8_lossy(&output.stderr)
                    );
                }
                Err(e) => warn!("Failed to remove container {}: {}", id, e),
                _ => {}
            }
        }
    }
}

/// The fixed shell command the container runs: fix ownership and
/// permissions, then execute the launch script from /
fn launch_command(script: &str) -> String {
    format!("chown root:root *.sh && chown root:root *.jar && chmod +x {script} && ./{script}")
}

#[derive(Debug, Deserialize)]
struct ContainerState {
    #[serde(rename = "Running")]
    running: bool,
    #[serde(rename = "ExitCode")]
    exit_code: i64,
}

fn inspect_state(id: &str) -> Result<ContainerState> {
    let output = Command::new("docker")
        .args(["inspect", "--format", "{{json .State}}", id])
        .output()
        .context("Failed to execute docker inspect")?;
    if !output.status.success() {
        bail!(
            "docker inspect of {} failed: {}",
            id,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    serde_json::from_slice(&output.stdout).context("Failed to parse docker inspect output")
}

fn copy_in(id: &str, src: &Path, dest: &str) -> Result<()> {
    debug!("Copying {} to {}:{}", src.display(), id, dest);
    let output = Command::new("docker")
        .arg("cp")
        .arg(src)
        .arg(format!("{}:{}", id, dest))
        .output()
        .context("Failed to execute docker cp")?;
    if !output.status.success() {
        bail!(
            "docker cp of {} to {} failed: {}",
            src.display(),
            dest,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(())
}

/// Follows `docker logs` on a background thread per stream, accumulating
/// raw bytes (ANSI codes intact) while forwarding each line to the
/// `docker` tracing target.
struct LogStream {
    child: Child,
    buffer: Arc<Mutex<Vec<u8>>>,
    readers: Vec<thread::JoinHandle<()>>,
}

impl LogStream {
    fn attach(id: &str) -> Result<Self> {
        let mut child = Command::new("docker")
            .args(["logs", "--follow", id])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .context("Failed to execute docker logs")?;
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let mut readers = Vec::new();

        let stdout = child
            .stdout
            .take()
            .context("docker logs produced no stdout handle")?;
        readers.push(Self::reader(stdout, Arc::clone(&buffer)));
        let stderr = child
            .stderr
            .take()
            .context("docker logs produced no stderr handle")?;
        readers.push(Self::reader(stderr, Arc::clone(&buffer)));

        Ok(Self {
            child,
            buffer,
            readers,
        })
    }

    fn reader<R>(stream: R, buffer: Arc<Mutex<Vec<u8>>>) -> thread::JoinHandle<()>
    where
        R: Read + Send + 'static,
    {
        thread::spawn(move || {
            let mut lines = BufReader::new(stream).split(b'\n');
            while let Some(Ok(mut line)) = lines.next() {
                debug!(target: "docker", "{}", String::from_utf8_lossy(&line));
                line.push(b'\n');
                if let Ok(mut buf) = buffer.lock() {
                    buf.extend_from_slice(&line);
                }
            }
        })
    }

    /// Wait for both streams to drain, then return the combined output.
    fn collect(mut self) -> Result<String> {
        self.drain();
        let buffer = self
            .buffer
            .lock()
            .map_err(|_| anyhow::anyhow!("Log buffer lock poisoned"))?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn drain(&mut self) {
        for reader in self.readers.drain(..) {
            let _ = reader.join();
        }
        let _ = self.child.wait();
    }
}

impl Drop for LogStream {
    fn drop(&mut self) {
        // On the timeout path the follower is still attached; killing it
        // unblocks the reader threads.
        let _ = self.child.kill();
        self.drain();
    }
}
