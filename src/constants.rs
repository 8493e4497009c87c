/// Fixed paths inside the launch container
pub mod container_path {
    /// Destination of the packaged application
    pub const APP_JAR: &str = "/app.jar";

    /// Destination of the shared shell helpers
    pub const TEST_FUNCTIONS: &str = "/test-functions.sh";
}

/// Timing for the one-shot startup check
pub mod timing {
    /// Upper bound on a single container run, in seconds
    pub const STARTUP_TIMEOUT_SECS: u64 = 300;

    /// Interval between container liveness polls, in milliseconds
    pub const POLL_INTERVAL_MS: u64 = 100;
}

/// JDK provisioning for image builds
pub mod jdk {
    /// Build argument carrying the JDK download URL into the Dockerfile
    pub const BUILD_ARG: &str = "JAVA_DOWNLOAD_URL";

    /// JDK tarball for amd64 hosts
    pub const AMD64_URL: &str =
        "https://download.bell-sw.com/java/8u382+6/bellsoft-jdk8u382+6-linux-amd64.tar.gz";

    /// JDK tarball for aarch64 hosts
    pub const AARCH64_URL: &str =
        "https://download.bell-sw.com/java/8u382+6/bellsoft-jdk8u382+6-linux-aarch64.tar.gz";
}

/// Naming for images built by the harness
pub mod image {
    /// Repository prefix for images built from conf/ Dockerfiles
    pub const REPOSITORY_PREFIX: &str = "launchtest";
}
