//! Docker-backed end-to-end scenario. Needs a docker daemon, network
//! access for the JDK download, and a packaged application at
//! resources/app.jar, so it is ignored by default:
//!
//!     cargo test --test launch_e2e_test -- --ignored

use launchtest::ansi::{self, AnsiColor};
use launchtest::config::Config;
use launchtest::container::LaunchContainer;

#[test]
#[ignore = "requires docker and resources/app.jar"]
fn test_ubuntu_jammy_launch() {
    let config = Config::default();
    let mut container =
        LaunchContainer::new("Ubuntu", "jammy-20230624", "jar", "test-launch.sh", &config)
            .expect("harness construction failed");
    let output = container.run().expect("container run failed");

    assert!(
        ansi::contains_colored(&output, AnsiColor::Green, "Started app"),
        "output did not contain the green 'Started app' line:\n{output}"
    );
    assert!(
        ansi::launched(&output),
        "output did not contain 'Launched':\n{output}"
    );
}
