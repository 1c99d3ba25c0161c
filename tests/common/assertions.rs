//! Custom assertion macros for CLI and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that command output (stdout + stderr) contains a string.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let output = $result.combined_output();
        assert!(
            output.contains($needle),
            "Expected output to contain '{}'.\nOutput:\n{}",
            $needle,
            output
        );
    };
}

/// Assert that a project file contains a string.
#[macro_export]
macro_rules! assert_file_contains {
    ($env:expr, $path:expr, $needle:expr) => {
        let content = $env.read_project_file($path);
        assert!(
            content.contains($needle),
            "Expected '{}' to contain '{}'.\nContent:\n{}",
            $path,
            $needle,
            content
        );
    };
}

/// Assert that a command failed with a non-zero exit code.
#[macro_export]
macro_rules! assert_failed {
    ($result:expr) => {
        assert!(
            !$result.success,
            "Expected command to fail.\nstdout:\n{}\nstderr:\n{}",
            $result.stdout,
            $result.stderr
        );
    };
}
