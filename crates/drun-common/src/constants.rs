//! Fixed values shared by the synthesizer, the daemon backend and the CLI.

/// Binary name for the CLI.
pub const BIN_NAME: &str = "drun";

/// Default daemon CLI binary, resolved through `PATH`.
pub const DEFAULT_DOCKER_BINARY: &str = "docker";

/// Environment variable that overrides the daemon CLI binary.
pub const DOCKER_BINARY_ENV: &str = "DRUN_DOCKER";

/// Prefix the daemon puts in front of container names.
pub const NAME_SEPARATOR: char = '/';

/// Network mode the daemon reports when none was chosen explicitly.
pub const DEFAULT_NETWORK_MODE: &str = "default";

/// Environment entries injected by the daemon or the base image.
///
/// Matched as case-sensitive `KEY=` prefixes. Keep this list at exactly
/// these four keys.
pub const ENV_DENY_LIST: [&str; 4] = ["PATH=", "HOSTNAME=", "HOME=", "TERM="];

/// Subcommand of the daemon CLI that launches a container.
pub const RUN_SUBCOMMAND: &str = "run";

/// Token that launches the container detached.
pub const DETACH_FLAG: &str = "-d";
/// Flag carrying the container name.
pub const NAME_FLAG: &str = "--name";
/// Flag carrying the restart policy name.
pub const RESTART_FLAG: &str = "--restart";
/// Flag carrying a bind mount.
pub const VOLUME_FLAG: &str = "-v";
/// Flag carrying a port publication.
pub const PUBLISH_FLAG: &str = "-p";
/// Flag carrying an environment entry.
pub const ENV_FLAG: &str = "-e";
/// Flag granting extended privileges.
pub const PRIVILEGED_FLAG: &str = "--privileged";
/// Flag publishing every exposed port on a random host port.
pub const PUBLISH_ALL_FLAG: &str = "-P";
/// Flag carrying the network mode.
pub const NETWORK_FLAG: &str = "--network";

/// Prompt shown before the synthesized command is executed.
pub const CONFIRM_PROMPT: &str = "Do you want to execute this command? (y/N): ";

/// Answers accepted by the confirmation prompt, compared lowercase.
pub const CONFIRM_ANSWERS: [&str; 2] = ["y", "yes"];
