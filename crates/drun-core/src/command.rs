//! Synthesized `run` command and its rendering.

use std::fmt;

use drun_common::constants::{DEFAULT_DOCKER_BINARY, RUN_SUBCOMMAND};
use serde::{Deserialize, Serialize};

/// Arguments that follow `<daemon> run` to recreate a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunCommand {
    tokens: Vec<String>,
}

impl RunCommand {
    /// Wraps an already ordered token list.
    #[must_use]
    pub const fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Returns the tokens passed after the `run` subcommand.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the full argument vector for the daemon CLI, `run` included.
    #[must_use]
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(RUN_SUBCOMMAND)
            .chain(self.tokens.iter().map(String::as_str))
            .collect()
    }

    /// Renders the command as a single shell line for the given program.
    #[must_use]
    pub fn to_shell_line(&self, program: &str) -> String {
        std::iter::once(program)
            .chain(self.argv())
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for RunCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell_line(DEFAULT_DOCKER_BINARY))
    }
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c)
}

/// Quotes a token for POSIX shells when it contains anything unsafe.
#[must_use]
pub fn shell_quote(token: &str) -> String {
    if !token.is_empty() && token.chars().all(is_shell_safe) {
        return token.to_owned();
    }
    format!("'{}'", token.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(tokens: &[&str]) -> RunCommand {
        RunCommand::new(tokens.iter().map(|t| (*t).to_owned()).collect())
    }

    #[test]
    fn argv_starts_with_run() {
        let c = cmd(&["-d", "--name", "web", "nginx"]);
        assert_eq!(c.argv(), ["run", "-d", "--name", "web", "nginx"]);
    }

    #[test]
    fn display_prefixes_docker_run() {
        let c = cmd(&["-d", "-p", "8080:80/tcp", "nginx:latest"]);
        assert_eq!(c.to_string(), "docker run -d -p 8080:80/tcp nginx:latest");
    }

    #[test]
    fn shell_line_quotes_unsafe_tokens() {
        let c = cmd(&["-d", "-e", "GREETING=hello world", "alpine", "sh", "-c", "echo it's"]);
        assert_eq!(
            c.to_shell_line("podman"),
            r"podman run -d -e 'GREETING=hello world' alpine sh -c 'echo it'\''s'"
        );
    }

    #[test]
    fn empty_token_is_quoted() {
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn serializes_as_token_array() {
        let c = cmd(&["-d", "busybox"]);
        assert_eq!(serde_json::to_string(&c).unwrap(), r#"["-d","busybox"]"#);
    }
}
