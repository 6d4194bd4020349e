//! Property-test run profile parsing for CI and local overrides.
//!
//! Every property suite in the workspace reads its case count, fork mode and
//! generated graph size ceiling from here, so one set of environment
//! variables tunes them all.

use std::env;

/// Environment variable controlling proptest case counts.
pub const GRAPHKIT_PBT_CASES_ENV_KEY: &str = "GRAPHKIT_PBT_CASES";
/// Environment variable controlling proptest process forking.
pub const GRAPHKIT_PBT_FORK_ENV_KEY: &str = "GRAPHKIT_PBT_FORK";
/// Environment variable capping the node count of generated graphs.
pub const GRAPHKIT_PBT_MAX_NODES_ENV_KEY: &str = "GRAPHKIT_PBT_MAX_NODES";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
    max_nodes: Option<usize>,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// Invalid overrides are logged at `WARN` and replaced by the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphkit_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// assert!(profile.max_nodes_or(32) > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        let cases = read_env_or_default(GRAPHKIT_PBT_CASES_ENV_KEY, default_cases, parse_cases);
        let fork = read_env_or_default(GRAPHKIT_PBT_FORK_ENV_KEY, default_fork, parse_bool);
        let max_nodes =
            read_env_or_default(GRAPHKIT_PBT_MAX_NODES_ENV_KEY, None, |raw| parse_max_nodes(raw).map(Some));
        Self {
            cases,
            fork,
            max_nodes,
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }

    /// Node ceiling requested through the environment, if any.
    #[must_use]
    pub const fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    /// Node ceiling for generated graphs, falling back to `default_nodes`.
    #[must_use]
    pub fn max_nodes_or(&self, default_nodes: usize) -> usize {
        self.max_nodes.unwrap_or(default_nodes)
    }
}

fn read_env_or_default<T, F>(key: &'static str, default: T, parser: F) -> T
where
    T: Copy,
    F: Fn(&str) -> Result<T, String>,
{
    match env::var(key) {
        Ok(raw) => match parser(&raw) {
            Ok(value) => value,
            Err(reason) => {
                tracing::warn!(
                    env = key,
                    raw = %raw,
                    reason = %reason,
                    "invalid property-test profile override; using default",
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_positive<T>(raw: &str, what: &str) -> Result<T, String>
where
    T: std::str::FromStr + PartialEq + Default,
    T::Err: std::fmt::Display,
{
    let parsed = raw
        .trim()
        .parse::<T>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == T::default() {
        return Err(format!("{what} must be > 0"));
    }
    Ok(parsed)
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    parse_positive(raw, "cases")
}

fn parse_max_nodes(raw: &str) -> Result<usize, String> {
    parse_positive(raw, "max nodes")
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    let normalized = raw.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
