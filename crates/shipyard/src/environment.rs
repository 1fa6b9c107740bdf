use std::io::IsTerminal;
use std::path::Path;

use shipyard_operations::RuntimeEnvironment;

pub(crate) const CI_VAR: &str = "CI";
pub(crate) const OTP_VAR: &str = "NPM_OTP";
pub(crate) const LAUNCHER_VAR: &str = "npm_execpath";
pub(crate) const NO_TTY_VAR: &str = "SHIPYARD_NO_TTY";
pub(crate) const FORCE_TTY_VAR: &str = "SHIPYARD_FORCE_TTY";

/// Reads the process environment once, at startup.
pub(crate) fn detect() -> RuntimeEnvironment {
    from_lookup(|key| std::env::var(key).ok(), std::io::stdin().is_terminal())
}

fn from_lookup<F>(lookup: F, stdin_is_terminal: bool) -> RuntimeEnvironment
where
    F: Fn(&str) -> Option<String>,
{
    let ci = lookup(CI_VAR).is_some_and(|value| is_affirmative(&value));

    let one_time_password = lookup(OTP_VAR)
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty());

    let launcher = lookup(LAUNCHER_VAR).and_then(|path| {
        Path::new(&path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    });

    let interactive = lookup(NO_TTY_VAR).is_none()
        && (lookup(FORCE_TTY_VAR).is_some() || stdin_is_terminal);

    RuntimeEnvironment {
        ci,
        one_time_password,
        launcher,
        interactive,
    }
}

fn is_affirmative(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_with(vars: &[(&str, &str)], stdin_is_terminal: bool) -> RuntimeEnvironment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        from_lookup(|key| map.get(key).cloned(), stdin_is_terminal)
    }

    mod ci_detection {
        use super::*;

        #[test]
        fn unset_is_not_ci() {
            assert!(!env_with(&[], true).ci);
        }

        #[test]
        fn affirmative_values_are_ci() {
            for value in ["true", "TRUE", "1", "yes", " Yes "] {
                assert!(env_with(&[("CI", value)], true).ci, "{value:?}");
            }
        }

        #[test]
        fn other_values_are_not_ci() {
            for value in ["false", "0", "", "no"] {
                assert!(!env_with(&[("CI", value)], true).ci, "{value:?}");
            }
        }
    }

    mod one_time_password {
        use super::*;

        #[test]
        fn taken_from_npm_otp() {
            let env = env_with(&[("NPM_OTP", "123456")], false);

            assert_eq!(env.one_time_password.as_deref(), Some("123456"));
        }

        #[test]
        fn blank_value_is_ignored() {
            let env = env_with(&[("NPM_OTP", "  ")], false);

            assert!(env.one_time_password.is_none());
        }
    }

    mod launcher {
        use super::*;

        #[test]
        fn uses_file_name_of_execpath() {
            let env = env_with(
                &[("npm_execpath", "/usr/lib/node_modules/npm/bin/npm-cli.js")],
                true,
            );

            assert_eq!(env.launcher.as_deref(), Some("npm-cli.js"));
            assert!(env.launched_by_npm());
        }

        #[test]
        fn yarn_is_not_npm() {
            let env = env_with(
                &[("npm_execpath", "/usr/lib/node_modules/yarn/bin/yarn.js")],
                true,
            );

            assert!(!env.launched_by_npm());
        }

        #[test]
        fn missing_execpath_has_no_launcher() {
            assert!(env_with(&[], true).launcher.is_none());
        }
    }

    mod interactivity {
        use super::*;

        #[test]
        fn terminal_stdin_is_interactive() {
            assert!(env_with(&[], true).interactive);
        }

        #[test]
        fn piped_stdin_is_not_interactive() {
            assert!(!env_with(&[], false).interactive);
        }

        #[test]
        fn force_tty_overrides_piped_stdin() {
            assert!(env_with(&[("SHIPYARD_FORCE_TTY", "1")], false).interactive);
        }

        #[test]
        fn no_tty_takes_highest_priority() {
            let env = env_with(&[("SHIPYARD_NO_TTY", "1"), ("SHIPYARD_FORCE_TTY", "1")], true);

            assert!(!env.interactive);
        }

        #[test]
        fn ci_does_not_disable_a_real_terminal() {
            assert!(env_with(&[("CI", "true")], true).interactive);
        }
    }
}
