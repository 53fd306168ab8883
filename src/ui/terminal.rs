use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub is_github_actions: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();
    let is_ci = is_ci_env(&get_env);
    let is_github_actions = get_env("GITHUB_ACTIONS").is_some_and(|v| v == "true");

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
        is_ci,
        is_github_actions,
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TRAVIS",
        "TEAMCITY_VERSION",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
        }
    }

    // Default to true on modern systems unless explicitly "dumb".
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn caps(env: &[(&str, &str)], is_tty: bool) -> TerminalCapabilities {
        let map: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        detect_capabilities_impl(|k| map.get(k).cloned(), is_tty)
    }

    #[test]
    fn detect_respects_no_color() {
        let c = caps(&[("NO_COLOR", "1"), ("TERM", "xterm-256color")], true);
        assert!(!c.supports_color);
    }

    #[test]
    fn detect_no_color_when_piped() {
        let c = caps(&[("TERM", "xterm-256color")], false);
        assert!(!c.supports_color);
    }

    #[test]
    fn detect_github_actions() {
        let c = caps(&[("CI", "true"), ("GITHUB_ACTIONS", "true")], false);
        assert!(c.is_ci);
        assert!(c.is_github_actions);

        let c = caps(&[("CI", "true")], false);
        assert!(c.is_ci);
        assert!(!c.is_github_actions);
    }

    #[test]
    fn detect_term_dumb_disables_enhancements() {
        let c = caps(&[("TERM", "dumb")], true);
        assert!(!c.supports_color);
        assert!(!c.supports_unicode);
    }
}
