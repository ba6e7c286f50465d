//! Environment variable substitution and API key resolution.

use super::types::Config;
use crate::error::CcError;

impl Config {
    /// Resolve {env:VAR_NAME} patterns in string fields.
    pub(super) fn resolve_substitutions(&mut self) {
        self.model = Self::resolve_str(&self.model);
        self.api_key_env = Self::resolve_str(&self.api_key_env);
        if let Some(ref mut url) = self.base_url {
            *url = Self::resolve_str(url);
        }
        if let Some(ref mut sp) = self.system_prompt {
            *sp = Self::resolve_str(sp);
        }
    }

    /// Replace {env:VAR} with the environment variable value.
    ///
    /// Substituted values are not scanned again.
    fn resolve_str(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        let mut rest = s;
        while let Some(start) = rest.find("{env:") {
            let Some(end) = rest[start..].find('}') else {
                break;
            };
            let var_name = &rest[start + 5..start + end];
            result.push_str(&rest[..start]);
            result.push_str(&std::env::var(var_name).unwrap_or_default());
            rest = &rest[start + end + 1..];
        }
        result.push_str(rest);
        result
    }

    /// Read the API key from the configured environment variable.
    ///
    /// An empty value counts as missing.
    pub fn resolve_api_key(&self) -> Result<String, CcError> {
        match std::env::var(&self.api_key_env) {
            Ok(val) if !val.trim().is_empty() => Ok(val),
            _ => Err(CcError::MissingCredential {
                var: self.api_key_env.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_str_replaces_each_placeholder() {
        std::env::set_var("CC_TEST_SUBST_A", "alpha");
        assert_eq!(
            Config::resolve_str("x-{env:CC_TEST_SUBST_A}-{env:CC_TEST_SUBST_UNSET_ZZ}-y"),
            "x-alpha--y"
        );
        assert_eq!(Config::resolve_str("open {env:NO_CLOSE"), "open {env:NO_CLOSE");
    }

    #[test]
    fn test_self_referencing_value_is_not_expanded_again() {
        std::env::set_var("CC_TEST_SUBST_LOOP", "{env:CC_TEST_SUBST_LOOP}");
        assert_eq!(
            Config::resolve_str("{env:CC_TEST_SUBST_LOOP}!"),
            "{env:CC_TEST_SUBST_LOOP}!"
        );
    }
}
