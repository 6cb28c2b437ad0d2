const SECTIONS: [&str; 3] = ["BACKEND", "FORM", "SERVER"];

/// Warn about `SALP_*` env vars that figment silently ignores because they
/// use a single underscore between section and key.
pub fn warn_misspelled_env() {
    for warning in collect_env_warnings(std::env::vars().map(|(key, _)| key)) {
        tracing::warn!("{warning}");
    }
}

fn collect_env_warnings<I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    keys.into_iter()
        .filter_map(|key| {
            let rest = key.strip_prefix("SALP_")?;
            let section = SECTIONS.iter().find(|section| {
                rest.strip_prefix(**section)
                    .is_some_and(|tail| tail.starts_with('_') && !tail.starts_with("__"))
            })?;
            let field = &rest[section.len() + 1..];
            Some(format!(
                "{key} is ignored. Use double underscores (example: SALP_{section}__{field})."
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::collect_env_warnings;

    #[test]
    fn warns_for_single_underscore_section_keys() {
        let warnings = collect_env_warnings(vec![
            "SALP_BACKEND_ENDPOINT".to_string(),
            "SALP_FORM_NUMERIC_POLICY".to_string(),
        ]);
        assert_eq!(
            warnings,
            vec![
                "SALP_BACKEND_ENDPOINT is ignored. Use double underscores (example: SALP_BACKEND__ENDPOINT).",
                "SALP_FORM_NUMERIC_POLICY is ignored. Use double underscores (example: SALP_FORM__NUMERIC_POLICY).",
            ]
        );
    }

    #[test]
    fn does_not_warn_for_well_formed_or_unrelated_keys() {
        let warnings = collect_env_warnings(vec![
            "SALP_BACKEND__ENDPOINT".to_string(),
            "SALP_SERVER__ADDR".to_string(),
            "SALP_LOG".to_string(),
            "PATH".to_string(),
        ]);
        assert!(warnings.is_empty());
    }
}
