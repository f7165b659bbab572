use super::GIT_COMMIT_HASH;

/// Version label shown in the auth side panel, e.g. `v0.1.0 · 1a2b3c4`.
pub fn version_label() -> String {
    format_version(env!("CARGO_PKG_VERSION"), GIT_COMMIT_HASH)
}

fn format_version(version: &str, commit: &str) -> String {
    let short = short_commit(commit);
    if short.is_empty() || short == "unknown" {
        format!("v{version}")
    } else {
        format!("v{version} · {short}")
    }
}

fn short_commit(hash: &str) -> &str {
    let trimmed = hash.trim();
    trimmed.get(..7).unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::format_version;

    #[test]
    fn format_version_shortens_commit() {
        assert_eq!(
            format_version("0.1.0", "1a2b3c4d5e6f7a8b"),
            "v0.1.0 · 1a2b3c4"
        );
    }

    #[test]
    fn format_version_omits_unknown_commit() {
        assert_eq!(format_version("0.1.0", "unknown"), "v0.1.0");
        assert_eq!(format_version("0.1.0", "  "), "v0.1.0");
    }
}
