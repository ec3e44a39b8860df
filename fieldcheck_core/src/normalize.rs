//! Canonicalization applied to values that already passed their pattern.
//!
//! Every "strip" step removes the first occurrence only.

use once_cell::sync::Lazy;
use regex::Regex;

/// Compile a regex literal owned by this crate.
#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Static regex pattern is guaranteed to be valid")
}

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| compile(r" {2,}"));
static HTTPS_SCHEME: Lazy<Regex> = Lazy::new(|| compile(r"(?i-u)https://"));
static TG_HOST: Lazy<Regex> = Lazy::new(|| compile(r"(?i-u)t\.me/"));
static VK_HOST: Lazy<Regex> = Lazy::new(|| compile(r"(?i-u)vk\.com/"));

fn strip_first(s: &str, needle: &str) -> String {
    s.replacen(needle, "", 1)
}

pub(crate) fn name(s: &str) -> String {
    SPACE_RUN.replace_all(s, " ").into_owned()
}

pub(crate) fn group(s: &str) -> String {
    s.to_uppercase()
}

pub(crate) fn telegram(s: &str) -> String {
    let s = HTTPS_SCHEME.replace(s, "");
    let s = TG_HOST.replace(&s, "");
    strip_first(&s, "@")
}

pub(crate) fn vk(s: &str) -> String {
    let s = HTTPS_SCHEME.replace(s, "");
    let s = VK_HOST.replace(&s, "");
    strip_first(&s, "@")
}

pub(crate) fn email(s: &str) -> String {
    s.to_lowercase()
}

// Only the first '-', '(' and ')' go; "+7(999)123-45-67" keeps its later dashes.
pub(crate) fn phone(s: &str) -> String {
    let s = s.replacen("+7", "8", 1);
    let s = strip_first(&s, "-");
    let s = strip_first(&s, "(");
    strip_first(&s, ")")
}

pub(crate) fn id(s: &str) -> String {
    strip_first(s, "#").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_collapses_space_runs_only() {
        assert_eq!(name("иван   петрович  иванов"), "иван петрович иванов");
        assert_eq!(name("иван\t\tиванов"), "иван\t\tиванов");
    }

    #[test]
    fn telegram_strips_link_parts_case_insensitively() {
        assert_eq!(telegram("HTTPS://T.ME/ivanov123"), "ivanov123");
        assert_eq!(telegram("@ivanov123"), "ivanov123");
        assert_eq!(telegram("ivanov123"), "ivanov123");
    }

    #[test]
    fn vk_strips_link_parts() {
        assert_eq!(vk("https://vk.com/id.petrov"), "id.petrov");
        assert_eq!(vk("@durov"), "durov");
    }

    #[test]
    fn phone_strips_first_occurrence_only() {
        assert_eq!(phone("+7(999)1234567"), "89991234567");
        assert_eq!(phone("+7(999)123-45-67"), "899912345-67");
        assert_eq!(phone("8-999-123-45-67"), "8999-123-45-67");
    }

    #[test]
    fn id_strips_hash_and_lowercases() {
        assert_eq!(
            id("#1A2B3C4D-1A2B-1A2B-1A2B-1A2B3C4D5E6F"),
            "1a2b3c4d-1a2b-1a2b-1a2b-1a2b3c4d5e6f"
        );
    }

    #[test]
    fn case_folding_normalizers() {
        assert_eq!(group("мт01-18а"), "МТ01-18А");
        assert_eq!(email("USER@Example.com"), "user@example.com");
    }
}
