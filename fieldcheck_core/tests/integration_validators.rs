//! Integration tests for the field validator registry.
//!
//! These tests verify that:
//! - Every kind accepts well-formed values and rejects malformed ones
//! - Normalizers produce the canonical form and are idempotent where expected
//! - Matching trims the input while normalization keeps it intact

use fieldcheck_core::{FieldKind, Registry, validate_and_normalize};

fn check(kind: FieldKind, raw: &str) -> Option<String> {
    validate_and_normalize(Registry::global().get(kind), raw)
}

#[test]
fn test_name_collapses_double_spaces() {
    assert_eq!(check(FieldKind::Name, "иван  иванов"), Some("иван иванов".to_string()));
}

#[test]
fn test_name_accepts_two_or_three_words() {
    assert!(check(FieldKind::Name, "Иван Иванов").is_some());
    assert!(check(FieldKind::Name, "Анна-Мария Петрова Сергеевна").is_some());
    assert!(check(FieldKind::Name, "Иван").is_none());
    assert!(check(FieldKind::Name, "Иван Петрович Иванов Младший").is_none());
    assert!(check(FieldKind::Name, "Ivan Ivanov").is_none());
    assert!(check(FieldKind::Name, "Иван -Иванов").is_none());
}

#[test]
fn test_group_is_uppercased() {
    assert_eq!(check(FieldKind::Group, "мт01-18а"), Some("МТ01-18А".to_string()));
    assert!(check(FieldKind::Group, "МТ01-18").is_some());
    assert!(check(FieldKind::Group, "xy01-18").is_none());
}

#[test]
fn test_telegram_link_forms() {
    assert_eq!(
        check(FieldKind::Telegram, "https://t.me/ivanov123"),
        Some("ivanov123".to_string())
    );
    assert_eq!(check(FieldKind::Telegram, "t.me/ivanov123"), Some("ivanov123".to_string()));
    assert_eq!(check(FieldKind::Telegram, "@ivan_ov"), Some("ivan_ov".to_string()));
    assert!(check(FieldKind::Telegram, "@ivan").is_none());
    assert!(check(FieldKind::Telegram, "https://ivanov123").is_none());
    assert!(check(FieldKind::Telegram, "иванов123").is_none());
}

#[test]
fn test_vk_link_forms() {
    assert_eq!(check(FieldKind::Vk, "https://vk.com/durov"), Some("durov".to_string()));
    assert_eq!(check(FieldKind::Vk, "@id.1234"), Some("id.1234".to_string()));
    assert_eq!(check(FieldKind::Vk, "durov"), Some("durov".to_string()));
    assert!(check(FieldKind::Vk, "vk.com/").is_none());
    assert!(check(FieldKind::Vk, "du..rov").is_none());
}

#[test]
fn test_email_shapes() {
    assert_eq!(
        check(FieldKind::Email, "USER@Example.com"),
        Some("user@example.com".to_string())
    );
    assert!(check(FieldKind::Email, "first.last@sub.domain.org").is_some());
    assert!(check(FieldKind::Email, "root@[192.168.0.1]").is_some());
    assert!(check(FieldKind::Email, "\"odd name\"@example.com").is_some());
    assert!(check(FieldKind::Email, "not-an-email").is_none());
    assert!(check(FieldKind::Email, "a@b.c").is_none());
    assert!(check(FieldKind::Email, "a..b@example.com").is_none());
}

#[test]
fn test_phone_replicates_first_occurrence_stripping() {
    assert_eq!(check(FieldKind::Phone, "+7(999)1234567"), Some("89991234567".to_string()));
    assert_eq!(
        check(FieldKind::Phone, "+7(999)123-45-67"),
        Some("899912345-67".to_string())
    );
    assert_eq!(
        check(FieldKind::Phone, "8 999 123 45 67"),
        Some("8 999 123 45 67".to_string())
    );
    assert!(check(FieldKind::Phone, "+1(999)1234567").is_none());
    assert!(check(FieldKind::Phone, "8999123456").is_none());
}

#[test]
fn test_password_length_only() {
    assert_eq!(check(FieldKind::Password, "aB3$ z"), Some("aB3$ z".to_string()));
    assert!(check(FieldKind::Password, "пароль").is_some());
    assert!(check(FieldKind::Password, "12345").is_none());
    assert!(check(FieldKind::Password, "  12345  ").is_none());
    assert!(check(FieldKind::Password, "\u{FEFF}12345").is_none());
    assert!(check(FieldKind::Password, "😀😀😀").is_none());
}

#[test]
fn test_id_strips_hash_and_lowercases() {
    assert_eq!(
        check(FieldKind::Id, "#1A2B3C4D-1A2B-1A2B-1A2B-1A2B3C4D5E6F"),
        Some("1a2b3c4d-1a2b-1a2b-1a2b-1a2b3c4d5e6f".to_string())
    );
    assert!(check(FieldKind::Id, "1a2b3c4d-1a2b-1a2b-1a2b-1a2b3c4d5e6").is_none());
    assert!(check(FieldKind::Id, "1a2b3c4d1a2b1a2b1a2b1a2b3c4d5e6f").is_none());
}

#[test]
fn test_normalization_keeps_surrounding_whitespace() {
    assert_eq!(
        check(FieldKind::Email, "  USER@Example.com "),
        Some("  user@example.com ".to_string())
    );
    assert_eq!(check(FieldKind::Group, " мт01-18а"), Some(" МТ01-18А".to_string()));
}

#[test]
fn test_normalization_is_idempotent() {
    let samples = [
        (FieldKind::Email, "USER@Example.com"),
        (FieldKind::Group, "мт01-18а"),
        (FieldKind::Id, "#1A2B3C4D-1A2B-1A2B-1A2B-1A2B3C4D5E6F"),
        (FieldKind::Telegram, "https://t.me/ivanov123"),
        (FieldKind::Vk, "https://vk.com/durov"),
        (FieldKind::Phone, "+79991234567"),
    ];

    for (kind, raw) in samples {
        let Some(once) = check(kind, raw) else {
            panic!("{raw} should be a valid {kind}");
        };
        assert_eq!(check(kind, &once).as_deref(), Some(once.as_str()), "{kind}");
    }
}

#[test]
fn test_lookup_by_string_key() {
    let entry = match Registry::global().lookup("email") {
        Ok(entry) => entry,
        Err(e) => panic!("email should be registered: {e}"),
    };
    assert_eq!(entry.kind(), FieldKind::Email);
    assert!(Registry::global().lookup("fax").is_err());
}
