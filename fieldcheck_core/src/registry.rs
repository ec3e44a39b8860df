//! The process-wide field validator registry.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::normalize::{self, compile};
use crate::{Error, FieldKind, FieldValidator, Normalizer, Result, validate_and_normalize};

/// Two or three Cyrillic words, hyphenated sub-words allowed.
const NAME_PATTERN: &str = r"(?i)^(?:[а-я]+-)*[а-я]+ +(?:[а-я]+-)*[а-я]+(?: +(?:[а-я]+-)*[а-я]+)?$";

const GROUP_PATTERN: &str = concat!(
    r"(?i)^(?:",
    r"(?:иу|ибм|мт|см|бмт|рл|э|рк|фн|л|сгн|вуц|гуимц|уц|фмоп|фоф|исот|ркт|ак|пс|рт|лт|оэ|оэп)",
    r"[0-9]{1,2}и?-1[0-9][амб]?",
    r"|юр-1[0-9]",
    r")$",
);

// Case folding stays ASCII-only (`-u`) so signs like U+212A never pass for letters.
const TELEGRAM_PATTERN: &str = r"^(?:(?i-u:https://)?(?i-u:t\.me/)|@)?[0-9A-Za-z_]{5,}$";

const VK_PATTERN: &str = r"^(?i-u:https://)?(?:(?i-u:vk\.com/)|@)?(?:[0-9A-Za-z_]+\.)*[0-9A-Za-z_]+$";

const EMAIL_PATTERN: &str = concat!(
    r#"^(?:[^<>()\[\]\\.,;:\s@"]+(?:\.[^<>()\[\]\\.,;:\s@"]+)*|".+")"#,
    r"@(?:\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]|(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,})$",
);

const PHONE_PATTERN: &str =
    r"^(?:\+7|8)[-\s.]?(?:\([0-9]{3}\)|[0-9]{3})[-\s.]?[0-9]{3}[-\s.]?[0-9]{2}[-\s.]?[0-9]{2}$";

const PASSWORD_PATTERN: &str = r"^[^\n\r\x{2028}\x{2029}]{6,}$";

const ID_PATTERN: &str =
    r"^#?[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}$";

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::build);

/// Immutable mapping from [`FieldKind`] to its [`FieldValidator`].
#[derive(Debug)]
pub struct Registry {
    entries: [FieldValidator; FieldKind::COUNT],
}

impl Registry {
    /// The shared registry, built on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    fn build() -> Self {
        debug!("Building field validator registry");
        let entries = FieldKind::ALL.map(|kind| {
            let (pattern, normalizer): (&str, Option<Normalizer>) = match kind {
                FieldKind::Name => (NAME_PATTERN, Some(normalize::name)),
                FieldKind::Group => (GROUP_PATTERN, Some(normalize::group)),
                FieldKind::Telegram => (TELEGRAM_PATTERN, Some(normalize::telegram)),
                FieldKind::Vk => (VK_PATTERN, Some(normalize::vk)),
                FieldKind::Email => (EMAIL_PATTERN, Some(normalize::email)),
                FieldKind::Phone => (PHONE_PATTERN, Some(normalize::phone)),
                FieldKind::Password => (PASSWORD_PATTERN, None),
                FieldKind::Id => (ID_PATTERN, Some(normalize::id)),
            };
            FieldValidator::new(kind, Some(compile(pattern)), normalizer)
        });
        Self { entries }
    }

    #[must_use]
    pub const fn get(&self, kind: FieldKind) -> &FieldValidator {
        &self.entries[kind.index()]
    }

    /// Look an entry up by its wire name (`"email"`, `"tg"`, ...).
    pub fn lookup(&self, name: &str) -> Result<&FieldValidator> {
        let kind: FieldKind = name.parse()?;
        Ok(self.get(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValidator> {
        self.entries.iter()
    }
}

impl FieldKind {
    /// Validate and normalize `raw` with this kind's registry entry.
    #[must_use]
    pub fn validate(self, raw: &str) -> Option<String> {
        validate_and_normalize(Registry::global().get(self), raw)
    }

    /// Like [`FieldKind::validate`], but a mismatch is an [`Error::NoMatch`].
    pub fn require(self, raw: &str) -> Result<String> {
        self.validate(raw).ok_or(Error::NoMatch { kind: self })
    }
}
