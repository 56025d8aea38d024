use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::{debug, warn};

/// Environment variables that override the system locale, highest priority first.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Errors returned when a locale tag cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("locale tag is empty")]
    Empty,

    #[error("invalid language subtag '{0}'")]
    InvalidLanguage(String),

    #[error("invalid region subtag '{0}'")]
    InvalidRegion(String),
}

/// A language plus optional region, e.g. `en_US` or `de`.
///
/// Language is stored lowercase and region uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    pub language: String,
    pub region: Option<String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    pub fn new(
        language: impl Into<String>,
        region: Option<&str>,
    ) -> Self {
        Self {
            language: language.into().to_ascii_lowercase(),
            region: region.map(str::to_ascii_uppercase),
        }
    }

    pub fn en_us() -> Self {
        Self::new("en", Some("US"))
    }

    /// Parses a POSIX (`de_DE.UTF-8@euro`) or BCP-47 (`zh-Hans-CN`) tag.
    ///
    /// The codeset and modifier are ignored, as is a four letter script
    /// subtag. `C` and `POSIX` mean `en_US`.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let tag = tag.trim();
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }
        if tag == "C" || tag == "POSIX" {
            return Ok(Self::en_us());
        }

        let mut subtags = tag.split(['_', '-']);
        let language = subtags.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(LocaleError::InvalidLanguage(language.to_string()));
        }

        let region = match subtags.next() {
            Some(script) if script.len() == 4 => subtags.next(),
            other => other,
        };
        if let Some(region) = region {
            let alpha = region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic());
            let numeric = region.len() == 3 && region.chars().all(|c| c.is_ascii_digit());
            if !(alpha || numeric) {
                return Err(LocaleError::InvalidRegion(region.to_string()));
            }
        }

        Ok(Self::new(language, region))
    }

    /// Detects the locale to format currency with.
    ///
    /// `LC_ALL`, `LC_MONETARY` or `LANG` override the operating system
    /// locale when set. Anything unusable means `en_US`.
    pub fn detect() -> Self {
        Self::detect_with(|key| std::env::var(key).ok(), sys_locale::get_locale)
    }

    /// [`Locale::detect`] with injectable environment and system lookups.
    pub fn detect_with(
        lookup: impl Fn(&str) -> Option<String>,
        system: impl FnOnce() -> Option<String>,
    ) -> Self {
        if let Some(locale) = Self::from_env_with(lookup) {
            return locale;
        }

        match system().map(|tag| (Self::parse(&tag), tag)) {
            Some((Ok(locale), _)) => {
                debug!(%locale, "locale from system");
                locale
            }
            Some((Err(error), tag)) => {
                warn!(%tag, %error, "ignoring unparsable system locale");
                Self::en_us()
            }
            None => {
                debug!("no system locale, using en_US");
                Self::en_us()
            }
        }
    }

    /// Reads an explicit locale override from `LC_ALL`, `LC_MONETARY` and
    /// `LANG` through `lookup`.
    ///
    /// The first non-empty variable decides. Returns `None` when none is set
    /// or the value does not parse; later variables are not consulted.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let (key, value) = LOCALE_ENV_VARS.iter().copied().find_map(|key| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(|value| (key, value))
        })?;

        match Self::parse(&value) {
            Ok(locale) => {
                debug!(%key, %locale, "locale from environment");
                Some(locale)
            }
            Err(error) => {
                warn!(%key, %value, %error, "ignoring unparsable locale");
                None
            }
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn parse_posix_tag_with_codeset() {
        assert_eq!(Locale::parse("de_DE.UTF-8").unwrap(), Locale::new("de", Some("DE")));
    }

    #[test]
    fn parse_bcp47_tag() {
        assert_eq!(Locale::parse("en-GB").unwrap(), Locale::new("en", Some("GB")));
    }

    #[test]
    fn parse_normalizes_case() {
        let locale = Locale::parse("PT_br").unwrap();

        assert_eq!(locale.language, "pt");
        assert_eq!(locale.region.as_deref(), Some("BR"));
    }

    #[test]
    fn parse_skips_script_subtag() {
        assert_eq!(Locale::parse("zh-Hans-CN").unwrap(), Locale::new("zh", Some("CN")));
    }

    #[test]
    fn parse_strips_modifier() {
        assert_eq!(Locale::parse("sr_RS@latin").unwrap(), Locale::new("sr", Some("RS")));
    }

    #[test]
    fn parse_language_only() {
        assert_eq!(Locale::parse("fr").unwrap(), Locale::new("fr", None));
    }

    #[test]
    fn parse_numeric_region() {
        assert_eq!(Locale::parse("es-419").unwrap().region.as_deref(), Some("419"));
    }

    #[test]
    fn parse_c_locale_is_us_english() {
        assert_eq!(Locale::parse("C").unwrap(), Locale::en_us());
        assert_eq!(Locale::parse("POSIX").unwrap(), Locale::en_us());
        assert_eq!(Locale::parse("C.UTF-8").unwrap(), Locale::en_us());
    }

    #[test]
    fn parse_rejects_bad_tags() {
        assert_eq!(Locale::parse(""), Err(LocaleError::Empty));
        assert_eq!(Locale::parse(".UTF-8"), Err(LocaleError::Empty));
        assert_eq!(
            Locale::parse("english_US"),
            Err(LocaleError::InvalidLanguage("english".to_string()))
        );
        assert_eq!(
            Locale::parse("en_USA"),
            Err(LocaleError::InvalidRegion("USA".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let locale = Locale::new("ja", Some("JP"));

        assert_eq!(locale.to_string(), "ja_JP");
        assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
    }

    #[test]
    fn from_env_prefers_lc_all() {
        let lookup = env(&[
            ("LC_ALL", "fr_FR.UTF-8"),
            ("LC_MONETARY", "de_DE.UTF-8"),
            ("LANG", "en_GB.UTF-8"),
        ]);

        assert_eq!(Locale::from_env_with(lookup), Some(Locale::new("fr", Some("FR"))));
    }

    #[test]
    fn from_env_skips_empty_values() {
        let lookup = env(&[("LC_ALL", ""), ("LC_MONETARY", "de_DE.UTF-8")]);

        assert_eq!(Locale::from_env_with(lookup), Some(Locale::new("de", Some("DE"))));
    }

    #[test]
    fn from_env_falls_back_to_lang() {
        let lookup = env(&[("LANG", "ja_JP.UTF-8")]);

        assert_eq!(Locale::from_env_with(lookup), Some(Locale::new("ja", Some("JP"))));
    }

    #[test]
    fn from_env_unset_is_none() {
        assert_eq!(Locale::from_env_with(env(&[])), None);
    }

    #[test]
    fn from_env_invalid_value_is_none() {
        let lookup = env(&[("LC_ALL", "not a locale"), ("LANG", "de_DE")]);

        assert_eq!(Locale::from_env_with(lookup), None);
    }

    // =========================================================================
    // detect_with tests
    // =========================================================================

    #[test]
    fn detect_uses_system_locale_without_env() {
        let locale = Locale::detect_with(env(&[]), || Some("de-DE".to_string()));

        assert_eq!(locale, Locale::new("de", Some("DE")));
    }

    #[test]
    fn detect_env_overrides_system_locale() {
        let lookup = env(&[("LANG", "ja_JP.UTF-8")]);

        let locale = Locale::detect_with(lookup, || Some("de-DE".to_string()));

        assert_eq!(locale, Locale::new("ja", Some("JP")));
    }

    #[test]
    fn detect_invalid_env_falls_through_to_system() {
        let lookup = env(&[("LC_ALL", "not a locale")]);

        let locale = Locale::detect_with(lookup, || Some("pt-BR".to_string()));

        assert_eq!(locale, Locale::new("pt", Some("BR")));
    }

    #[test]
    fn detect_defaults_to_us_english() {
        assert_eq!(Locale::detect_with(env(&[]), || None), Locale::en_us());
        assert_eq!(
            Locale::detect_with(env(&[]), || Some("???".to_string())),
            Locale::en_us()
        );
    }
}
