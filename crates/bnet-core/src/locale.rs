//! Supported API locales.
//!
//! The Community API is served from one host per region and the locale
//! decides which one a client talks to:
//! - `en_US`: `us.api.battle.net`
//! - `en_GB`: `eu.api.battle.net`
//! - `ko_KR`: `kr.api.battle.net`
//!
//! `zh_TW` used to map to `tw.api.battle.net` but that host no longer serves
//! the API, so it is rejected like any other unknown locale.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ApiError;

/// Locale a session requests localized data in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// American English, served by the US host
    #[default]
    #[serde(rename = "en_US")]
    EnUs,
    /// British English, served by the EU host
    #[serde(rename = "en_GB")]
    EnGb,
    /// Korean, served by the KR host
    #[serde(rename = "ko_KR")]
    KoKr,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Self; 3] = [Self::EnUs, Self::EnGb, Self::KoKr];

    /// Locale code as sent in the `locale` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::EnGb => "en_GB",
            Self::KoKr => "ko_KR",
        }
    }

    /// API host serving this locale.
    pub const fn host(self) -> &'static str {
        match self {
            Self::EnUs => "us.api.battle.net",
            Self::EnGb => "eu.api.battle.net",
            Self::KoKr => "kr.api.battle.net",
        }
    }

    /// HTTPS root URL of the host serving this locale.
    pub const fn root_url(self) -> &'static str {
        match self {
            Self::EnUs => "https://us.api.battle.net",
            Self::EnGb => "https://eu.api.battle.net",
            Self::KoKr => "https://kr.api.battle.net",
        }
    }

    /// Parse a locale code, returning `None` for anything outside the
    /// allow-list.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.as_str() == code)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ApiError::UnsupportedLocale(s.to_string()))
    }
}
