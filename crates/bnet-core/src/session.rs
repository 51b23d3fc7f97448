//! Authenticated session against one regional API host.

use serde::de::DeserializeOwned;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use url::Url;

use crate::cache::{Cached, CachedMap};
use crate::config::ClientConfig;
use crate::endpoint::{Endpoint, Shape};
use crate::error::{ApiError, Result};
use crate::locale::Locale;
use crate::transport::HttpTransport;

/// Handle shared by all resource accessors created from it.
///
/// Cloning is cheap. A session holds the account key, the validated locale
/// and the HTTP client, but never any resource data: every accessor owns
/// its own cache slots.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    transport: HttpTransport,
    api_key: String,
    locale: Locale,
    root: Url,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("locale", &self.inner.locale)
            .field("root", &self.inner.root.as_str())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session for an account key and locale code.
    ///
    /// Fails with [`ApiError::UnsupportedLocale`] unless the locale is one
    /// of `en_US`, `en_GB` or `ko_KR`.
    pub fn new(api_key: impl Into<String>, locale: &str) -> Result<Self> {
        Self::from_config(&ClientConfig::new(api_key, locale)?)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let root = Url::parse(config.root_url())
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.root_url())))?;
        if root.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!(
                "{} cannot be used as a base URL",
                config.root_url()
            )));
        }

        tracing::debug!(locale = %config.locale, root = %root, "creating Battle.net session");

        Ok(Self {
            inner: Arc::new(SessionInner {
                transport: HttpTransport::new(config)?,
                api_key: config.api_key.clone(),
                locale: config.locale,
                root,
            }),
        })
    }

    pub fn locale(&self) -> Locale {
        self.inner.locale
    }

    /// Host root requests are sent to.
    pub fn root(&self) -> &Url {
        &self.inner.root
    }

    /// Full request URL for an endpoint, including `locale` and `apikey`.
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url> {
        let mut url = self.inner.root.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                ApiError::InvalidUrl(format!("{} cannot be used as a base URL", self.inner.root))
            })?;
            segments.pop_if_empty().extend(endpoint.segments());
            if endpoint.has_trailing_slash() {
                segments.push("");
            }
        }
        url.query_pairs_mut()
            .extend_pairs(endpoint.query_pairs().iter().map(|(k, v)| (*k, v.as_str())))
            .append_pair("locale", self.inner.locale.as_str())
            .append_pair("apikey", &self.inner.api_key);
        Ok(url)
    }

    /// Fetch and decode an endpoint.
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let path = endpoint.path();
        let url = self.url_for(endpoint)?;
        tracing::debug!(path = %path, locale = %self.inner.locale, "Battle.net request");

        let body = self.inner.transport.get(url, &path).await?;
        endpoint.shape().decode(&body, &path)
    }

    /// Fetch and decode an absolute URL handed out by the API itself.
    ///
    /// No credentials are appended; such URLs already point at a public
    /// download location.
    pub async fn fetch_url<T: DeserializeOwned>(&self, url: &str, shape: Shape) -> Result<T> {
        let parsed = Url::parse(url).map_err(|e| ApiError::InvalidUrl(format!("{url}: {e}")))?;
        let path = parsed.path().to_string();
        tracing::debug!(host = parsed.host_str().unwrap_or_default(), path = %path, "Battle.net download");

        let body = self.inner.transport.get(parsed, &path).await?;
        shape.decode(&body, &path)
    }

    /// Return the slot's document, fetching it first if the slot is absent.
    pub async fn load<'a, T: DeserializeOwned>(
        &self,
        slot: &'a mut Cached<T>,
        endpoint: &Endpoint,
    ) -> Result<&'a T> {
        if slot.is_populated() {
            tracing::trace!(path = %endpoint.path(), "cache hit");
        }
        slot.get_or_fetch(|| self.fetch(endpoint)).await
    }

    /// Fetch the endpoint and replace the slot's document.
    pub async fn refresh<'a, T: DeserializeOwned>(
        &self,
        slot: &'a mut Cached<T>,
        endpoint: &Endpoint,
    ) -> Result<&'a T> {
        let value = self.fetch(endpoint).await?;
        Ok(slot.store(value))
    }

    /// Keyed variant of [`Session::load`].
    pub async fn load_keyed<'a, K, T>(
        &self,
        slots: &'a mut CachedMap<K, T>,
        key: K,
        endpoint: &Endpoint,
    ) -> Result<&'a T>
    where
        K: Eq + Hash,
        T: DeserializeOwned,
    {
        slots.get_or_fetch(key, || self.fetch(endpoint)).await
    }

    /// Keyed variant of [`Session::refresh`].
    pub async fn refresh_keyed<'a, K, T>(
        &self,
        slots: &'a mut CachedMap<K, T>,
        key: K,
        endpoint: &Endpoint,
    ) -> Result<&'a T>
    where
        K: Eq + Hash,
        T: DeserializeOwned,
    {
        let value = self.fetch(endpoint).await?;
        Ok(slots.store(key, value))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unsupported_locale() {
        let err = Session::new("key", "zh_TW").expect_err("Test operation should fail");
        assert!(matches!(err, ApiError::UnsupportedLocale(ref code) if code == "zh_TW"));
    }

    #[test]
    fn test_locale_selects_host() {
        for (code, host) in [
            ("en_US", "us.api.battle.net"),
            ("en_GB", "eu.api.battle.net"),
            ("ko_KR", "kr.api.battle.net"),
        ] {
            let session = Session::new("key", code).expect("Operation should succeed");
            assert_eq!(session.root().host_str(), Some(host));
            assert_eq!(session.locale().as_str(), code);
        }
    }

    #[test]
    fn test_url_for_encodes_segments() {
        let session = Session::new("secret", "en_GB").expect("Operation should succeed");
        let endpoint = Endpoint::new(["wow", "character", "Area 52", "Thrall"]).field("pvp");
        let url = session.url_for(&endpoint).expect("Operation should succeed");
        assert_eq!(
            url.as_str(),
            "https://eu.api.battle.net/wow/character/Area%2052/Thrall?fields=pvp&locale=en_GB&apikey=secret"
        );
    }

    #[test]
    fn test_url_for_trailing_slash_and_base_path() {
        let config = ClientConfig::new("k", "en_US")
            .expect("Operation should succeed")
            .with_base_url("http://localhost:9000/proxy/");
        let session = Session::from_config(&config).expect("Operation should succeed");
        let endpoint = Endpoint::new(["wow", "pet"]).with_trailing_slash();
        let url = session.url_for(&endpoint).expect("Operation should succeed");
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/proxy/wow/pet/?locale=en_US&apikey=k"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::new("k", "en_US")
            .expect("Operation should succeed")
            .with_base_url("not a url");
        let err = Session::from_config(&config).expect_err("Test operation should fail");
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let session = Session::new("very-secret", "en_US").expect("Operation should succeed");
        let debug = format!("{session:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("EnUs"));
    }
}
