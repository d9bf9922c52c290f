use std::borrow::Cow;

use http::Method;
use log::debug;
use url::Url;

use crate::encode::percent_encode;
use crate::error::{SignError, SignResult};
use crate::hash::base64_hmac_sha1;
use crate::nonce::{NonceProvider, SystemNonce};
use crate::params::ParamList;
use crate::SecretsProvider;
use crate::{
    OAUTH_CALLBACK_KEY, OAUTH_CONSUMER_KEY, OAUTH_KEY_PREFIX, OAUTH_NONCE_KEY,
    OAUTH_SIGNATURE_KEY, OAUTH_SIGNATURE_METHOD_KEY, OAUTH_TIMESTAMP_KEY, OAUTH_TOKEN_KEY,
    OAUTH_VERIFIER_KEY, OAUTH_VERSION_KEY, REALM_KEY,
};

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";
const HEADER_PREFIX: &str = "OAuth ";
const HEADER_SEPARATOR: &str = ", ";
const QUERY_SEPARATOR: &str = "&";

/// The signing facade.
///
/// Borrows a [`SecretsProvider`] for its own lifetime, so credentials
/// cannot dangle, and owns the nonce source. Every signing call collects
/// a fresh parameter set, computes the signature over it, merges the
/// signature back in and re-serializes in the requested format.
#[derive(Debug)]
pub struct Signer<'a, TSecretsProvider, TNonceProvider = SystemNonce>
where
    TSecretsProvider: SecretsProvider,
    TNonceProvider: NonceProvider,
{
    secrets: &'a TSecretsProvider,
    parameters: OAuthParameters<'a>,
    nonces: TNonceProvider,
}

impl<'a, TSecretsProvider> Signer<'a, TSecretsProvider, SystemNonce>
where
    TSecretsProvider: SecretsProvider,
{
    pub fn new(secrets: &'a TSecretsProvider) -> Self {
        Signer::with_params(secrets, OAuthParameters::new())
    }

    pub fn with_params(secrets: &'a TSecretsProvider, parameters: OAuthParameters<'a>) -> Self {
        Signer {
            secrets,
            parameters,
            nonces: SystemNonce::new(),
        }
    }
}

impl<'a, TSecretsProvider, TNonceProvider> Signer<'a, TSecretsProvider, TNonceProvider>
where
    TSecretsProvider: SecretsProvider,
    TNonceProvider: NonceProvider,
{
    /// Replace the nonce/timestamp source, e.g. with a
    /// [`crate::FixedNonce`] for deterministic output.
    pub fn with_nonce_provider<TNext>(
        self,
        nonces: TNext,
    ) -> Signer<'a, TSecretsProvider, TNext>
    where
        TNext: NonceProvider,
    {
        Signer {
            secrets: self.secrets,
            parameters: self.parameters,
            nonces,
        }
    }

    /// Build a full `Authorization: OAuth ...` header value.
    ///
    /// Application and query parameters influence the signature but only
    /// `oauth_*` pairs are rendered, each value double-quoted. A
    /// configured realm is appended after the sorted pairs, unsigned.
    pub fn authorization_header(
        &self,
        method: Method,
        url: &str,
        body: &str,
        include_verifier: bool,
    ) -> SignResult<String> {
        let params = self.signed_parameters(&method, url, body, include_verifier)?;
        let oauth_only = params.filtered(|key| key.starts_with(OAUTH_KEY_PREFIX));
        let rendered = oauth_only.serialize(HEADER_SEPARATOR, true);
        Ok(match self.parameters.realm {
            Some(ref realm) => format!(
                "{}{}{}{}=\"{}\"",
                HEADER_PREFIX, rendered, HEADER_SEPARATOR, REALM_KEY, realm
            ),
            None => format!("{}{}", HEADER_PREFIX, rendered),
        })
    }

    /// Build an `&`-joined query string carrying the whole signed
    /// parameter set, protocol and application parameters alike,
    /// suitable for appending to a URL.
    pub fn query_string(
        &self,
        method: Method,
        url: &str,
        body: &str,
        include_verifier: bool,
    ) -> SignResult<String> {
        let params = self.signed_parameters(&method, url, body, include_verifier)?;
        Ok(params.serialize(QUERY_SEPARATOR, false))
    }

    /// Collect protocol + application parameters, sign, and merge the
    /// signature back into the set.
    fn signed_parameters(
        &self,
        method: &Method,
        raw_url: &str,
        body: &str,
        include_verifier: bool,
    ) -> SignResult<ParamList> {
        let method = supported_method(method)?;
        let mut url = Url::parse(raw_url)?;

        let mut params = collect_application_parameters(&url, body);
        let (nonce, timestamp) = self.nonces.next();
        self.insert_protocol_parameters(&mut params, &nonce, &timestamp, include_verifier);

        url.set_query(None);
        let signature = self.signature(method, url.as_str(), &params);
        params.insert(OAUTH_SIGNATURE_KEY, signature);
        Ok(params)
    }

    fn insert_protocol_parameters(
        &self,
        params: &mut ParamList,
        nonce: &str,
        timestamp: &str,
        include_verifier: bool,
    ) {
        let (consumer_key, _) = self.secrets.get_consumer_key_pair();
        params.insert(OAUTH_CONSUMER_KEY, percent_encode(consumer_key));
        params.insert(OAUTH_NONCE_KEY, percent_encode(nonce));
        params.insert(OAUTH_SIGNATURE_METHOD_KEY, SIGNATURE_METHOD);
        params.insert(OAUTH_TIMESTAMP_KEY, percent_encode(timestamp));
        params.insert(OAUTH_VERSION_KEY, OAUTH_VERSION);
        if let Some(ref callback) = self.parameters.callback {
            params.insert(OAUTH_CALLBACK_KEY, percent_encode(callback));
        }
        if let Some((token, _)) = self.secrets.get_token_pair_option() {
            params.insert(OAUTH_TOKEN_KEY, percent_encode(token));
        }
        if include_verifier {
            if let Some(verifier) = self.secrets.get_verifier_option() {
                params.insert(OAUTH_VERIFIER_KEY, percent_encode(verifier));
            }
        }
    }

    /// `URLENCODE(BASE64(HMAC_SHA1(base_string, signing_key)))`.
    fn signature(&self, method: &str, pure_url: &str, params: &ParamList) -> String {
        let parameter_string = params.serialize(QUERY_SEPARATOR, false);
        let base_string = format!(
            "{}&{}&{}",
            method,
            percent_encode(pure_url),
            percent_encode(&parameter_string)
        );
        debug!("signature base string: {}", base_string);

        let (_, consumer_secret) = self.secrets.get_consumer_key_pair();
        let token_secret = self
            .secrets
            .get_token_pair_option()
            .map(|(_, secret)| secret)
            .unwrap_or_default();
        // each secret is encoded exactly once; the joined key is never
        // re-encoded, while the parameter string above is encoded twice.
        // providers verify this asymmetry.
        let signing_key = format!(
            "{}&{}",
            percent_encode(consumer_secret),
            percent_encode(token_secret)
        );

        percent_encode(&base64_hmac_sha1(
            signing_key.as_bytes(),
            base_string.as_bytes(),
        ))
    }
}

/// Split the caller's URL query and body into application parameters.
///
/// Query values are percent-encoded once more as they are collected;
/// the body is taken to be `application/x-www-form-urlencoded` already
/// and its pairs pass through verbatim. Segments without `=` are
/// skipped in both.
fn collect_application_parameters(url: &Url, body: &str) -> ParamList {
    let mut params = ParamList::new();
    if let Some(query) = url.query() {
        for segment in query.split('&') {
            let mut kv = segment.splitn(2, '=');
            if let (Some(key), Some(value)) = (kv.next(), kv.next()) {
                params.insert(key, percent_encode(value));
            }
        }
    }
    if !body.is_empty() {
        for segment in body.split('&') {
            let mut kv = segment.splitn(2, '=');
            if let (Some(key), Some(value)) = (kv.next(), kv.next()) {
                params.insert(key, value);
            }
        }
    }
    params
}

fn supported_method(method: &Method) -> SignResult<&str> {
    match method.as_str() {
        "GET" | "POST" | "PUT" | "DELETE" => Ok(method.as_str()),
        other => Err(SignError::UnsupportedMethod(other.to_string())),
    }
}

/// Optional protocol parameters attached to a [`Signer`].
#[derive(Debug, Clone, Default)]
pub struct OAuthParameters<'a> {
    callback: Option<Cow<'a, str>>,
    realm: Option<Cow<'a, str>>,
}

impl<'a> OAuthParameters<'a> {
    pub fn new() -> Self {
        Default::default()
    }

    /// set the oauth_callback value
    ///
    /// # Note
    /// The callback belongs to the request-token step of the handshake.
    /// It is signed like any other protocol parameter.
    pub fn callback<T>(self, callback: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        OAuthParameters {
            callback: Some(callback.into()),
            ..self
        }
    }

    /// set the realm value
    ///
    /// # Note
    /// The realm is rendered into the authorization header but never
    /// takes part in the signature.
    pub fn realm<T>(self, realm: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        OAuthParameters {
            realm: Some(realm.into()),
            ..self
        }
    }
}
