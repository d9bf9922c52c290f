use std::borrow::Cow;

/// Supplies the credentials a [`crate::Signer`] signs with.
///
/// Implemented by [`Secrets`] in both of its shapes: consumer-only
/// (request-token step, two-legged auth) and consumer + token.
pub trait SecretsProvider {
    fn get_consumer_key_pair<'a>(&'a self) -> (&'a str, &'a str);

    fn get_token_pair_option<'a>(&'a self) -> Option<(&'a str, &'a str)>;

    fn get_token_option_pair<'a>(&'a self) -> (Option<&'a str>, Option<&'a str>) {
        self.get_token_pair_option()
            .map(|s| (Some(s.0), Some(s.1)))
            .unwrap_or_else(|| (None, None))
    }

    fn get_verifier_option<'a>(&'a self) -> Option<&'a str> {
        None
    }
}

/// Registered application identity: consumer key and secret.
///
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Consumer<'a> {
    key: Cow<'a, str>,
    secret: Cow<'a, str>,
}

impl<'a> Consumer<'a> {
    pub fn new<TKey, TSecret>(key: TKey, secret: TSecret) -> Self
    where
        TKey: Into<Cow<'a, str>>,
        TSecret: Into<Cow<'a, str>>,
    {
        Consumer {
            key: key.into(),
            secret: secret.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

/// Token credential: key and secret, plus the verifier (PIN) collected
/// during the handshake.
///
/// The same type represents the temporary request token and the
/// long-lived access token.
#[derive(Debug, Clone)]
pub struct Token<'a> {
    key: Cow<'a, str>,
    secret: Cow<'a, str>,
    verifier: Option<Cow<'a, str>>,
}

impl<'a> Token<'a> {
    pub fn new<TKey, TSecret>(key: TKey, secret: TSecret) -> Self
    where
        TKey: Into<Cow<'a, str>>,
        TSecret: Into<Cow<'a, str>>,
    {
        Token {
            key: key.into(),
            secret: secret.into(),
            verifier: None,
        }
    }

    /// Attach the verifier returned after the resource owner approved
    /// access. Folded into the signed parameters only when the signing
    /// call asks for it.
    pub fn verifier<T>(self, verifier: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        Token {
            verifier: Some(verifier.into()),
            ..self
        }
    }

    pub fn set_verifier<T>(&mut self, verifier: T)
    where
        T: Into<Cow<'a, str>>,
    {
        self.verifier = Some(verifier.into());
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

/// Credential pairing handed to a [`crate::Signer`].
///
/// The token slot is `()` until [`Secrets::token`] or
/// [`Secrets::with_token`] upgrades it.
#[derive(Debug, Clone)]
pub struct Secrets<'a, TToken> {
    consumer: Consumer<'a>,
    token: TToken,
}

impl<'a> Secrets<'a, ()> {
    pub fn new<TKey, TSecret>(consumer_key: TKey, consumer_secret: TSecret) -> Self
    where
        TKey: Into<Cow<'a, str>>,
        TSecret: Into<Cow<'a, str>>,
    {
        Secrets {
            consumer: Consumer::new(consumer_key, consumer_secret),
            token: (),
        }
    }

    pub fn token<TKey, TSecret>(self, token: TKey, token_secret: TSecret) -> Secrets<'a, Token<'a>>
    where
        TKey: Into<Cow<'a, str>>,
        TSecret: Into<Cow<'a, str>>,
    {
        Secrets {
            consumer: self.consumer,
            token: Token::new(token, token_secret),
        }
    }

    /// Attach an already-built [`Token`], e.g. one extracted from a
    /// provider response.
    pub fn with_token(self, token: Token<'a>) -> Secrets<'a, Token<'a>> {
        Secrets {
            consumer: self.consumer,
            token,
        }
    }
}

impl SecretsProvider for Secrets<'_, ()> {
    fn get_consumer_key_pair<'a>(&'a self) -> (&'a str, &'a str) {
        (&self.consumer.key, &self.consumer.secret)
    }

    fn get_token_pair_option<'a>(&'a self) -> Option<(&'a str, &'a str)> {
        None
    }
}

impl SecretsProvider for Secrets<'_, Token<'_>> {
    fn get_consumer_key_pair<'a>(&'a self) -> (&'a str, &'a str) {
        (&self.consumer.key, &self.consumer.secret)
    }

    fn get_token_pair_option<'a>(&'a self) -> Option<(&'a str, &'a str)> {
        Some((&self.token.key, &self.token.secret))
    }

    fn get_verifier_option<'a>(&'a self) -> Option<&'a str> {
        self.token.verifier.as_deref()
    }
}
