/*!
oauth1-sign: OAuth 1.0a request signing without the transport.

# Overview

This library implements the OAuth 1.0a (HMAC-SHA1) signing pipeline:
RFC 3986 percent-encoding, canonical parameter ordering, signature base
string construction, HMAC-SHA1 + base64 signing, and the two output
formats providers accept — an `Authorization: OAuth ...` header value or
a signed query string. It also extracts token credentials from a
provider's token response. It performs no I/O: pair it with the HTTP
client of your choice.

# How to use

## Basic usecase 1 - signing a request

```rust
use http::Method;
use oauth1_sign::{Secrets, Signer};

// prepare authorization info
let consumer_key = "[CONSUMER_KEY]";
let consumer_secret = "[CONSUMER_SECRET]";
let access_token = "[ACCESS_TOKEN]";
let token_secret = "[TOKEN_SECRET]";

let secrets = Secrets::new(consumer_key, consumer_secret)
    .token(access_token, token_secret);

// sample: sign a status update, then attach the header to the request
// with your HTTP client
let signer = Signer::new(&secrets);
let header = signer
    .authorization_header(
        Method::POST,
        "https://api.twitter.com/1.1/statuses/update.json",
        "status=Hello%2C%20Twitter%21",
        false,
    )
    .unwrap();
assert!(header.starts_with("OAuth "));
```

## Basic usecase 2 - acquiring OAuth token & secret

```rust,no_run
use http::Method;
use oauth1_sign::{read_oauth_token, Secrets, Signer};

# fn send(_: &str) -> String { String::new() }
# fn read_pin() -> String { String::new() }
let consumer_key = "[CONSUMER_KEY]";
let consumer_secret = "[CONSUMER_SECRET]";

// step 1: acquire request token & token secret
let secrets = Secrets::new(consumer_key, consumer_secret);
let signer = Signer::new(&secrets);
let query = signer
    .query_string(
        Method::GET,
        "https://api.twitter.com/oauth/request_token?oauth_callback=oob",
        "",
        false,
    )
    .unwrap();
// append `query` to the endpoint URL and send it; the response body is
// the token response
let body = send(&query);
let request_token = read_oauth_token(&body).unwrap().into_token();

// step 2: the user approves access and hands you the pin
let pin = read_pin();

// step 3: exchange the request token for an access token
let secrets = Secrets::new(consumer_key, consumer_secret)
    .with_token(request_token.verifier(pin));
let signer = Signer::new(&secrets);
let query = signer
    .query_string(
        Method::GET,
        "https://api.twitter.com/oauth/access_token",
        "",
        true,
    )
    .unwrap();
let body = send(&query);
let access_token = read_oauth_token(&body).unwrap();
println!(
    "your token and secret is: \n token: {}\n secret: {}",
    access_token.oauth_token, access_token.oauth_token_secret
);
```
*/
mod encode;
mod error;
mod hash;
mod nonce;
mod params;
mod secrets;
mod signer;
mod token_reader;
#[cfg(test)]
mod usage_test;

// exposed to external program
pub use encode::{percent_encode, percent_encode_bytes};
pub use error::{
    Error, ParseError, ParseResult, Result, SignError, SignResult, TokenReaderError,
    TokenReaderResult,
};
pub use hash::{base64_encode, base64_hmac_sha1, hmac_sha1};
pub use nonce::{FixedNonce, NonceProvider, SystemNonce};
pub use params::{parse_key_value_pairs, ParamList};
pub use secrets::{Consumer, Secrets, SecretsProvider, Token};
pub use signer::{OAuthParameters, Signer};
pub use token_reader::{read_oauth_token, TokenResponse};

// exposed constant variables
/// Represents `oauth_callback`.
pub const OAUTH_CALLBACK_KEY: &str = "oauth_callback";
/// Represents `oauth_consumer_key`.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
/// Represents `oauth_nonce`.
pub const OAUTH_NONCE_KEY: &str = "oauth_nonce";
/// Represents `oauth_signature`.
pub const OAUTH_SIGNATURE_KEY: &str = "oauth_signature";
/// Represents `oauth_signature_method`.
pub const OAUTH_SIGNATURE_METHOD_KEY: &str = "oauth_signature_method";
/// Represents `oauth_timestamp`.
pub const OAUTH_TIMESTAMP_KEY: &str = "oauth_timestamp";
/// Represents `oauth_token`.
pub const OAUTH_TOKEN_KEY: &str = "oauth_token";
/// Represents `oauth_token_secret`.
pub const OAUTH_TOKEN_SECRET_KEY: &str = "oauth_token_secret";
/// Represents `oauth_verifier`.
pub const OAUTH_VERIFIER_KEY: &str = "oauth_verifier";
/// Represents `oauth_version`.
pub const OAUTH_VERSION_KEY: &str = "oauth_version";
/// Represents `realm`.
pub const REALM_KEY: &str = "realm";

// crate-private constant variables
pub(crate) const OAUTH_KEY_PREFIX: &str = "oauth_";
