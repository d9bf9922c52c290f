//! End-to-end walkthroughs of the signing pipeline.

use http::Method;

use crate::{read_oauth_token, FixedNonce, OAuthParameters, Secrets, Signer};

const TWITTER_NONCE: &str = "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg";
const TWITTER_TIMESTAMP: &str = "1318622958";

#[test]
fn twitter_documentation_example_header() {
    let secrets = Secrets::new(
        "xvz1evFS4wEEPTGEFPHBog",
        "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
    )
    .token(
        "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
        "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
    );
    let signer = Signer::new(&secrets)
        .with_nonce_provider(FixedNonce::new(TWITTER_NONCE, TWITTER_TIMESTAMP));

    let header = signer
        .authorization_header(
            Method::POST,
            "https://api.twitter.com/1.1/statuses/update.json?include_entities=true",
            "status=Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21",
            false,
        )
        .unwrap();

    assert_eq!(
        header,
        "OAuth oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\", \
         oauth_nonce=\"kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg\", \
         oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\", \
         oauth_signature_method=\"HMAC-SHA1\", \
         oauth_timestamp=\"1318622958\", \
         oauth_token=\"370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb\", \
         oauth_version=\"1.0\""
    );
}

#[test]
fn twitter_documentation_example_query() {
    let secrets = Secrets::new(
        "xvz1evFS4wEEPTGEFPHBog",
        "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
    )
    .token(
        "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
        "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
    );
    let signer = Signer::new(&secrets)
        .with_nonce_provider(FixedNonce::new(TWITTER_NONCE, TWITTER_TIMESTAMP));

    let query = signer
        .query_string(
            Method::POST,
            "https://api.twitter.com/1.1/statuses/update.json?include_entities=true",
            "status=Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21",
            false,
        )
        .unwrap();

    assert_eq!(
        query,
        "include_entities=true\
         &oauth_consumer_key=xvz1evFS4wEEPTGEFPHBog\
         &oauth_nonce=kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg\
         &oauth_signature=hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\
         &oauth_signature_method=HMAC-SHA1\
         &oauth_timestamp=1318622958\
         &oauth_token=370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb\
         &oauth_version=1.0\
         &status=Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21"
    );
}

#[test]
fn three_legged_handshake_walkthrough() {
    let consumer_key = "ckey";
    let consumer_secret = "csecret";

    // step 1: request token, consumer-only, callback signed in
    let secrets = Secrets::new(consumer_key, consumer_secret);
    let signer = Signer::with_params(&secrets, OAuthParameters::new().callback("oob"))
        .with_nonce_provider(FixedNonce::new("1318622958deadbeef", "1318622958"));
    let query = signer
        .query_string(
            Method::POST,
            "https://provider.example.com/oauth/request_token",
            "",
            false,
        )
        .unwrap();
    assert!(query.contains("oauth_callback=oob"));
    assert!(!query.contains("oauth_token="));
    assert!(!query.contains("oauth_verifier="));

    // the provider answers with a request token
    let response = "oauth_token=reqkey&oauth_token_secret=reqsecret&oauth_callback_confirmed=true";
    let request_token = read_oauth_token(response).unwrap().into_token();

    // step 2: the resource owner approves and supplies the pin

    // step 3: exchange for an access token, verifier included
    let secrets =
        Secrets::new(consumer_key, consumer_secret).with_token(request_token.verifier("271828"));
    let signer = Signer::new(&secrets)
        .with_nonce_provider(FixedNonce::new("1318622959deadbeef", "1318622959"));
    let query = signer
        .query_string(
            Method::POST,
            "https://provider.example.com/oauth/access_token",
            "",
            true,
        )
        .unwrap();
    assert!(query.contains("oauth_token=reqkey"));
    assert!(query.contains("oauth_verifier=271828"));

    // the provider answers with the long-lived credential
    let response = "oauth_token=acckey&oauth_token_secret=accsecret&screen_name=somebody";
    let access = read_oauth_token(response).unwrap();
    assert_eq!(access.oauth_token, "acckey");
    assert_eq!(access.oauth_token_secret, "accsecret");

    // signed API calls from here on; the verifier is no longer sent
    let secrets =
        Secrets::new(consumer_key, consumer_secret).with_token(access.into_token());
    let signer = Signer::new(&secrets);
    let header = signer
        .authorization_header(
            Method::GET,
            "https://provider.example.com/api/timeline?count=20",
            "",
            false,
        )
        .unwrap();
    assert!(header.starts_with("OAuth "));
    assert!(header.contains("oauth_token=\"acckey\""));
    assert!(!header.contains("oauth_verifier"));
    assert!(!header.contains("count="));
}

#[test]
fn header_and_query_share_the_same_signature() {
    let secrets = Secrets::new("ckey", "csecret").token("tkey", "tsecret");
    let signer = Signer::new(&secrets)
        .with_nonce_provider(FixedNonce::new("1318622958deadbeef", "1318622958"));

    let header = signer
        .authorization_header(Method::GET, "http://example.com/resource", "", false)
        .unwrap();
    let query = signer
        .query_string(Method::GET, "http://example.com/resource", "", false)
        .unwrap();

    let from_header = header
        .split("oauth_signature=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap();
    let from_query = query
        .split("oauth_signature=")
        .nth(1)
        .and_then(|rest| rest.split('&').next())
        .unwrap();
    assert_eq!(from_header, from_query);
}
