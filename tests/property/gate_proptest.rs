//! Property-based tests for the session-cookie gate

use proptest::prelude::*;

use postboard::backend::auth::sessions::mint_session_token;
use postboard::backend::middleware::is_valid_session_token;

proptest! {
    #[test]
    fn test_any_spaced_token_rejected(
        prefix in "[0-9a-f]{0,63}",
        filler in "[0-9a-f]{63}",
    ) {
        let mut token = prefix.clone();
        token.push(' ');
        token.push_str(&filler[..63 - prefix.len()]);
        prop_assert_eq!(token.chars().count(), 64);
        prop_assert!(!is_valid_session_token(&token));
    }

    #[test]
    fn test_letters_only_rejected(token in "[a-zA-Z]{64}") {
        prop_assert!(!is_valid_session_token(&token));
    }

    #[test]
    fn test_digits_only_rejected(token in "[0-9]{64}") {
        prop_assert!(!is_valid_session_token(&token));
    }

    #[test]
    fn test_mixed_digest_accepted(
        letters in "[a-f]{1,32}",
        digits in "[0-9]{1,32}",
        rest in "[0-9a-f]{64}",
    ) {
        let mut token = format!("{}{}", letters, digits);
        token.push_str(&rest[..64 - token.len()]);
        prop_assert!(is_valid_session_token(&token));
    }

    #[test]
    fn test_wrong_length_rejected(token in "[0-9a-f]{0,63}|[0-9a-f]{65,100}") {
        prop_assert!(!is_valid_session_token(&token));
    }
}

#[test]
fn test_minted_tokens_always_pass() {
    for _ in 0..500 {
        let token = mint_session_token();
        assert_eq!(token.len(), 64);
        assert!(is_valid_session_token(&token));
    }
}
