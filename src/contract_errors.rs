//! Failure values of the contracts under test, as printed by the node in
//! `FAILWITH` errors.
//!
//! Test suites match them as substrings of the rejection message, hence
//! the surrounding quotes and the unclosed `MISSIGNED` pair.

pub const CALLER_NOT_OWNER: &str = r#""CALLER_NOT_OWNER""#;
pub const NOT_FOUND: &str = r#""NotFound""#;
pub const LEDGER_NOT_FOUND: &str = r#"(Pair "AssetNotFound" "ledger")"#;
pub const INVALID_CALLER: &str = r#""InvalidCaller""#;
pub const INVALID_AMOUNT: &str = r#""FA2_INVALID_AMOUNT""#;
pub const FA2_INSUFFICIENT_BALANCE: &str = r#""FA2_INSUFFICIENT_BALANCE""#;
pub const FA2_NOT_OPERATOR: &str = r#""FA2_NOT_OPERATOR""#;

pub const ARCHETYPE_ALREADY_REGISTERED: &str = r#""Archetype already registered""#;
pub const ARCHETYPE_INVALID_VALIDATOR: &str =
    r#""Archetype requires a minting validator contract address""#;
pub const ARCHETYPE_NOT_REGISTERED: &str = r#""Archetype not registered""#;
pub const ARCHETYPE_QUOTA: &str = r#""Archetype quota reached""#;

pub const LIMIT_ALREADY_SET: &str = r#""MintingValidator: minting limit already set""#;
pub const SERIAL_OOB: &str = r#""MintingValidator: serial number out of bounds""#;
pub const DEADLINE_REACHED: &str = r#""MintingValidator: deadline reached""#;
pub const DEADLINE_ALREADY_SET: &str = r#""MintingValidator: deadline already set""#;

pub const ALREADY_MINTED: &str = r#""Token already minted""#;
pub const MUST_BE_MINTER: &str = r#""Must be a minter""#;
pub const DOES_NOT_EXIST: &str = r#""Token does not exist""#;
pub const NOT_WHITELISTED: &str = r#""TO_NOT_ALLOWED""#;
pub const WHITELIST_TO_RESTRICTED: &str = r#""TO_RESTRICTED""#;
pub const NOT_ADMIN: &str = r#""Must be an administrator""#;
pub const COOLDOWN: &str = r#""Transfer cooldown""#;

pub const ERC1155_NOT_APPROVED: &str = r#""ERC1155: caller is not owner nor approved""#;
pub const ERC1155_INSUFFICIENT_BALANCE: &str = r#""ERC1155: insufficient balance for transfer""#;

pub const USDC_WRONG_SIG: &str = r#""FiatTokenV2: invalid signature""#;
pub const USDC_BALANCE_TOO_LOW: &str = r#""ERC20: transfer amount exceeds balance""#;
pub const USDC_ALLOWANCE_TOO_LOW: &str = r#""ERC20: transfer amount exceeds allowance""#;

pub const QUARTZ_MINTER_AUTHORIZATION_EXPIRED: &str = r#""QUARTZ_MINTER: authorization expired""#;
pub const QUARTZ_MINTER_RECOVER_FAILED: &str = r#""QUARTZ_MINTER: invalid signature""#;

pub const PAUSED: &str = r#""Pausable: paused""#;
pub const NOT_PAUSED: &str = r#""Pausable: not paused""#;
pub const CONTRACT_PAUSED: &str = r#""CONTRACT_PAUSED""#;

pub const META_TRANSACTION_WRONG_SIGNATURE: &str = r#""NativeMetaTransaction: WRONG_SIGNATURE""#;
pub const MISSIGNED: &str = r#"(Pair "MISSIGNED""#;
pub const EXPIRED_PERMIT: &str = r#""PERMIT_EXPIRED""#;
pub const EXPIRY_NEGATIVE: &str = r#""EXPIRY_NEGATIVE""#;
pub const EXPIRY_TOO_BIG: &str = r#""EXPIRY_TOO_BIG""#;
pub const NOT_PERMIT_ISSUER: &str = r#""NOT_PERMIT_ISSUER""#;

pub const KEY_EXISTS: &str = r#"(Pair "KeyExists" "royalties")"#;
pub const TOKEN_METADATA_KEY_EXISTS: &str = r#"(Pair "KeyExists" "token_metadata")"#;

#[cfg(test)]
mod tests {
    use super::*;
    use auction_testkit_micheline::{pair, string};

    #[test]
    fn test_pair_errors_match_micheline_notation() {
        assert_eq!(
            LEDGER_NOT_FOUND,
            format!("({})", pair(string("AssetNotFound"), string("ledger")))
        );
        assert_eq!(
            TOKEN_METADATA_KEY_EXISTS,
            format!("({})", pair(string("KeyExists"), string("token_metadata")))
        );
    }

    #[test]
    fn test_string_errors_are_quoted() {
        for error in [CALLER_NOT_OWNER, FA2_INSUFFICIENT_BALANCE, PAUSED, NOT_WHITELISTED] {
            assert!(error.starts_with('"') && error.ends_with('"'));
            assert_eq!(error, string(error.trim_matches('"')).to_string());
        }
    }
}
