//! Proptest generators for property-based testing.

use proptest::prelude::*;

use certledger_core::{TokenMap, TokenValue};

/// Generate a scalar payload value.
pub fn token_value() -> impl Strategy<Value = TokenValue> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,24}".prop_map(TokenValue::Text),
        any::<bool>().prop_map(TokenValue::Bool),
        any::<i64>().prop_map(TokenValue::Integer),
        (-1.0e9f64..1.0e9f64).prop_map(TokenValue::Float),
    ]
}

/// Generate a payload of 0 to 5 entries with lowercase keys.
pub fn token_map() -> impl Strategy<Value = TokenMap> {
    prop::collection::btree_map("[a-z_]{1,12}", token_value(), 0..6).prop_map(TokenMap::from)
}

/// Generate a holder secret.
pub fn secret() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,32}"
}
