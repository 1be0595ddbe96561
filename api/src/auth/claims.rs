use serde::{Deserialize, Serialize};

/// JWT claims carried by an access token. `sub` is the account id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}
