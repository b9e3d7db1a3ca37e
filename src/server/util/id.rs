//! Prefixed identifier generation.
//!
//! Every entity is keyed by a string such as `yrd_4k2m9x0q1c8v7b3n`: a short type
//! prefix, an underscore, and a random lowercase alphanumeric suffix. The prefix makes
//! identifiers self-describing in logs and URLs.

use rand::Rng;

pub const ADDRESS_PREFIX: &str = "adr";
pub const YARD_PREFIX: &str = "yrd";
pub const VEHICLE_MODEL_PREFIX: &str = "mdl";
pub const VEHICLE_PREFIX: &str = "veh";
pub const YARD_VEHICLE_PREFIX: &str = "yvh";
pub const EMPLOYEE_PREFIX: &str = "emp";

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const SUFFIX_LENGTH: usize = 16;

/// Generates a new identifier with the given prefix.
///
/// # Arguments
/// - `prefix` - Entity prefix without the trailing underscore
///
/// # Returns
/// - `String` - Identifier of the form `{prefix}_{16 random chars}`
pub fn generate_id(prefix: &str) -> String {
    let mut rng = rand::rng();

    let suffix: String = (0..SUFFIX_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();

    format!("{}_{}", prefix, suffix)
}
