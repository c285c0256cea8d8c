use serde::{Deserialize, Serialize};

/// Iterative resolution settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Time to wait for one nameserver before trying the next (milliseconds)
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Destination port for nameserver queries
    #[serde(default = "default_nameserver_port")]
    pub nameserver_port: u16,

    /// Set the DO bit on outgoing queries. Responses are never validated.
    #[serde(default = "default_true")]
    pub dnssec_ok: bool,

    /// Upper bound on referrals followed for a single name
    #[serde(default = "default_max_referrals")]
    pub max_referrals: u32,

    /// Upper bound on nested resolutions (CNAME chase, glue lookups)
    #[serde(default = "default_max_depth")]
    pub max_depth: u8,

    /// Resolve nameserver addresses that a referral did not carry as glue
    #[serde(default = "default_true")]
    pub resolve_missing_glue: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout_ms(),
            nameserver_port: default_nameserver_port(),
            dnssec_ok: true,
            max_referrals: default_max_referrals(),
            max_depth: default_max_depth(),
            resolve_missing_glue: true,
        }
    }
}

fn default_query_timeout_ms() -> u64 {
    3000
}

fn default_nameserver_port() -> u16 {
    53
}

fn default_max_referrals() -> u32 {
    32
}

fn default_max_depth() -> u8 {
    8
}

fn default_true() -> bool {
    true
}
