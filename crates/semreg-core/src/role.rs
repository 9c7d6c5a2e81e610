//! The fixed set of contract roles a registry resolves.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A logical contract function whose implementation may live at different
/// addresses across versions.
///
/// Declaration order is the resolution order: bundle resolution walks
/// [`Role::ALL`] front to back and reports the first failing role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "l1_cross_domain_messenger")]
    L1CrossDomainMessenger,
    #[serde(rename = "l1_erc721_bridge")]
    L1Erc721Bridge,
    #[serde(rename = "l1_standard_bridge")]
    L1StandardBridge,
    #[serde(rename = "l2_output_oracle")]
    L2OutputOracle,
    #[serde(rename = "optimism_mintable_erc20_factory")]
    OptimismMintableErc20Factory,
    #[serde(rename = "optimism_portal")]
    OptimismPortal,
    #[serde(rename = "system_config")]
    SystemConfig,
}

impl Role {
    /// Number of roles.
    pub const COUNT: usize = 7;

    /// Every role, in resolution order.
    pub const ALL: [Role; Role::COUNT] = [
        Role::L1CrossDomainMessenger,
        Role::L1Erc721Bridge,
        Role::L1StandardBridge,
        Role::L2OutputOracle,
        Role::OptimismMintableErc20Factory,
        Role::OptimismPortal,
        Role::SystemConfig,
    ];

    /// Position of this role in [`Role::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Contract name, as used in resolved output and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::L1CrossDomainMessenger => "L1CrossDomainMessenger",
            Self::L1Erc721Bridge => "L1ERC721Bridge",
            Self::L1StandardBridge => "L1StandardBridge",
            Self::L2OutputOracle => "L2OutputOracle",
            Self::OptimismMintableErc20Factory => "OptimismMintableERC20Factory",
            Self::OptimismPortal => "OptimismPortal",
            Self::SystemConfig => "SystemConfig",
        }
    }

    /// Configuration key used in the registry document.
    pub fn key(self) -> &'static str {
        match self {
            Self::L1CrossDomainMessenger => "l1_cross_domain_messenger",
            Self::L1Erc721Bridge => "l1_erc721_bridge",
            Self::L1StandardBridge => "l1_standard_bridge",
            Self::L2OutputOracle => "l2_output_oracle",
            Self::OptimismMintableErc20Factory => "optimism_mintable_erc20_factory",
            Self::OptimismPortal => "optimism_portal",
            Self::SystemConfig => "system_config",
        }
    }

    /// Look a role up by configuration key or contract name.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.key() == s || role.name() == s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
