use crate::error::{LookupError, LookupResult};
use alloy::primitives::Address;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
    Comptroller,
    ComptrollerImpl,
    Unitroller,
    Maximillion,
    Timelock,
    PriceOracle,
    PriceOracleProxy,
    VToken,
    VBep20Delegate,
    Bep20,
    Xvs,
    Sxp,
    Vai,
    Governor,
    InterestRateModel,
    Other,
}

impl ContractKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comptroller => "comptroller",
            Self::ComptrollerImpl => "comptroller_impl",
            Self::Unitroller => "unitroller",
            Self::Maximillion => "maximillion",
            Self::Timelock => "timelock",
            Self::PriceOracle => "price_oracle",
            Self::PriceOracleProxy => "price_oracle_proxy",
            Self::VToken => "vtoken",
            Self::VBep20Delegate => "vbep20_delegate",
            Self::Bep20 => "bep20",
            Self::Xvs => "xvs",
            Self::Sxp => "sxp",
            Self::Vai => "vai",
            Self::Governor => "governor",
            Self::InterestRateModel => "interest_rate_model",
            Self::Other => "other",
        }
    }
}

/// A deployed contract as recorded by the deployment steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    pub name: String,
    pub kind: ContractKind,
    pub address: Address,
}

impl Contract {
    pub fn new(name: impl Into<String>, kind: ContractKind, address: Address) -> Self {
        Self {
            name: name.into(),
            kind,
            address,
        }
    }
}

fn index_key(address: &str) -> String {
    address.to_lowercase()
}

/// Lower-cased address to live contract handle.
#[derive(Debug, Clone, Default)]
pub struct HandleIndex {
    contracts: HashMap<String, Arc<Contract>>,
}

impl HandleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: &str, handle: Arc<Contract>) {
        self.contracts.insert(index_key(address), handle);
    }

    /// Indexes `contract` under its own address.
    pub fn register(&mut self, contract: Contract) -> Arc<Contract> {
        let handle = Arc::new(contract);
        self.insert(&handle.address.to_string(), Arc::clone(&handle));
        handle
    }

    pub fn get(&self, address: &str) -> LookupResult<Arc<Contract>> {
        match self.contracts.get(&index_key(address)) {
            Some(handle) => Ok(Arc::clone(handle)),
            None => {
                tracing::warn!("[LOOKUP] no contract indexed at {}", address);
                Err(LookupError::HandleNotFound {
                    address: address.to_string(),
                    indexed: self.keys(),
                })
            }
        }
    }

    pub fn contains(&self, address: &str) -> bool {
        self.contracts.contains_key(&index_key(address))
    }

    /// Indexed addresses, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.contracts.keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

/// A handle viewed as a specific contract kind. The view is declared by the
/// accessor, not checked against the handle's recorded kind.
pub trait TypedContract: Sized {
    const KIND: ContractKind;

    fn wrap(handle: Arc<Contract>) -> Self;

    fn handle(&self) -> &Arc<Contract>;

    fn from_handle(handle: Arc<Contract>) -> Self {
        if handle.kind != Self::KIND && Self::KIND != ContractKind::Other {
            tracing::debug!(
                "[LOOKUP] reading {} ({}) at {} as {}",
                handle.name,
                handle.kind.as_str(),
                handle.address,
                Self::KIND.as_str()
            );
        }
        Self::wrap(handle)
    }

    fn address(&self) -> Address {
        self.handle().address
    }

    fn name(&self) -> &str {
        &self.handle().name
    }
}

macro_rules! typed_contracts {
    ($($(#[$meta:meta])* $name:ident => $kind:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone)]
            pub struct $name(Arc<Contract>);

            impl TypedContract for $name {
                const KIND: ContractKind = ContractKind::$kind;

                fn wrap(handle: Arc<Contract>) -> Self {
                    Self(handle)
                }

                fn handle(&self) -> &Arc<Contract> {
                    &self.0
                }
            }
        )*
    };
}

typed_contracts! {
    /// Comptroller, or the Unitroller proxy read through the Comptroller interface.
    Comptroller => Comptroller,
    ComptrollerImpl => ComptrollerImpl,
    Maximillion => Maximillion,
    Timelock => Timelock,
    PriceOracle => PriceOracle,
    VToken => VToken,
    VBep20Delegate => VBep20Delegate,
    Bep20 => Bep20,
    Xvs => Xvs,
    Sxp => Sxp,
    Vai => Vai,
    Governor => Governor,
    InterestRateModel => InterestRateModel,
    /// Any deployed contract, untyped.
    AnyContract => Other,
}
