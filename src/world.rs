use crate::accounts::AccountRegistry;
use crate::contract::{Contract, HandleIndex};
use crate::error::Result;
use crate::settings::Settings;
use crate::symbol_table::SymbolTable;
use serde_json::Value;
use std::sync::Arc;

/// Everything a lookup may consult. Deployment steps populate it; resolution
/// only reads it, so a shared `&World` is safe across concurrent steps.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub contract_data: SymbolTable,
    pub contract_index: HandleIndex,
    pub settings: Settings,
    pub accounts: AccountRegistry,
}

impl World {
    pub fn new(
        contract_data: SymbolTable,
        contract_index: HandleIndex,
        settings: Settings,
        accounts: AccountRegistry,
    ) -> Self {
        Self {
            contract_data,
            contract_index,
            settings,
            accounts,
        }
    }

    /// Builds a world from a deployment document, a settings document and the
    /// node's account addresses. Settings env overrides are applied. The handle
    /// index starts empty; deployment steps fill it.
    pub fn from_documents<S: AsRef<str>>(
        contract_data: &Value,
        settings_json: &str,
        addresses: &[S],
    ) -> Result<Self> {
        let mut settings = Settings::from_json_str(settings_json)?;
        settings.apply_env_overrides()?;
        let contract_data = SymbolTable::from_json(contract_data);
        tracing::info!(
            "[LOOKUP] world loaded: {} contract data roots, {} aliases, {} accounts",
            contract_data.root().len(),
            settings.aliases.len(),
            addresses.len()
        );
        Ok(Self {
            contract_data,
            contract_index: HandleIndex::new(),
            settings,
            accounts: AccountRegistry::load(addresses),
        })
    }

    /// Records a deployment: the address leaf at `path` and the handle in the
    /// index.
    pub fn register_contract<S: AsRef<str>>(
        &mut self,
        path: &[S],
        contract: Contract,
    ) -> Arc<Contract> {
        self.contract_data
            .set_path(path, contract.address.to_string());
        self.contract_index.register(contract)
    }
}
