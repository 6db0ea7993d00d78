//! Name and address resolution over a [`World`].
//!
//! Every entry point takes the world explicitly; nothing here mutates it.

use crate::contract::{AnyContract, TypedContract};
use crate::error::LookupResult;
use crate::symbol_table::SymbolMap;
use crate::world::World;

pub mod accessors;

pub use accessors::*;

pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Symbol table fallbacks for bare names, in priority order. A name present in
/// several namespaces resolves to the first one listed.
const ADDRESS_NAMESPACES: &[(&str, bool)] = &[
    ("Contracts", false),
    ("vTokens", true),
    ("VTokenDelegate", true),
    ("Tokens", true),
    ("Comptroller", true),
];

/// A typed handle together with the name it was requested by and its
/// informational metadata, when the deployment recorded any.
#[derive(Debug, Clone)]
pub struct ContractData<'w, T> {
    pub contract: T,
    pub name: String,
    pub metadata: Option<&'w SymbolMap>,
}

pub(crate) fn path(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|s| s.to_string()).collect()
}

/// Handle indexed at `address`, viewed as `T`.
pub fn contract_by_address<T: TypedContract>(world: &World, address: &str) -> LookupResult<T> {
    world.contract_index.get(address).map(T::from_handle)
}

/// Resolves the first string among `candidates` and returns the handle at
/// that address.
pub fn world_contract<T: TypedContract>(
    world: &World,
    candidates: &[Vec<String>],
) -> LookupResult<T> {
    let address = world.contract_data.require_string(candidates)?;
    contract_by_address(world, address)
}

/// Address string for a script reference. Rules, first match wins: `zero`,
/// a literal `0x` value, an alias, a named account, then the contract data
/// namespaces.
pub fn address(world: &World, reference: &str) -> LookupResult<String> {
    if reference.to_lowercase() == "zero" {
        return Ok(ZERO_ADDRESS.to_string());
    }

    if reference.starts_with("0x") {
        return Ok(reference.to_string());
    }

    if let Some(aliased) = world.settings.find_alias(reference) {
        tracing::debug!("[LOOKUP] {} resolved via alias to {}", reference, aliased);
        return Ok(aliased.to_string());
    }

    if let Some(account) = world.accounts.find(reference) {
        tracing::debug!(
            "[LOOKUP] {} resolved via account to {}",
            reference,
            account.address
        );
        return Ok(account.address.clone());
    }

    let candidates: Vec<Vec<String>> = ADDRESS_NAMESPACES
        .iter()
        .map(|&(namespace, nested)| {
            if nested {
                path(&[namespace, reference, "address"])
            } else {
                path(&[namespace, reference])
            }
        })
        .collect();
    world
        .contract_data
        .require_string(&candidates)
        .map(str::to_string)
}

/// Any contract recorded under `Contracts.<name>`.
pub fn contract_by_name(world: &World, name: &str) -> LookupResult<AnyContract> {
    world_contract(world, &[path(&["Contracts", name])])
}

#[cfg(test)]
mod tests {
    use super::{address, contract_by_name, ZERO_ADDRESS};
    use crate::accounts::Account;
    use crate::contract::{Contract, ContractKind, TypedContract};
    use crate::error::LookupError;
    use crate::world::World;
    use alloy::primitives::Address;

    fn world() -> World {
        let mut world = World::default();
        world.settings.set_alias("Foo", "0x1111111111111111111111111111111111111111");
        world
            .accounts
            .push(Account::new("Bar", "0x2222222222222222222222222222222222222222"));
        world.contract_data.set_path(
            &["Tokens", "XVS", "address"],
            "0x3333333333333333333333333333333333333333",
        );
        world
    }

    #[test]
    fn test_zero_sentinel_matches_zero_address_constant() {
        assert_eq!(ZERO_ADDRESS, Address::ZERO.to_string());
        let world = world();
        assert_eq!(address(&world, "ZERO").expect("zero"), ZERO_ADDRESS);
        assert_eq!(address(&world, "zero").expect("zero"), ZERO_ADDRESS);
    }

    #[test]
    fn test_literal_is_returned_verbatim() {
        let world = world();
        let literal = "0xABCdef";
        assert_eq!(address(&world, literal).expect("literal"), literal);
    }

    #[test]
    fn test_alias_wins_over_account_and_contract_data() {
        let mut world = world();
        world
            .accounts
            .push(Account::new("foo", "0x9999999999999999999999999999999999999999"));
        world.contract_data.set_path(&["Contracts", "Foo"], "0x8888");
        assert_eq!(
            address(&world, "foo").expect("alias"),
            "0x1111111111111111111111111111111111111111"
        );
    }

    #[test]
    fn test_account_then_contract_data_fallback() {
        let world = world();
        assert_eq!(
            address(&world, "bar").expect("account"),
            "0x2222222222222222222222222222222222222222"
        );
        assert_eq!(
            address(&world, "xvs").expect("token"),
            "0x3333333333333333333333333333333333333333"
        );
    }

    #[test]
    fn test_unknown_reference_lists_all_namespaces() {
        let world = world();
        match address(&world, "Unknown") {
            Err(LookupError::ResolutionNotFound { paths, .. }) => assert_eq!(
                paths,
                r#"[["Contracts","Unknown"],["vTokens","Unknown","address"],["VTokenDelegate","Unknown","address"],["Tokens","Unknown","address"],["Comptroller","Unknown","address"]]"#
            ),
            other => panic!("expected ResolutionNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_contract_by_name_requires_indexed_handle() {
        let mut world = World::default();
        let address = Address::from([0x44; 20]);
        world.register_contract(
            &["Contracts", "Comptroller"],
            Contract::new("Comptroller", ContractKind::Comptroller, address),
        );
        let found = contract_by_name(&world, "comptroller").expect("indexed");
        assert_eq!(found.address(), address);

        world
            .contract_data
            .set_path(&["Contracts", "Orphan"], "0x5555555555555555555555555555555555555555");
        assert!(matches!(
            contract_by_name(&world, "Orphan"),
            Err(LookupError::HandleNotFound { .. })
        ));
    }
}
