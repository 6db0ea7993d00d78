//! Typed accessors: each binds a contract kind to the contract data path its
//! deployment step writes.

use super::{path, world_contract, ContractData};
use crate::contract::{
    Bep20, Comptroller, ComptrollerImpl, Governor, InterestRateModel, Maximillion, PriceOracle,
    Sxp, Timelock, TypedContract, VBep20Delegate, VToken, Vai, Xvs,
};
use crate::error::LookupResult;
use crate::world::World;

fn at<T: TypedContract>(world: &World, segments: &[&str]) -> LookupResult<T> {
    world_contract(world, &[path(segments)])
}

fn address_at(world: &World, segments: &[&str]) -> LookupResult<String> {
    world
        .contract_data
        .require_string(&[path(segments)])
        .map(str::to_string)
}

fn with_metadata<'w, T>(
    world: &'w World,
    contract: T,
    name: &str,
    metadata_path: &[&str],
) -> ContractData<'w, T> {
    ContractData {
        contract,
        name: name.to_string(),
        metadata: world.contract_data.node_at(metadata_path),
    }
}

pub fn timelock(world: &World) -> LookupResult<Timelock> {
    at(world, &["Contracts", "Timelock"])
}

/// The Unitroller proxy, read through the Comptroller interface.
pub fn unitroller(world: &World) -> LookupResult<Comptroller> {
    at(world, &["Contracts", "Unitroller"])
}

pub fn maximillion(world: &World) -> LookupResult<Maximillion> {
    at(world, &["Contracts", "Maximillion"])
}

pub fn comptroller(world: &World) -> LookupResult<Comptroller> {
    at(world, &["Contracts", "Comptroller"])
}

pub fn price_oracle(world: &World) -> LookupResult<PriceOracle> {
    at(world, &["Contracts", "PriceOracle"])
}

pub fn price_oracle_proxy(world: &World) -> LookupResult<PriceOracle> {
    at(world, &["Contracts", "PriceOracleProxy"])
}

pub fn xvs(world: &World) -> LookupResult<Xvs> {
    at(world, &["XVS", "address"])
}

pub fn sxp(world: &World) -> LookupResult<Sxp> {
    at(world, &["SXP", "address"])
}

pub fn vai(world: &World) -> LookupResult<Vai> {
    at(world, &["VAI", "address"])
}

pub fn comptroller_impl(world: &World, name: &str) -> LookupResult<ComptrollerImpl> {
    at(world, &["Comptroller", name, "address"])
}

pub fn interest_rate_model(world: &World, name: &str) -> LookupResult<InterestRateModel> {
    at(world, &["InterestRateModel", name, "address"])
}

pub fn vtoken(world: &World, name: &str) -> LookupResult<VToken> {
    at(world, &["vTokens", name, "address"])
}

pub fn vtoken_delegate(world: &World, name: &str) -> LookupResult<VBep20Delegate> {
    at(world, &["VTokenDelegate", name, "address"])
}

pub fn bep20(world: &World, name: &str) -> LookupResult<Bep20> {
    at(world, &["Tokens", name, "address"])
}

pub fn governor(world: &World, name: &str) -> LookupResult<Governor> {
    at(world, &["Governor", name, "address"])
}

pub fn vtoken_address(world: &World, name: &str) -> LookupResult<String> {
    address_at(world, &["vTokens", name, "address"])
}

pub fn vtoken_delegate_address(world: &World, name: &str) -> LookupResult<String> {
    address_at(world, &["VTokenDelegate", name, "address"])
}

pub fn bep20_address(world: &World, name: &str) -> LookupResult<String> {
    address_at(world, &["Tokens", name, "address"])
}

/// Governors are also recorded flat under `Contracts`, which is what scripts
/// address them by.
pub fn governor_address(world: &World, name: &str) -> LookupResult<String> {
    address_at(world, &["Contracts", name])
}

pub fn comptroller_impl_address(world: &World, name: &str) -> LookupResult<String> {
    address_at(world, &["Comptroller", name, "address"])
}

pub fn interest_rate_model_address(world: &World, name: &str) -> LookupResult<String> {
    address_at(world, &["InterestRateModel", name, "address"])
}

pub fn xvs_data<'w>(world: &'w World, name: &str) -> LookupResult<ContractData<'w, Xvs>> {
    let contract = xvs(world)?;
    Ok(with_metadata(world, contract, name, &["XVS", name]))
}

pub fn sxp_data<'w>(world: &'w World, name: &str) -> LookupResult<ContractData<'w, Sxp>> {
    let contract = sxp(world)?;
    Ok(with_metadata(world, contract, name, &["SXP", name]))
}

pub fn vai_data<'w>(world: &'w World, name: &str) -> LookupResult<ContractData<'w, Vai>> {
    let contract = vai(world)?;
    Ok(with_metadata(world, contract, name, &["VAI", name]))
}

pub fn governor_data<'w>(
    world: &'w World,
    name: &str,
) -> LookupResult<ContractData<'w, Governor>> {
    let contract = governor(world, name)?;
    Ok(with_metadata(world, contract, name, &["Governor", name]))
}

pub fn interest_rate_model_data<'w>(
    world: &'w World,
    name: &str,
) -> LookupResult<ContractData<'w, InterestRateModel>> {
    let contract = interest_rate_model(world, name)?;
    Ok(with_metadata(world, contract, name, &["InterestRateModel", name]))
}

pub fn bep20_data<'w>(world: &'w World, name: &str) -> LookupResult<ContractData<'w, Bep20>> {
    let contract = bep20(world, name)?;
    Ok(with_metadata(world, contract, name, &["Tokens", name]))
}

pub fn vtoken_data<'w>(world: &'w World, name: &str) -> LookupResult<ContractData<'w, VToken>> {
    let contract = vtoken(world, name)?;
    Ok(with_metadata(world, contract, name, &["VTokens", name]))
}

pub fn vtoken_delegate_data<'w>(
    world: &'w World,
    name: &str,
) -> LookupResult<ContractData<'w, VBep20Delegate>> {
    let contract = vtoken_delegate(world, name)?;
    Ok(with_metadata(world, contract, name, &["VTokenDelegate", name]))
}

pub fn comptroller_impl_data<'w>(
    world: &'w World,
    name: &str,
) -> LookupResult<ContractData<'w, ComptrollerImpl>> {
    let contract = comptroller_impl(world, name)?;
    Ok(with_metadata(world, contract, name, &["Comptroller", name]))
}
