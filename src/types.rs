multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Minter Config — full configuration snapshot in one query
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct MinterConfig<M: ManagedTypeApi> {
    pub dao: ManagedAddress<M>,
    pub cstk_token: ManagedAddress<M>,
    pub registry: ManagedAddress<M>,
    /// Receives every payment accepted by `pay`, in full.
    pub collector: ManagedAddress<M>,
    pub numerator: BigUint<M>,
    pub denominator: BigUint<M>,
}
