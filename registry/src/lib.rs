#![no_std]

multiversx_sc::imports!();

pub mod registry_proxy;

// ============================================================
// Registry — admin-governed holder of the CSTK token reference
// ============================================================

#[multiversx_sc::contract]
pub trait Registry: admin_role::AdminRoleModule {
    #[init]
    fn init(&self, admins: ManagedVec<ManagedAddress>, token: ManagedAddress) {
        self.init_admin_role(&admins);
        self.token().set(&token);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(token)]
    #[storage_mapper("token")]
    fn token(&self) -> SingleValueMapper<ManagedAddress>;
}
