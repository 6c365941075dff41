#![no_std]

multiversx_sc::imports!();

// ============================================================
// Error messages shared by every contract embedding the role
// ============================================================

pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_INVALID_ADDRESS: &str = "InvalidAddress";

// ============================================================
// Admin Role — single owner + fixed admin set
//
// The owner is NOT implicitly an admin: only addresses passed
// at construction pass `require_caller_admin`.
// ============================================================

#[multiversx_sc::module]
pub trait AdminRoleModule {
    /// Records the deployer as owner and the given admin set.
    /// Empty lists and duplicates (including the deployer) are accepted.
    fn init_admin_role(&self, admins: &ManagedVec<ManagedAddress>) {
        let deployer = self.blockchain().get_caller();
        self.owner().set(&deployer);

        for admin in admins.iter() {
            self.admins().insert(admin.clone_value());
        }
    }

    // ========================================================
    // ENDPOINT: transferOwnership
    // Owner-only. Admins cannot reassign ownership.
    // ========================================================

    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_owner: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_UNAUTHORIZED);
        self.require_non_zero_address(&new_owner);

        self.owner().set(&new_owner);

        self.ownership_transferred_event(&caller, &new_owner);
    }

    // ========================================================
    // GUARDS
    // ========================================================

    /// Fails with `Unauthorized` unless the caller is in the admin set.
    /// Returns the caller so setters can attribute their events.
    fn require_caller_admin(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.admins().contains(&caller), ERR_UNAUTHORIZED);
        caller
    }

    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERR_INVALID_ADDRESS);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isAdmin)]
    fn is_admin(&self, address: &ManagedAddress) -> bool {
        self.admins().contains(address)
    }

    #[view(getAdmins)]
    fn get_admins(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for admin in self.admins().iter() {
            result.push(admin);
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("OwnershipTransferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(owner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("admins")]
    fn admins(&self) -> UnorderedSetMapper<ManagedAddress>;
}
