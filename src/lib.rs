#![no_std]

multiversx_sc::imports!();

pub mod minter_proxy;
pub mod types;

use types::MinterConfig;

pub use admin_role::{ERR_INVALID_ADDRESS, ERR_UNAUTHORIZED};

// ============================================================
// Errors
// ============================================================

pub const ERR_INVALID_PAYMENT: &str = "InvalidPayment";
pub const ERR_INVALID_RATIO: &str = "InvalidRatio";

// ============================================================
// Constants
// ============================================================

/// Ratio in force until an admin calls setRatio: payments mint nothing.
const DEFAULT_NUMERATOR: u64 = 0;
const DEFAULT_DENOMINATOR: u64 = 1;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Minter: admin_role::AdminRoleModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Reference addresses are stored as given, zero included.
    /// The deployer becomes owner and the initial collector.
    ///
    /// Must be deployed without the `PAYABLE` / `PAYABLE_BY_SC` code
    /// metadata flags (e.g. `CodeMetadata::UPGRADEABLE` only): `pay` is the
    /// only way EGLD may reach this contract.
    #[init]
    fn init(
        &self,
        authorized_keys: ManagedVec<ManagedAddress>,
        dao: ManagedAddress,
        registry: ManagedAddress,
        cstk_token: ManagedAddress,
    ) {
        self.init_admin_role(&authorized_keys);

        self.dao().set(&dao);
        self.registry().set(&registry);
        self.cstk_token().set(&cstk_token);
        self.collector().set(self.blockchain().get_caller());
        self.numerator().set(BigUint::from(DEFAULT_NUMERATOR));
        self.denominator().set(BigUint::from(DEFAULT_DENOMINATOR));
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: pay
    // The only way to send EGLD to this contract. The whole
    // amount goes to the collector; the minted amount is only
    // reported.
    // ========================================================

    #[endpoint(pay)]
    #[payable("EGLD")]
    fn pay(&self, beneficiary: ManagedAddress) {
        let value = self.call_value().egld_value().clone_value();
        require!(value > 0u64, ERR_INVALID_PAYMENT);

        let minted_amount = self.compute_minted_amount(&value);

        // Nothing is stored around this transfer. A balance ledger
        // added here must be written before sending.
        let collector = self.collector().get();
        self.send().direct_egld(&collector, &value);

        self.payment_received_event(&beneficiary, &value);
        self.noop_minted_event(&beneficiary, &minted_amount);
    }

    // ========================================================
    // ADMIN ENDPOINTS
    // ========================================================

    #[endpoint(setRatio)]
    fn set_ratio(&self, numerator: BigUint, denominator: BigUint) {
        self.require_caller_admin();
        require!(denominator > 0u64, ERR_INVALID_RATIO);

        self.numerator().set(&numerator);
        self.denominator().set(&denominator);

        self.ratio_changed_event(&numerator, &denominator);
    }

    #[endpoint(changeCollector)]
    fn change_collector(&self, new_collector: ManagedAddress) {
        let caller = self.require_caller_admin();
        self.require_non_zero_address(&new_collector);

        self.collector().set(&new_collector);

        self.collector_changed_event(&new_collector, &caller);
    }

    #[endpoint(changeDAOContract)]
    fn change_dao_contract(&self, new_dao: ManagedAddress) {
        let caller = self.require_caller_admin();
        self.require_non_zero_address(&new_dao);

        self.dao().set(&new_dao);

        self.dao_contract_changed_event(&new_dao, &caller);
    }

    #[endpoint(changeCSTKTokenContract)]
    fn change_cstk_token_contract(&self, new_token: ManagedAddress) {
        let caller = self.require_caller_admin();
        self.require_non_zero_address(&new_token);

        self.cstk_token().set(&new_token);

        self.cstk_token_contract_changed_event(&new_token, &caller);
    }

    #[endpoint(changeRegistry)]
    fn change_registry(&self, new_registry: ManagedAddress) {
        let caller = self.require_caller_admin();
        self.require_non_zero_address(&new_registry);

        self.registry().set(&new_registry);

        self.registry_contract_changed_event(&new_registry, &caller);
    }

    // ========================================================
    // INTERNAL: ratio scaling
    // Multiply first, then divide (truncating). Computed per
    // call, never derived from the truncated ratio() view.
    // ========================================================

    fn compute_minted_amount(&self, value: &BigUint) -> BigUint {
        let numerator = self.numerator().get();
        let denominator = self.denominator().get();
        (value * &numerator) / &denominator
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Truncated integer ratio, e.g. 0 for 1/10. Informational only.
    #[view(ratio)]
    fn ratio(&self) -> BigUint {
        self.numerator().get() / self.denominator().get()
    }

    #[view(getMintedAmount)]
    fn get_minted_amount(&self, value: BigUint) -> BigUint {
        self.compute_minted_amount(&value)
    }

    #[view(getMinterConfig)]
    fn get_minter_config(&self) -> MinterConfig<Self::Api> {
        MinterConfig {
            dao: self.dao().get(),
            cstk_token: self.cstk_token().get(),
            registry: self.registry().get(),
            collector: self.collector().get(),
            numerator: self.numerator().get(),
            denominator: self.denominator().get(),
        }
    }

    // ========================================================
    // EVENTS
    // `*Changed` events carry (new value, caller).
    // ========================================================

    #[event("PaymentReceived")]
    fn payment_received_event(
        &self,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("NoopMinted")]
    fn noop_minted_event(
        &self,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("RatioChanged")]
    fn ratio_changed_event(&self, #[indexed] numerator: &BigUint, #[indexed] denominator: &BigUint);

    #[event("CollectorChanged")]
    fn collector_changed_event(
        &self,
        #[indexed] collector: &ManagedAddress,
        #[indexed] changed_by: &ManagedAddress,
    );

    #[event("DAOContractChanged")]
    fn dao_contract_changed_event(
        &self,
        #[indexed] dao: &ManagedAddress,
        #[indexed] changed_by: &ManagedAddress,
    );

    #[event("CSTKTokenContractChanged")]
    fn cstk_token_contract_changed_event(
        &self,
        #[indexed] cstk_token: &ManagedAddress,
        #[indexed] changed_by: &ManagedAddress,
    );

    #[event("RegistryContractChanged")]
    fn registry_contract_changed_event(
        &self,
        #[indexed] registry: &ManagedAddress,
        #[indexed] changed_by: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Collaborator references ──

    #[view(dao)]
    #[storage_mapper("dao")]
    fn dao(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(cstkToken)]
    #[storage_mapper("cstkToken")]
    fn cstk_token(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(registry)]
    #[storage_mapper("registry")]
    fn registry(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Payment routing ──

    #[view(collector)]
    #[storage_mapper("collector")]
    fn collector(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(numerator)]
    #[storage_mapper("numerator")]
    fn numerator(&self) -> SingleValueMapper<BigUint>;

    #[view(denominator)]
    #[storage_mapper("denominator")]
    fn denominator(&self) -> SingleValueMapper<BigUint>;
}
