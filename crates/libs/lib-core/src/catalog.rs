//! # Exchange Catalog
//!
//! The immutable startup data the exchange core reads: the ordered asset list, the ordered
//! bank list, the verified-account table and the USD→NGN rate.
//!
//! A [`Catalog`] is built once (from [`Catalog::builtin`] or a JSON file), validated, and then
//! shared read-only as `Arc<Catalog>`. Nothing mutates it afterwards.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use shared::dto::exchange::{Asset, BankOption, CatalogData, VerifiedAccount};

use crate::error::{AppError, Result};

/// Naira per US dollar in the built-in catalog.
pub const USD_TO_NAIRA_RATE: u64 = 1650;

/// Validated, read-only exchange catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    assets: Vec<Asset>,
    banks: Vec<BankOption>,
    verified_accounts: BTreeMap<String, VerifiedAccount>,
    usd_rate: u64,
}

impl Catalog {
    /// Build a catalog from raw data, validating it.
    pub fn from_data(data: CatalogData) -> Result<Self> {
        validate(&data)?;
        Ok(Self {
            assets: data.assets,
            banks: data.banks,
            verified_accounts: data.verified_accounts,
            usd_rate: data.usd_rate,
        })
    }

    /// Load and validate a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let data: CatalogData = serde_json::from_str(&content)?;
        let catalog = Self::from_data(data)?;
        tracing::info!(
            path = %path.display(),
            assets = catalog.assets.len(),
            banks = catalog.banks.len(),
            verified_accounts = catalog.verified_accounts.len(),
            "Loaded exchange catalog from file"
        );
        Ok(catalog)
    }

    /// The built-in demo catalog.
    pub fn builtin() -> Self {
        Self {
            assets: builtin_assets(),
            banks: builtin_banks(),
            verified_accounts: builtin_verified_accounts(),
            usd_rate: USD_TO_NAIRA_RATE,
        }
    }

    /// Same catalog with a different USD rate.
    pub fn with_usd_rate(mut self, usd_rate: u64) -> Result<Self> {
        if usd_rate == 0 {
            return Err(AppError::Catalog("USD rate must be positive".to_string()));
        }
        self.usd_rate = usd_rate;
        Ok(self)
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn asset(&self, index: usize) -> Option<&Asset> {
        self.assets.get(index)
    }

    pub fn banks(&self) -> &[BankOption] {
        &self.banks
    }

    pub fn bank(&self, id: &str) -> Option<&BankOption> {
        self.banks.iter().find(|bank| bank.id == id)
    }

    /// Label for a bank id, if the id is known.
    pub fn bank_label(&self, id: &str) -> Option<&str> {
        self.bank(id).map(|bank| bank.label.as_str())
    }

    /// Exact-key lookup in the verified-account table.
    pub fn lookup_account(&self, account_number: &str) -> Option<&VerifiedAccount> {
        self.verified_accounts.get(account_number)
    }

    pub fn usd_rate(&self) -> u64 {
        self.usd_rate
    }

    /// Serializable copy, e.g. for writing a catalog template.
    pub fn to_data(&self) -> CatalogData {
        CatalogData {
            usd_rate: self.usd_rate,
            assets: self.assets.clone(),
            banks: self.banks.clone(),
            verified_accounts: self.verified_accounts.clone(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(data: &CatalogData) -> Result<()> {
    if data.assets.is_empty() {
        return Err(AppError::Catalog("asset list is empty".to_string()));
    }

    if data.usd_rate == 0 {
        return Err(AppError::Catalog("USD rate must be positive".to_string()));
    }

    let mut symbols = HashSet::new();
    for asset in &data.assets {
        if !symbols.insert(asset.symbol.as_str()) {
            return Err(AppError::Catalog(format!("duplicate asset symbol {}", asset.symbol)));
        }
        if asset.rate == 0 {
            return Err(AppError::Catalog(format!("asset {} has a zero rate", asset.symbol)));
        }
    }

    let mut bank_ids = HashSet::new();
    for bank in &data.banks {
        if !bank_ids.insert(bank.id.as_str()) {
            return Err(AppError::Catalog(format!("duplicate bank id {}", bank.id)));
        }
    }

    if let Some(key) = data
        .verified_accounts
        .keys()
        .find(|key| !lib_utils::is_complete_account_number(key))
    {
        return Err(AppError::Catalog(format!(
            "verified account key {:?} is not a 10-digit account number",
            key
        )));
    }

    Ok(())
}

fn asset(symbol: &str, name: &str, rate: u64, balance: &str, icon: &str) -> Asset {
    Asset {
        symbol: symbol.to_string(),
        name: name.to_string(),
        rate,
        balance: balance.to_string(),
        unit: symbol.to_string(),
        icon: icon.to_string(),
    }
}

fn builtin_assets() -> Vec<Asset> {
    vec![
        asset("BTC", "Bitcoin", 75_840_000, "2.45832100", "btc"),
        asset("ETH", "Ethereum", 4_950_000, "12.45678901", "eth"),
        asset("BNB", "BNB Chain", 385_000, "45.78923456", "bnb"),
        asset("SOL", "Solana", 246_800, "234.56789012", "sol"),
        asset("USDT", "Tether USD", 1_650, "5,000.00", "usdt"),
        asset("USDC", "USD Coin", 1_649, "3,250.50", "usdc"),
    ]
}

fn builtin_banks() -> Vec<BankOption> {
    [
        ("access", "Access Bank"),
        ("gtb", "GTBank"),
        ("zenith", "Zenith Bank"),
        ("uba", "UBA"),
        ("fidelity", "Fidelity Bank"),
        ("fcmb", "FCMB"),
        ("sterling", "Sterling Bank"),
        ("union", "Union Bank"),
        ("wema", "Wema Bank"),
        ("polaris", "Polaris Bank"),
        ("stanbic", "Stanbic IBTC"),
        ("kuda", "Kuda Bank"),
        ("opay", "Opay"),
        ("palmpay", "PalmPay"),
        ("firstbank", "First Bank of Nigeria"),
    ]
    .into_iter()
    .map(|(id, label)| BankOption {
        id: id.to_string(),
        label: label.to_string(),
    })
    .collect()
}

fn builtin_verified_accounts() -> BTreeMap<String, VerifiedAccount> {
    [
        ("0123456789", "ADEBAYO JOHNSON OLUMIDE", "GTBank"),
        ("1234567890", "CHIOMA BLESSING OKAFOR", "Access Bank"),
        ("2345678901", "IBRAHIM MOHAMMED YUSUF", "Zenith Bank"),
        ("3456789012", "FUNMILAYO GRACE ADELEKE", "UBA"),
        ("4567890123", "EMEKA CHARLES NWOSU", "Fidelity Bank"),
    ]
    .into_iter()
    .map(|(number, name, bank)| {
        (
            number.to_string(),
            VerifiedAccount {
                name: name.to_string(),
                bank: bank.to_string(),
            },
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(Catalog::from_data(catalog.to_data()).is_ok());
        assert_eq!(catalog.assets().len(), 6);
        assert_eq!(catalog.banks().len(), 15);
        assert_eq!(catalog.usd_rate(), 1650);
        assert_eq!(catalog.asset(0).map(|a| a.symbol.as_str()), Some("BTC"));
        assert_eq!(catalog.asset(0).map(|a| a.rate), Some(75_840_000));
    }

    #[test]
    fn test_bank_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.bank_label("gtb"), Some("GTBank"));
        assert_eq!(catalog.bank_label("firstbank"), Some("First Bank of Nigeria"));
        assert_eq!(catalog.bank_label("GTB"), None);
    }

    #[test]
    fn test_account_lookup() {
        let catalog = Catalog::builtin();
        let record = catalog.lookup_account("0123456789").unwrap();
        assert_eq!(record.name, "ADEBAYO JOHNSON OLUMIDE");
        assert_eq!(record.bank, "GTBank");
        assert!(catalog.lookup_account("9999999999").is_none());
    }

    #[test]
    fn test_rejects_duplicate_symbols() {
        let mut data = Catalog::builtin().to_data();
        data.assets.push(data.assets[0].clone());
        assert!(matches!(Catalog::from_data(data), Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_rejects_zero_rates() {
        let mut data = Catalog::builtin().to_data();
        data.assets[2].rate = 0;
        assert!(matches!(Catalog::from_data(data), Err(AppError::Catalog(_))));

        let mut data = Catalog::builtin().to_data();
        data.usd_rate = 0;
        assert!(matches!(Catalog::from_data(data), Err(AppError::Catalog(_))));
        assert!(Catalog::builtin().with_usd_rate(0).is_err());
    }

    #[test]
    fn test_rejects_malformed_account_keys() {
        let mut data = Catalog::builtin().to_data();
        data.verified_accounts.insert(
            "12345".to_string(),
            VerifiedAccount {
                name: "SHORT".to_string(),
                bank: "UBA".to_string(),
            },
        );
        assert!(matches!(Catalog::from_data(data), Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_rejects_empty_and_duplicate_banks() {
        let mut data = Catalog::builtin().to_data();
        data.assets.clear();
        assert!(Catalog::from_data(data).is_err());

        let mut data = Catalog::builtin().to_data();
        data.banks.push(data.banks[0].clone());
        assert!(Catalog::from_data(data).is_err());
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!(
            "lib-core-catalog-{}.json",
            std::process::id()
        ));
        let json = serde_json::to_string_pretty(&Catalog::builtin().to_data()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = Catalog::from_json_file(&path).unwrap();
        assert_eq!(loaded, Catalog::builtin());

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(Catalog::from_json_file(&path), Err(AppError::Io(_))));
    }
}
