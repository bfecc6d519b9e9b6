//! Top-level client composing one facade per resource family over a
//! shared authenticated transport.

use crate::Result;
use crate::config::{ClientConfig, Environment};
use crate::resources::{
    Accounts, Assets, Baskets, ExchangeRates, Gcu, Transactions, Transfers, Webhooks,
};
use crate::transport::Transport;

/// The FinAegis API client.
///
/// Holds only immutable session configuration; independent requests may be
/// issued concurrently from multiple tasks through a shared reference.
///
/// ```no_run
/// use finaegis::{FinAegis, models::ListParams};
///
/// # async fn run() -> finaegis::Result<()> {
/// let client = FinAegis::from_env()?;
/// let accounts = client.accounts().list(ListParams::page(1)).await?;
/// for account in &accounts.data {
///     println!("{} {}", account.name, account.balance);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FinAegis {
    transport: Transport,
}

impl FinAegis {
    /// Builds a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Production client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(api_key)?)
    }

    /// Production client with the key taken from `FINAEGIS_API_KEY`.
    ///
    /// # Errors
    ///
    /// Fails with [`FinAegisError::Config`](crate::FinAegisError::Config)
    /// before any network activity when the variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Client for a named deployment environment, key from the environment
    /// variable.
    pub fn from_env_for(environment: Environment) -> Result<Self> {
        Self::new(ClientConfig::from_env_for(environment)?)
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts {
            transport: &self.transport,
        }
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions {
            transport: &self.transport,
        }
    }

    pub fn transfers(&self) -> Transfers<'_> {
        Transfers {
            transport: &self.transport,
        }
    }

    pub fn assets(&self) -> Assets<'_> {
        Assets {
            transport: &self.transport,
        }
    }

    pub fn baskets(&self) -> Baskets<'_> {
        Baskets {
            transport: &self.transport,
        }
    }

    pub fn exchange_rates(&self) -> ExchangeRates<'_> {
        ExchangeRates {
            transport: &self.transport,
        }
    }

    pub fn gcu(&self) -> Gcu<'_> {
        Gcu {
            transport: &self.transport,
        }
    }

    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks {
            transport: &self.transport,
        }
    }
}
