//! Memoized client construction
//!
//! Hosts that rebuild their view frequently need client construction to be
//! stable across rebuilds: constructing a fresh client for an unchanged
//! configuration would restart the startup probe every time. The factory
//! caches one client per distinct configuration value and hands out shared
//! references.

use std::sync::Arc;

use dashmap::DashMap;

use sesame_core::ClientConfig;

/// A cached client factory keyed by configuration value.
///
/// Equal configurations (same API key, same option set) share one client.
/// There is no teardown: a client built for a configuration that is never
/// used again simply stays cached.
pub struct ClientFactory<C, F>
where
    F: Fn(&ClientConfig) -> C,
{
    build: F,
    clients: DashMap<String, Arc<C>>,
}

impl<C, F> ClientFactory<C, F>
where
    F: Fn(&ClientConfig) -> C,
{
    /// Create a factory around a construction function.
    ///
    /// # Arguments
    ///
    /// * `build` - Constructs a client from a configuration; called once per
    ///   distinct configuration value
    pub fn new(build: F) -> Self {
        Self {
            build,
            clients: DashMap::new(),
        }
    }

    /// Get the client for this configuration, constructing it on first use.
    pub fn get_or_build(&self, config: &ClientConfig) -> Arc<C> {
        self.clients
            .entry(config.fingerprint())
            .or_insert_with(|| Arc::new((self.build)(config)))
            .clone()
    }

    /// Number of distinct configurations seen so far.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubClient {
        api_key: String,
    }

    fn factory() -> ClientFactory<StubClient, impl Fn(&ClientConfig) -> StubClient> {
        ClientFactory::new(|config: &ClientConfig| StubClient {
            api_key: config.api_key.clone(),
        })
    }

    #[test]
    fn test_equal_configs_share_a_client() {
        let factory = factory();

        let a = factory.get_or_build(
            &ClientConfig::builder("pk_test_1")
                .option("network", serde_json::json!("mainnet"))
                .build(),
        );
        // A freshly built but equal configuration, as a host rebuilding its
        // view on every pass would produce.
        let b = factory.get_or_build(
            &ClientConfig::builder("pk_test_1")
                .option("network", serde_json::json!("mainnet"))
                .build(),
        );

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_distinct_configs_get_distinct_clients() {
        let factory = factory();

        let a = factory.get_or_build(&ClientConfig::new("pk_test_1"));
        let b = factory.get_or_build(&ClientConfig::new("pk_test_2"));

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a.api_key, "pk_test_1");
        assert_eq!(b.api_key, "pk_test_2");
        assert_eq!(factory.len(), 2);
    }
}
