//! Shared configuration context.

use cardshop_core::ShopConfig;
use dioxus::prelude::*;

/// Make `config` available to every descendant component.
pub fn provide_shop_config(config: ShopConfig) -> ShopConfig {
    use_context_provider(|| config)
}

/// Read the storefront configuration from context.
pub fn use_shop_config() -> ShopConfig {
    use_context::<ShopConfig>()
}
