//! Stats Section Component
//!
//! Headline numbers that count up from zero the first time the section
//! scrolls into view.

use cardshop_core::effects::{parse_counter_target, CounterAnimation};
use dioxus::prelude::*;

use crate::context::use_shop_config;
use crate::hooks::{wait_until_visible, VisibilityOptions};

/// One headline number
#[derive(Clone, PartialEq, Debug)]
pub struct Stat {
    pub target: u64,
    pub label: String,
}

impl Stat {
    pub fn new(target: u64, label: impl Into<String>) -> Self {
        Self {
            target,
            label: label.into(),
        }
    }

    /// Build from a raw attribute value such as `"1500+"`
    pub fn parse(raw: &str, label: impl Into<String>) -> Option<Self> {
        parse_counter_target(raw).map(|target| Self::new(target, label))
    }
}

/// Section of animated counters
#[component]
pub fn StatsSection(stats: Vec<Stat>) -> Element {
    let config = use_shop_config();
    let mut values = use_signal(|| vec!["0".to_string(); stats.len()]);
    let targets: Vec<u64> = stats.iter().map(|stat| stat.target).collect();

    let onmounted = move |_: MountedEvent| {
        let targets = targets.clone();
        async move {
            if !wait_until_visible(".stats-section".to_string(), VisibilityOptions::COUNTERS).await {
                return;
            }
            tracing::debug!(counters = targets.len(), "Stats visible, starting counters");
            for (index, target) in targets.into_iter().enumerate() {
                spawn(async move {
                    for frame in CounterAnimation::new(target, config.effects.counter_steps) {
                        if let Some(slot) = values.write().get_mut(index) {
                            *slot = frame.label;
                        }
                        if !frame.done {
                            tokio::time::sleep(config.effects.counter_tick()).await;
                        }
                    }
                });
            }
        }
    };

    let rendered: Vec<(String, String)> = stats
        .iter()
        .zip(values.read().iter())
        .map(|(stat, value)| (stat.label.clone(), value.clone()))
        .collect();

    rsx! {
        section { id: "stats", class: "stats-section", onmounted: onmounted,
            div { class: "container stats-row",
                for (label, value) in rendered {
                    div { key: "{label}", class: "stat-item",
                        h3 { class: "stat-number", "{value}" }
                        p { class: "stat-label", "{label}" }
                    }
                }
            }
        }
    }
}
