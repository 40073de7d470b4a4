use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::check_table::{CheckLevel, FrameworkChecks};
use crate::stats::Record;

// Non-keyed results from https://github.com/krausest/js-framework-benchmark
pub static FRAMEWORK_STATS: LazyLock<Vec<Record>> = LazyLock::new(|| {  vec![
Record::new("angular").with("createRows", 2354).with("size", 38.26),
Record::new("inferno").with("createRows", 1800).with("size", 8.9),
Record::new("react").with("createRows", 2886).with("size", 38.33),
Record::new("redrunner").with("createRows", 1846).with("size", 3.8),
Record::new("riot").with("createRows", 2263).with("size", 7.23),
Record::new("svelte").with("createRows", 2167).with("size", 2.96),
Record::new("vanillajs").with("createRows", 1653).with("size", 2.17),
Record::new("vue-next").with("createRows", 1967).with("size", 20.3),
] });

pub static CHECK_ITEMS: LazyLock<Vec<String>> = LazyLock::new(|| {
    ["Direct DOM manipulation", "Move DOM elements", "Control DOM reuse"]
        .iter()
        .map(|s| s.to_string())
        .collect()
});

fn checks(framework: &str, levels: [CheckLevel; 3]) -> FrameworkChecks {
    let checks: BTreeMap<String, CheckLevel> = CHECK_ITEMS.iter().cloned().zip(levels).collect();
    FrameworkChecks {
        framework: framework.to_string(),
        checks,
    }
}

pub static FRAMEWORK_CHECKS: LazyLock<Vec<FrameworkChecks>> = LazyLock::new(|| {
    use CheckLevel::*;
    vec![
        checks("angular", [Partial, Partial, Partial]),
        checks("react", [No, Partial, Partial]),
        checks("redrunner", [Full, Full, Full]),
        checks("svelte", [Partial, Partial, Partial]),
        checks("vanillajs", [Full, Full, Full]),
    ]
});
