use std::collections::HashMap;

use crate::coerce::interpret_bool;
use crate::constant::{FALSE_VALUE, TRUE_VALUE};
use crate::model::negation_target;
use crate::table::raw::RawTable;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Compute the resolved option values from the raw snapshot.
///
/// Each `no<name>` key writes the opposite boolean state onto `<name>`, but only when `<name>` was not itself supplied.
/// Targets are checked against `raw` alone, so a synthesized entry never feeds another negation.
pub(crate) fn resolve_negations(raw: &RawTable) -> HashMap<String, String> {
    let mut resolved: HashMap<String, String> = raw
        .entries()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    for (key, raw_value) in raw.entries() {
        let Some(target) = negation_target(key) else {
            continue;
        };

        if raw.contains(target) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Negation '{key}' suppressed; '{target}' was supplied directly.");
            }

            continue;
        }

        let value = if interpret_bool(raw_value) {
            FALSE_VALUE
        } else {
            TRUE_VALUE
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Negation '{key}' resolves '{target}' to '{value}'.");
        }

        resolved.insert(target.to_string(), value.to_string());
    }

    resolved
}
