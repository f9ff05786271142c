// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Template registry — immutable, process-wide mapping from jurisdiction code
// to card layout, built once at startup.

use std::collections::HashMap;
use std::sync::LazyLock;

use mockid_core::types::JurisdictionCode;

use crate::template::{self, JurisdictionTemplate};

static GLOBAL: LazyLock<TemplateRegistry> = LazyLock::new(TemplateRegistry::builtin);

/// Registry of supported card layouts. Lookup of an unsupported code is not
/// an error: it resolves to the neutral fallback template.
pub struct TemplateRegistry {
    templates: HashMap<JurisdictionCode, JurisdictionTemplate>,
}

impl TemplateRegistry {
    /// The built-in template set: Slovenia and Pennsylvania.
    pub fn builtin() -> Self {
        let mut templates = HashMap::new();
        for t in [template::slovenia(), template::pennsylvania()] {
            templates.insert(t.code.clone(), t);
        }
        Self { templates }
    }

    /// The process-wide registry instance.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Resolve a jurisdiction code to its template, or the fallback variant
    /// when the code has no layout of its own.
    pub fn get(&self, code: &JurisdictionCode) -> JurisdictionTemplate {
        self.templates
            .get(code)
            .cloned()
            .unwrap_or_else(|| template::unsupported(code))
    }

    /// Codes with a dedicated layout.
    pub fn supported(&self) -> Vec<&JurisdictionCode> {
        self.templates.keys().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_codes_resolve_to_their_layouts() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(
            registry.get(&JurisdictionCode::Si).code,
            JurisdictionCode::Si
        );
        assert_eq!(
            registry.get(&JurisdictionCode::UsPa).code,
            JurisdictionCode::UsPa
        );
    }

    #[test]
    fn us_ny_falls_back_despite_having_a_number_rule() {
        let registry = TemplateRegistry::builtin();
        let t = registry.get(&JurisdictionCode::UsNy);
        assert!(t.placements.is_empty());
        assert_eq!(t.code, JurisdictionCode::UsNy);
    }

    #[test]
    fn unknown_code_is_not_an_error() {
        let registry = TemplateRegistry::builtin();
        let code = JurisdictionCode::Other("ZZ".into());
        let t = registry.get(&code);
        assert_eq!(t.code, code);
        assert!(t.placements.is_empty());
    }

    #[test]
    fn global_registry_is_reachable() {
        assert_eq!(TemplateRegistry::global().supported().len(), 2);
    }
}
