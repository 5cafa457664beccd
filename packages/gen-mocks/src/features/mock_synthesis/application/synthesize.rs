//! Mock synthesizer
//!
//! Builds the mock for one interface. Parsed signatures are never mutated;
//! parameter naming produces a fresh list shared by the field type and the
//! delegating method.

use std::collections::HashSet;

use tracing::warn;

use crate::features::interface_selection::domain::{InterfaceDeclaration, MethodSignature};
use crate::features::mock_synthesis::domain::{
    CallArg, DelegatingMethod, FieldSpec, MockDeclarationSet,
};
use crate::features::parsing::domain::{FieldGroup, FuncType};
use crate::shared::constants::naming::{
    ANON_PARAM_PREFIX, BLANK_IDENT, FIELD_SUFFIX, MOCK_TYPE_PREFIX, RECEIVER_CANDIDATES,
};

/// Name every parameter of `sig`
///
/// An anonymous group `i` becomes `v<i>`; `i` counts field groups, not
/// flattened parameters. Blank names get the same treatment, with a `_<j>`
/// suffix when the group declares several names. A generated name that a
/// declared parameter or result already uses gets `_` appended until free.
pub fn name_parameters(sig: &FuncType) -> FuncType {
    let mut taken: HashSet<String> = sig
        .params
        .iter()
        .chain(&sig.results)
        .flat_map(|group| group.names.iter())
        .filter(|name| name.as_str() != BLANK_IDENT)
        .cloned()
        .collect();
    let mut fresh = |mut name: String| {
        while taken.contains(&name) {
            name.push('_');
        }
        taken.insert(name.clone());
        name
    };

    let params = sig
        .params
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let names = if group.is_anonymous() {
                vec![fresh(format!("{}{}", ANON_PARAM_PREFIX, i))]
            } else {
                let multi = group.names.len() > 1;
                group
                    .names
                    .iter()
                    .enumerate()
                    .map(|(j, name)| match name.as_str() {
                        BLANK_IDENT if multi => fresh(format!("{}{}_{}", ANON_PARAM_PREFIX, i, j)),
                        BLANK_IDENT => fresh(format!("{}{}", ANON_PARAM_PREFIX, i)),
                        _ => name.clone(),
                    })
                    .collect()
            };
            FieldGroup {
                names,
                ty: group.ty.clone(),
                variadic: group.variadic,
            }
        })
        .collect();

    FuncType {
        params,
        results: sig.results.clone(),
    }
}

/// First receiver name not taken by a parameter or named result
fn receiver_name(sig: &FuncType) -> String {
    let taken: HashSet<&str> = sig
        .params
        .iter()
        .chain(&sig.results)
        .flat_map(|group| group.names.iter().map(String::as_str))
        .collect();

    if let Some(name) = RECEIVER_CANDIDATES.iter().find(|c| !taken.contains(**c)) {
        return name.to_string();
    }
    (0..)
        .map(|n| format!("{}{}", RECEIVER_CANDIDATES[0], n))
        .find(|name| !taken.contains(name.as_str()))
        .unwrap_or_default()
}

fn call_args(sig: &FuncType) -> Vec<CallArg> {
    sig.params
        .iter()
        .flat_map(|group| {
            group.names.iter().map(move |name| CallArg {
                name: name.clone(),
                spread: group.variadic,
            })
        })
        .collect()
}

/// Mock synthesizer
#[derive(Debug, Default, Clone, Copy)]
pub struct MockSynthesizer;

impl MockSynthesizer {
    pub fn new() -> Self {
        Self
    }

    pub fn synthesize(&self, iface: &InterfaceDeclaration) -> MockDeclarationSet {
        for ty in &iface.embedded {
            warn!("{}: embedded element {} is not mocked", iface.name, ty);
        }

        let mock_name = format!("{}{}", MOCK_TYPE_PREFIX, iface.name);
        let mut fields = Vec::with_capacity(iface.methods.len());
        let mut methods = Vec::with_capacity(iface.methods.len());

        for method in &iface.methods {
            let (field, delegate) = self.synthesize_method(&mock_name, method);
            fields.push(field);
            methods.push(delegate);
        }

        MockDeclarationSet {
            interface: iface.name.clone(),
            source_path: iface.source_path.clone(),
            mock_name,
            fields,
            methods,
        }
    }

    fn synthesize_method(
        &self,
        mock_name: &str,
        method: &MethodSignature,
    ) -> (FieldSpec, DelegatingMethod) {
        let signature = name_parameters(&method.func);
        let args = call_args(&signature);

        let field = format!("{}{}", method.name, FIELD_SUFFIX);
        let delegate = DelegatingMethod {
            receiver: receiver_name(&signature),
            receiver_type: mock_name.to_string(),
            name: method.name.clone(),
            signature: signature.clone(),
            field: field.clone(),
            args,
        };
        (
            FieldSpec {
                name: field,
                ty: signature,
            },
            delegate,
        )
    }
}
