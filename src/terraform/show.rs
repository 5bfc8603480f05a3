//! Typed view over `terraform show -json` output, used only for the
//! operator-facing summary. The document itself is forwarded untouched.

use serde::Deserialize;
use termtree::Tree;

#[derive(Debug, Default, Deserialize)]
pub struct ShowOutput {
    #[serde(default)]
    pub values: Option<StateValues>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StateValues {
    #[serde(default)]
    pub root_module: Option<Module>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Module {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub resources: Vec<StateResource>,
    #[serde(default)]
    pub child_modules: Vec<Module>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StateResource {
    #[serde(rename = "type", default)]
    pub type_: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub values: Option<serde_json::Value>,
}

impl StateResource {
    pub fn id(&self) -> Option<&str> {
        self.values.as_ref()?.get("id")?.as_str()
    }
}

/// Builds the resource summary tree for a show document. Returns `None` when
/// the document has no root module.
pub fn summarize(output: &ShowOutput, provider_prefix: &str) -> Option<Tree<String>> {
    let root = output.values.as_ref()?.root_module.as_ref()?;
    Some(module_tree(root, "root module", provider_prefix))
}

fn module_tree(module: &Module, fallback_label: &str, provider_prefix: &str) -> Tree<String> {
    let label = module.address.as_deref().unwrap_or(fallback_label);
    let mut tree = Tree::new(format!("{} ({} resources)", label, module.resources.len()));

    for resource in &module.resources {
        if resource.type_.starts_with(provider_prefix) {
            tree.push(format!(
                "{}: {} ({})",
                resource.type_,
                resource.name.as_deref().unwrap_or("unnamed"),
                resource.id().unwrap_or("no id")
            ));
        }
    }

    for child in &module.child_modules {
        tree.push(module_tree(child, "unknown", provider_prefix));
    }

    tree
}
