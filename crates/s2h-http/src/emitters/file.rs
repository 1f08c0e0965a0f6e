use minijinja::{Value, context};
use s2h_core::ir::HttpFile;
use serde::Serialize;

#[derive(Serialize)]
struct GlobalVar<'a> {
    name: &'a str,
    value: &'a str,
}

pub(crate) fn file_context(file: &HttpFile, requests: &[String]) -> Value {
    let globals: Vec<GlobalVar<'_>> = file
        .global_vars
        .iter()
        .map(|(name, value)| GlobalVar { name, value })
        .collect();

    context! {
        globals => globals,
        requests => requests,
    }
}
