use minijinja::{Value, context};
use s2h_core::ir::HttpRequest;
use s2h_core::transform::var_name;
use serde::Serialize;

/// Literal reference to the `baseUrl` global in front of every path.
const BASE_URL_REF: &str = "{{baseUrl}}";

#[derive(Serialize)]
struct Header<'a> {
    name: &'a str,
    value: &'a str,
}

pub(crate) fn request_context(req: &HttpRequest, named: bool) -> Value {
    let headers: Vec<Header<'_>> = req
        .headers
        .iter()
        .map(|(name, value)| Header { name, value })
        .collect();
    let description_lines: Vec<&str> = req.description.lines().collect();

    context! {
        name => &req.name,
        var_name => named.then(|| var_name(&req.name)),
        description_lines => description_lines,
        method => req.method.as_str(),
        base_url_ref => BASE_URL_REF,
        path => &req.path,
        headers => headers,
        body => &req.body,
    }
}
