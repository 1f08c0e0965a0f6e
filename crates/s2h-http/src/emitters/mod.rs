pub mod file;
pub mod request;

use minijinja::{AutoEscape, Environment};
use s2h_core::ir::{HttpFile, HttpRequest};

use crate::error::EmitError;

const REQUEST_TEMPLATE: &str = "request.http.j2";
const FILE_TEMPLATE: &str = "file.http.j2";

/// Renders requests and files in the `.http` format.
pub struct Formatter {
    env: Environment<'static>,
    named_requests: bool,
}

impl Formatter {
    /// `named_requests` adds a `# @name <var>` line under every request title.
    pub fn new(named_requests: bool) -> Result<Self, EmitError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template(
            REQUEST_TEMPLATE,
            include_str!("../../templates/request.http.j2"),
        )?;
        env.add_template(FILE_TEMPLATE, include_str!("../../templates/file.http.j2"))?;
        Ok(Self {
            env,
            named_requests,
        })
    }

    pub fn format_request(&self, req: &HttpRequest) -> Result<String, EmitError> {
        let tmpl = self.env.get_template(REQUEST_TEMPLATE)?;
        Ok(tmpl.render(request::request_context(req, self.named_requests))?)
    }

    pub fn format_file(&self, file: &HttpFile) -> Result<String, EmitError> {
        let requests = file
            .requests
            .iter()
            .map(|req| self.format_request(req))
            .collect::<Result<Vec<_>, _>>()?;
        let tmpl = self.env.get_template(FILE_TEMPLATE)?;
        Ok(tmpl.render(file::file_context(file, &requests))?)
    }
}

/// Render one request block.
pub fn format_request(req: &HttpRequest) -> Result<String, EmitError> {
    Formatter::new(false)?.format_request(req)
}

/// Render a whole `.http` file: the global variables, then every request
/// separated by a blank line.
pub fn format_file(file: &HttpFile) -> Result<String, EmitError> {
    Formatter::new(false)?.format_file(file)
}
