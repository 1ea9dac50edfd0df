//! Accessor/mutator method generation.

use modelgen_core::attribute_to_method;

use crate::render::{TokenMap, render_tokens};

/// Renders accessor and mutator bodies from a pair of method templates.
///
/// Each template sees two tokens: the literal attribute name and the
/// derived method identifier. Per-attribute outputs are concatenated in
/// input order with no separator beyond what the templates supply.
pub struct AccessorGenerator<'a> {
    getter_stub: &'a str,
    setter_stub: &'a str,
}

impl<'a> AccessorGenerator<'a> {
    pub fn new(getter_stub: &'a str, setter_stub: &'a str) -> Self {
        Self {
            getter_stub,
            setter_stub,
        }
    }

    pub fn getters(&self, attributes: &[String]) -> String {
        self.render_all(attributes, "get", self.getter_stub)
    }

    pub fn setters(&self, attributes: &[String]) -> String {
        self.render_all(attributes, "set", self.setter_stub)
    }

    fn render_all(&self, attributes: &[String], prefix: &str, stub: &str) -> String {
        let mut out = String::new();
        for attribute in attributes {
            let mut tokens = TokenMap::new();
            tokens.insert("attribute", attribute.as_str());
            tokens.insert("function", attribute_to_method(prefix, attribute));
            out.push_str(&render_tokens(stub, &tokens));
        }
        out
    }
}
