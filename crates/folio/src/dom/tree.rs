// ABOUTME: Owned output tree for composed markup, built on ego_tree.
// ABOUTME: Deep-clones parsed scraper nodes and serializes the result to an HTML string.

use ego_tree::{NodeMut, NodeRef, Tree};
use scraper::Node;

/// A node in the composed output.
#[derive(Debug, Clone, PartialEq)]
pub enum OutNode {
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
    Comment(String),
}

impl OutNode {
    /// Build an element with the given attributes, in order.
    pub fn element(name: &str, attrs: &[(&str, &str)]) -> Self {
        OutNode::Element {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        OutNode::Text(text.into())
    }

    /// Append a class token to an element's class list.
    pub fn add_class(&mut self, class: &str) {
        let OutNode::Element { attrs, .. } = self else {
            return;
        };
        match attrs.iter_mut().find(|(k, _)| k == "class") {
            Some((_, value)) => {
                if value.split_whitespace().any(|c| c == class) {
                    return;
                }
                if !value.trim().is_empty() {
                    value.push(' ');
                }
                value.push_str(class);
            }
            None => attrs.push(("class".to_string(), class.to_string())),
        }
    }
}

/// A standalone tree of output nodes with a single root.
#[derive(Debug, Clone)]
pub struct Fragment {
    tree: Tree<OutNode>,
}

impl Fragment {
    pub fn new(root: OutNode) -> Self {
        Self {
            tree: Tree::new(root),
        }
    }

    pub fn root_mut(&mut self) -> NodeMut<'_, OutNode> {
        self.tree.root_mut()
    }

    /// Serialize the whole tree, root included.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        serialize_node(self.tree.root(), &mut out);
        out
    }
}

/// Deep-clone a parsed node and its whole subtree under `parent`.
///
/// `extra_classes` are added to the cloned node only, never to descendants.
pub fn clone_into(parent: &mut NodeMut<'_, OutNode>, source: NodeRef<'_, Node>, extra_classes: &[&str]) {
    match source.value() {
        Node::Element(el) => {
            let mut node = OutNode::Element {
                name: el.name().to_string(),
                attrs: el
                    .attrs()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            };
            for class in extra_classes {
                node.add_class(class);
            }
            let mut cloned = parent.append(node);
            for child in source.children() {
                clone_into(&mut cloned, child, &[]);
            }
        }
        Node::Text(text) => {
            parent.append(OutNode::Text(String::from(&**text)));
        }
        Node::Comment(comment) => {
            parent.append(OutNode::Comment(String::from(&**comment)));
        }
        _ => {}
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn is_void_element(tag: &str) -> bool {
    matches!(
        tag.to_lowercase().as_str(),
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Elements whose text children are written without escaping.
fn is_raw_text_element(tag: &str) -> bool {
    matches!(tag.to_lowercase().as_str(), "script" | "style")
}

fn serialize_node(node: NodeRef<'_, OutNode>, output: &mut String) {
    match node.value() {
        OutNode::Text(text) => output.push_str(&escape_text(text)),
        OutNode::Comment(comment) => {
            output.push_str("<!--");
            output.push_str(comment);
            output.push_str("-->");
        }
        OutNode::Element { name, attrs } => {
            output.push('<');
            output.push_str(name);

            for (key, value) in attrs {
                output.push(' ');
                output.push_str(key);
                output.push_str("=\"");
                output.push_str(&escape_attr(value));
                output.push('"');
            }

            if is_void_element(name) {
                output.push_str(" />");
                return;
            }

            output.push('>');
            let raw = is_raw_text_element(name);
            for child in node.children() {
                match child.value() {
                    OutNode::Text(text) if raw => output.push_str(text),
                    _ => serialize_node(child, output),
                }
            }
            output.push_str("</");
            output.push_str(name);
            output.push('>');
        }
    }
}
