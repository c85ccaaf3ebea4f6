//! Retained node tree
//!
//! A small arena of element-like nodes: tag, classes, attributes, text,
//! children and the event kinds a node listens for. The host renders the
//! tree and delivers events back by node id.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;

/// Identifier of a node inside one `NodeTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Events a node can listen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Input,
    Focus,
    Blur,
    KeyDown,
    Click,
    PointerEnter,
    PointerLeave,
    Drag,
    Drop,
}

#[derive(Debug, Clone, Default)]
pub struct Node {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    /// Text content; rendered as raw markup when `raw` is set
    pub text: String,
    pub raw: bool,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    pub listeners: Vec<EventKind>,
}

impl Node {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn listens(&self, kind: EventKind) -> bool {
        self.listeners.contains(&kind)
    }
}

/// Arena of nodes with parent/child links
#[derive(Debug, Clone, Default)]
pub struct NodeTree {
    nodes: HashMap<NodeId, Node>,
    next_id: u32,
}

impl NodeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached node with the given classes (empty class tokens are skipped)
    pub fn make(&mut self, tag: &'static str, classes: &[&str]) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let node = Node {
            tag,
            classes: classes
                .iter()
                .filter(|c| !c.is_empty())
                .map(|c| c.to_string())
                .collect(),
            ..Default::default()
        };
        self.nodes.insert(id, node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let index = self.children(parent).len();
        self.insert_child(parent, index, child);
    }

    /// Insert `child` at `index` among `parent`'s children (clamped to the end)
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) {
        if !self.contains(parent) || !self.contains(child) {
            return;
        }
        self.detach(child);
        if let Some(p) = self.nodes.get_mut(&parent) {
            let index = index.min(p.children.len());
            p.children.insert(index, child);
        }
        if let Some(c) = self.nodes.get_mut(&child) {
            c.parent = Some(parent);
        }
    }

    /// Unlink a node from its parent without freeing it
    pub fn detach(&mut self, id: NodeId) {
        let parent = self.nodes.get_mut(&id).and_then(|n| n.parent.take());
        if let Some(p) = parent.and_then(|p| self.nodes.get_mut(&p)) {
            p.children.retain(|c| *c != id);
        }
    }

    /// Free a node and its whole subtree
    pub fn remove(&mut self, id: NodeId) {
        self.detach(id);
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                stack.extend(node.children);
            }
        }
    }

    /// Free every child of `id`, keeping `id` itself
    pub fn clear_children(&mut self, id: NodeId) {
        for child in self.children(id).to_vec() {
            self.remove(child);
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children(id).get(index).copied()
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if class.is_empty() {
            return;
        }
        if let Some(n) = self.nodes.get_mut(&id) {
            if !n.has_class(class) {
                n.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(&id) {
            n.classes.retain(|c| c != class);
        }
    }

    pub fn toggle_class(&mut self, id: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get(id).is_some_and(|n| n.has_class(class))
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(&id) {
            n.attrs.insert(name.to_string(), value.into());
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(n) = self.nodes.get_mut(&id) {
            n.attrs.remove(name);
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id).and_then(|n| n.attr(name))
    }

    pub fn text(&self, id: NodeId) -> &str {
        self.get(id).map(|n| n.text.as_str()).unwrap_or("")
    }

    /// Set text content; returns false when the text was already equal
    pub fn set_text(&mut self, id: NodeId, text: &str) -> bool {
        match self.nodes.get_mut(&id) {
            Some(n) if n.text != text => {
                n.text.clear();
                n.text.push_str(text);
                n.raw = false;
                true
            }
            _ => false,
        }
    }

    /// Set trusted inner markup (icons)
    pub fn set_markup(&mut self, id: NodeId, markup: &str) {
        if let Some(n) = self.nodes.get_mut(&id) {
            n.text = markup.to_string();
            n.raw = true;
        }
    }

    pub fn listen(&mut self, id: NodeId, kind: EventKind) {
        if let Some(n) = self.nodes.get_mut(&id) {
            if !n.listens(kind) {
                n.listeners.push(kind);
            }
        }
    }

    pub fn unlisten_all(&mut self, id: NodeId) {
        if let Some(n) = self.nodes.get_mut(&id) {
            n.listeners.clear();
        }
    }

    /// Total number of registered listeners in the tree
    pub fn listener_count(&self) -> usize {
        self.nodes.values().map(|n| n.listeners.len()).sum()
    }

    /// First node under `root` (depth-first, inclusive) whose attribute equals `value`
    pub fn query_attr(&self, root: NodeId, name: &str, value: &str) -> Option<NodeId> {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let node = self.get(id)?;
            if node.attr(name) == Some(value) {
                return Some(id);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    /// Serialize a subtree as HTML-like markup (for hosts and debugging)
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        let _ = write!(out, "<{}", node.tag);
        if !node.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&node.classes.join(" ")));
        }
        for (k, v) in &node.attrs {
            let _ = write!(out, " {}=\"{}\"", k, escape(v));
        }
        out.push('>');
        if node.raw {
            out.push_str(&node.text);
        } else {
            out.push_str(&escape(&node.text));
        }
        for child in &node.children {
            self.write_html(*child, out);
        }
        let _ = write!(out, "</{}>", node.tag);
    }
}

pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_skips_empty_classes() {
        let mut tree = NodeTree::new();
        let id = tree.make("div", &["a", "", "b"]);
        assert_eq!(tree.get(id).unwrap().classes, vec!["a", "b"]);
    }

    #[test]
    fn test_insert_child_and_remove_subtree() {
        let mut tree = NodeTree::new();
        let root = tree.make("div", &[]);
        let a = tree.make("div", &[]);
        let b = tree.make("div", &[]);
        let inner = tree.make("span", &[]);
        tree.append(root, a);
        tree.insert_child(root, 0, b);
        tree.append(a, inner);

        assert_eq!(tree.children(root), &[b, a]);

        tree.remove(a);
        assert_eq!(tree.children(root), &[b]);
        assert!(!tree.contains(inner));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_query_attr() {
        let mut tree = NodeTree::new();
        let root = tree.make("div", &[]);
        let btn = tree.make("div", &[]);
        tree.set_attr(btn, "x-tune-name", "editable");
        tree.append(root, btn);

        assert_eq!(tree.query_attr(root, "x-tune-name", "editable"), Some(btn));
        assert_eq!(tree.query_attr(root, "x-tune-name", "readonly"), None);
    }

    #[test]
    fn test_set_text_reports_change() {
        let mut tree = NodeTree::new();
        let id = tree.make("div", &[]);
        assert!(tree.set_text(id, "x"));
        assert!(!tree.set_text(id, "x"));
    }

    #[test]
    fn test_outer_html_escapes_text_not_markup() {
        let mut tree = NodeTree::new();
        let root = tree.make("div", &["wrap"]);
        let cell = tree.make("div", &[]);
        let icon = tree.make("div", &[]);
        tree.set_text(cell, "a<b");
        tree.set_markup(icon, "<svg></svg>");
        tree.append(root, cell);
        tree.append(root, icon);

        assert_eq!(
            tree.outer_html(root),
            "<div class=\"wrap\"><div>a&lt;b</div><div><svg></svg></div></div>"
        );
    }

    #[test]
    fn test_outer_html_escapes_class_tokens() {
        let mut tree = NodeTree::new();
        let root = tree.make("div", &["x\"onclick=\"y"]);

        assert_eq!(
            tree.outer_html(root),
            "<div class=\"x&quot;onclick=&quot;y\"></div>"
        );
    }
}
