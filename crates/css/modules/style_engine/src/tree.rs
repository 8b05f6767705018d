//! Element tree with per-element declarations and computed styles.

use crate::{ComputeContext, ComputeStyle as _};
use anyhow::{Result, bail};
use css_cascade::{BoxProperties, Declaration, PropertyParsers};
use css_style_attr::parse_style_attribute;
use css_values_units::ResourceCache;
use std::fmt::Write as _;

/// Where an element is in the compute pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComputeState {
    #[default]
    Uncomputed,
    Computing,
    Computed,
}

#[derive(Clone, Debug)]
pub struct Element {
    name: String,
    declarations: Vec<Declaration>,
    style: BoxProperties,
    state: ComputeState,
    children: Vec<BoxNode>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
            style: BoxProperties::default(),
            state: ComputeState::Uncomputed,
            children: Vec::new(),
        }
    }

    /// Element whose declarations come from a `style` attribute.
    pub fn with_style(name: impl Into<String>, style_text: &str) -> Self {
        let mut element = Self::new(name);
        element.declarations = parse_style_attribute(style_text);
        element
    }

    /// Append one declaration; it wins over earlier ones for the same property.
    #[must_use]
    pub fn declare(mut self, property: &str, value: &str) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: impl Into<BoxNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn push_child(&mut self, child: impl Into<BoxNode>) {
        self.children.push(child.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub const fn state(&self) -> ComputeState {
        self.state
    }

    pub fn children(&self) -> &[BoxNode] {
        &self.children
    }

    /// Computed values, available once the tree has been computed.
    ///
    /// # Errors
    /// Fails if this element has not gone through `StyleTree::compute` yet.
    pub fn computed(&self) -> Result<&BoxProperties> {
        if self.state != ComputeState::Computed {
            bail!("<{}> has no computed style (state {:?})", self.name, self.state);
        }
        Ok(&self.style)
    }
}

#[derive(Clone, Debug)]
pub enum BoxNode {
    Element(Element),
    /// Text runs take their style from the enclosing element.
    Text(String),
}

impl BoxNode {
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for BoxNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for BoxNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// A box tree plus the registry its declarations are parsed with.
#[derive(Debug)]
pub struct StyleTree<'registry> {
    root: BoxNode,
    parsers: &'registry PropertyParsers,
}

impl<'registry> StyleTree<'registry> {
    pub fn new(root: impl Into<BoxNode>, parsers: &'registry PropertyParsers) -> Self {
        Self {
            root: root.into(),
            parsers,
        }
    }

    pub const fn root(&self) -> &BoxNode {
        &self.root
    }

    pub const fn root_element(&self) -> Option<&Element> {
        self.root.as_element()
    }

    /// Element reached by following child indices from the root.
    pub fn element_at(&self, path: &[usize]) -> Option<&Element> {
        let mut element = self.root.as_element()?;
        for index in path {
            element = element.children.get(*index)?.as_element()?;
        }
        Some(element)
    }

    /// Cascade and compute every element, root first. Returns the number of
    /// elements computed.
    ///
    /// Each pass starts from the declarations alone, so computing twice gives
    /// the same result.
    ///
    /// # Errors
    /// Fails if the root node is a text node.
    pub fn compute(&mut self, resources: &ResourceCache) -> Result<usize> {
        let BoxNode::Element(root) = &mut self.root else {
            bail!("style tree root must be an element");
        };
        let count = compute_element(root, None, self.parsers, resources, ComputeContext::root());
        tracing::debug!(elements = count, "computed style tree");
        Ok(count)
    }

    /// Computed values of every element as indented `name: value` lines.
    ///
    /// # Errors
    /// Fails if the tree has not been computed.
    pub fn dump(&self) -> Result<String> {
        let mut out = String::new();
        dump_node(&self.root, 0, &mut out)?;
        Ok(out)
    }
}

fn compute_element(
    element: &mut Element,
    parent: Option<&BoxProperties>,
    parsers: &PropertyParsers,
    resources: &ResourceCache,
    context: ComputeContext,
) -> usize {
    element.state = ComputeState::Computing;
    let mut style = BoxProperties::default();
    let applied = parsers.apply_declarations(&mut style, &element.declarations, None);
    style.compute(parent, resources, context);
    element.style = style;
    element.state = ComputeState::Computed;
    tracing::trace!(element = %element.name, declarations = applied, "computed element");

    let child_context = ComputeContext::for_children(&element.style);
    let mut count = 1;
    for child in &mut element.children {
        if let BoxNode::Element(child) = child {
            count += compute_element(child, Some(&element.style), parsers, resources, child_context);
        }
    }
    count
}

fn dump_node(node: &BoxNode, depth: usize, out: &mut String) -> Result<()> {
    let indent = "  ".repeat(depth);
    match node {
        BoxNode::Text(_) => writeln!(out, "{indent}#text")?,
        BoxNode::Element(element) => {
            writeln!(out, "{indent}<{}>", element.name)?;
            for (name, value) in element.computed()?.entries() {
                writeln!(out, "{indent}  {name}: {value}")?;
            }
            for child in &element.children {
                dump_node(child, depth + 1, out)?;
            }
        }
    }
    Ok(())
}
