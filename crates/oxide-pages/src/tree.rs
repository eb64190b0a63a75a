//! Route tree: registration and path resolution.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, error, trace, warn};

use crate::config::RouterConfig;
use crate::error::{Result, RouteError};
use crate::legacy::{LegacyNames, LegacyRouteRedirectStrategy};
use crate::params::RouteParams;
use crate::redirect::RedirectRegistry;
use crate::segment::{parse_route, split_path, RouteSegment};

/// Handle of a node in a [`RouteTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, present in every tree.
    pub const ROOT: Self = Self(0);

    /// Returns the arena index of this node.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A node in the route tree.
///
/// A node has either static children or one dynamic/catch-all child, never
/// both. The empty child produced by a trailing slash counts as static.
#[derive(Debug, Clone)]
pub struct RouteNode<T> {
    segment: RouteSegment,
    parent: Option<NodeId>,
    static_children: BTreeMap<String, NodeId>,
    dynamic_child: Option<NodeId>,
    data: Option<T>,
}

impl<T> RouteNode<T> {
    const fn new(segment: RouteSegment, parent: Option<NodeId>) -> Self {
        Self {
            segment,
            parent,
            static_children: BTreeMap::new(),
            dynamic_child: None,
            data: None,
        }
    }

    /// Returns the segment this node was registered with.
    #[must_use]
    pub const fn segment(&self) -> &RouteSegment {
        &self.segment
    }

    /// Returns the parent node, `None` for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the payload registered at this node.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Returns the dynamic or catch-all child.
    #[must_use]
    pub const fn dynamic_child(&self) -> Option<NodeId> {
        self.dynamic_child
    }

    /// Returns the literal children in lexical order.
    pub fn static_children(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.static_children
            .iter()
            .map(|(text, id)| (text.as_str(), *id))
    }

    /// Returns all children: literal ones first, then the dynamic one.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.static_children
            .values()
            .copied()
            .chain(self.dynamic_child)
    }
}

/// One step of a resolved path.
#[derive(Debug)]
pub struct ResolvedEntry<'a, T> {
    /// The part of the path this node consumed. For a catch-all this is the
    /// whole remainder.
    pub captured: String,
    /// The matched node.
    pub node: &'a RouteNode<T>,
}

/// A successful resolution.
#[derive(Debug)]
pub struct ResolvedRoute<'a, T> {
    /// The path that was matched, after following redirects.
    pub path: String,
    /// Nodes from the root to the matched leaf.
    pub entries: Vec<ResolvedEntry<'a, T>>,
    /// Payload of the matched leaf.
    pub data: &'a T,
    /// Captured parameters in path order, legacy aliases last.
    pub params: RouteParams,
}

/// A tree of page routes with redirects.
///
/// Routes are registered up front and the tree is then only read. Resolution
/// takes `&self`, so a built tree can be shared across threads.
///
/// # Example
///
/// ```
/// use oxide_pages::RouteTree;
///
/// let mut tree = RouteTree::new();
/// tree.register("/users/{user}/posts/{post}", "post page").unwrap();
/// tree.register_redirect("/u/([^/]+)/p/([^/]+)", "/users/$1/posts/$2").unwrap();
///
/// let resolved = tree.resolve("/u/123/p/11", true).unwrap();
/// assert_eq!(*resolved.data, "post page");
/// assert_eq!(resolved.params.get("user"), Some("123"));
/// assert_eq!(resolved.params.get("post"), Some("11"));
/// ```
#[derive(Debug, Clone)]
pub struct RouteTree<T> {
    nodes: Vec<RouteNode<T>>,
    redirects: RedirectRegistry,
    config: RouterConfig,
}

impl<T> Default for RouteTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouteTree<T> {
    /// Creates an empty tree with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Creates an empty tree with the given configuration.
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            nodes: vec![RouteNode::new(RouteSegment::Static(String::new()), None)],
            redirects: RedirectRegistry::new(),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Changes the legacy route strategy.
    pub fn set_legacy_strategy(&mut self, strategy: LegacyRouteRedirectStrategy) {
        self.config.legacy_routes = strategy;
    }

    /// Returns the redirect rules.
    #[must_use]
    pub const fn redirects(&self) -> &RedirectRegistry {
        &self.redirects
    }

    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> &RouteNode<T> {
        self.node(NodeId::ROOT)
    }

    /// Returns the node behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &RouteNode<T> {
        &self.nodes[id.0]
    }

    /// Registers `data` under `route`.
    ///
    /// Registering the same route again replaces its data. A failed
    /// registration leaves the tree unchanged.
    pub fn register(&mut self, route: &str, data: T) -> Result<()> {
        let segments = parse_route(route)?;

        let mut current = NodeId::ROOT;
        for segment in segments {
            current = self.child_for(route, current, segment)?;
        }

        if self.nodes[current.0].data.replace(data).is_some() {
            debug!(route, "replaced data of registered route");
        } else {
            debug!(route, "registered route");
        }
        Ok(())
    }

    /// Registers a redirect, tried before any route in registration order.
    ///
    /// `from` is a regex matched against the whole path and `to` a
    /// replacement template that may reference its groups as `$1`, `$2`, ...
    pub fn register_redirect(&mut self, from: &str, to: &str) -> Result<()> {
        self.redirects.register(from, to)
    }

    /// Returns true if `path` resolves, following redirects.
    #[must_use]
    pub fn is_registered(&self, path: &str) -> bool {
        self.resolve(path, true).is_some()
    }

    /// Resolves `path` to its registered data.
    ///
    /// Returns `None` if nothing matches. A redirect chain longer than the
    /// configured limit is logged and also reported as `None`; use
    /// [`try_resolve`](Self::try_resolve) to observe it.
    #[must_use]
    pub fn resolve(&self, path: &str, allow_redirects: bool) -> Option<ResolvedRoute<'_, T>> {
        self.try_resolve(path, allow_redirects).unwrap_or_else(|err| {
            error!(path, %err, "route resolution failed");
            None
        })
    }

    /// Resolves `path`, reporting redirect loops as errors.
    ///
    /// Redirects are applied first, repeatedly, so a redirect registered for
    /// a path takes priority over a route registered at the same path.
    pub fn try_resolve(
        &self,
        path: &str,
        allow_redirects: bool,
    ) -> Result<Option<ResolvedRoute<'_, T>>> {
        let mut current = Cow::Borrowed(path);

        if allow_redirects {
            let mut hops = 0;
            while let Some(target) = self.redirects.apply(&current) {
                if hops == self.config.max_redirects {
                    return Err(RouteError::RedirectLimitExceeded {
                        path: path.to_string(),
                        limit: self.config.max_redirects,
                    });
                }
                hops += 1;
                debug!(from = %current, to = %target, "following redirect");
                current = Cow::Owned(target);
            }
        }

        Ok(self.match_path(&current))
    }

    /// Returns every registered route pattern.
    ///
    /// Routes are listed depth-first, literal children in lexical order
    /// before the dynamic child.
    #[must_use]
    pub fn routes(&self) -> Vec<String> {
        self.route_data().into_iter().map(|(route, _)| route).collect()
    }

    /// Returns every registered route pattern with its data, in the order
    /// of [`routes`](Self::routes).
    #[must_use]
    pub fn route_data(&self) -> Vec<(String, &T)> {
        let mut routes = Vec::new();
        self.collect_routes(NodeId::ROOT, "", &mut routes);
        routes
    }

    fn collect_routes<'a>(
        &'a self,
        id: NodeId,
        prefix: &str,
        routes: &mut Vec<(String, &'a T)>,
    ) {
        let node = self.node(id);
        if id != NodeId::ROOT {
            if let Some(data) = &node.data {
                routes.push((prefix.to_string(), data));
            }
        }
        for child in node.children() {
            let route = format!("{prefix}/{}", self.node(child).segment);
            self.collect_routes(child, &route, routes);
        }
    }

    /// Finds or creates the child of `parent` for `segment`.
    fn child_for(
        &mut self,
        route: &str,
        parent: NodeId,
        segment: RouteSegment,
    ) -> Result<NodeId> {
        let node = &self.nodes[parent.0];

        if let RouteSegment::Static(text) = &segment {
            if let Some(&existing) = node.static_children.get(text) {
                return Ok(existing);
            }
            if let Some(dynamic) = node.dynamic_child {
                return Err(sibling_conflict(
                    route,
                    &segment,
                    [self.nodes[dynamic.0].segment.to_string()],
                ));
            }
        } else {
            if let Some(dynamic) = node.dynamic_child {
                let existing = &self.nodes[dynamic.0].segment;
                if *existing == segment {
                    return Ok(dynamic);
                }
                return Err(sibling_conflict(route, &segment, [existing.to_string()]));
            }
            let statics: Vec<&str> = node.static_children.keys().map(String::as_str).collect();
            if !statics.is_empty() {
                return Err(sibling_conflict(route, &segment, statics));
            }
        }

        Ok(self.insert_child(parent, segment))
    }

    fn insert_child(&mut self, parent: NodeId, segment: RouteSegment) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent_node = &mut self.nodes[parent.0];
        match &segment {
            RouteSegment::Static(text) => {
                parent_node.static_children.insert(text.clone(), id);
            }
            RouteSegment::Dynamic(_) | RouteSegment::CatchAll { .. } => {
                parent_node.dynamic_child = Some(id);
            }
        }
        self.nodes.push(RouteNode::new(segment, Some(parent)));
        id
    }

    /// Walks the tree for `path` without applying redirects.
    fn match_path(&self, path: &str) -> Option<ResolvedRoute<'_, T>> {
        let Some(segments) = split_path(path) else {
            trace!(path, "path is not absolute");
            return None;
        };

        let mut entries = vec![ResolvedEntry {
            captured: String::new(),
            node: self.root(),
        }];
        let mut captures: Vec<(&str, String)> = Vec::new();
        let mut current = NodeId::ROOT;
        let mut index = 0;

        while index < segments.len() {
            let segment = segments[index];
            let node = self.node(current);

            if let Some(child) = self.static_child(node, segment) {
                entries.push(ResolvedEntry {
                    captured: segment.to_string(),
                    node: self.node(child),
                });
                current = child;
                index += 1;
                continue;
            }

            let Some(child) = node.dynamic_child else {
                trace!(path, segment, "no route for segment");
                return None;
            };

            let captured = match &self.node(child).segment {
                RouteSegment::Dynamic(name) => {
                    if segment.is_empty() {
                        trace!(path, "dynamic segment cannot match an empty segment");
                        return None;
                    }
                    index += 1;
                    captures.push((name.as_str(), segment.to_string()));
                    segment.to_string()
                }
                RouteSegment::CatchAll { name, optional } => {
                    let rest = segments[index..].join("/");
                    if rest.is_empty() && !*optional {
                        trace!(path, "catch-all requires at least one segment");
                        return None;
                    }
                    index = segments.len();
                    captures.push((name.as_str(), rest.clone()));
                    rest
                }
                RouteSegment::Static(_) => return None,
            };

            entries.push(ResolvedEntry {
                captured,
                node: self.node(child),
            });
            current = child;
        }

        let Some(data) = self.node(current).data.as_ref() else {
            trace!(path, "matched node has no data");
            return None;
        };

        Some(ResolvedRoute {
            path: path.to_string(),
            entries,
            data,
            params: self.build_params(&captures),
        })
    }

    /// Looks up a literal child, accepting legacy spellings when enabled.
    ///
    /// When one spelling matches several literals (`abc` for both `a-bc` and
    /// `ab-c`), the first in lexical order wins.
    fn static_child(&self, node: &RouteNode<T>, segment: &str) -> Option<NodeId> {
        if let Some(&child) = node.static_children.get(segment) {
            return Some(child);
        }

        let strategy = self.config.legacy_routes;
        if !strategy.allows_legacy() || segment.is_empty() {
            return None;
        }

        let mut candidates = node
            .static_children
            .iter()
            .filter(|(text, _)| LegacyNames::of(text).matches(segment));
        let (canonical, &child) = candidates.next()?;
        if let Some((shadowed, _)) = candidates.next() {
            debug!(
                segment,
                canonical = canonical.as_str(),
                shadowed = shadowed.as_str(),
                "legacy spelling matches several routes; using the first"
            );
        }
        if strategy == LegacyRouteRedirectStrategy::Warn {
            warn!(
                segment,
                canonical = canonical.as_str(),
                "matched legacy route spelling; links should use the kebab-case form"
            );
        }
        Some(child)
    }

    fn build_params(&self, captures: &[(&str, String)]) -> RouteParams {
        let mut params = RouteParams::new();
        for (name, value) in captures {
            params.insert(*name, value.as_str());
        }

        if self.config.legacy_routes.allows_legacy() {
            for (name, value) in captures {
                for alias in LegacyNames::of(name).aliases() {
                    if params.get(alias).is_none() {
                        params.insert(alias, value.as_str());
                    }
                }
            }
        }
        params
    }
}

fn sibling_conflict<I>(route: &str, segment: &RouteSegment, siblings: I) -> RouteError
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let siblings = siblings
        .into_iter()
        .map(|sibling| match sibling.to_string() {
            text if text.is_empty() => "`` (trailing slash)".to_string(),
            text => format!("`{text}`"),
        })
        .collect::<Vec<_>>()
        .join(", ");
    RouteError::SiblingConflict {
        route: route.to_string(),
        segment: segment.to_string(),
        siblings,
    }
}
