//! Recursive tree layout.
//!
//! Every node inherits a [`LayoutContext`] from its parent and derives a
//! fresh one for each child:
//!
//! - A single child goes straight below its parent.
//! - An even number of children is split into a left and a right half.
//!   Within a half the `i`-th child is pushed `spacing * (i + 1)` away from
//!   the parent, so the halves fan outward by ordinal, not by subtree width.
//! - With an odd number of children one of them is put straight below the
//!   parent and the rest fan out as above (see [`middle_index`]).
//!
//! The spacing shrinks by [`LayoutConfig::spacing_decay`] per level. This
//! keeps sibling subtrees apart for moderately branching trees, but nothing
//! checks it: wide trees with many children per level can still overlap.

use crate::{
    config::LayoutConfig,
    error::{ConfigError, LayoutError},
    tree::TreeSource,
    types::NodeKind,
};
use glam::Vec2;
use std::{collections::HashMap, hash::Hash};
use tracing::{debug, instrument, trace};

/// State inherited down the recursion.
///
/// Contexts are plain values: a child never changes its parent's context,
/// it only derives its own with [`LayoutContext::descend`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutContext {
    pub position: Vec2,
    /// Horizontal offset unit for this node's children.
    pub spacing: f32,
    /// Marker radius of this node.
    pub radius: f32,
    /// Vertical distance to this node's children.
    pub step: f32,
    /// Number of edges between this node and the root.
    pub depth: usize,
}

impl LayoutContext {
    pub fn root(position: Vec2, cfg: &LayoutConfig) -> Self {
        Self {
            position,
            spacing: cfg.initial_spacing,
            radius: cfg.base_radius,
            step: cfg.vertical_step,
            depth: 0,
        }
    }

    /// Context of a child placed at `offset` from this node.
    pub fn descend(self, offset: Vec2, cfg: &LayoutConfig) -> Self {
        Self {
            position: self.position + offset,
            spacing: self.spacing * cfg.spacing_decay,
            radius: self.radius * cfg.radius_decay,
            step: self.step * cfg.step_decay,
            depth: self.depth + 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Index of the child placed straight below its parent when the parent
/// has an odd number `n >= 3` of children.
///
/// This is the truncated mean of `1..=n`, which for odd `n` is `(n + 1) / 2`:
/// one past the arithmetic midpoint. Returns `None` for even counts and for
/// `n < 3` (a single child is always placed straight below).
pub fn middle_index(n: usize) -> Option<usize> {
    if n < 3 || n % 2 == 0 {
        return None;
    }
    let sum: usize = (1..=n).sum();
    Some(sum / n)
}

/// Where one child goes relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Position of the child in its parent's child list.
    pub index: usize,
    pub offset: Vec2,
}

fn side_offset(dir: Direction, idx: usize, spacing: f32, step: f32) -> Vec2 {
    Vec2::new(dir.sign() * spacing * (idx as f32 + 1.0), step)
}

/// Computes the offsets of `n` children, in visiting order.
///
/// Each child index in `0..n` appears exactly once in the result.
///
/// For odd `n >= 3` the child at [`middle_index`] goes first with no
/// horizontal offset. The remaining children keep their order: the first
/// `middle - 1` of them (indices `0..middle - 1`) fan out to the left, the
/// others (index `middle - 1` followed by `middle + 1..n`) to the right,
/// giving both sides the same number of children.
///
/// ### Parameters
/// - `n` - Number of children.
/// - `spacing` - Horizontal offset unit at the parent's level.
/// - `step` - Vertical offset of every child.
pub fn child_placements(n: usize, spacing: f32, step: f32) -> Vec<Placement> {
    let below = Vec2::new(0.0, step);
    let fan = |dir: Direction, indices: &[usize]| -> Vec<Placement> {
        indices
            .iter()
            .enumerate()
            .map(|(idx, &index)| Placement {
                index,
                offset: side_offset(dir, idx, spacing, step),
            })
            .collect()
    };

    match (n, middle_index(n)) {
        (0, _) => Vec::new(),
        (1, _) => vec![Placement {
            index: 0,
            offset: below,
        }],
        (_, Some(middle)) => {
            let rest: Vec<usize> = (0..n).filter(|&i| i != middle).collect();
            let (left, right) = rest.split_at(middle - 1);

            let mut out = Vec::with_capacity(n);
            out.push(Placement {
                index: middle,
                offset: below,
            });
            out.extend(fan(Direction::Left, left));
            out.extend(fan(Direction::Right, right));
            out
        }
        (_, None) => {
            let all: Vec<usize> = (0..n).collect();
            let (left, right) = all.split_at(n / 2);

            let mut out = fan(Direction::Left, left);
            out.extend(fan(Direction::Right, right));
            out
        }
    }
}

/// A node together with the context it was placed with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedNode<N> {
    pub node: N,
    pub kind: NodeKind,
    pub ctx: LayoutContext,
}

/// Receives placements during a layout pass.
///
/// For every child, [`LayoutVisitor::edge`] is called before the pass
/// descends into it. [`LayoutVisitor::node`] is called for a node only
/// after its whole subtree has been visited, so a painter that draws in
/// callback order never paints an edge over a marker.
pub trait LayoutVisitor<N> {
    fn edge(&mut self, parent: &PlacedNode<N>, child: &PlacedNode<N>);
    fn node(&mut self, placed: &PlacedNode<N>);
}

/// Every placement of one pass, in callback order, with a per-node index.
#[derive(Clone, Debug)]
pub struct Layout<N> {
    nodes: Vec<PlacedNode<N>>,
    edges: Vec<(N, N)>,
    index: HashMap<N, usize>,
}

impl<N> Default for Layout<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<N: PartialEq> PartialEq for Layout<N> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl<N: Copy + Eq + Hash> Layout<N> {
    /// Placed nodes in post-order.
    pub fn nodes(&self) -> &[PlacedNode<N>] {
        &self.nodes
    }

    /// `(parent, child)` pairs in the order they were emitted.
    pub fn edges(&self) -> &[(N, N)] {
        &self.edges
    }

    pub fn placed(&self, node: N) -> Option<&PlacedNode<N>> {
        self.index.get(&node).map(|&i| &self.nodes[i])
    }

    pub fn position(&self, node: N) -> Option<Vec2> {
        self.placed(node).map(|p| p.ctx.position)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Smallest and largest marker centers, or `None` for an empty layout.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut points = self.nodes.iter().map(|p| p.ctx.position);
        let first = points.next()?;
        Some(points.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

impl<N: Copy + Eq + Hash> LayoutVisitor<N> for Layout<N> {
    fn edge(&mut self, parent: &PlacedNode<N>, child: &PlacedNode<N>) {
        self.edges.push((parent.node, child.node));
    }

    fn node(&mut self, placed: &PlacedNode<N>) {
        self.index.insert(placed.node, self.nodes.len());
        self.nodes.push(*placed);
    }
}

/// Runs layout passes with a fixed, validated [`LayoutConfig`].
///
/// The engine holds no state between passes; running the same pass twice
/// yields the same placements.
#[derive(Clone, Debug)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn root_context(&self, origin: Vec2) -> LayoutContext {
        LayoutContext::root(origin, &self.config)
    }

    /// Places `root` at `ctx` and walks its subtree depth-first.
    ///
    /// ### Parameters
    /// - `source` - Tree to walk; only [`TreeSource::children`] and
    ///   [`TreeSource::kind`] are queried.
    /// - `root` - Node placed at `ctx.position`.
    /// - `ctx` - Context of `root`; `ctx.spacing` must be positive.
    /// - `visitor` - Receives edges and placed nodes (see [`LayoutVisitor`]).
    ///
    /// ### Errors
    /// - [`LayoutError::InvalidSpacing`] if `ctx.spacing`, or the spacing
    ///   derived for any node below `root`, is not positive.
    /// - [`LayoutError::UnknownNode`] if `source` does not know a node.
    /// - [`LayoutError::DepthLimitExceeded`] if the walk goes deeper than
    ///   [`LayoutConfig::max_depth`], which also stops cyclic sources.
    ///
    /// On error the visitor may already have seen part of the tree.
    pub fn walk<S, V>(
        &self,
        source: &S,
        root: S::Node,
        ctx: LayoutContext,
        visitor: &mut V,
    ) -> Result<(), LayoutError>
    where
        S: TreeSource + ?Sized,
        V: LayoutVisitor<S::Node> + ?Sized,
    {
        let placed = PlacedNode {
            node: root,
            kind: source.kind(root),
            ctx,
        };
        self.visit(source, &placed, visitor)
    }

    fn visit<S, V>(
        &self,
        source: &S,
        placed: &PlacedNode<S::Node>,
        visitor: &mut V,
    ) -> Result<(), LayoutError>
    where
        S: TreeSource + ?Sized,
        V: LayoutVisitor<S::Node> + ?Sized,
    {
        if placed.ctx.depth > self.config.max_depth {
            return Err(LayoutError::DepthLimitExceeded {
                max_depth: self.config.max_depth,
            });
        }
        // A validated config keeps this positive down to max_depth, but
        // `walk` accepts any starting context.
        if !(placed.ctx.spacing > 0.0) {
            return Err(LayoutError::InvalidSpacing(placed.ctx.spacing));
        }

        let children = source
            .children(placed.node)
            .ok_or_else(|| LayoutError::UnknownNode(format!("{:?}", placed.node)))?;
        trace!(node = ?placed.node, children = children.len(), depth = placed.ctx.depth);

        for p in child_placements(children.len(), placed.ctx.spacing, placed.ctx.step) {
            let node = children[p.index];
            let child = PlacedNode {
                node,
                kind: source.kind(node),
                ctx: placed.ctx.descend(p.offset, &self.config),
            };
            visitor.edge(placed, &child);
            self.visit(source, &child, visitor)?;
        }

        visitor.node(placed);
        Ok(())
    }

    /// Lays out the tree under `root` with the root at `origin` and
    /// collects the result.
    #[instrument(level = "debug", skip(self, source))]
    pub fn layout<S>(
        &self,
        source: &S,
        root: S::Node,
        origin: Vec2,
    ) -> Result<Layout<S::Node>, LayoutError>
    where
        S: TreeSource + ?Sized,
    {
        let mut out = Layout::default();
        self.walk(source, root, self.root_context(origin), &mut out)?;
        debug!(nodes = out.nodes.len(), edges = out.edges.len(), "layout done");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        tree::Tree,
        types::{NodeId, NodeKind},
    };
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;
    use std::collections::HashSet;

    fn engine() -> LayoutEngine {
        LayoutEngine::new(LayoutConfig::default()).unwrap()
    }

    /// Root with `n` leaf children.
    fn fan_tree(n: usize) -> Tree {
        let mut tree = Tree::new(NodeKind::Declaration, "root");
        for i in 0..n {
            tree.add_child(0, NodeKind::Statement, format!("c{i}"));
        }
        tree
    }

    /// A straight chain of `len` nodes.
    fn chain(len: usize) -> Tree {
        let mut tree = Tree::new(NodeKind::Declaration, "0");
        let mut last = tree.root();
        for i in 1..len {
            last = tree.add_child(last, NodeKind::Statement, i.to_string());
        }
        tree
    }

    fn offset_of(placements: &[Placement], index: usize) -> Vec2 {
        placements
            .iter()
            .find(|p| p.index == index)
            .map(|p| p.offset)
            .unwrap()
    }

    #[rstest]
    #[case(0, None)]
    #[case(1, None)]
    #[case(2, None)]
    #[case(3, Some(2))]
    #[case(4, None)]
    #[case(5, Some(3))]
    #[case(7, Some(4))]
    #[case(9, Some(5))]
    fn middle_index_is_truncated_mean(#[case] n: usize, #[case] expected: Option<usize>) {
        assert_eq!(middle_index(n), expected);
    }

    #[test]
    fn no_children_no_placements() {
        assert!(child_placements(0, 200.0, 100.0).is_empty());
    }

    #[rstest]
    #[case(200.0)]
    #[case(3.5)]
    #[case(0.001)]
    fn single_child_goes_straight_down(#[case] spacing: f32) {
        let p = child_placements(1, spacing, 100.0);
        assert_eq!(
            p,
            vec![Placement {
                index: 0,
                offset: Vec2::new(0.0, 100.0)
            }]
        );
    }

    #[rstest]
    #[case(2)]
    #[case(4)]
    #[case(6)]
    #[case(10)]
    fn even_children_fan_out_by_ordinal(#[case] n: usize) {
        let spacing = 40.0;
        let p = child_placements(n, spacing, 100.0);
        assert_eq!(p.len(), n);

        let half = n / 2;
        for i in 0..half {
            let left = offset_of(&p, i);
            let right = offset_of(&p, half + i);
            assert_eq!(left, Vec2::new(-spacing * (i as f32 + 1.0), 100.0));
            assert_eq!(right, Vec2::new(spacing * (i as f32 + 1.0), 100.0));
        }
        for i in 1..half {
            assert!(offset_of(&p, i - 1).x.abs() < offset_of(&p, i).x.abs());
            assert!(offset_of(&p, half + i - 1).x.abs() < offset_of(&p, half + i).x.abs());
        }
    }

    #[rstest]
    #[case(3)]
    #[case(5)]
    #[case(7)]
    #[case(11)]
    fn odd_children_place_every_child_once(#[case] n: usize) {
        let p = child_placements(n, 10.0, 100.0);
        let middle = middle_index(n).unwrap();

        let mut seen: Vec<usize> = p.iter().map(|p| p.index).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..n).collect::<Vec<_>>());

        assert_eq!(p[0].index, middle);
        assert_eq!(p[0].offset, Vec2::new(0.0, 100.0));

        let left = p.iter().filter(|p| p.offset.x < 0.0).count();
        let right = p.iter().filter(|p| p.offset.x > 0.0).count();
        assert_eq!(left, (n - 1) / 2);
        assert_eq!(right, (n - 1) / 2);

        for i in 0..middle - 1 {
            assert_eq!(offset_of(&p, i).x, -10.0 * (i as f32 + 1.0));
        }
    }

    #[test]
    fn three_children_middle_is_last() {
        let p = child_placements(3, 200.0, 100.0);
        assert_eq!(offset_of(&p, 2), Vec2::new(0.0, 100.0));
        assert_eq!(offset_of(&p, 0), Vec2::new(-200.0, 100.0));
        assert_eq!(offset_of(&p, 1), Vec2::new(200.0, 100.0));
    }

    #[test]
    fn descend_decays_spacing_radius_and_step() {
        let cfg = LayoutConfig {
            step_decay: 0.5,
            ..LayoutConfig::default()
        };
        let root = LayoutContext::root(Vec2::new(10.0, 20.0), &cfg);
        let child = root.descend(Vec2::new(-5.0, 100.0), &cfg);

        assert_eq!(child.position, Vec2::new(5.0, 120.0));
        assert_eq!(child.spacing, 100.0);
        assert!((child.radius - 9.0).abs() < 1e-6);
        assert_eq!(child.step, 50.0);
        assert_eq!(child.depth, 1);
        // The parent context is untouched.
        assert_eq!(root.spacing, 200.0);
    }

    #[test]
    fn sample_tree_end_to_end() {
        let tree = Tree::sample();
        let layout = engine()
            .layout(&tree, tree.root(), Vec2::new(800.0, 225.0))
            .unwrap();

        let root_children = tree.children(0).unwrap();
        let middle = root_children[2];
        assert_eq!(layout.position(0), Some(Vec2::new(800.0, 225.0)));
        assert_eq!(layout.position(middle), Some(Vec2::new(800.0, 325.0)));
        assert_eq!(layout.position(root_children[0]), Some(Vec2::new(600.0, 325.0)));
        assert_eq!(layout.position(root_children[1]), Some(Vec2::new(1000.0, 325.0)));

        let grandchildren = tree.children(middle).unwrap();
        assert_eq!(layout.position(grandchildren[0]), Some(Vec2::new(700.0, 425.0)));
        assert_eq!(layout.position(grandchildren[1]), Some(Vec2::new(900.0, 425.0)));

        assert_eq!(layout.len(), 10);
        assert_eq!(layout.edges().len(), 9);
    }

    #[test]
    fn single_node_is_one_point_without_edges() {
        let tree = fan_tree(0);
        let layout = engine().layout(&tree, 0, Vec2::new(1.0, 2.0)).unwrap();

        assert_eq!(layout.len(), 1);
        assert!(layout.edges().is_empty());
        assert_eq!(layout.bounds(), Some((Vec2::new(1.0, 2.0), Vec2::new(1.0, 2.0))));
    }

    #[test]
    fn spacing_halves_with_depth() {
        let tree = chain(6);
        let layout = engine().layout(&tree, 0, Vec2::ZERO).unwrap();

        let spacings: Vec<f32> = (0..6).map(|id| layout.placed(id).unwrap().ctx.spacing).collect();
        assert_eq!(spacings, [200.0, 100.0, 50.0, 25.0, 12.5, 6.25]);

        // A chain never moves sideways.
        assert!(layout.nodes().iter().all(|p| p.ctx.position.x == 0.0));
        assert_eq!(layout.position(5), Some(Vec2::new(0.0, 500.0)));
    }

    #[test]
    fn node_markers_come_after_their_subtree() {
        let tree = Tree::sample();
        let layout = engine().layout(&tree, 0, Vec2::ZERO).unwrap();

        let order: Vec<NodeId> = layout.nodes().iter().map(|p| p.node).collect();
        let rank = |id: NodeId| order.iter().position(|&n| n == id).unwrap();
        for (parent, child) in layout.edges() {
            assert!(rank(*child) < rank(*parent));
        }
        assert_eq!(*order.last().unwrap(), 0);
    }

    #[derive(Debug, PartialEq)]
    enum Event {
        Edge(NodeId, NodeId),
        Node(NodeId),
    }

    impl LayoutVisitor<NodeId> for Vec<Event> {
        fn edge(&mut self, parent: &PlacedNode<NodeId>, child: &PlacedNode<NodeId>) {
            self.push(Event::Edge(parent.node, child.node));
        }

        fn node(&mut self, placed: &PlacedNode<NodeId>) {
            self.push(Event::Node(placed.node));
        }
    }

    #[test]
    fn edges_come_before_both_markers_they_join() {
        let tree = Tree::sample();
        let engine = engine();
        let mut events: Vec<Event> = Vec::new();
        engine
            .walk(&tree, 0, engine.root_context(Vec2::ZERO), &mut events)
            .unwrap();

        let marker = |id: NodeId| events.iter().position(|e| *e == Event::Node(id)).unwrap();
        let mut edges = 0;
        for (i, e) in events.iter().enumerate() {
            let Event::Edge(parent, child) = *e else {
                continue;
            };
            assert!(i < marker(child), "edge {parent}->{child} after child marker");
            assert!(marker(child) < marker(parent));
            edges += 1;
        }
        assert_eq!(edges, 9);
    }

    #[test]
    fn every_visible_node_is_placed_exactly_once() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let tree = Tree::random(&mut rng, 6, 5);
            let layout = engine().layout(&tree, 0, Vec2::ZERO).unwrap();

            let unique: HashSet<NodeId> = layout.nodes().iter().map(|p| p.node).collect();
            assert_eq!(layout.len(), tree.visible_len());
            assert_eq!(unique.len(), layout.len());

            // Each edge mirrors the tree, and every non-root node has one.
            assert_eq!(layout.edges().len(), layout.len() - 1);
            for &(parent, child) in layout.edges() {
                assert_eq!(tree.nodes[child].parent, Some(parent));
                assert!(unique.contains(&parent));
            }
        }
    }

    #[test]
    fn layout_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(3);
        let tree = Tree::random(&mut rng, 5, 6);
        let engine = engine();

        let a = engine.layout(&tree, 0, Vec2::new(800.0, 225.0)).unwrap();
        let b = engine.layout(&tree, 0, Vec2::new(800.0, 225.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn implicit_children_are_not_placed() {
        let mut tree = fan_tree(2);
        let hidden = tree.add_implicit_child(0, NodeKind::Declaration, "implicit");
        let layout = engine().layout(&tree, 0, Vec2::ZERO).unwrap();

        assert_eq!(layout.len(), 3);
        assert!(layout.position(hidden).is_none());
        // Still two children, so still the even split.
        assert_eq!(layout.position(1), Some(Vec2::new(-200.0, 100.0)));
        assert_eq!(layout.position(2), Some(Vec2::new(200.0, 100.0)));
    }

    #[test]
    fn unknown_root_aborts_the_pass() {
        let tree = fan_tree(1);
        let err = engine().layout(&tree, 17, Vec2::ZERO).unwrap_err();
        assert_eq!(err, LayoutError::UnknownNode("17".into()));
    }

    #[test]
    fn non_positive_spacing_is_rejected() {
        let tree = fan_tree(2);
        let engine = engine();
        let mut ctx = engine.root_context(Vec2::ZERO);
        ctx.spacing = 0.0;

        let mut out = Layout::default();
        let err = engine.walk(&tree, 0, ctx, &mut out).unwrap_err();
        assert_eq!(err, LayoutError::InvalidSpacing(0.0));
        assert!(out.is_empty());
    }

    #[test]
    fn derived_spacing_underflow_is_rejected() {
        // Halving from the smallest normal f32 reaches 0.0 at depth 24.
        let tree = chain(40);
        let engine = engine();
        let mut ctx = engine.root_context(Vec2::ZERO);
        ctx.spacing = f32::MIN_POSITIVE;

        let mut out = Layout::default();
        let err = engine.walk(&tree, 0, ctx, &mut out).unwrap_err();
        assert_eq!(err, LayoutError::InvalidSpacing(0.0));
        assert!(out.is_empty());
        assert_eq!(out.edges().len(), 24);
    }

    #[test]
    fn deepest_allowed_level_keeps_positive_spacing() {
        let engine = engine();
        let max_depth = engine.config().max_depth;
        let layout = engine.layout(&chain(max_depth + 1), 0, Vec2::ZERO).unwrap();

        let spacings: Vec<f32> = (0..=max_depth)
            .map(|id| layout.placed(id).unwrap().ctx.spacing)
            .collect();
        assert!(spacings.iter().all(|&s| s > 0.0));
        assert!(spacings.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn lookup_matches_every_placement_of_a_large_tree() {
        let mut rng = StdRng::seed_from_u64(11);
        let tree = Tree::random(&mut rng, 8, 6);
        let layout = engine().layout(&tree, 0, Vec2::ZERO).unwrap();

        assert_eq!(layout.len(), tree.visible_len());
        for p in layout.nodes() {
            assert_eq!(layout.placed(p.node), Some(p));
            assert_eq!(layout.position(p.node), Some(p.ctx.position));
        }
    }

    #[test]
    fn depth_limit_allows_exactly_max_depth() {
        let cfg = LayoutConfig {
            max_depth: 4,
            ..LayoutConfig::default()
        };
        let engine = LayoutEngine::new(cfg).unwrap();

        assert!(engine.layout(&chain(5), 0, Vec2::ZERO).is_ok());
        assert_eq!(
            engine.layout(&chain(6), 0, Vec2::ZERO).unwrap_err(),
            LayoutError::DepthLimitExceeded { max_depth: 4 }
        );
    }

    struct Cycle;

    impl TreeSource for Cycle {
        type Node = u8;

        fn children(&self, node: u8) -> Option<Vec<u8>> {
            Some(vec![node, node])
        }
    }

    #[test]
    fn cyclic_source_hits_depth_limit() {
        let err = engine().layout(&Cycle, 0, Vec2::ZERO).unwrap_err();
        assert!(matches!(err, LayoutError::DepthLimitExceeded { .. }));
    }

    #[test]
    fn engine_rejects_invalid_config() {
        let cfg = LayoutConfig {
            spacing_decay: 1.0,
            ..LayoutConfig::default()
        };
        assert!(LayoutEngine::new(cfg).is_err());
    }
}
