//! Synthetic board states for exercising the search without real game rules.
//!
//! - `TreeState`: walks an explicit game tree with fixed scores per node
//! - `HashedState`: an open-ended game whose captures are drawn from a hash
//! - `Snapshot`: a frozen position with no moves, for evaluator checks

#![allow(dead_code)]

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use mancala_search::core::{MoveList, PitMove, Pits, PlayerId, PITS_PER_SIDE};
use mancala_search::rules::BoardState;

// =============================================================================
// Explicit Trees
// =============================================================================

/// One node of a synthetic game tree.
#[derive(Clone, Debug)]
pub struct TreeNode {
    pub scores: [u32; 2],
    pub pits: Pits,
    pub children: Vec<usize>,
    /// Time spent listing this node's moves.
    pub delay: Duration,
}

/// An explicit game tree; node 0 is the root.
#[derive(Clone, Debug)]
pub struct GameTree {
    pub nodes: Vec<TreeNode>,
}

impl GameTree {
    /// Node count of a complete tree with `branching` children per node and
    /// `depth` levels below the root.
    pub fn uniform_size(branching: usize, depth: u32) -> usize {
        (0..=depth).map(|level| branching.pow(level)).sum()
    }

    /// A complete tree in breadth-first order, node `i` scoring `scores[i]`.
    pub fn uniform(branching: usize, depth: u32, scores: &[(u32, u32)]) -> Self {
        assert!((1..=PITS_PER_SIDE).contains(&branching));
        let count = Self::uniform_size(branching, depth);
        assert_eq!(scores.len(), count);

        let nodes = (0..count)
            .map(|i| TreeNode {
                scores: [scores[i].0, scores[i].1],
                pits: [[0; PITS_PER_SIDE]; 2],
                children: (1..=branching)
                    .map(|k| i * branching + k)
                    .filter(|&c| c < count)
                    .collect(),
                delay: Duration::ZERO,
            })
            .collect();

        Self { nodes }
    }

    /// A root whose moves lead straight to terminal children with the given scores.
    pub fn star(root_pits: Pits, children: &[(u32, u32)]) -> Self {
        let mut nodes = vec![TreeNode {
            scores: [0, 0],
            pits: root_pits,
            children: (1..=children.len()).collect(),
            delay: Duration::ZERO,
        }];
        nodes.extend(children.iter().map(|&(mine, theirs)| TreeNode {
            scores: [mine, theirs],
            pits: [[0; PITS_PER_SIDE]; 2],
            children: Vec::new(),
            delay: Duration::ZERO,
        }));
        Self { nodes }
    }

    pub fn root(self) -> TreeState {
        TreeState {
            tree: Arc::new(self),
            node: 0,
            turn: 0,
        }
    }
}

/// A position in a `GameTree`; move `k` follows the node's `k`-th child.
#[derive(Clone, Debug)]
pub struct TreeState {
    tree: Arc<GameTree>,
    node: usize,
    turn: u32,
}

impl TreeState {
    pub fn node(&self) -> usize {
        self.node
    }

    fn current(&self) -> &TreeNode {
        &self.tree.nodes[self.node]
    }
}

impl BoardState for TreeState {
    fn apply_move(&mut self, mv: PitMove) {
        self.node = self.current().children[mv.pit()];
        self.turn += 1;
    }

    fn legal_moves(&self) -> MoveList {
        let node = self.current();
        if !node.delay.is_zero() {
            thread::sleep(node.delay);
        }
        PitMove::all().take(node.children.len()).collect()
    }

    fn score(&self, player: PlayerId) -> u32 {
        self.current().scores[player.index()]
    }

    fn pits(&self) -> Pits {
        self.current().pits
    }

    fn turn_number(&self) -> u32 {
        self.turn
    }
}

// =============================================================================
// Open-Ended Game
// =============================================================================

/// A game of six pits of six beans per side where each move captures up to
/// two beans from a hash-chosen opposing pit.
///
/// Deterministic for a seed, conserves beans, and lasts long enough that
/// searches of a handful of plies never run out of moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashedState {
    hash: u64,
    pits: Pits,
    scores: [u32; 2],
    to_move: PlayerId,
    turn: u32,
}

impl HashedState {
    pub fn new(seed: u64) -> Self {
        Self {
            hash: seed,
            pits: [[6; PITS_PER_SIDE]; 2],
            scores: [0, 0],
            to_move: PlayerId::FIRST,
            turn: 0,
        }
    }

    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

impl BoardState for HashedState {
    fn apply_move(&mut self, mv: PitMove) {
        self.hash = splitmix64(self.hash ^ (mv.pit() as u64 + 1));
        let mover = self.to_move.index();
        let victim = self.to_move.opponent().index();
        let pit = ((self.hash >> 8) % PITS_PER_SIDE as u64) as usize;
        let take = ((self.hash % 3) as u32).min(self.pits[victim][pit]);

        self.pits[victim][pit] -= take;
        self.scores[mover] += take;
        self.to_move = self.to_move.opponent();
        self.turn += 1;
    }

    fn legal_moves(&self) -> MoveList {
        let side = self.pits[self.to_move.index()];
        PitMove::all().filter(|mv| side[mv.pit()] > 0).collect()
    }

    fn score(&self, player: PlayerId) -> u32 {
        self.scores[player.index()]
    }

    fn pits(&self) -> Pits {
        self.pits
    }

    fn turn_number(&self) -> u32 {
        self.turn
    }
}

// =============================================================================
// Frozen Positions
// =============================================================================

/// A position with fixed contents and no legal moves.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub pits: Pits,
    pub scores: [u32; 2],
    pub turn: u32,
}

impl BoardState for Snapshot {
    fn apply_move(&mut self, _mv: PitMove) {}

    fn legal_moves(&self) -> MoveList {
        MoveList::new()
    }

    fn score(&self, player: PlayerId) -> u32 {
        self.scores[player.index()]
    }

    fn pits(&self) -> Pits {
        self.pits
    }

    fn turn_number(&self) -> u32 {
        self.turn
    }
}
