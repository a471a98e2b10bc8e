//! Comment threads and their reconstruction from flat storage rows.
//!
//! Storage keeps comments as flat rows carrying an optional `parent_id`.
//! [`reconstruct`] rebuilds the nested reply tree for a single article. It is
//! a pure, total function: every input row appears exactly once in the
//! output, and the same rows in the same order always yield the same tree.
//!
//! The build is iterative (arena of nodes addressed by index plus an explicit
//! stack), so pathologically deep threads cannot exhaust the call stack.
//! Nesting in a returned thread never exceeds [`MAX_THREAD_DEPTH`], which
//! keeps recursive consumers such as serialization bounded too.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Deepest nesting level a thread can have; roots are level 1.
pub const MAX_THREAD_DEPTH: usize = 32;

/// A comment together with its (recursively nested) replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author_name: String,
    pub text: String,
    pub avatar_url: String,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// A comment with no replies.
    pub fn new(
        author_name: impl Into<String>,
        text: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            author_name: author_name.into(),
            text: text.into(),
            avatar_url: avatar_url.into(),
            replies: Vec::new(),
        }
    }

    /// Builder-style helper for attaching replies.
    pub fn with_replies(mut self, replies: Vec<Comment>) -> Self {
        self.replies = replies;
        self
    }
}

impl Drop for Comment {
    // Detach replies onto a heap stack so dropping a deep tree never recurses.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.replies);
        while let Some(mut comment) = pending.pop() {
            pending.append(&mut comment.replies);
        }
    }
}

/// The root-level comments of one article, each carrying its replies.
///
/// Derived view only; never persisted as such.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentThread {
    pub comments: Vec<Comment>,
}

impl CommentThread {
    /// Total number of comments at every depth.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Comment> = self.comments.iter().collect();
        while let Some(comment) = stack.pop() {
            count += 1;
            stack.extend(comment.replies.iter());
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

/// One flat comment row as read from storage, ordered by ascending `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRow {
    pub id: DbId,
    pub parent_id: Option<DbId>,
    pub author_name: String,
    pub text: String,
    pub avatar_url: String,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment::new(self.author_name, self.text, self.avatar_url)
    }
}

/// Rebuild the nested thread from flat rows.
///
/// Linking rules, applied to rows in input order:
///
/// - `parent_id` is `None` -> root.
/// - `parent_id` names a row in the input -> appended to that row's replies.
/// - `parent_id` names no row in the input (orphan), or the row itself ->
///   root. Comments are never dropped.
///
/// Rows left unreachable from every root after linking (a parent cycle,
/// which only corrupt data can produce) are reattached by promoting one
/// member of each cycle to a root.
///
/// Replies that would sit deeper than [`MAX_THREAD_DEPTH`] are attached to
/// their ancestor one level above the limit instead, in conversation
/// (pre-order) order, so they surface as late siblings at the deepest level.
pub fn reconstruct(rows: Vec<CommentRow>) -> CommentThread {
    let n = rows.len();

    // Pass 1: index every row by id. The first occurrence of an id wins.
    let mut index: HashMap<DbId, usize> = HashMap::with_capacity(n);
    for (pos, row) in rows.iter().enumerate() {
        index.entry(row.id).or_insert(pos);
    }

    // Pass 2: link each row to its parent, or make it a root.
    let mut parent_of: Vec<Option<usize>> = vec![None; n];
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut roots: Vec<usize> = Vec::new();
    for (pos, row) in rows.iter().enumerate() {
        let parent = row
            .parent_id
            .and_then(|pid| index.get(&pid).copied())
            .filter(|&p| p != pos);
        match parent {
            Some(p) => {
                parent_of[pos] = Some(p);
                children[p].push(pos);
            }
            None => roots.push(pos),
        }
    }

    break_cycles(&mut roots, &mut children, &parent_of);
    let children = limit_depth(&roots, &children);

    // Assemble bottom-up: a node is finalised only after all of its children.
    let mut slots: Vec<Option<Comment>> = rows
        .into_iter()
        .map(|row| Some(row.into_comment()))
        .collect();
    let mut stack: Vec<(usize, bool)> = roots.iter().rev().map(|&r| (r, false)).collect();
    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            let replies: Vec<Comment> = children[node]
                .iter()
                .filter_map(|&child| slots[child].take())
                .collect();
            if let Some(comment) = slots[node].as_mut() {
                comment.replies = replies;
            }
        } else {
            stack.push((node, true));
            stack.extend(children[node].iter().rev().map(|&c| (c, false)));
        }
    }

    CommentThread {
        comments: roots.iter().filter_map(|&r| slots[r].take()).collect(),
    }
}

/// Promote one member of every parent cycle to a root.
///
/// Unreachable rows are visited in row order. From each one the parent chain
/// is followed until a row repeats; that closes a cycle, and its member with
/// the lowest row position is cut from its parent and becomes a root. Rows
/// hanging off the cycle keep their parents.
fn break_cycles(roots: &mut Vec<usize>, children: &mut [Vec<usize>], parent_of: &[Option<usize>]) {
    let n = parent_of.len();
    let mut reached = vec![false; n];
    mark_reachable(roots, children, &mut reached);

    if reached.iter().all(|&r| r) {
        return;
    }

    // Walk stamps: `seen_in[node] == start + 1` means visited by the walk from `start`.
    let mut seen_in = vec![0usize; n];
    for start in 0..n {
        if reached[start] {
            continue;
        }

        let mut node = start;
        let repeated = loop {
            seen_in[node] = start + 1;
            match parent_of[node] {
                Some(parent) if seen_in[parent] == start + 1 => break parent,
                Some(parent) => node = parent,
                // Unreachable rows always have a parent; treat a bare one as the cut point.
                None => break node,
            }
        };

        let mut promoted = repeated;
        let mut member = repeated;
        while let Some(parent) = parent_of[member] {
            if parent == repeated {
                break;
            }
            promoted = promoted.min(parent);
            member = parent;
        }

        if let Some(parent) = parent_of[promoted] {
            children[parent].retain(|&c| c != promoted);
        }
        roots.push(promoted);
        mark_reachable(&[promoted], children, &mut reached);
    }
    roots.sort_unstable();
}

/// Rebuild the child lists so no node sits deeper than [`MAX_THREAD_DEPTH`].
///
/// Nodes within the limit keep their parent. Deeper nodes are appended, in
/// pre-order, to the ancestor at level `MAX_THREAD_DEPTH - 1`.
fn limit_depth(roots: &[usize], children: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut limited: Vec<Vec<usize>> = vec![Vec::new(); children.len()];

    // (node, level, parent, ancestor at the last level allowed to nest)
    let mut stack: Vec<(usize, usize, Option<usize>, Option<usize>)> =
        roots.iter().rev().map(|&r| (r, 1, None, None)).collect();
    while let Some((node, level, parent, anchor)) = stack.pop() {
        if let Some(parent) = parent {
            let target = if level > MAX_THREAD_DEPTH {
                anchor.unwrap_or(parent)
            } else {
                parent
            };
            limited[target].push(node);
        }

        let anchor = if level == MAX_THREAD_DEPTH - 1 {
            Some(node)
        } else {
            anchor
        };
        stack.extend(
            children[node]
                .iter()
                .rev()
                .map(|&child| (child, level + 1, Some(node), anchor)),
        );
    }
    limited
}

fn mark_reachable(from: &[usize], children: &[Vec<usize>], reached: &mut [bool]) {
    let mut stack: Vec<usize> = from.to_vec();
    while let Some(node) = stack.pop() {
        if reached[node] {
            continue;
        }
        reached[node] = true;
        stack.extend(children[node].iter().copied());
    }
}

/// Flatten a thread into insertion order: depth-first pre-order, so every
/// parent precedes its replies and siblings keep their order.
///
/// Each entry carries the position of its parent in the returned sequence.
pub fn insertion_order(thread: &CommentThread) -> Vec<(Option<usize>, &Comment)> {
    let mut order = Vec::with_capacity(thread.len());
    let mut stack: Vec<(Option<usize>, &Comment)> =
        thread.comments.iter().rev().map(|c| (None, c)).collect();
    while let Some((parent, comment)) = stack.pop() {
        let pos = order.len();
        order.push((parent, comment));
        stack.extend(comment.replies.iter().rev().map(|r| (Some(pos), r)));
    }
    order
}

/// Reject threads containing a comment without an author or text, or
/// nested deeper than [`MAX_THREAD_DEPTH`].
pub fn validate_thread(thread: &CommentThread) -> Result<(), CoreError> {
    let order = insertion_order(thread);
    let mut levels: Vec<usize> = Vec::with_capacity(order.len());
    for (pos, &(parent, comment)) in order.iter().enumerate() {
        let level = parent.map_or(1, |p| levels[p] + 1);
        if level > MAX_THREAD_DEPTH {
            return Err(CoreError::Validation(format!(
                "comment #{pos}: replies may nest at most {MAX_THREAD_DEPTH} levels"
            )));
        }
        levels.push(level);

        if comment.author_name.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "comment #{pos}: author_name must not be empty"
            )));
        }
        if comment.text.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "comment #{pos}: text must not be empty"
            )));
        }
    }
    Ok(())
}
