//! 层级计算
//!
//! 沿上级链向上计算每个节点到根的距离。上级引用是自由填写的，
//! 链条可能成环，因此每次向上遍历都带有已访问集合，并对结果做记忆化。

use std::collections::HashMap;

/// 层级计算结果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LevelResolution {
    /// 每个节点的层级，与输入下标一一对应
    pub levels: Vec<usize>,
    /// 位于汇报环上的节点下标，升序
    pub cyclic: Vec<usize>,
}

enum WalkEnd {
    /// 走到了根节点（已在路径末尾）
    Root,
    /// 遇到了已计算过层级的节点
    Known(usize),
    /// 在路径的该位置重新访问到节点
    Cycle(usize),
}

/// 根据每个节点的上级下标计算层级
///
/// 根节点为 0，其余节点为上级层级加 1。检测到环时，在检测点按距离 0 截断：
/// 环上每个成员得到环长作为层级，挂在环下的节点在此基础上逐级加 1。
/// 这与从任意成员出发向上遍历得到的值一致，与遍历顺序无关。
pub fn resolve_levels(parents: &[Option<usize>]) -> LevelResolution {
    let mut memo: Vec<Option<usize>> = vec![None; parents.len()];
    let mut cyclic = Vec::new();

    for start in 0..parents.len() {
        if memo[start].is_some() {
            continue;
        }

        let mut path: Vec<usize> = Vec::new();
        let mut visited: HashMap<usize, usize> = HashMap::new();
        let mut current = start;

        let end = loop {
            if let Some(level) = memo[current] {
                break WalkEnd::Known(level);
            }
            if let Some(&position) = visited.get(&current) {
                break WalkEnd::Cycle(position);
            }
            visited.insert(current, path.len());
            path.push(current);
            match parents[current] {
                Some(parent) => current = parent,
                None => break WalkEnd::Root,
            }
        };

        let mut next = match end {
            WalkEnd::Root => {
                if let Some(root) = path.pop() {
                    memo[root] = Some(0);
                }
                1
            }
            WalkEnd::Known(level) => level + 1,
            WalkEnd::Cycle(position) => {
                let cycle_len = path.len() - position;
                for &member in &path[position..] {
                    memo[member] = Some(cycle_len);
                    cyclic.push(member);
                }
                path.truncate(position);
                cycle_len + 1
            }
        };

        for &node in path.iter().rev() {
            memo[node] = Some(next);
            next += 1;
        }
    }

    cyclic.sort_unstable();
    LevelResolution {
        levels: memo.into_iter().map(Option::unwrap_or_default).collect(),
        cyclic,
    }
}
