//! 文本输出
//!
//! 将层级渲染为终端可读的树、列表、统计行和个人档案

use std::collections::HashSet;
use std::fmt::Write;

use serde::Serialize;

use crate::application::org_chart::ProfileView;
use crate::core::hierarchy::{detached_nodes, get_roots, NodeIndex};
use crate::core::view_state::ViewState;
use crate::domain::{OrgNode, OrgStats};

/// 树视图中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeRow {
    pub id: String,
    pub name: String,
    pub title: String,
    pub department: String,
    /// 在树中的缩进深度
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
}

/// 从根节点先序遍历，只进入展开的节点
///
/// 已输出过的节点不会再次进入，重复 id 或成环的数据也能终止。
pub fn visible_rows(nodes: &[OrgNode], state: &ViewState) -> Vec<TreeRow> {
    let index = NodeIndex::new(nodes);
    let mut rows = Vec::new();
    let mut visited = HashSet::new();
    let mut stack: Vec<(&OrgNode, usize)> =
        get_roots(nodes).into_iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        if !visited.insert(node.id.as_str()) {
            continue;
        }

        let expanded = state.is_expanded(&node.id);
        rows.push(TreeRow {
            id: node.id.clone(),
            name: node.name.clone(),
            title: node.title.clone(),
            department: node.department.clone(),
            depth,
            has_children: node.has_children(),
            expanded,
        });

        if expanded {
            for child_id in node.child_ids.iter().rev() {
                if let Some(child) = index.get(child_id) {
                    stack.push((&nodes[child], depth + 1));
                }
            }
        }
    }

    rows
}

/// 渲染树视图
///
/// 无法从根节点到达的成员（汇报环）单独列在末尾，保证每个节点都有位置。
pub fn render_tree(nodes: &[OrgNode], state: &ViewState) -> String {
    let mut out = String::new();
    for row in visible_rows(nodes, state) {
        let marker = match (row.has_children, row.expanded) {
            (false, _) => "   ",
            (true, true) => "[-]",
            (true, false) => "[+]",
        };
        let _ = writeln!(
            out,
            "{}{} {} ({}, {})",
            "  ".repeat(row.depth),
            marker,
            row.name,
            row.title,
            row.department
        );
    }

    let detached = detached_nodes(nodes);
    if !detached.is_empty() {
        let _ = writeln!(out, "Detached (cyclic reporting chain):");
        for node in detached {
            let _ = writeln!(out, "    {} ({}, {})", node.name, node.title, node.department);
        }
    }
    out
}

/// 渲染扁平列表
pub fn render_list(nodes: &[&OrgNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        let _ = write!(
            out,
            "{} | {} | {}",
            node.name, node.title, node.department
        );
        if !node.email.is_empty() {
            let _ = write!(out, " | {}", node.email);
        }
        out.push('\n');
    }
    out
}

/// 渲染统计行
pub fn render_stats(stats: &OrgStats) -> String {
    format!(
        "{} employees, {} departments, {} levels",
        stats.total_count, stats.department_count, stats.depth
    )
}

/// 渲染个人档案
pub fn render_profile(profile: &ProfileView) -> String {
    let employee = &profile.employee;
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", employee.name, employee.id);
    let _ = writeln!(out, "  Title:      {}", employee.title);
    let _ = writeln!(out, "  Department: {}", employee.department);
    if !employee.email.is_empty() {
        let _ = writeln!(out, "  Email:      {}", employee.email);
    }
    if let Some(phone) = &employee.phone {
        let _ = writeln!(out, "  Phone:      {}", phone);
    }

    match &profile.manager {
        Some(manager) => {
            let _ = writeln!(out, "  Manager:    {} ({})", manager.name, manager.title);
        }
        None => {
            let _ = writeln!(out, "  Manager:    -");
        }
    }

    if !profile.reporting_chain.is_empty() {
        let chain: Vec<&str> = profile
            .reporting_chain
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        let _ = writeln!(out, "  Chain:      {}", chain.join(" > "));
    }

    let _ = writeln!(out, "  Direct reports ({}):", profile.direct_reports.len());
    for report in &profile.direct_reports {
        let _ = writeln!(out, "    - {} ({})", report.name, report.title);
    }
    out
}
